//! This module implements the HSV color space, here called hue/saturation/brightness as it is
//! labelled on a picker. Value, or brightness, is the largest of the three RGB channels: it goes from
//! black to full saturation instead of black to white. That makes it a poor analog of luminance, but
//! it is the space a hue/saturation square plus a brightness strip selects from, so it is the one the
//! picker keeps its state in.
//!
//! Every component is kept in two forms at once: normalized floats between 0 and 1, and the integers
//! shown in the text fields (0-360 degrees, 0-100 percent, 0-100 percent). The integers are always
//! the floats scaled and rounded, halves up.

use crate::bound::Bound;
use crate::color::Color;
use crate::coord::Coord;

/// Multipliers from the normalized components to the integer ones.
const HSV_SCALE: Coord = Coord {
    x: 360.,
    y: 100.,
    z: 100.,
};

/// An HSV color in both normalized and integer form.
/// # Example
///
/// ```
/// # use huepick::prelude::*;
/// let lavender = HsvColor::from_values(243, 57, 93);
/// assert_eq!(lavender.hue_value(), 243);
/// assert!((lavender.hue() - 243. / 360.).abs() < 1e-12);
/// assert_eq!(Color::from(lavender).to_string(), "6D66ED");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "NormalizedHsv")]
pub struct HsvColor {
    hue_value: i32,
    saturation_value: i32,
    brightness_value: i32,
    hue: f64,
    saturation: f64,
    brightness: f64,
}

// only the normalized components are read back; the integer ones are recomputed from them
#[derive(Deserialize)]
struct NormalizedHsv {
    hue: f64,
    saturation: f64,
    brightness: f64,
}

impl From<NormalizedHsv> for HsvColor {
    fn from(c: NormalizedHsv) -> HsvColor {
        HsvColor::new(c.hue, c.saturation, c.brightness)
    }
}

impl HsvColor {
    /// Creates a color from normalized components, each clamped to 0-1.
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> HsvColor {
        HsvColor::from(Coord {
            x: hue,
            y: saturation,
            z: brightness,
        })
        .clamp()
    }

    /// Creates a color from the integer components: hue in degrees (0-360), saturation and brightness
    /// in percent (0-100). Out-of-range values are clamped.
    pub fn from_values(hue_value: i32, saturation_value: i32, brightness_value: i32) -> HsvColor {
        let normalized = Coord::from([
            f64::from(hue_value),
            f64::from(saturation_value),
            f64::from(brightness_value),
        ])
        .unscale_by(HSV_SCALE);
        HsvColor::new(normalized.x, normalized.y, normalized.z)
    }

    /// Hue in whole degrees, 0-360.
    pub fn hue_value(&self) -> i32 {
        self.hue_value
    }
    /// Saturation in whole percent, 0-100.
    pub fn saturation_value(&self) -> i32 {
        self.saturation_value
    }
    /// Brightness in whole percent, 0-100.
    pub fn brightness_value(&self) -> i32 {
        self.brightness_value
    }
    /// Hue as a fraction of a full turn, 0-1.
    pub fn hue(&self) -> f64 {
        self.hue
    }
    /// Saturation, 0-1.
    pub fn saturation(&self) -> f64 {
        self.saturation
    }
    /// Brightness, 0-1.
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// A copy with the hue replaced.
    pub fn with_hue(self, hue: f64) -> HsvColor {
        HsvColor::new(hue, self.saturation, self.brightness)
    }
    /// A copy with the saturation replaced.
    pub fn with_saturation(self, saturation: f64) -> HsvColor {
        HsvColor::new(self.hue, saturation, self.brightness)
    }
    /// A copy with the brightness replaced.
    pub fn with_brightness(self, brightness: f64) -> HsvColor {
        HsvColor::new(self.hue, self.saturation, brightness)
    }
}

/// Decomposes a color into hue, saturation, and brightness. Gray has no hue: it is reported as 0,
/// and black additionally has a saturation of 0.
/// ```
/// # use huepick::prelude::*;
/// let hsv = hsv_from_color(Color::from_rgb8(0, 0, 255));
/// assert_eq!((hsv.hue_value(), hsv.saturation_value(), hsv.brightness_value()), (240, 100, 100));
/// ```
pub fn hsv_from_color(color: Color) -> HsvColor {
    let (h, s, v) = rgb_to_hsv(color.r(), color.g(), color.b());
    HsvColor::new(h, s, v)
}

impl From<Color> for HsvColor {
    fn from(color: Color) -> HsvColor {
        hsv_from_color(color)
    }
}

impl From<HsvColor> for Color {
    fn from(hsv: HsvColor) -> Color {
        let (r, g, b) = hsv_to_rgb(hsv.hue, hsv.saturation, hsv.brightness);
        Color::new(r, g, b)
    }
}

/// Only the normalized components are carried: the integer ones are derived from them on the way
/// back.
impl From<Coord> for HsvColor {
    fn from(c: Coord) -> HsvColor {
        let values = c.scale_by(HSV_SCALE).round();
        HsvColor {
            hue_value: values.x as i32,
            saturation_value: values.y as i32,
            brightness_value: values.z as i32,
            hue: c.x,
            saturation: c.y,
            brightness: c.z,
        }
    }
}

impl From<HsvColor> for Coord {
    fn from(hsv: HsvColor) -> Coord {
        Coord {
            x: hsv.hue,
            y: hsv.saturation,
            z: hsv.brightness,
        }
    }
}

impl Bound for HsvColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
}

// RGB -> HSV, everything normalized. More info on the hexagonal projection used here:
// https://en.wikipedia.org/wiki/HSL_and_HSV#Formal_derivation
fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    // a very rough estimate of the actual color attribute, but it's what the hexagon uses
    let chroma = max_c - min_c;

    // hue is the position around the hexagon, measured in sixths
    let sextant = if chroma == 0.0 {
        // undefined for gray, 0 by convention
        0.0
    } else if max_c == r {
        ((g - b) / chroma).rem_euclid(6.0)
    } else if max_c == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };
    let mut hue = sextant / 6.0;
    // rem_euclid can round up to exactly 6 for tiny negative inputs
    if hue >= 1.0 {
        hue -= 1.0;
    }

    let value = max_c;
    let saturation = if value == 0.0 { 0.0 } else { chroma / value };

    (hue, saturation, value)
}

// HSV -> RGB, everything normalized
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0) % 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    // which side of the hexagon we're on decides which channels are largest
    match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
