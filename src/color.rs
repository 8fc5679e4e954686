//! This module defines [`Color`], the value the rest of the crate converts from and to. It plays the
//! role a platform color object plays in a UI toolkit: an sRGB color with three normalized channels,
//! from which HSV, 8-bit RGB, and hex representations are derived on demand.

use std::fmt;
use std::str::FromStr;

use float_cmp::approx_eq;

use crate::bound::Bound;
use crate::colors::hsvcolor::HsvColor;
use crate::coord::Coord;
use crate::hex::{color_from_hex, hex_from_color, HexParseError};

/// An sRGB color. Each channel is stored as a floating-point value between 0 and 1 inclusive;
/// constructors clamp anything outside of that range, so every `Color` is a displayable color.
/// # Example
///
/// ```
/// # use huepick::prelude::*;
/// let orange = Color::from_rgb8(255, 128, 0);
/// assert_eq!(orange.to_string(), "FF8000");
/// let too_bright = Color::new(1.7, 0.5, -3.);
/// assert_eq!((too_bright.r(), too_bright.g(), too_bright.b()), (1., 0.5, 0.));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "UncheckedColor")]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

// deserialized channels go through the same clamping as `Color::new`
#[derive(Deserialize)]
struct UncheckedColor {
    r: f64,
    g: f64,
    b: f64,
}

impl From<UncheckedColor> for Color {
    fn from(c: UncheckedColor) -> Color {
        Color::new(c.r, c.g, c.b)
    }
}

impl Color {
    /// Creates a color from normalized channels, clamping each one to 0-1.
    pub fn new(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b }.clamp()
    }

    /// Creates a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Color {
        Color {
            r: f64::from(r) / 255.,
            g: f64::from(g) / 255.,
            b: f64::from(b) / 255.,
        }
    }

    /// Creates a color from normalized hue, saturation, and brightness (all 0-1, clamped). A hue of
    /// 1 wraps around to red, the same as a hue of 0.
    /// ```
    /// # use huepick::prelude::*;
    /// assert_eq!(Color::from_hsv(1. / 3., 1., 1.).to_string(), "00FF00");
    /// ```
    pub fn from_hsv(hue: f64, saturation: f64, brightness: f64) -> Color {
        HsvColor::new(hue, saturation, brightness).into()
    }

    /// The red channel, between 0 and 1.
    pub fn r(&self) -> f64 {
        self.r
    }
    /// The green channel, between 0 and 1.
    pub fn g(&self) -> f64 {
        self.g
    }
    /// The blue channel, between 0 and 1.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The channels rounded to 0-255, halves rounding up.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        // components are in 0-1, so the rounded values fit in a u8
        let scaled = (Coord::from(*self) * 255u8).round();
        (scaled.x as u8, scaled.y as u8, scaled.z as u8)
    }

    /// Compares two colors channel by channel, allowing for floating-point error from going through
    /// another color space and back.
    pub fn approx_equal(&self, other: &Color) -> bool {
        approx_eq!(f64, self.r, other.r, epsilon = 1e-9)
            && approx_eq!(f64, self.g, other.g, epsilon = 1e-9)
            && approx_eq!(f64, self.b, other.b, epsilon = 1e-9)
    }
}

impl From<Coord> for Color {
    fn from(c: Coord) -> Color {
        Color {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<Color> for Coord {
    fn from(c: Color) -> Coord {
        Coord {
            x: c.r,
            y: c.g,
            z: c.b,
        }
    }
}

impl Bound for Color {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
}

/// Formats as the 6-digit uppercase hex string, without a leading `#`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex_from_color(*self))
    }
}

/// Parses a 6-digit hex string, in either case and without a leading `#`.
impl FromStr for Color {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Color, HexParseError> {
        color_from_hex(s)
    }
}
