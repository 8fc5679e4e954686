//! The red/green/blue channels of a [`Color`], as shown in a picker's RGB text fields: each channel
//! both as a normalized float and as the 0-255 integer it rounds to.

use crate::bound::Bound;
use crate::color::Color;
use crate::coord::Coord;

/// RGB channels in both normalized and 8-bit integer form. The integers are always the floats times
/// 255, rounded with halves going up.
/// # Example
///
/// ```
/// # use huepick::prelude::*;
/// let rgb = rgb_from_color(Color::new(1., 0.5, 0.));
/// assert_eq!((rgb.red_value(), rgb.green_value(), rgb.blue_value()), (255, 128, 0));
/// assert_eq!(rgb.green(), 0.5);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "NormalizedRgb")]
pub struct RgbColor {
    red_value: i32,
    green_value: i32,
    blue_value: i32,
    red: f64,
    green: f64,
    blue: f64,
}

#[derive(Deserialize)]
struct NormalizedRgb {
    red: f64,
    green: f64,
    blue: f64,
}

impl From<NormalizedRgb> for RgbColor {
    fn from(c: NormalizedRgb) -> RgbColor {
        RgbColor::new(c.red, c.green, c.blue)
    }
}

impl RgbColor {
    /// Creates channels from normalized values, each clamped to 0-1.
    pub fn new(red: f64, green: f64, blue: f64) -> RgbColor {
        RgbColor::from(Coord {
            x: red,
            y: green,
            z: blue,
        })
        .clamp()
    }

    /// Creates channels from 0-255 integers. Out-of-range values are clamped.
    pub fn from_values(red_value: i32, green_value: i32, blue_value: i32) -> RgbColor {
        RgbColor::new(
            f64::from(red_value) / 255.,
            f64::from(green_value) / 255.,
            f64::from(blue_value) / 255.,
        )
    }

    /// Red as an integer, 0-255.
    pub fn red_value(&self) -> i32 {
        self.red_value
    }
    /// Green as an integer, 0-255.
    pub fn green_value(&self) -> i32 {
        self.green_value
    }
    /// Blue as an integer, 0-255.
    pub fn blue_value(&self) -> i32 {
        self.blue_value
    }
    /// Red, 0-1.
    pub fn red(&self) -> f64 {
        self.red
    }
    /// Green, 0-1.
    pub fn green(&self) -> f64 {
        self.green
    }
    /// Blue, 0-1.
    pub fn blue(&self) -> f64 {
        self.blue
    }
}

/// Extracts the channels of a color.
pub fn rgb_from_color(color: Color) -> RgbColor {
    RgbColor::new(color.r(), color.g(), color.b())
}

impl From<Color> for RgbColor {
    fn from(color: Color) -> RgbColor {
        rgb_from_color(color)
    }
}

impl From<RgbColor> for Color {
    fn from(rgb: RgbColor) -> Color {
        Color::new(rgb.red, rgb.green, rgb.blue)
    }
}

impl From<Coord> for RgbColor {
    fn from(c: Coord) -> RgbColor {
        let values = (c * 255u8).round();
        RgbColor {
            red_value: values.x as i32,
            green_value: values.y as i32,
            blue_value: values.z as i32,
            red: c.x,
            green: c.y,
            blue: c.z,
        }
    }
}

impl From<RgbColor> for Coord {
    fn from(rgb: RgbColor) -> Coord {
        Coord {
            x: rgb.red,
            y: rgb.green,
            z: rgb.blue,
        }
    }
}

impl Bound for RgbColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_integer_values_match_floats() {
        for i in 0..=100 {
            let x = f64::from(i) / 100.;
            let rgb = rgb_from_color(Color::new(x, 1. - x, x * x));
            assert_eq!(rgb.red_value(), (rgb.red() * 255.).round() as i32);
            assert_eq!(rgb.green_value(), (rgb.green() * 255.).round() as i32);
            assert_eq!(rgb.blue_value(), (rgb.blue() * 255.).round() as i32);
        }
    }

    #[test]
    fn test_from_values() {
        let rgb = RgbColor::from_values(300, 17, -1);
        assert_eq!((rgb.red_value(), rgb.green_value(), rgb.blue_value()), (255, 17, 0));
        assert_eq!(Color::from(rgb).to_rgb8(), (255, 17, 0));
    }

    #[test]
    fn test_color_round_trip() {
        let color = Color::new(0.2, 0.4, 0.6);
        let back: Color = RgbColor::from(color).into();
        assert_eq!(back, color);
    }
}
