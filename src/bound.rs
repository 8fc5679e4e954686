//! This module describes the Bound trait, which describes which component values a color type
//! supports. Every normalized component in this crate lives between 0 and 1; anything a caller
//! passes in outside of that range is clamped onto the nearest edge instead of rejected, so the
//! conversions stay total functions.

use crate::coord::Coord;

/// Describes a color type whose components have explicit bounds. This only applies to colors that
/// can be embedded in 3D space, hence the `Coord` conversions as a dependency.
/// # Example
/// Bound a clearly-problematic color.
///
/// ```
/// # use huepick::prelude::*;
/// # use huepick::coord::Coord;
/// let clamped = Color::clamp_coord(Coord{x: 1.5, y: -0.2, z: 0.4});
/// assert_eq!(clamped, Coord{x: 1., y: 0., z: 0.4});
/// ```
pub trait Bound: Into<Coord> + From<Coord> + Copy {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component of the color space, in the order that they appear in the Coord representation.
    fn bounds() -> [(f64, f64); 3];
    /// Given a Coord, returns a Coord such that each component has been clamped to the correct
    /// bounds. NaN is treated as the lower bound.
    fn clamp_coord(point: Coord) -> Coord {
        let ranges = Self::bounds();
        let mut point_vals = [0.; 3];
        for (i, component) in point.to_array().iter().enumerate() {
            let (min, max) = ranges[i];
            point_vals[i] = if component.is_nan() || *component < min {
                min
            } else if *component > max {
                max
            } else {
                *component
            };
        }
        Coord::from(point_vals)
    }
    /// Returns a copy of the color with every component inside the bounds. A color already in
    /// bounds comes back unchanged.
    fn clamp(self) -> Self {
        Self::from(Self::clamp_coord(self.into()))
    }
    /// Whether every component already lies inside the bounds.
    fn in_bounds(self) -> bool {
        let point: Coord = self.into();
        point
            .to_array()
            .iter()
            .zip(Self::bounds().iter())
            .all(|(c, (min, max))| c >= min && c <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::Bound;
    use crate::color::Color;
    use crate::colors::hsvcolor::HsvColor;
    use crate::coord::Coord;

    #[test]
    fn test_zero_one_bounds() {
        let point = Color::clamp_coord(Coord { x: 0.1, y: -0.2, z: 1.2 });
        assert_eq!(point, Coord { x: 0.1, y: 0., z: 1. });
    }

    #[test]
    fn test_nan_clamps_low() {
        let point = HsvColor::clamp_coord(Coord { x: f64::NAN, y: 0.5, z: f64::INFINITY });
        assert_eq!(point, Coord { x: 0., y: 0.5, z: 1. });
    }

    #[test]
    fn test_in_bounds() {
        assert!(Color::from_rgb8(12, 200, 255).in_bounds());
        assert!(HsvColor::new(0.3, 1., 0.).in_bounds());
    }
}
