//! This module contains a struct, [`Coord`], that models the three components of a
//! color as a point in 3D space. Every color type in this crate maps onto it in the order of the
//! letters in its name (`r`, `g`, `b` or `h`, `s`, `v`), which lets scaling, rounding, and clamping
//! be written once instead of once per channel.

use std::ops::Mul;

use num::{Num, NumCast};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space.
///
/// # Example
/// ```
/// # use huepick::coord::Coord;
/// let point = Coord{x: 0.5, y: 0.25, z: 1.};
/// // uniform scaling by any primitive number
/// let scaled = point * 255u8;
/// assert_eq!(scaled.round(), Coord{x: 128., y: 64., z: 255.});
/// // per-axis scaling, as used for the 360/100/100 ranges of HSV
/// let hsv = point.scale_by(Coord{x: 360., y: 100., z: 100.});
/// assert_eq!(hsv.round(), Coord{x: 180., y: 25., z: 100.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

// Scalar multiplication: (a, b, c) * s = (sa, sb, sc). Not commutative, but it'll do.
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        // to_f64 cannot fail for the primitive numeric types; NaN only marks a foreign Scalar
        let r: f64 = rhs.to_f64().unwrap_or(f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl Coord {
    /// Multiplies each axis by the matching axis of `factors`.
    pub fn scale_by(self, factors: Coord) -> Coord {
        Coord {
            x: self.x * factors.x,
            y: self.y * factors.y,
            z: self.z * factors.z,
        }
    }

    /// Divides each axis by the matching axis of `divisors`. Dividing by 0 gives infinity or NaN,
    /// exactly as `f64` division does.
    pub fn unscale_by(self, divisors: Coord) -> Coord {
        Coord {
            x: self.x / divisors.x,
            y: self.y / divisors.y,
            z: self.z / divisors.z,
        }
    }

    /// Rounds each axis to the nearest integer, halves rounding up. Only meant for non-negative
    /// values, where "away from zero" and "up" coincide.
    pub fn round(self) -> Coord {
        Coord {
            x: self.x.round(),
            y: self.y.round(),
            z: self.z.round(),
        }
    }

    /// The components as an array, in axis order.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Coord {
    fn from(vals: [f64; 3]) -> Coord {
        Coord {
            x: vals[0],
            y: vals[1],
            z: vals[2],
        }
    }
}
