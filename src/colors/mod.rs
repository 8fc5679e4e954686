//! This module contains the two derived representations of a [`Color`] that a picker displays. For
//! convenience, each main type and its extraction function are imported into this module's
//! namespace directly.
//!
//! [`Color`]: ../color/struct.Color.html
pub mod hsvcolor;
pub mod rgbcolor;

// for convenience, use this namespace for the color objects
pub use self::hsvcolor::{hsv_from_color, HsvColor};
pub use self::rgbcolor::{rgb_from_color, RgbColor};
