//! Huepick is the model half of a color picker: the part that knows what a color *is* while the
//! view half deals with swatches, crosshairs and text fields. A picker shows the same color three
//! ways at once (hue/saturation/brightness, red/green/blue, and a six-digit hex string) and every
//! edit to one of them has to show up in the other two. This crate provides those conversions, the
//! validation of typed input, and a small state object that a view of any toolkit can drive.
//!
//! Everything here is a pure function of its input or a plain value, so nothing needs to be
//! synchronized: colors are `Copy`, conversions never fail, and the only fallible operations are
//! the ones that read text a user typed.
//!
//! ```
//! use huepick::prelude::*;
//!
//! let red = color_from_hex("ff0000").unwrap();
//! let hsv = hsv_from_color(red);
//! assert_eq!((hsv.hue_value(), hsv.saturation_value(), hsv.brightness_value()), (0, 100, 100));
//! assert_eq!(rgb_from_color(red).red_value(), 255);
//! assert_eq!(hex_from_color(red), "FF0000");
//! assert!(!is_valid_hex("#ff0000"));
//! ```

#![doc(html_root_url = "https://docs.rs/huepick/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod bound;
pub mod color;
pub mod colors;
pub mod config;
pub mod coord;
pub mod field;
pub mod hex;
pub mod picker;
pub mod prelude;
