//! This file handles the hex text format of a color: exactly six hexadecimal digits, two per channel
//! in the order red, green, blue, most-significant nibble first. This is the common web notation
//! minus the leading `#`. Output is always uppercase; input is accepted in either case. Validation and
//! parsing share the one regex below, so a string parses if and only if it validates.

use std::error::Error;
use std::fmt;

use regex::Regex;

use crate::color::Color;

lazy_static! {
    static ref HEX_COLOR: Regex = Regex::new(r"^[0-9a-fA-F]{6}$").unwrap();
}

/// An error in parsing a hex color string.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum HexParseError {
    /// The string was not exactly six characters long, or contained a character that is not a
    /// hexadecimal digit. Nothing is parsed from such a string, not even a prefix.
    InvalidFormat,
}

impl fmt::Display for HexParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            HexParseError::InvalidFormat => {
                write!(f, "invalid hex color: expected exactly 6 hexadecimal digits")
            }
        }
    }
}

impl Error for HexParseError {}

/// Checks whether a string is a well-formed hex color: exactly six characters, each one of
/// `0-9`, `a-f`, or `A-F`.
/// ```
/// # use huepick::prelude::*;
/// assert!(is_valid_hex("1A2b3C"));
/// assert!(!is_valid_hex("1A2b3"));
/// assert!(!is_valid_hex("1A2b3Z"));
/// assert!(!is_valid_hex("#1A2b3C"));
/// ```
pub fn is_valid_hex(hex: &str) -> bool {
    HEX_COLOR.is_match(hex)
}

/// Formats a color as six uppercase hex digits. Each channel is rounded to 0-255 independently and
/// zero-padded to two digits.
/// ```
/// # use huepick::prelude::*;
/// assert_eq!(hex_from_color(Color::from_rgb8(255, 0, 0)), "FF0000");
/// assert_eq!(hex_from_color(Color::from_rgb8(5, 0, 160)), "0500A0");
/// ```
pub fn hex_from_color(color: Color) -> String {
    let (r, g, b) = color.to_rgb8();
    format!("{:02X}{:02X}{:02X}", r, g, b)
}

/// Parses six hex digits into a color.
/// # Errors
/// Returns [`HexParseError::InvalidFormat`] whenever [`is_valid_hex`] is false for the input.
/// ```
/// # use huepick::prelude::*;
/// let green = color_from_hex("00ff00").unwrap();
/// assert_eq!(green.to_rgb8(), (0, 255, 0));
/// assert_eq!(color_from_hex("00ff0"), Err(HexParseError::InvalidFormat));
/// ```
pub fn color_from_hex(hex: &str) -> Result<Color, HexParseError> {
    if !is_valid_hex(hex) {
        debug!("rejected hex color {:?}", hex);
        return Err(HexParseError::InvalidFormat);
    }
    // it's easier to do math on the hex value than it is to slice strings
    let full_num = u32::from_str_radix(hex, 16).map_err(|_| HexParseError::InvalidFormat)?;
    let r = (full_num >> 16) as u8;
    let g = (full_num >> 8) as u8;
    let b = full_num as u8;
    Ok(Color::from_rgb8(r, g, b))
}
