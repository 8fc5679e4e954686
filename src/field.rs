//! This file covers the text fields of a picker: which characters each one accepts while typing,
//! how long its contents may get, and how a committed decimal entry becomes a component value. Only
//! plain unsigned integers are entered: signs, decimal points, and percent signs are not part of
//! the format, and values past a field's range are clamped rather than rejected.

use std::error::Error;
use std::fmt;

/// One of the seven text fields of a picker.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    /// Hue, in degrees.
    Hue,
    /// Saturation, in percent.
    Saturation,
    /// Brightness, in percent.
    Brightness,
    /// Red channel, 0-255.
    Red,
    /// Green channel, 0-255.
    Green,
    /// Blue channel, 0-255.
    Blue,
    /// The six-digit hex string.
    Hex,
}

/// Every field, in the order they are laid out.
pub static FIELDS: [Field; 7] = [
    Field::Hue,
    Field::Saturation,
    Field::Brightness,
    Field::Red,
    Field::Green,
    Field::Blue,
    Field::Hex,
];

impl Field {
    /// The largest value a decimal field holds, or `None` for the hex field.
    pub fn max_value(self) -> Option<i32> {
        match self {
            Field::Hue => Some(360),
            Field::Saturation | Field::Brightness => Some(100),
            Field::Red | Field::Green | Field::Blue => Some(255),
            Field::Hex => None,
        }
    }

    /// The most characters the field holds.
    pub fn max_len(self) -> usize {
        match self {
            Field::Hex => 6,
            _ => 3,
        }
    }

    /// Whether a typed character belongs in this field: decimal digits for the numeric fields, hex
    /// digits of either case for the hex field.
    /// ```
    /// # use huepick::field::Field;
    /// assert!(Field::Hex.accepts('e'));
    /// assert!(!Field::Red.accepts('e'));
    /// assert!(!Field::Hue.accepts('-'));
    /// ```
    pub fn accepts(self, c: char) -> bool {
        match self {
            Field::Hex => c.is_ascii_hexdigit(),
            _ => c.is_ascii_digit(),
        }
    }

    /// Whether `proposed` may become the field's contents after a keystroke: every character
    /// accepted and no more than [`max_len`](Field::max_len) of them.
    pub fn allows_edit(self, proposed: &str) -> bool {
        proposed.chars().count() <= self.max_len() && proposed.chars().all(|c| self.accepts(c))
    }
}

/// An error in parsing the contents of a decimal field.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum FieldParseError {
    /// The field held nothing but whitespace.
    Empty,
    /// Something other than the digits 0-9 appeared in the field.
    InvalidNumericCharacters,
    /// The hex field was handed to the decimal parser.
    NotNumeric,
}

impl fmt::Display for FieldParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match *self {
            FieldParseError::Empty => "empty field",
            FieldParseError::InvalidNumericCharacters => "unexpected non-numeric characters",
            FieldParseError::NotNumeric => "field does not hold a decimal value",
        };
        write!(f, "{}", msg)
    }
}

impl Error for FieldParseError {}

/// Parses the committed contents of a decimal field into its integer value, clamped to
/// `0..=field.max_value()`. Surrounding whitespace is ignored; leading zeros are allowed.
/// # Errors
/// [`FieldParseError::Empty`] for a blank field, [`FieldParseError::InvalidNumericCharacters`] if
/// anything but digits remains, and [`FieldParseError::NotNumeric`] for [`Field::Hex`].
/// ```
/// # use huepick::field::{parse_field_value, Field, FieldParseError};
/// assert_eq!(parse_field_value(Field::Hue, " 042 "), Ok(42));
/// assert_eq!(parse_field_value(Field::Saturation, "250"), Ok(100));
/// assert_eq!(parse_field_value(Field::Red, "-3"), Err(FieldParseError::InvalidNumericCharacters));
/// ```
pub fn parse_field_value(field: Field, text: &str) -> Result<i32, FieldParseError> {
    let max = match field.max_value() {
        Some(max) => max,
        None => return Err(FieldParseError::NotNumeric),
    };
    let digits = text.trim();
    if digits.is_empty() {
        return Err(FieldParseError::Empty);
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        debug!("rejected {:?} entry {:?}", field, text);
        return Err(FieldParseError::InvalidNumericCharacters);
    }
    // too many digits for any integer type is still just "past the maximum"
    let value = digits
        .parse::<u64>()
        .map(|v| v.min(max as u64) as i32)
        .unwrap_or(max);
    Ok(value)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_parse_in_range() {
        assert_eq!(parse_field_value(Field::Hue, "184"), Ok(184));
        assert_eq!(parse_field_value(Field::Green, "0"), Ok(0));
        // test leading zeros
        assert_eq!(parse_field_value(Field::Blue, "007"), Ok(7));
        assert_eq!(parse_field_value(Field::Brightness, "\t55\n"), Ok(55));
    }

    #[test]
    fn test_parse_clamps() {
        assert_eq!(parse_field_value(Field::Hue, "361"), Ok(360));
        assert_eq!(parse_field_value(Field::Red, "256"), Ok(255));
        assert_eq!(parse_field_value(Field::Saturation, "101"), Ok(100));
        assert_eq!(
            parse_field_value(Field::Saturation, "99999999999999999999999999"),
            Ok(100)
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_field_value(Field::Hue, "  "), Err(FieldParseError::Empty));
        assert_eq!(
            parse_field_value(Field::Hue, "12.5"),
            Err(FieldParseError::InvalidNumericCharacters)
        );
        assert_eq!(
            parse_field_value(Field::Hue, "+12"),
            Err(FieldParseError::InvalidNumericCharacters)
        );
        assert_eq!(
            parse_field_value(Field::Blue, "4 2"),
            Err(FieldParseError::InvalidNumericCharacters)
        );
        assert_eq!(parse_field_value(Field::Hex, "12"), Err(FieldParseError::NotNumeric));
    }

    #[test]
    fn test_character_sets() {
        for c in "0123456789".chars() {
            assert!(FIELDS.iter().all(|f| f.accepts(c)));
        }
        for c in "abcdefABCDEF".chars() {
            assert!(Field::Hex.accepts(c));
            assert!(!Field::Hue.accepts(c));
        }
        assert!(!Field::Hex.accepts('g'));
        assert!(!Field::Hex.accepts('#'));
    }

    #[test]
    fn test_allows_edit() {
        assert!(Field::Hue.allows_edit("360"));
        assert!(!Field::Hue.allows_edit("3600"));
        assert!(Field::Hex.allows_edit("fF00aA"));
        assert!(!Field::Hex.allows_edit("fF00aA0"));
        assert!(Field::Red.allows_edit(""));
    }
}
