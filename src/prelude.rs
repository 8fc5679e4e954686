//! This module simply brings the most common Huepick functionality under a single namespace, to
//! prevent excessive imports. It includes the three color types, the conversion and validation
//! functions between them, the [`Bound`] trait, and the picker state with its delegate. Field
//! handling and configuration stay in their own modules.

pub use crate::bound::Bound;
pub use crate::color::Color;
pub use crate::colors::{hsv_from_color, rgb_from_color, HsvColor, RgbColor};
pub use crate::hex::{color_from_hex, hex_from_color, is_valid_hex, HexParseError};
pub use crate::picker::{ColorPicker, PickerDelegate, PickerError};
