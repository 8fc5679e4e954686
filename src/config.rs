//! Settings a picker is opened with. These are usually built in code, but can also be read from
//! JSON, where the initial color is written in the same hex format the picker's hex field uses:
//!
//! ```
//! # use huepick::config::PickerConfig;
//! let config = PickerConfig::from_json(r#"{"title": "Accent", "initial_color": "3366cc"}"#).unwrap();
//! assert_eq!(config.title, "Accent");
//! assert_eq!(config.initial_color.to_string(), "3366CC");
//! ```

use crate::color::Color;

/// The title and starting color of a picker. Missing JSON keys fall back to [`Default`]: a picker
/// titled "Color" starting on white.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Shown above the picker.
    pub title: String,
    /// The color selected when the picker opens.
    #[serde(with = "hex_string")]
    pub initial_color: Color,
}

impl Default for PickerConfig {
    fn default() -> PickerConfig {
        PickerConfig {
            title: "Color".to_string(),
            initial_color: Color::new(1., 1., 1.),
        }
    }
}

impl PickerConfig {
    /// Reads a config from a JSON object.
    /// # Errors
    /// Fails on malformed JSON, on fields of the wrong type, and on an `initial_color` that is not a
    /// valid hex color.
    pub fn from_json(json: &str) -> Result<PickerConfig, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// (de)serializes a Color as its 6-digit hex string
mod hex_string {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::color::Color;
    use crate::hex::{color_from_hex, hex_from_color};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex_from_color(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let hex = String::deserialize(deserializer)?;
        color_from_hex(&hex).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::from_json("{}").unwrap();
        assert_eq!(config, PickerConfig::default());
        assert_eq!(config.title, "Color");
        assert_eq!(config.initial_color.to_string(), "FFFFFF");
    }

    #[test]
    fn test_partial() {
        let config = PickerConfig::from_json(r#"{"initial_color": "00ff00"}"#).unwrap();
        assert_eq!(config.title, "Color");
        assert_eq!(config.initial_color.to_rgb8(), (0, 255, 0));
    }

    #[test]
    fn test_invalid_hex_rejected() {
        let err = PickerConfig::from_json(r##"{"initial_color": "#00ff00"}"##).unwrap_err();
        assert!(err.to_string().contains("invalid hex color"));
        assert!(PickerConfig::from_json(r#"{"initial_color": 5}"#).is_err());
    }

    #[test]
    fn test_serialize() {
        let config = PickerConfig {
            title: "Fill".to_string(),
            initial_color: Color::from_rgb8(1, 2, 3),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"title":"Fill","initial_color":"010203"}"#);
        assert_eq!(PickerConfig::from_json(&json).unwrap(), config);
    }
}
