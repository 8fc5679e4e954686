//! The state behind a picker view, independent of any UI toolkit. A view feeds it normalized
//! selector positions and committed text-field contents, reads back the values to display, and
//! reports the outcome to a [`PickerDelegate`] when the user saves or cancels.
//!
//! The selected color is kept in HSV. Going through RGB would lose the hue whenever saturation or
//! brightness hits zero, and then dragging back out of gray would snap to red.
//!
//! ```
//! # use huepick::prelude::*;
//! # use huepick::config::PickerConfig;
//! # use huepick::field::Field;
//! let mut picker = ColorPicker::new(PickerConfig::default());
//! // crosshair at the middle of the hue/saturation square
//! picker.select_hue_saturation(0.5, 0.5);
//! assert_eq!(picker.field_text(Field::Hue), "180");
//! assert_eq!(picker.field_text(Field::Saturation), "50");
//! assert_eq!(picker.hex(), "80FFFF");
//! picker.enter(Field::Red, "0").unwrap();
//! assert_eq!(picker.hex(), "00FFFF");
//! ```

use std::error::Error;
use std::fmt;

use float_cmp::approx_eq;

use crate::color::Color;
use crate::colors::{hsv_from_color, rgb_from_color, HsvColor, RgbColor};
use crate::config::PickerConfig;
use crate::field::{parse_field_value, Field, FieldParseError};
use crate::hex::{color_from_hex, hex_from_color, HexParseError};

// far below one step of any displayed value
const GRAY_EPSILON: f64 = 1e-9;

/// Receives the outcome of a picker session.
pub trait PickerDelegate {
    /// The user accepted the selected color.
    fn picker_saved(&mut self, picker: &ColorPicker);
    /// The user dismissed the picker without accepting.
    fn picker_cancelled(&mut self, picker: &ColorPicker);
}

/// An error from committing a text field.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum PickerError {
    /// The hex field did not hold a valid hex color.
    Hex(HexParseError),
    /// A decimal field did not hold a number.
    Field(FieldParseError),
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PickerError::Hex(e) => write!(f, "{}", e),
            PickerError::Field(e) => write!(f, "{}", e),
        }
    }
}

impl Error for PickerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PickerError::Hex(e) => Some(e),
            PickerError::Field(e) => Some(e),
        }
    }
}

impl From<HexParseError> for PickerError {
    fn from(e: HexParseError) -> PickerError {
        PickerError::Hex(e)
    }
}

impl From<FieldParseError> for PickerError {
    fn from(e: FieldParseError) -> PickerError {
        PickerError::Field(e)
    }
}

/// The selected color of one picker, plus its title.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPicker {
    title: String,
    hsv: HsvColor,
}

impl ColorPicker {
    /// Opens a picker on the configured color.
    pub fn new(config: PickerConfig) -> ColorPicker {
        ColorPicker {
            title: config.title,
            hsv: hsv_from_color(config.initial_color),
        }
    }

    /// The title the picker was opened with.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The selected color.
    pub fn selected_color(&self) -> Color {
        self.hsv.into()
    }

    /// Replaces the selected color. When the new color is gray the current hue is kept, and when it
    /// is black the current saturation is kept too, since neither is visible in such a color.
    pub fn set_selected_color(&mut self, color: Color) {
        let hsv = hsv_from_color(color);
        let mut next = hsv;
        // channels that went through HSV carry rounding noise, so gray may not be exactly gray
        if approx_eq!(f64, hsv.saturation(), 0., epsilon = GRAY_EPSILON) {
            next = next.with_hue(self.hsv.hue()).with_saturation(0.);
        }
        if approx_eq!(f64, hsv.brightness(), 0., epsilon = GRAY_EPSILON) {
            next = next
                .with_saturation(self.hsv.saturation())
                .with_brightness(0.);
        }
        self.set_hsv(next);
    }

    /// The selected color in HSV.
    pub fn hsv(&self) -> HsvColor {
        self.hsv
    }

    /// The channels of the selected color.
    pub fn rgb(&self) -> RgbColor {
        rgb_from_color(self.selected_color())
    }

    /// The selected color as six uppercase hex digits.
    pub fn hex(&self) -> String {
        hex_from_color(self.selected_color())
    }

    /// What a text field should show for the selected color.
    pub fn field_text(&self, field: Field) -> String {
        let rgb = self.rgb();
        match field {
            Field::Hue => self.hsv.hue_value().to_string(),
            Field::Saturation => self.hsv.saturation_value().to_string(),
            Field::Brightness => self.hsv.brightness_value().to_string(),
            Field::Red => rgb.red_value().to_string(),
            Field::Green => rgb.green_value().to_string(),
            Field::Blue => rgb.blue_value().to_string(),
            Field::Hex => self.hex(),
        }
    }

    /// Moves the crosshair of the hue/saturation square. `x` and `y` are normalized to the square
    /// with the origin at its top-left corner: hue grows to the right and saturation grows upward.
    /// Positions outside of the square are clamped onto its edge. Brightness is unchanged.
    pub fn select_hue_saturation(&mut self, x: f64, y: f64) {
        let next = HsvColor::new(x, 1. - y, self.hsv.brightness());
        self.set_hsv(next);
    }

    /// Moves the selector of the brightness strip. `y` is normalized to the strip with full
    /// brightness at the top. Hue and saturation are unchanged.
    pub fn select_brightness(&mut self, y: f64) {
        let next = self.hsv.with_brightness(1. - y);
        self.set_hsv(next);
    }

    /// Applies the committed contents of a text field. HSV fields replace one HSV component, RGB
    /// fields replace one channel and leave the other two as they are, and the hex field replaces
    /// the whole color.
    /// # Errors
    /// The contents are rejected as [`color_from_hex`] or [`parse_field_value`] would reject them;
    /// the selected color is left untouched.
    pub fn enter(&mut self, field: Field, text: &str) -> Result<(), PickerError> {
        match field {
            Field::Hex => self.set_selected_color(color_from_hex(text)?),
            Field::Hue | Field::Saturation | Field::Brightness => {
                let value = f64::from(parse_field_value(field, text)?);
                let next = match field {
                    Field::Hue => self.hsv.with_hue(value / 360.),
                    Field::Saturation => self.hsv.with_saturation(value / 100.),
                    _ => self.hsv.with_brightness(value / 100.),
                };
                self.set_hsv(next);
            }
            Field::Red | Field::Green | Field::Blue => {
                let value = f64::from(parse_field_value(field, text)?) / 255.;
                let rgb = self.rgb();
                let next = match field {
                    Field::Red => RgbColor::new(value, rgb.green(), rgb.blue()),
                    Field::Green => RgbColor::new(rgb.red(), value, rgb.blue()),
                    _ => RgbColor::new(rgb.red(), rgb.green(), value),
                };
                self.set_selected_color(next.into());
            }
        }
        Ok(())
    }

    /// Reports the selected color as accepted.
    pub fn save(&self, delegate: &mut dyn PickerDelegate) {
        debug!("picker {:?} saved {}", self.title, self.hex());
        delegate.picker_saved(self);
    }

    /// Reports the picker as dismissed.
    pub fn cancel(&self, delegate: &mut dyn PickerDelegate) {
        debug!("picker {:?} cancelled", self.title);
        delegate.picker_cancelled(self);
    }

    fn set_hsv(&mut self, hsv: HsvColor) {
        trace!(
            "selected hsv({}, {}%, {}%)",
            hsv.hue_value(),
            hsv.saturation_value(),
            hsv.brightness_value()
        );
        self.hsv = hsv;
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::field::FIELDS;

    fn picker(hex: &str) -> ColorPicker {
        ColorPicker::new(PickerConfig {
            title: "Test".to_string(),
            initial_color: color_from_hex(hex).unwrap(),
        })
    }

    #[derive(Default)]
    struct Recorder {
        saved: Vec<String>,
        cancelled: usize,
    }

    impl PickerDelegate for Recorder {
        fn picker_saved(&mut self, picker: &ColorPicker) {
            self.saved.push(picker.hex());
        }
        fn picker_cancelled(&mut self, _picker: &ColorPicker) {
            self.cancelled += 1;
        }
    }

    #[test]
    fn test_opens_on_config() {
        let p = picker("FF0000");
        assert_eq!(p.title(), "Test");
        assert_eq!(p.hex(), "FF0000");
        let texts: Vec<String> = FIELDS.iter().map(|&f| p.field_text(f)).collect();
        assert_eq!(texts, vec!["0", "100", "100", "255", "0", "0", "FF0000"]);
    }

    #[test]
    fn test_crosshair_and_strip() {
        let mut p = picker("FFFFFF");
        p.select_hue_saturation(2. / 3., 0.);
        assert_eq!(p.hex(), "0000FF");
        p.select_brightness(0.5);
        assert_eq!(p.hsv().brightness_value(), 50);
        assert_eq!(p.hsv().hue_value(), 240);
        // dragging past the edges clamps
        p.select_hue_saturation(-1., 2.);
        assert_eq!(p.hsv().hue_value(), 0);
        assert_eq!(p.hsv().saturation_value(), 0);
        p.select_brightness(1.5);
        assert_eq!(p.hex(), "000000");
    }

    #[test]
    fn test_hue_survives_black() {
        let mut p = picker("00FF00");
        p.enter(Field::Brightness, "0").unwrap();
        assert_eq!(p.hex(), "000000");
        p.enter(Field::Brightness, "100").unwrap();
        assert_eq!(p.hex(), "00FF00");
        // going through the RGB fields keeps it too
        p.enter(Field::Hex, "000000").unwrap();
        assert_eq!(p.hsv().hue_value(), 120);
        assert_eq!(p.hsv().saturation_value(), 100);
        p.enter(Field::Green, "255").unwrap();
        assert_eq!(p.hex(), "00FF00");
    }

    #[test]
    fn test_hue_survives_gray_from_channels() {
        let mut p = picker("C04A12");
        p.enter(Field::Red, "18").unwrap();
        assert_eq!(p.hex(), "124A12");
        assert_eq!(p.hsv().hue_value(), 120);
        p.enter(Field::Green, "18").unwrap();
        assert_eq!(p.hex(), "121212");
        assert_eq!(p.hsv().hue_value(), 120);
        assert_eq!(p.hsv().saturation(), 0.);
        // and back out of gray along the kept hue
        p.enter(Field::Saturation, "100").unwrap();
        assert_eq!(p.hsv().hue_value(), 120);
        assert_eq!(p.field_text(Field::Red), "0");
        assert_eq!(p.field_text(Field::Blue), "0");
    }

    #[test]
    fn test_saturation_survives_black_from_channels() {
        let mut p = picker("336699");
        p.enter(Field::Red, "0").unwrap();
        p.enter(Field::Green, "0").unwrap();
        p.enter(Field::Blue, "0").unwrap();
        assert_eq!(p.hex(), "000000");
        assert_eq!(p.hsv().brightness(), 0.);
        // the blue left over from the last channel edit
        assert_eq!(p.hsv().hue_value(), 240);
        assert_eq!(p.hsv().saturation_value(), 100);
    }

    #[test]
    fn test_decimal_fields() {
        let mut p = picker("000000");
        p.enter(Field::Red, "255").unwrap();
        p.enter(Field::Blue, "128").unwrap();
        assert_eq!(p.hex(), "FF0080");
        p.enter(Field::Hue, "400").unwrap();
        assert_eq!(p.field_text(Field::Hue), "360");
        assert_eq!(p.hex(), "FF0000");
        p.enter(Field::Saturation, "0").unwrap();
        assert_eq!(p.hex(), "FFFFFF");
    }

    #[test]
    fn test_rejected_entries_leave_state() {
        let mut p = picker("123456");
        assert_eq!(
            p.enter(Field::Hex, "12345G"),
            Err(PickerError::Hex(HexParseError::InvalidFormat))
        );
        assert_eq!(
            p.enter(Field::Red, "1e3"),
            Err(PickerError::Field(FieldParseError::InvalidNumericCharacters))
        );
        assert_eq!(
            p.enter(Field::Hue, ""),
            Err(PickerError::Field(FieldParseError::Empty))
        );
        assert_eq!(p.hex(), "123456");
    }

    #[test]
    fn test_delegate() {
        let mut recorder = Recorder::default();
        let mut p = picker("ABCDEF");
        p.cancel(&mut recorder);
        p.enter(Field::Hex, "fedcba").unwrap();
        p.save(&mut recorder);
        assert_eq!(recorder.cancelled, 1);
        assert_eq!(recorder.saved, vec!["FEDCBA".to_string()]);
    }

    #[test]
    fn test_error_source() {
        let err = PickerError::from(HexParseError::InvalidFormat);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), HexParseError::InvalidFormat.to_string());
    }
}
