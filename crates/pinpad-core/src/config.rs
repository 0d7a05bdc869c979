//! Widget configuration.
//!
//! [`PinPadConfig`] gathers every option the PIN pad reads at construction.
//! All of them stay mutable afterwards through the widget's setters; this
//! struct only describes the starting point.
//!
//! # Examples
//!
//! ```
//! use pinpad_core::{IndicatorType, KeyOrder, PinPadConfig};
//!
//! let config = PinPadConfig::from_json_str(
//!     r#"{ "pin_length": 6, "show_delete_button": false, "key_order": "shuffled" }"#,
//! ).unwrap();
//!
//! assert_eq!(config.pin_length.get(), 6);
//! assert!(!config.show_delete_button);
//! assert_eq!(config.key_order, KeyOrder::Shuffled);
//! assert_eq!(config.indicator_type, IndicatorType::Fixed);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    constants::KEY_COUNT,
    error::Error,
    types::PinLength,
};

/// How the dot indicator represents the entered length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorType {
    /// One dot per PIN position, filled as digits are entered.
    #[default]
    Fixed,
    /// Dots are added and removed as digits are entered.
    Fill,
    /// Like [`IndicatorType::Fill`], with animated layout changes.
    FillWithAnimation,
}

/// Ordering of the ten digit keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    /// `1 2 3 / 4 5 6 / 7 8 9 / 0`.
    #[default]
    Default,
    /// A caller-supplied permutation of the digits 0-9.
    Custom(Vec<u8>),
    /// A random permutation chosen when the widget is built.
    Shuffled,
}

impl KeyOrder {
    /// Validate a custom order.
    ///
    /// # Errors
    /// Returns `Error::InvalidKeyLayout` if a custom order is not a
    /// permutation of the digits 0-9.
    pub fn validate(&self) -> Result<()> {
        if let KeyOrder::Custom(keys) = self {
            validate_key_set(keys)?;
        }
        Ok(())
    }
}

/// Check that `keys` holds each digit 0-9 exactly once.
///
/// # Errors
/// Returns `Error::InvalidKeyLayout` describing the first problem found.
pub fn validate_key_set(keys: &[u8]) -> Result<()> {
    if keys.len() != KEY_COUNT {
        return Err(Error::InvalidKeyLayout(format!(
            "expected {KEY_COUNT} keys, got {}",
            keys.len()
        )));
    }

    let mut seen = [false; KEY_COUNT];
    for &key in keys {
        let slot = seen
            .get_mut(usize::from(key))
            .ok_or_else(|| Error::InvalidKeyLayout(format!("key {key} is not a digit")))?;
        if *slot {
            return Err(Error::InvalidKeyLayout(format!("key {key} appears twice")));
        }
        *slot = true;
    }
    Ok(())
}

/// Construction-time options for the PIN pad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinPadConfig {
    /// Number of digits that completes a PIN.
    pub pin_length: PinLength,

    /// Whether the delete key is shown.
    ///
    /// When hidden, pressing a digit on a full PIN starts a new one.
    pub show_delete_button: bool,

    /// Whether key presses produce haptic feedback.
    pub vibrate: bool,

    /// Whether keys show a press animation.
    pub show_button_press_animation: bool,

    /// Ordering of the digit keys.
    pub key_order: KeyOrder,

    /// Indicator variant.
    pub indicator_type: IndicatorType,
}

impl Default for PinPadConfig {
    fn default() -> Self {
        Self {
            pin_length: PinLength::default(),
            show_delete_button: true,
            vibrate: true,
            show_button_press_animation: true,
            key_order: KeyOrder::Default,
            indicator_type: IndicatorType::Fixed,
        }
    }
}

impl PinPadConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns `Error::Json` for malformed JSON and `Error::InvalidKeyLayout`
    /// for a custom key order that is not a permutation of 0-9.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PinPadConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be read, otherwise the errors of
    /// [`PinPadConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Write the configuration as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Validate fields that serde cannot check on its own.
    ///
    /// # Errors
    /// Returns `Error::InvalidKeyLayout` for an invalid custom key order.
    pub fn validate(&self) -> Result<()> {
        self.key_order.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = PinPadConfig::default();
        assert_eq!(config.pin_length.get(), 4);
        assert!(config.show_delete_button);
        assert!(config.vibrate);
        assert!(config.show_button_press_animation);
        assert_eq!(config.key_order, KeyOrder::Default);
        assert_eq!(config.indicator_type, IndicatorType::Fixed);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = PinPadConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PinPadConfig::default());
    }

    #[test]
    fn test_custom_key_order_from_json() {
        let config = PinPadConfig::from_json_str(
            r#"{ "key_order": { "custom": [0, 9, 8, 7, 6, 5, 4, 3, 2, 1] }, "indicator_type": "fill_with_animation" }"#,
        )
        .unwrap();

        assert_eq!(
            config.key_order,
            KeyOrder::Custom(vec![0, 9, 8, 7, 6, 5, 4, 3, 2, 1])
        );
        assert_eq!(config.indicator_type, IndicatorType::FillWithAnimation);
    }

    #[rstest]
    #[case(r#"{ "pin_length": 0 }"#)]
    #[case(r#"{ "pin_length": 17 }"#)]
    #[case(r#"{ "pin_length": 18446744073709551615 }"#)]
    fn test_out_of_range_pin_length_rejected(#[case] json: &str) {
        let result = PinPadConfig::from_json_str(json);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[rstest]
    #[case(vec![1, 2, 3])] // too short
    #[case(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 9])] // duplicate
    #[case(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10])] // not a digit
    fn test_invalid_key_sets(#[case] keys: Vec<u8>) {
        assert!(matches!(
            validate_key_set(&keys),
            Err(Error::InvalidKeyLayout(_))
        ));
        let config = PinPadConfig {
            key_order: KeyOrder::Custom(keys),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pinpad.json");

        let config = PinPadConfig {
            pin_length: PinLength::new(6).unwrap(),
            vibrate: false,
            key_order: KeyOrder::Shuffled,
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = PinPadConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let result = PinPadConfig::load("/nonexistent/pinpad.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
