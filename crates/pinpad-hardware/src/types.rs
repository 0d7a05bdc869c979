//! Common types shared across capability implementations.

use std::fmt;
use std::time::Duration;

use pinpad_core::constants::{ERROR_FEEDBACK_DURATION_MS, SHAKE_OFFSETS};
use serde::{Deserialize, Serialize};

/// Generic device information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Device name (e.g., "Terminal Feedback", "Mock Keypad").
    pub name: String,

    /// Device model identifier.
    pub model: String,

    /// Optional firmware version string.
    pub firmware_version: Option<String>,
}

impl DeviceInfo {
    /// Create a new DeviceInfo with required fields.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            firmware_version: None,
        }
    }

    /// Set the firmware version.
    pub fn with_firmware_version(mut self, firmware_version: impl Into<String>) -> Self {
        self.firmware_version = Some(firmware_version.into());
        self
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({}", self.name, self.model)?;
        if let Some(firmware) = &self.firmware_version {
            write!(f, ", firmware {firmware}")?;
        }
        write!(f, ")")
    }
}

/// Kind of haptic effect requested from the platform.
///
/// Each widget event maps to one kind:
/// - digit press: [`HapticKind::KeyboardTap`]
/// - delete press: [`HapticKind::VirtualKey`]
/// - accepted PIN: [`HapticKind::ContextClick`]
/// - rejected PIN: [`HapticKind::LongPress`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticKind {
    /// Short tick for a digit key.
    KeyboardTap,
    /// Tick for a non-digit key.
    VirtualKey,
    /// Long buzz signalling an error.
    LongPress,
    /// Confirmation click.
    ContextClick,
}

/// Which part of the widget should shake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShakeTarget {
    /// The dot indicator row.
    Indicator,
    /// The keypad grid.
    Keypad,
}

/// Horizontal shake described as keyframe offsets over a duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShakeAnimation {
    /// Horizontal translation keyframes in pixels.
    pub offsets: Vec<f32>,

    /// Total animation duration.
    pub duration: Duration,
}

impl ShakeAnimation {
    /// The shake played when a PIN is rejected.
    #[must_use]
    pub fn error() -> Self {
        Self {
            offsets: SHAKE_OFFSETS.to_vec(),
            duration: Duration::from_millis(ERROR_FEEDBACK_DURATION_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_info_builder() {
        let info = DeviceInfo::new("Feedback", "Mock v1").with_firmware_version("1.0.0");
        assert_eq!(info.name, "Feedback");
        assert_eq!(info.model, "Mock v1");
        assert_eq!(info.firmware_version.as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_device_info_display() {
        let plain = DeviceInfo::new("stdin", "Terminal Keypad");
        assert_eq!(plain.to_string(), "stdin (Terminal Keypad)");

        let versioned = plain.with_firmware_version("2.1");
        assert_eq!(versioned.to_string(), "stdin (Terminal Keypad, firmware 2.1)");
    }

    #[test]
    fn test_error_shake() {
        let shake = ShakeAnimation::error();
        assert_eq!(shake.offsets, vec![0.0, 100.0, -100.0, 0.0]);
        assert_eq!(shake.duration, Duration::from_millis(200));
    }

    #[test]
    fn test_haptic_kind_serialization() {
        let json = serde_json::to_string(&HapticKind::KeyboardTap).unwrap();
        assert_eq!(json, "\"keyboard_tap\"");

        let kind: HapticKind = serde_json::from_str("\"long_press\"").unwrap();
        assert_eq!(kind, HapticKind::LongPress);
    }
}
