//! Error types for capability operations.
//!
//! This module defines the errors a feedback or keypad device may report.
//! The widget treats feedback errors as non-fatal: they are logged and
//! dropped, never propagated into PIN handling.

/// Result of a capability call.
pub type Result<T> = std::result::Result<T, HardwareError>;

/// Failure reported by a feedback or keypad device.
#[derive(Debug, thiserror::Error)]
pub enum HardwareError {
    /// The device went away and will produce no more input.
    #[error("Device disconnected: {device}")]
    Disconnected { device: String },

    /// The device lacks the requested capability (e.g. no vibrator).
    #[error("Unsupported operation: {operation}")]
    Unsupported { operation: String },

    /// The platform refused or failed to run a feedback effect.
    #[error("Feedback failed: {message}")]
    FeedbackFailed { message: String },

    /// Input from the device could not be decoded.
    #[error("Invalid input: {message}")]
    InvalidData { message: String },

    /// Domain validation error raised while decoding input.
    #[error(transparent)]
    Core(#[from] pinpad_core::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HardwareError {
    pub fn disconnected(device: impl Into<String>) -> Self {
        Self::Disconnected {
            device: device.into(),
        }
    }

    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }

    pub fn feedback(message: impl Into<String>) -> Self {
        Self::FeedbackFailed {
            message: message.into(),
        }
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Whether the device is gone, which ends an input loop normally.
    pub fn is_disconnected(&self) -> bool {
        matches!(self, Self::Disconnected { .. })
    }
}
