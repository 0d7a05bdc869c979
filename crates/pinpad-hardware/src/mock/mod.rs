//! Mock device implementations for testing and development.
//!
//! This module provides simulated devices that can be controlled and
//! inspected programmatically without a platform UI.

pub mod feedback;
pub mod keypad;

// Re-export commonly used types
pub use feedback::{FeedbackCall, MockFeedback, MockFeedbackHandle};
pub use keypad::{MockKeypad, MockKeypadHandle};
