//! Capability layer for the side effects of the PIN pad.
//!
//! The PIN accumulator never touches a platform API directly. Everything that
//! moves pixels, buzzes a motor or delivers key presses sits behind one of the
//! traits in this crate, so the state machine stays platform independent and
//! can be tested without a rendering environment.
//!
//! # Capability Traits
//!
//! ## Feedback Devices
//!
//! The [`FeedbackDevice`] trait covers fire-and-forget feedback: shaking a
//! view and playing a haptic effect. Calls are synchronous and best effort.
//!
//! ```
//! use pinpad_hardware::traits::FeedbackDevice;
//! use pinpad_hardware::types::{HapticKind, ShakeAnimation, ShakeTarget};
//!
//! fn reject<F: FeedbackDevice + ?Sized>(feedback: &mut F) {
//!     // Failures are not fatal for input handling
//!     feedback.trigger_haptic(HapticKind::LongPress).ok();
//!     feedback
//!         .trigger_shake(ShakeTarget::Keypad, &ShakeAnimation::error())
//!         .ok();
//! }
//! ```
//!
//! ## Keypad Devices
//!
//! The [`KeypadDevice`] trait is an asynchronous source of key presses:
//!
//! ```no_run
//! use pinpad_core::KeyEvent;
//! use pinpad_hardware::traits::KeypadDevice;
//! use pinpad_hardware::error::Result;
//!
//! async fn read_code<K: KeypadDevice>(keypad: &mut K, len: usize) -> Result<String> {
//!     let mut code = String::new();
//!
//!     while code.len() < len {
//!         match keypad.read_input().await? {
//!             KeyEvent::Digit(d) => code.push(d.as_char()),
//!             KeyEvent::Delete => {
//!                 code.pop();
//!             }
//!         }
//!     }
//!
//!     Ok(code)
//! }
//! ```
//!
//! # Error Handling
//!
//! All operations return [`Result<T>`][error::Result] which uses the
//! [`HardwareError`] error type.
//!
//! # Mock Implementations
//!
//! The [`mock`] module provides [`MockKeypad`](mock::MockKeypad) and
//! [`MockFeedback`](mock::MockFeedback) for development and testing.
//!
//! [`FeedbackDevice`]: traits::FeedbackDevice
//! [`KeypadDevice`]: traits::KeypadDevice

pub mod error;
pub mod mock;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{HardwareError, Result};
pub use traits::{FeedbackDevice, KeypadDevice};
pub use types::{DeviceInfo, HapticKind, ShakeAnimation, ShakeTarget};
