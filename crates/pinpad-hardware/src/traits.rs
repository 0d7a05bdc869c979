//! Capability trait definitions.
//!
//! These traits establish the contract between the PIN pad and the platform
//! it runs on. A host implements them once; the widget itself only ever talks
//! to the traits.
//!
//! [`KeypadDevice`] uses native `async fn` methods (Rust 1.90 + Edition 2024
//! RPITIT). [`FeedbackDevice`] is synchronous and object safe, so the widget
//! can hold it as `Box<dyn FeedbackDevice>`.

#![allow(async_fn_in_trait)]

use pinpad_core::KeyEvent;

use crate::error::Result;
use crate::types::{DeviceInfo, HapticKind, ShakeAnimation, ShakeTarget};

/// Fire-and-forget feedback effects.
///
/// Implementations start the effect and return immediately; they must not
/// block until an animation or vibration finishes. Errors are reported but
/// the widget only logs them.
///
/// # Examples
///
/// ```
/// use pinpad_hardware::traits::FeedbackDevice;
/// use pinpad_hardware::types::{DeviceInfo, HapticKind, ShakeAnimation, ShakeTarget};
/// use pinpad_hardware::Result;
///
/// struct Silent;
///
/// impl FeedbackDevice for Silent {
///     fn trigger_shake(&mut self, _target: ShakeTarget, _animation: &ShakeAnimation) -> Result<()> {
///         Ok(())
///     }
///
///     fn trigger_haptic(&mut self, _kind: HapticKind) -> Result<()> {
///         Ok(())
///     }
///
///     fn get_info(&self) -> DeviceInfo {
///         DeviceInfo::new("Silent", "none")
///     }
/// }
///
/// let mut feedback: Box<dyn FeedbackDevice> = Box::new(Silent);
/// assert!(feedback.trigger_haptic(HapticKind::KeyboardTap).is_ok());
/// ```
pub trait FeedbackDevice: Send {
    /// Start a horizontal shake of `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform cannot run the animation.
    fn trigger_shake(&mut self, target: ShakeTarget, animation: &ShakeAnimation) -> Result<()>;

    /// Play a haptic effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the device has no actuator or the platform
    /// rejects the request.
    fn trigger_haptic(&mut self, kind: HapticKind) -> Result<()>;

    /// Get device information.
    fn get_info(&self) -> DeviceInfo;
}

/// Asynchronous source of key presses.
///
/// # Object Safety
///
/// **NOTE**: This trait is NOT object-safe because `async fn` methods return
/// `impl Future`. Use generic type parameters:
///
/// ```no_run
/// use pinpad_hardware::traits::KeypadDevice;
/// use pinpad_hardware::error::Result;
///
/// async fn next_key<K: KeypadDevice>(keypad: &mut K) -> Result<()> {
///     let _event = keypad.read_input().await?;
///     Ok(())
/// }
/// ```
pub trait KeypadDevice: Send {
    /// Read the next key press.
    ///
    /// Waits asynchronously until input is available.
    ///
    /// # Errors
    ///
    /// Returns [`HardwareError::Disconnected`](crate::HardwareError::Disconnected)
    /// once the device will produce no more input, or another error if the
    /// input could not be decoded.
    async fn read_input(&mut self) -> Result<KeyEvent>;

    /// Get device information.
    ///
    /// # Errors
    ///
    /// Returns an error if a communication error occurs while querying
    /// device information.
    async fn get_info(&self) -> Result<DeviceInfo>;
}
