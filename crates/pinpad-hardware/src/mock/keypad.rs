//! Channel-fed keypad for tests and demos.
//!
//! Key presses are pushed through a [`MockKeypadHandle`] instead of coming
//! from a touch screen. Dropping the last handle disconnects the keypad.

use pinpad_core::{Digit, KeyEvent};
use tokio::sync::mpsc;

use crate::{HardwareError, Result, traits::KeypadDevice, types::DeviceInfo};

/// Number of key presses the handle can queue before sends wait.
const QUEUE_CAPACITY: usize = 32;

/// Keypad whose presses are injected through a [`MockKeypadHandle`].
///
/// # Examples
///
/// ```
/// use pinpad_core::KeyEvent;
/// use pinpad_hardware::mock::MockKeypad;
/// use pinpad_hardware::traits::KeypadDevice;
///
/// #[tokio::main]
/// async fn main() -> pinpad_hardware::Result<()> {
///     let (mut keypad, presser) = MockKeypad::new();
///
///     presser.send_digits(&[4, 2]).await?;
///     presser.send_delete().await?;
///     drop(presser);
///
///     assert_eq!(keypad.read_input().await?, KeyEvent::digit(4)?);
///     assert_eq!(keypad.read_input().await?, KeyEvent::digit(2)?);
///     assert_eq!(keypad.read_input().await?, KeyEvent::Delete);
///     assert!(keypad.read_input().await.unwrap_err().is_disconnected());
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockKeypad {
    presses: mpsc::Receiver<KeyEvent>,
    label: String,
}

impl MockKeypad {
    /// Create a keypad labelled "Mock Keypad" and its handle.
    pub fn new() -> (Self, MockKeypadHandle) {
        Self::with_name("Mock Keypad")
    }

    /// Create a keypad with a custom label and its handle.
    pub fn with_name(label: impl Into<String>) -> (Self, MockKeypadHandle) {
        let label = label.into();
        let (sender, presses) = mpsc::channel(QUEUE_CAPACITY);

        let handle = MockKeypadHandle {
            sender,
            label: label.clone(),
        };
        (Self { presses, label }, handle)
    }
}

impl KeypadDevice for MockKeypad {
    async fn read_input(&mut self) -> Result<KeyEvent> {
        match self.presses.recv().await {
            Some(event) => Ok(event),
            None => Err(HardwareError::disconnected(self.label.as_str())),
        }
    }

    async fn get_info(&self) -> Result<DeviceInfo> {
        Ok(DeviceInfo::new(self.label.as_str(), "Channel Keypad").with_firmware_version("mock"))
    }
}

/// Sending side of a [`MockKeypad`]. Clones share the same keypad.
#[derive(Debug, Clone)]
pub struct MockKeypadHandle {
    sender: mpsc::Sender<KeyEvent>,
    label: String,
}

impl MockKeypadHandle {
    /// Queue one key press.
    ///
    /// # Errors
    /// Returns `HardwareError::Disconnected` once the keypad is dropped.
    pub async fn send_input(&self, event: KeyEvent) -> Result<()> {
        if self.sender.send(event).await.is_err() {
            return Err(HardwareError::disconnected(self.label.as_str()));
        }
        Ok(())
    }

    /// Queue a press of each digit in order.
    ///
    /// # Errors
    /// Returns `HardwareError::Core` for a value above 9 (nothing after it
    /// is sent), or `HardwareError::Disconnected` once the keypad is dropped.
    pub async fn send_digits(&self, digits: &[u8]) -> Result<()> {
        for &value in digits {
            let digit = Digit::new(value)?;
            self.send_input(KeyEvent::Digit(digit)).await?;
        }
        Ok(())
    }

    /// Queue a delete press.
    ///
    /// # Errors
    /// Returns `HardwareError::Disconnected` once the keypad is dropped.
    pub async fn send_delete(&self) -> Result<()> {
        self.send_input(KeyEvent::Delete).await
    }

    /// Label of the keypad this handle feeds.
    pub fn name(&self) -> &str {
        &self.label
    }
}
