use crate::{
    Result,
    constants::{DEFAULT_PIN_LENGTH, MAX_PIN_LENGTH, MIN_PIN_LENGTH},
    error::Error,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

/// A single decimal digit (0-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// All ten digits in ascending order.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Create a digit with validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidDigit` if the value is greater than 9.
    pub fn new(value: u8) -> Result<Self> {
        if value > 9 {
            return Err(Error::InvalidDigit(value));
        }
        Ok(Digit(value))
    }

    /// Create a digit from its ASCII character.
    ///
    /// # Errors
    /// Returns `Error::InvalidDigitChar` if `c` is not `'0'..='9'`.
    pub fn from_char(c: char) -> Result<Self> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or(Error::InvalidDigitChar(c))
    }

    /// Get the numeric value.
    #[inline]
    #[must_use]
    pub fn as_u8(self) -> u8 {
        self.0
    }

    /// Get the ASCII character for this digit.
    #[inline]
    #[must_use]
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Digit::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configured number of digits that completes a PIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PinLength(usize);

impl PinLength {
    /// Create a PIN length with validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidPinLength` if `len` is outside
    /// [`MIN_PIN_LENGTH`]..=[`MAX_PIN_LENGTH`].
    pub fn new(len: usize) -> Result<Self> {
        if !(MIN_PIN_LENGTH..=MAX_PIN_LENGTH).contains(&len) {
            return Err(Error::InvalidPinLength(len));
        }
        Ok(PinLength(len))
    }

    #[inline]
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PinLength {
    fn default() -> Self {
        PinLength(DEFAULT_PIN_LENGTH)
    }
}

impl TryFrom<usize> for PinLength {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        PinLength::new(value)
    }
}

impl From<PinLength> for usize {
    fn from(len: PinLength) -> Self {
        len.0
    }
}

impl fmt::Display for PinLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The digits entered so far.
///
/// # Security
/// Comparison runs in constant time and the `Debug` output only reveals the
/// length, so a `Pin` can be logged or compared without leaking its content.
#[derive(Clone, Default, Eq)]
pub struct Pin(String);

impl Pin {
    /// Create an empty PIN.
    #[must_use]
    pub fn new() -> Self {
        Pin(String::new())
    }

    /// Append a digit.
    pub fn push(&mut self, digit: Digit) {
        self.0.push(digit.as_char());
    }

    /// Remove and return the last digit.
    pub fn pop(&mut self) -> Option<Digit> {
        self.0.pop().and_then(|c| Digit::from_char(c).ok())
    }

    /// Remove every digit.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of digits entered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pin(len={})", self.0.len())
    }
}

impl std::str::FromStr for Pin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut pin = Pin::new();
        for c in s.chars() {
            pin.push(Digit::from_char(c)?);
        }
        Ok(pin)
    }
}

/// Constant-time comparison implementation for Pin
impl PartialEq for Pin {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

/// A key press forwarded from the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyEvent {
    /// A digit key was pressed.
    Digit(Digit),
    /// The delete key was pressed.
    Delete,
}

impl KeyEvent {
    /// Create a digit key event.
    ///
    /// # Errors
    /// Returns `Error::InvalidDigit` if `d` is greater than 9.
    pub fn digit(d: u8) -> Result<Self> {
        Ok(KeyEvent::Digit(Digit::new(d)?))
    }

    #[inline]
    #[must_use]
    pub fn is_digit(&self) -> bool {
        matches!(self, KeyEvent::Digit(_))
    }

    #[inline]
    #[must_use]
    pub fn as_digit(&self) -> Option<Digit> {
        match self {
            KeyEvent::Digit(d) => Some(*d),
            KeyEvent::Delete => None,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeyEvent::Digit(d) => write!(f, "Digit({d})"),
            KeyEvent::Delete => write!(f, "Delete"),
        }
    }
}
