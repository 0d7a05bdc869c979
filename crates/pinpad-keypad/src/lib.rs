//! Keypad layout and button grid for the PIN pad.
//!
//! [`KeyLayout`] holds the order of the ten digit keys and
//! [`KeypadAdapter`] maps that order onto the 12-cell grid, turning cell
//! presses into [`KeyEvent`](pinpad_core::KeyEvent)s. Neither owns any PIN
//! state.
//!
//! # Examples
//!
//! ```
//! use pinpad_core::KeyEvent;
//! use pinpad_keypad::{Cell, KeyLayout, KeypadAdapter, KeypadOptions};
//!
//! let mut adapter = KeypadAdapter::new(KeyLayout::default(), KeypadOptions::default());
//! assert_eq!(adapter.press(0).unwrap(), Some(KeyEvent::digit(1).unwrap()));
//! assert_eq!(adapter.press(11).unwrap(), Some(KeyEvent::Delete));
//!
//! adapter.set_key_layout(KeyLayout::new(&[0, 9, 8, 7, 6, 5, 4, 3, 2, 1]).unwrap());
//! assert_eq!(adapter.cell(0).unwrap(), Cell::Digit(pinpad_core::Digit::new(0).unwrap()));
//! ```

pub mod adapter;
pub mod layout;

pub use adapter::{Cell, KeypadAdapter, KeypadOptions};
pub use layout::KeyLayout;
