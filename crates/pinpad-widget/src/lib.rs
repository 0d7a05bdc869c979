//! PIN lock widget: the state machine, dot indicator and host view.
//!
//! This crate contains the platform-independent behaviour of a PIN entry
//! keypad. Everything with a visible or tactile side effect goes through the
//! capability traits of `pinpad-hardware`.
//!
//! # Examples
//!
//! ```
//! use pinpad_core::Digit;
//! use pinpad_widget::{ListenerEvent, PinLockView, RecordingListener};
//!
//! let (listener, events) = RecordingListener::new(true);
//! let mut view = PinLockView::builder().with_listener(listener).build().unwrap();
//!
//! for d in [2, 0, 2, 4] {
//!     view.press_digit(Digit::new(d).unwrap());
//! }
//!
//! assert_eq!(events.events().last(), Some(&ListenerEvent::Complete("2024".into())));
//! assert!(view.pin().is_empty());
//! ```

pub mod accumulator;
pub mod display;
pub mod indicator;
pub mod listener;
pub mod runner;
pub mod view;

pub use accumulator::{InputOutcome, PinAccumulator, PinState, Transition};
pub use display::{Alignment, align_text, render, render_indicator, render_keypad, truncate_text};
pub use indicator::{Dot, DotIndicator};
pub use listener::{ListenerEvent, PinLockListener, RecordingHandle, RecordingListener};
pub use runner::{run, run_with};
pub use view::{DeferredAction, PinLockView, PinLockViewBuilder};
