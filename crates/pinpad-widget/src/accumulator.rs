//! PIN accumulation state machine.
//!
//! [`PinAccumulator`] owns the digits entered so far and decides what each
//! key press means. It knows nothing about dots, haptics or animations; the
//! host widget reads the returned [`Transition`] and drives those.
//!
//! # State Machine
//!
//! ```text
//!            digit               digit (len + 1 == N)
//!   Empty ----------> Partial(k) --------------------> Full(N)
//!     ^                  |  ^                             |
//!     |     delete (k=1) |  | delete                      | accepted / rejected
//!     +------------------+  +-----------------------------+----> Empty
//! ```
//!
//! A digit pressed on a full PIN either starts a new PIN (delete key hidden)
//! or repeats the completion check (delete key visible).
//!
//! # Examples
//!
//! ```
//! use pinpad_core::{Digit, PinLength};
//! use pinpad_widget::{InputOutcome, PinAccumulator, PinState};
//!
//! let mut acc = PinAccumulator::new(PinLength::new(2).unwrap(), true);
//!
//! let t = acc.push(Digit::new(4).unwrap());
//! assert_eq!(t.to, PinState::Partial(1));
//! assert_eq!(t.outcome, InputOutcome::Changed);
//!
//! // Without a listener nobody checks the PIN, so it stays full
//! let t = acc.push(Digit::new(2).unwrap());
//! assert_eq!(t.to, PinState::Full(2));
//! assert_eq!(acc.pin().as_str(), "42");
//! ```

use std::fmt;

use pinpad_core::{Digit, Pin, PinLength};
use tracing::{debug, info};

use crate::listener::PinLockListener;

/// Position of the accumulator relative to the configured length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinState {
    /// No digits entered.
    Empty,
    /// Some digits entered, fewer than the configured length.
    Partial(usize),
    /// The configured number of digits entered.
    Full(usize),
}

impl PinState {
    fn of(len: usize, pin_length: PinLength) -> Self {
        match len {
            0 => PinState::Empty,
            n if n >= pin_length.get() => PinState::Full(n),
            n => PinState::Partial(n),
        }
    }

    /// Number of digits this state holds.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            PinState::Empty => 0,
            PinState::Partial(n) | PinState::Full(n) => *n,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, PinState::Empty)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        matches!(self, PinState::Full(_))
    }
}

impl fmt::Display for PinState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinState::Empty => write!(f, "Empty"),
            PinState::Partial(n) => write!(f, "Partial({n})"),
            PinState::Full(n) => write!(f, "Full({n})"),
        }
    }
}

/// What a key press amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputOutcome {
    /// The PIN grew or shrank and is neither empty nor complete.
    Changed,
    /// The PIN is empty after the press.
    Emptied,
    /// The PIN reached full length and the listener accepted it.
    Accepted,
    /// The PIN reached full length and the listener rejected it.
    Rejected,
    /// The PIN reached full length with no listener to check it.
    Filled,
    /// A digit on a full PIN with the delete key hidden started a new PIN.
    Restarted,
    /// A digit on a full PIN with the delete key visible re-ran the
    /// completion check. The verdict is ignored.
    Repeated,
    /// The PIN was cleared without notifying the listener.
    Reset,
}

/// Record of a single accumulator step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State before the press.
    pub from: PinState,

    /// State after the press, including any reset it caused.
    pub to: PinState,

    /// What the press amounted to.
    pub outcome: InputOutcome,
}

impl Transition {
    pub fn new(from: PinState, to: PinState, outcome: InputOutcome) -> Self {
        Self { from, to, outcome }
    }
}

/// Holds the entered digits and turns key presses into listener calls.
///
/// # Thread Safety
///
/// Not thread-safe. The widget drives it from a single task.
pub struct PinAccumulator {
    pin: Pin,
    pin_length: PinLength,
    show_delete: bool,
    listener: Option<Box<dyn PinLockListener>>,
}

impl PinAccumulator {
    /// Create an empty accumulator without a listener.
    pub fn new(pin_length: PinLength, show_delete: bool) -> Self {
        Self {
            pin: Pin::new(),
            pin_length,
            show_delete,
            listener: None,
        }
    }

    /// The digits entered so far.
    #[must_use]
    pub fn pin(&self) -> &Pin {
        &self.pin
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pin.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pin.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> PinState {
        PinState::of(self.pin.len(), self.pin_length)
    }

    #[must_use]
    pub fn pin_length(&self) -> PinLength {
        self.pin_length
    }

    /// Change the length that completes a PIN. Any entered digits are
    /// discarded without notifying the listener.
    pub fn set_pin_length(&mut self, pin_length: PinLength) {
        self.pin_length = pin_length;
        self.pin.clear();
    }

    #[must_use]
    pub fn show_delete(&self) -> bool {
        self.show_delete
    }

    pub fn set_show_delete(&mut self, show: bool) {
        self.show_delete = show;
    }

    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Attach or detach the listener, returning the previous one.
    pub fn set_listener(
        &mut self,
        listener: Option<Box<dyn PinLockListener>>,
    ) -> Option<Box<dyn PinLockListener>> {
        std::mem::replace(&mut self.listener, listener)
    }

    /// Handle a digit press.
    pub fn push(&mut self, digit: Digit) -> Transition {
        let from = self.state();

        let outcome = if self.pin.len() < self.pin_length.get() {
            self.pin.push(digit);
            if self.pin.len() == self.pin_length.get() {
                self.complete()
            } else {
                self.notify_change();
                InputOutcome::Changed
            }
        } else if !self.show_delete {
            self.pin.clear();
            self.pin.push(digit);
            self.notify_change();
            InputOutcome::Restarted
        } else {
            if let Some(listener) = self.listener.as_mut() {
                let accepted = listener.on_complete(self.pin.as_str());
                debug!(accepted, "Completion repeated on full PIN; verdict ignored");
            }
            InputOutcome::Repeated
        };

        self.finish(from, outcome)
    }

    /// Handle a delete press.
    pub fn delete(&mut self) -> Transition {
        let from = self.state();

        self.pin.pop();
        let outcome = if self.pin.is_empty() {
            if let Some(listener) = self.listener.as_mut() {
                listener.on_empty();
            }
            InputOutcome::Emptied
        } else {
            self.notify_change();
            InputOutcome::Changed
        };

        self.finish(from, outcome)
    }

    /// Clear the PIN without notifying the listener.
    pub fn reset(&mut self) -> Transition {
        let from = self.state();
        self.pin.clear();
        self.finish(from, InputOutcome::Reset)
    }

    fn complete(&mut self) -> InputOutcome {
        let Some(listener) = self.listener.as_mut() else {
            return InputOutcome::Filled;
        };

        if listener.on_complete(self.pin.as_str()) {
            info!(length = self.pin.len(), "PIN accepted");
            self.pin.clear();
            InputOutcome::Accepted
        } else {
            info!(length = self.pin.len(), "PIN rejected");
            self.pin.clear();
            InputOutcome::Rejected
        }
    }

    fn notify_change(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_pin_change(self.pin.len(), self.pin.as_str());
        }
    }

    fn finish(&self, from: PinState, outcome: InputOutcome) -> Transition {
        let transition = Transition::new(from, self.state(), outcome);
        debug!(
            from = %transition.from,
            to = %transition.to,
            outcome = ?transition.outcome,
            "PIN transition"
        );
        transition
    }
}

impl fmt::Debug for PinAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinAccumulator")
            .field("pin", &self.pin)
            .field("pin_length", &self.pin_length)
            .field("show_delete", &self.show_delete)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listener::{ListenerEvent, RecordingHandle, RecordingListener};
    use rstest::rstest;

    fn digit(d: u8) -> Digit {
        Digit::new(d).unwrap()
    }

    fn accumulator(len: usize, show_delete: bool, accept: bool) -> (PinAccumulator, RecordingHandle) {
        let mut acc = PinAccumulator::new(PinLength::new(len).unwrap(), show_delete);
        let (listener, handle) = RecordingListener::new(accept);
        acc.set_listener(Some(Box::new(listener)));
        (acc, handle)
    }

    fn change(len: usize, pin: &str) -> ListenerEvent {
        ListenerEvent::PinChange(len, pin.to_string())
    }

    #[test]
    fn test_new_accumulator_is_empty() {
        let acc = PinAccumulator::new(PinLength::default(), true);
        assert_eq!(acc.state(), PinState::Empty);
        assert!(acc.is_empty());
        assert!(!acc.has_listener());
    }

    #[test]
    fn test_partial_entry_reports_cumulative_pin() {
        let (mut acc, handle) = accumulator(4, true, true);

        for d in [1, 2, 3] {
            let t = acc.push(digit(d));
            assert_eq!(t.outcome, InputOutcome::Changed);
        }

        assert_eq!(acc.state(), PinState::Partial(3));
        assert_eq!(
            handle.events(),
            vec![change(1, "1"), change(2, "12"), change(3, "123")]
        );
    }

    #[test]
    fn test_accepted_completion_resets_silently() {
        let (mut acc, handle) = accumulator(4, true, true);
        for d in [1, 2, 3] {
            acc.push(digit(d));
        }
        handle.clear();

        let t = acc.push(digit(4));

        assert_eq!(t, Transition::new(PinState::Partial(3), PinState::Empty, InputOutcome::Accepted));
        assert_eq!(handle.events(), vec![ListenerEvent::Complete("1234".to_string())]);
    }

    #[test]
    fn test_rejected_completion_resets() {
        let (mut acc, handle) = accumulator(4, true, false);

        let outcomes: Vec<_> = [1, 2, 3, 4].iter().map(|&d| acc.push(digit(d)).outcome).collect();

        assert_eq!(outcomes.last(), Some(&InputOutcome::Rejected));
        assert!(acc.is_empty());
        assert_eq!(
            handle.events(),
            vec![
                change(1, "1"),
                change(2, "12"),
                change(3, "123"),
                ListenerEvent::Complete("1234".to_string()),
            ]
        );
    }

    #[test]
    fn test_full_without_listener_stays_full() {
        let mut acc = PinAccumulator::new(PinLength::new(2).unwrap(), true);
        acc.push(digit(1));
        let t = acc.push(digit(2));

        assert_eq!(t.outcome, InputOutcome::Filled);
        assert_eq!(acc.state(), PinState::Full(2));

        let t = acc.push(digit(3));
        assert_eq!(t.outcome, InputOutcome::Repeated);
        assert_eq!(acc.pin().as_str(), "12");
    }

    #[test]
    fn test_digit_on_full_with_hidden_delete_restarts() {
        let mut acc = PinAccumulator::new(PinLength::new(2).unwrap(), false);
        acc.push(digit(1));
        acc.push(digit(2));

        let (listener, handle) = RecordingListener::new(true);
        acc.set_listener(Some(Box::new(listener)));

        let t = acc.push(digit(7));

        assert_eq!(t, Transition::new(PinState::Full(2), PinState::Partial(1), InputOutcome::Restarted));
        assert_eq!(acc.pin().as_str(), "7");
        assert_eq!(handle.events(), vec![change(1, "7")]);
    }

    #[test]
    fn test_digit_on_full_with_visible_delete_repeats_completion() {
        let mut acc = PinAccumulator::new(PinLength::new(2).unwrap(), true);
        acc.push(digit(5));
        acc.push(digit(6));

        let (listener, handle) = RecordingListener::new(true);
        acc.set_listener(Some(Box::new(listener)));

        let t = acc.push(digit(7));

        // The verdict of a repeated check does not reset the PIN
        assert_eq!(t.outcome, InputOutcome::Repeated);
        assert_eq!(t.to, PinState::Full(2));
        assert_eq!(acc.pin().as_str(), "56");
        assert_eq!(handle.events(), vec![ListenerEvent::Complete("56".to_string())]);
    }

    #[rstest]
    #[case(&[], InputOutcome::Emptied, PinState::Empty)]
    #[case(&[3], InputOutcome::Emptied, PinState::Empty)]
    #[case(&[3, 4], InputOutcome::Changed, PinState::Partial(1))]
    fn test_delete(#[case] entered: &[u8], #[case] outcome: InputOutcome, #[case] to: PinState) {
        let (mut acc, handle) = accumulator(4, true, true);
        for &d in entered {
            acc.push(digit(d));
        }
        handle.clear();

        let t = acc.delete();

        assert_eq!(t.outcome, outcome);
        assert_eq!(t.to, to);
        let expected = match outcome {
            InputOutcome::Emptied => ListenerEvent::Empty,
            _ => change(1, "3"),
        };
        assert_eq!(handle.events(), vec![expected]);
    }

    #[test]
    fn test_reset_is_silent() {
        let (mut acc, handle) = accumulator(4, true, true);
        acc.push(digit(9));
        handle.clear();

        let t = acc.reset();

        assert_eq!(t, Transition::new(PinState::Partial(1), PinState::Empty, InputOutcome::Reset));
        assert!(handle.events().is_empty());
    }

    #[test]
    fn test_single_digit_pin_completes_immediately() {
        let (mut acc, handle) = accumulator(1, true, true);
        let t = acc.push(digit(8));

        assert_eq!(t.outcome, InputOutcome::Accepted);
        assert_eq!(handle.events(), vec![ListenerEvent::Complete("8".to_string())]);
    }

    #[test]
    fn test_set_pin_length_discards_digits() {
        let (mut acc, handle) = accumulator(4, true, true);
        acc.push(digit(1));
        acc.push(digit(2));
        handle.clear();

        acc.set_pin_length(PinLength::new(6).unwrap());

        assert!(acc.is_empty());
        assert_eq!(acc.pin_length().get(), 6);
        assert!(handle.events().is_empty());
    }

    #[test]
    fn test_debug_hides_digits() {
        let mut acc = PinAccumulator::new(PinLength::default(), true);
        acc.push(digit(7));
        acc.push(digit(3));

        let debug = format!("{acc:?}");
        assert!(debug.contains("Pin(len=2)"));
        assert!(!debug.contains("73"));
    }

    #[test]
    fn test_state_display() {
        assert_eq!(PinState::Empty.to_string(), "Empty");
        assert_eq!(PinState::Partial(2).to_string(), "Partial(2)");
        assert_eq!(PinState::Full(4).to_string(), "Full(4)");
        assert_eq!(PinState::Full(4).len(), 4);
        assert!(PinState::Full(4).is_full());
    }
}
