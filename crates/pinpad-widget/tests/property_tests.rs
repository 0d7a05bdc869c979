//! Property-based tests for the PIN lock widget.
//!
//! These tests generate random PIN lengths and key sequences and check that
//! the accumulator, the indicator and the listener stay consistent.

use proptest::prelude::*;

use pinpad_core::{IndicatorType, KeyEvent, PinLength};
use pinpad_widget::{InputOutcome, ListenerEvent, PinLockView, RecordingHandle, RecordingListener};

/// Strategy for generating PIN lengths (1-8).
fn pin_length() -> impl Strategy<Value = usize> {
    1usize..=8
}

/// Strategy for generating a single key press, biased towards digits.
fn key_event() -> impl Strategy<Value = KeyEvent> {
    prop_oneof![
        4 => (0u8..=9).prop_map(|d| KeyEvent::digit(d).unwrap()),
        1 => Just(KeyEvent::Delete),
    ]
}

fn indicator_type() -> impl Strategy<Value = IndicatorType> {
    prop_oneof![
        Just(IndicatorType::Fixed),
        Just(IndicatorType::Fill),
        Just(IndicatorType::FillWithAnimation),
    ]
}

fn view(
    len: usize,
    show_delete: bool,
    accept: bool,
    indicator: IndicatorType,
) -> (PinLockView, RecordingHandle) {
    let (listener, events) = RecordingListener::new(accept);
    let view = PinLockView::builder()
        .with_pin_length(PinLength::new(len).unwrap())
        .with_show_delete_button(show_delete)
        .with_indicator_type(indicator)
        .with_listener(listener)
        .build()
        .unwrap();
    (view, events)
}

proptest! {
    /// Property: every digit of a partial PIN reports the cumulative string.
    #[test]
    fn prop_partial_entry_reports_prefixes(
        len in 2usize..=8,
        digits in prop::collection::vec(0u8..=9, 1..8),
    ) {
        let digits: Vec<u8> = digits.into_iter().take(len - 1).collect();
        let (mut view, events) = view(len, true, true, IndicatorType::Fixed);

        for &d in &digits {
            view.handle_key(KeyEvent::digit(d).unwrap());
        }

        let expected: Vec<ListenerEvent> = (1..=digits.len())
            .map(|n| {
                let prefix: String = digits[..n].iter().map(|d| char::from(b'0' + d)).collect();
                ListenerEvent::PinChange(n, prefix)
            })
            .collect();
        prop_assert_eq!(events.events(), expected);
    }

    /// Property: the digit completing the PIN triggers exactly one
    /// completion check with the full string.
    #[test]
    fn prop_completion_checked_once(
        digits in prop::collection::vec(0u8..=9, 1..=8),
        accept in any::<bool>(),
    ) {
        let (mut view, events) = view(digits.len(), true, accept, IndicatorType::Fixed);

        for &d in &digits {
            view.handle_key(KeyEvent::digit(d).unwrap());
        }

        let full: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let completions: Vec<_> = events
            .events()
            .into_iter()
            .filter(|e| matches!(e, ListenerEvent::Complete(_)))
            .collect();
        prop_assert_eq!(completions, vec![ListenerEvent::Complete(full)]);
        prop_assert!(view.pin().is_empty());
        prop_assert_eq!(view.pending_actions(), usize::from(!accept));
    }

    /// Property: the length never exceeds the configured length and the
    /// indicator always mirrors it.
    #[test]
    fn prop_indicator_mirrors_length(
        len in pin_length(),
        show_delete in any::<bool>(),
        accept in any::<bool>(),
        indicator in indicator_type(),
        keys in prop::collection::vec(key_event(), 0..40),
    ) {
        let (mut view, _events) = view(len, show_delete, accept, indicator);

        for key in keys {
            view.handle_key(key);
            let entered = view.pin().len();
            prop_assert!(entered <= len);
            prop_assert_eq!(view.indicator().map(|i| i.filled_count()), Some(entered));
        }
    }

    /// Property: each digit or delete press produces exactly one listener
    /// call.
    #[test]
    fn prop_one_notification_per_press(
        len in pin_length(),
        show_delete in any::<bool>(),
        accept in any::<bool>(),
        keys in prop::collection::vec(key_event(), 0..40),
    ) {
        let (mut view, events) = view(len, show_delete, accept, IndicatorType::Fixed);

        for key in keys {
            let before = events.events().len();
            let transition = view.handle_key(key);
            prop_assert_eq!(events.events().len(), before + 1, "outcome {:?}", transition.outcome);
        }
    }

    /// Property: with the delete key hidden, a digit on a full PIN starts a
    /// new single-digit PIN.
    #[test]
    fn prop_hidden_delete_restart(
        len in pin_length(),
        digit in 0u8..=9,
    ) {
        let (mut view, events) = view(len, false, false, IndicatorType::Fill);
        view.remove_listener();
        for _ in 0..len {
            view.handle_key(KeyEvent::digit(1).unwrap());
        }
        let (listener, events_after) = RecordingListener::new(true);
        view.set_listener(listener);

        let transition = view.handle_key(KeyEvent::digit(digit).unwrap());

        prop_assert_eq!(transition.outcome, InputOutcome::Restarted);
        prop_assert_eq!(view.pin().len(), 1);
        prop_assert_eq!(
            events_after.events(),
            vec![ListenerEvent::PinChange(1, char::from(b'0' + digit).to_string())]
        );
        prop_assert!(events.events().is_empty());
    }
}
