//! Integration tests for the async runner.
//!
//! The tokio clock is paused, so sleeps advance virtual time instantly and
//! the 200 ms error window can be tested deterministically.

use std::time::Duration;

use pinpad_core::KeyEvent;
use pinpad_hardware::mock::{MockFeedback, MockKeypad, MockKeypadHandle};
use pinpad_hardware::{HapticKind, ShakeTarget};
use pinpad_widget::{ListenerEvent, PinLockView, PinState, RecordingHandle, RecordingListener, run};

fn rejecting_view() -> (PinLockView, RecordingHandle) {
    let (listener, events) = RecordingListener::new(false);
    let view = PinLockView::builder()
        .with_listener(listener)
        .build()
        .unwrap();
    (view, events)
}

async fn enter_wrong_pin(handle: &MockKeypadHandle) {
    handle.send_digits(&[1, 2, 3, 4]).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_runner_stops_on_disconnect() {
    let (mut keypad, handle) = MockKeypad::new();
    let (listener, events) = RecordingListener::new(true);
    let mut view = PinLockView::builder()
        .with_listener(listener)
        .build()
        .unwrap();

    handle.send_digits(&[7, 7]).await.unwrap();
    handle.send_delete().await.unwrap();
    drop(handle);

    run(&mut view, &mut keypad).await.unwrap();

    assert_eq!(view.state(), PinState::Partial(1));
    assert_eq!(
        events.events(),
        vec![
            ListenerEvent::PinChange(1, "7".into()),
            ListenerEvent::PinChange(2, "77".into()),
            ListenerEvent::PinChange(1, "7".into()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_deferred_reset_fires_after_error_window() {
    let (mut keypad, handle) = MockKeypad::new();
    let (mut view, events) = rejecting_view();

    let sender = tokio::spawn(async move {
        enter_wrong_pin(&handle).await;
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.send_input(KeyEvent::digit(5).unwrap()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;
    });

    run(&mut view, &mut keypad).await.unwrap();
    sender.await.unwrap();

    // The digit typed during the shake is wiped by the deferred reset
    assert!(view.pin().is_empty());
    assert_eq!(view.next_deadline(), None);
    assert_eq!(
        events.events().last(),
        Some(&ListenerEvent::PinChange(1, "5".into()))
    );
}

#[tokio::test(start_paused = true)]
async fn test_deferred_reset_pending_before_window_ends() {
    let (mut keypad, handle) = MockKeypad::new();
    let (mut view, _events) = rejecting_view();

    let sender = tokio::spawn(async move {
        enter_wrong_pin(&handle).await;
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.send_input(KeyEvent::digit(5).unwrap()).await.unwrap();
    });

    run(&mut view, &mut keypad).await.unwrap();
    sender.await.unwrap();

    assert_eq!(view.pin().as_str(), "5");
    assert_eq!(view.pending_actions(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_runner_drives_feedback() {
    let (mut keypad, handle) = MockKeypad::new();
    let (device, feedback) = MockFeedback::new();
    let (mut view, _events) = rejecting_view();
    view.set_feedback(device);

    enter_wrong_pin(&handle).await;
    drop(handle);
    run(&mut view, &mut keypad).await.unwrap();

    assert_eq!(feedback.haptics().last(), Some(&HapticKind::LongPress));
    assert_eq!(
        feedback.shakes(),
        vec![ShakeTarget::Indicator, ShakeTarget::Keypad]
    );
}

#[tokio::test(start_paused = true)]
async fn test_run_with_reports_every_change() {
    let (mut keypad, handle) = MockKeypad::new();
    let (mut view, _events) = rejecting_view();

    let sender = tokio::spawn(async move {
        enter_wrong_pin(&handle).await;
        tokio::time::sleep(Duration::from_millis(500)).await;
    });

    let mut lengths = Vec::new();
    pinpad_widget::run_with(&mut view, &mut keypad, |v| lengths.push(v.pin().len()))
        .await
        .unwrap();
    sender.await.unwrap();

    // Four keys, then the deferred reset
    assert_eq!(lengths, vec![1, 2, 3, 0, 0]);
}
