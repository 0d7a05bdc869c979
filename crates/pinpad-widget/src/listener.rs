//! Outbound notifications of the PIN pad.

use std::sync::{Arc, Mutex, MutexGuard};

/// Receives the result of every key press.
///
/// Exactly one method is called per digit or delete press, except when a
/// digit is pressed on a full PIN with the delete key visible, which calls
/// [`on_complete`](PinLockListener::on_complete) again.
pub trait PinLockListener: Send {
    /// The PIN reached its configured length.
    ///
    /// Return `true` to accept it. Returning `false` rejects the PIN and
    /// plays the error feedback.
    fn on_complete(&mut self, pin: &str) -> bool;

    /// The PIN became empty, or delete was pressed on an empty PIN.
    fn on_empty(&mut self);

    /// The PIN changed and is neither empty nor complete.
    fn on_pin_change(&mut self, pin_length: usize, intermediate_pin: &str);
}

/// One recorded listener call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerEvent {
    Complete(String),
    Empty,
    PinChange(usize, String),
}

/// Listener that records every call and answers completions with a fixed
/// verdict.
///
/// # Examples
///
/// ```
/// use pinpad_widget::{ListenerEvent, PinLockListener, RecordingListener};
///
/// let (mut listener, handle) = RecordingListener::new(false);
/// listener.on_pin_change(1, "7");
/// assert!(!listener.on_complete("7"));
///
/// assert_eq!(
///     handle.events(),
///     vec![
///         ListenerEvent::PinChange(1, "7".to_string()),
///         ListenerEvent::Complete("7".to_string()),
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct RecordingListener {
    state: Arc<Mutex<Recording>>,
}

#[derive(Debug)]
struct Recording {
    events: Vec<ListenerEvent>,
    accept: bool,
}

impl RecordingListener {
    /// Create a listener answering `accept` to every completion, and the
    /// handle used to inspect it.
    pub fn new(accept: bool) -> (Self, RecordingHandle) {
        let state = Arc::new(Mutex::new(Recording {
            events: Vec::new(),
            accept,
        }));
        let handle = RecordingHandle {
            state: Arc::clone(&state),
        };
        (Self { state }, handle)
    }

    fn state(&self) -> MutexGuard<'_, Recording> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PinLockListener for RecordingListener {
    fn on_complete(&mut self, pin: &str) -> bool {
        let mut state = self.state();
        state.events.push(ListenerEvent::Complete(pin.to_string()));
        state.accept
    }

    fn on_empty(&mut self) {
        self.state().events.push(ListenerEvent::Empty);
    }

    fn on_pin_change(&mut self, pin_length: usize, intermediate_pin: &str) {
        self.state()
            .events
            .push(ListenerEvent::PinChange(pin_length, intermediate_pin.to_string()));
    }
}

/// Handle for inspecting and steering a [`RecordingListener`].
#[derive(Debug, Clone)]
pub struct RecordingHandle {
    state: Arc<Mutex<Recording>>,
}

impl RecordingHandle {
    fn state(&self) -> MutexGuard<'_, Recording> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// All calls recorded so far, oldest first.
    pub fn events(&self) -> Vec<ListenerEvent> {
        self.state().events.clone()
    }

    /// Forget every recorded call.
    pub fn clear(&self) {
        self.state().events.clear();
    }

    /// Change the verdict returned by later completions.
    pub fn set_accept(&self, accept: bool) {
        self.state().accept = accept;
    }
}
