//! The PIN lock widget.
//!
//! [`PinLockView`] wires the keypad grid, the accumulator and the dot
//! indicator together. Key presses go in through [`press_cell`],
//! [`press_digit`], [`press_delete`] or [`handle_key_at`]; results come out
//! through the attached [`PinLockListener`], the returned [`Transition`] and
//! the attached [`FeedbackDevice`].
//!
//! # Deferred Actions
//!
//! A rejected PIN schedules a second reset for when the error shake ends.
//! Nothing runs it automatically: call [`update`] (or [`update_at`]) from the
//! event loop, the way [`run`](crate::run) does.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use pinpad_core::KeyEvent;
//! use pinpad_widget::{PinLockView, RecordingListener};
//!
//! let (listener, _events) = RecordingListener::new(false);
//! let mut view = PinLockView::builder()
//!     .with_listener(listener)
//!     .build()
//!     .unwrap();
//!
//! let start = Instant::now();
//! for d in [1, 2, 3, 4] {
//!     view.handle_key_at(KeyEvent::digit(d).unwrap(), start);
//! }
//!
//! assert!(view.pin().is_empty());
//! assert_eq!(view.next_deadline(), Some(start + Duration::from_millis(200)));
//! assert!(view.update_at(start + Duration::from_millis(200)));
//! assert_eq!(view.next_deadline(), None);
//! ```
//!
//! [`press_cell`]: PinLockView::press_cell
//! [`press_digit`]: PinLockView::press_digit
//! [`press_delete`]: PinLockView::press_delete
//! [`handle_key_at`]: PinLockView::handle_key_at
//! [`update`]: PinLockView::update
//! [`update_at`]: PinLockView::update_at

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

use pinpad_core::{
    Digit, IndicatorType, KeyEvent, Pin, PinLength, PinPadConfig, Result,
    constants::ERROR_FEEDBACK_DURATION_MS,
};
use pinpad_hardware::{DeviceInfo, FeedbackDevice, HapticKind, ShakeAnimation, ShakeTarget};
use pinpad_keypad::{KeyLayout, KeypadAdapter, KeypadOptions};
use tracing::{debug, warn};

use crate::accumulator::{InputOutcome, PinAccumulator, PinState, Transition};
use crate::indicator::DotIndicator;
use crate::listener::PinLockListener;

/// Work scheduled to run later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Clear the PIN and the indicator once the error shake has ended.
    ResetAfterError,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: Instant,
    action: DeferredAction,
}

/// Keypad, indicator and accumulator composed into one widget.
///
/// # Thread Safety
///
/// This struct is not thread-safe by design. Drive it from one task, or
/// protect it with `tokio::sync::Mutex`.
pub struct PinLockView {
    accumulator: PinAccumulator,
    adapter: KeypadAdapter,
    indicator: Option<DotIndicator>,
    feedback: Option<Box<dyn FeedbackDevice>>,
    vibrate: bool,
    error_window: Duration,
    deferred: VecDeque<Scheduled>,
}

impl PinLockView {
    /// A widget with the default configuration, an indicator, and no
    /// listener or feedback device.
    pub fn new() -> Self {
        Self::from_parts(
            &PinPadConfig::default(),
            KeyLayout::default(),
            true,
            None,
            None,
        )
    }

    /// Create a builder for constructing a widget with custom configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinpad_core::PinLength;
    /// use pinpad_widget::PinLockView;
    ///
    /// let view = PinLockView::builder()
    ///     .with_pin_length(PinLength::new(6).unwrap())
    ///     .with_show_delete_button(false)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(view.pin_length().get(), 6);
    /// assert!(!view.is_show_delete_button());
    /// ```
    pub fn builder() -> PinLockViewBuilder {
        PinLockViewBuilder::default()
    }

    fn from_parts(
        config: &PinPadConfig,
        layout: KeyLayout,
        with_indicator: bool,
        listener: Option<Box<dyn PinLockListener>>,
        feedback: Option<Box<dyn FeedbackDevice>>,
    ) -> Self {
        let mut accumulator = PinAccumulator::new(config.pin_length, config.show_delete_button);
        accumulator.set_listener(listener);

        let options = KeypadOptions {
            show_delete_button: config.show_delete_button,
            show_button_press_animation: config.show_button_press_animation,
        };

        Self {
            accumulator,
            adapter: KeypadAdapter::new(layout, options),
            indicator: with_indicator
                .then(|| DotIndicator::new(config.pin_length, config.indicator_type)),
            feedback,
            vibrate: config.vibrate,
            error_window: Duration::from_millis(ERROR_FEEDBACK_DURATION_MS),
            deferred: VecDeque::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------

    /// Handle a click on grid cell `cell` (0-11).
    ///
    /// Returns `Ok(None)` when the cell is inert: the blank cell, or the
    /// delete key while it is hidden.
    ///
    /// # Errors
    /// Returns `Error::InvalidCell` if `cell` is not on the grid.
    pub fn press_cell(&mut self, cell: usize) -> Result<Option<Transition>> {
        let event = self.adapter.press(cell)?;
        Ok(event.map(|e| self.handle_key(e)))
    }

    /// Handle a digit key.
    pub fn press_digit(&mut self, digit: Digit) -> Transition {
        self.handle_key(KeyEvent::Digit(digit))
    }

    /// Handle the delete key.
    pub fn press_delete(&mut self) -> Transition {
        self.handle_key(KeyEvent::Delete)
    }

    /// Handle a key event at the current time.
    pub fn handle_key(&mut self, event: KeyEvent) -> Transition {
        self.handle_key_at(event, Instant::now())
    }

    /// Handle a key event at `now`.
    ///
    /// `now` only decides when the reset after a rejection falls due.
    pub fn handle_key_at(&mut self, event: KeyEvent, now: Instant) -> Transition {
        let transition = match event {
            KeyEvent::Digit(digit) => {
                self.haptic(HapticKind::KeyboardTap);
                self.accumulator.push(digit)
            }
            KeyEvent::Delete => {
                self.haptic(HapticKind::VirtualKey);
                self.accumulator.delete()
            }
        };
        self.sync_indicator();

        match transition.outcome {
            InputOutcome::Accepted => self.haptic(HapticKind::ContextClick),
            InputOutcome::Rejected => {
                self.haptic(HapticKind::LongPress);
                self.error_at(now);
            }
            _ => {}
        }

        transition
    }

    /// Clear the PIN and the indicator without notifying the listener.
    pub fn reset(&mut self) -> Transition {
        let transition = self.accumulator.reset();
        self.sync_indicator();
        transition
    }

    /// Play the error feedback at the current time.
    pub fn error(&mut self) {
        self.error_at(Instant::now());
    }

    /// Shake the indicator and the keypad, clear the PIN, and schedule a
    /// second reset for when the shake ends.
    pub fn error_at(&mut self, now: Instant) {
        if let Some(feedback) = self.feedback.as_deref_mut() {
            if let Some(indicator) = &self.indicator
                && let Err(e) = indicator.error(feedback)
            {
                warn!(error = %e, "Indicator shake failed");
            }
            if let Err(e) = feedback.trigger_shake(ShakeTarget::Keypad, &ShakeAnimation::error()) {
                warn!(error = %e, "Keypad shake failed");
            }
        }

        self.reset();
        self.schedule(now + self.error_window, DeferredAction::ResetAfterError);
    }

    // ------------------------------------------------------------------------
    // Deferred actions
    // ------------------------------------------------------------------------

    /// Run deferred actions that are due now.
    pub fn update(&mut self) -> bool {
        self.update_at(Instant::now())
    }

    /// Run every deferred action due at or before `now`.
    ///
    /// Returns `true` if any action ran.
    pub fn update_at(&mut self, now: Instant) -> bool {
        let mut ran = false;
        while let Some(next) = self.deferred.front().copied()
            && next.due <= now
        {
            self.deferred.pop_front();
            self.run_deferred(next.action);
            ran = true;
        }
        ran
    }

    /// When the earliest deferred action falls due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deferred.front().map(|s| s.due)
    }

    /// Number of deferred actions waiting to run.
    #[must_use]
    pub fn pending_actions(&self) -> usize {
        self.deferred.len()
    }

    fn schedule(&mut self, due: Instant, action: DeferredAction) {
        let position = self.deferred.partition_point(|s| s.due <= due);
        self.deferred.insert(position, Scheduled { due, action });
        debug!(?action, pending = self.deferred.len(), "Deferred action scheduled");
    }

    fn run_deferred(&mut self, action: DeferredAction) {
        debug!(?action, "Running deferred action");
        match action {
            DeferredAction::ResetAfterError => {
                self.reset();
            }
        }
    }

    // ------------------------------------------------------------------------
    // Collaborators
    // ------------------------------------------------------------------------

    /// Attach a listener, replacing any previous one.
    pub fn set_listener<L: PinLockListener + 'static>(&mut self, listener: L) {
        self.accumulator.set_listener(Some(Box::new(listener)));
    }

    /// Detach the listener. Completed PINs then stay full.
    pub fn remove_listener(&mut self) -> Option<Box<dyn PinLockListener>> {
        self.accumulator.set_listener(None)
    }

    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.accumulator.has_listener()
    }

    /// Attach an indicator. It is resized to the PIN length and synced to the
    /// entered digits.
    pub fn attach_indicator(&mut self, mut indicator: DotIndicator) {
        if indicator.pin_length() != self.pin_length() {
            indicator.set_pin_length(self.pin_length());
        }
        indicator.update_dot(self.accumulator.len());
        self.indicator = Some(indicator);
    }

    pub fn detach_indicator(&mut self) -> Option<DotIndicator> {
        self.indicator.take()
    }

    #[must_use]
    pub fn is_indicator_attached(&self) -> bool {
        self.indicator.is_some()
    }

    #[must_use]
    pub fn indicator(&self) -> Option<&DotIndicator> {
        self.indicator.as_ref()
    }

    /// Attach a feedback device, replacing any previous one.
    pub fn set_feedback<F: FeedbackDevice + 'static>(&mut self, feedback: F) {
        debug!(device = %feedback.get_info(), "Feedback device attached");
        self.feedback = Some(Box::new(feedback));
    }

    /// Description of the attached feedback device.
    #[must_use]
    pub fn feedback_info(&self) -> Option<DeviceInfo> {
        self.feedback.as_deref().map(|device| device.get_info())
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn pin_length(&self) -> PinLength {
        self.accumulator.pin_length()
    }

    /// Change the PIN length. Entered digits are discarded and the indicator
    /// is rebuilt.
    pub fn set_pin_length(&mut self, pin_length: PinLength) {
        self.accumulator.set_pin_length(pin_length);
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.set_pin_length(pin_length);
        }
    }

    #[must_use]
    pub fn is_show_delete_button(&self) -> bool {
        self.accumulator.show_delete()
    }

    pub fn set_show_delete_button(&mut self, show: bool) {
        self.accumulator.set_show_delete(show);
        self.adapter.set_show_delete_button(show);
    }

    #[must_use]
    pub fn is_vibrate(&self) -> bool {
        self.vibrate
    }

    pub fn set_vibrate(&mut self, vibrate: bool) {
        self.vibrate = vibrate;
    }

    #[must_use]
    pub fn is_show_button_press_animation(&self) -> bool {
        self.adapter.options().show_button_press_animation
    }

    pub fn set_show_button_press_animation(&mut self, show: bool) {
        self.adapter.set_show_button_press_animation(show);
    }

    /// Indicator variant, or `None` without an indicator.
    #[must_use]
    pub fn indicator_type(&self) -> Option<IndicatorType> {
        self.indicator.as_ref().map(DotIndicator::indicator_type)
    }

    /// Change the indicator variant. The dots are rebuilt and resynced.
    pub fn set_indicator_type(&mut self, indicator_type: IndicatorType) {
        let len = self.accumulator.len();
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.set_indicator_type(indicator_type);
            indicator.update_dot(len);
        }
    }

    #[must_use]
    pub fn key_layout(&self) -> &KeyLayout {
        self.adapter.layout()
    }

    /// Re-key the keypad with a custom order.
    ///
    /// # Errors
    /// Returns `Error::InvalidKeyLayout` unless `keys` holds each digit 0-9
    /// exactly once. The current layout is kept on error.
    pub fn set_custom_key_set(&mut self, keys: &[u8]) -> Result<()> {
        let layout = KeyLayout::new(keys)?;
        self.adapter.set_key_layout(layout);
        Ok(())
    }

    /// Re-key the keypad with a random order.
    pub fn enable_layout_shuffling(&mut self) {
        self.adapter.set_key_layout(KeyLayout::random());
    }

    // ------------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------------

    /// The digits entered so far.
    #[must_use]
    pub fn pin(&self) -> &Pin {
        self.accumulator.pin()
    }

    #[must_use]
    pub fn state(&self) -> PinState {
        self.accumulator.state()
    }

    #[must_use]
    pub fn adapter(&self) -> &KeypadAdapter {
        &self.adapter
    }

    fn sync_indicator(&mut self) {
        let len = self.accumulator.len();
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.update_dot(len);
        }
    }

    fn haptic(&mut self, kind: HapticKind) {
        if !self.vibrate {
            return;
        }
        if let Some(feedback) = self.feedback.as_deref_mut()
            && let Err(e) = feedback.trigger_haptic(kind)
        {
            warn!(?kind, error = %e, "Haptic feedback failed");
        }
    }
}

impl Default for PinLockView {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PinLockView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinLockView")
            .field("accumulator", &self.accumulator)
            .field("adapter", &self.adapter)
            .field("indicator", &self.indicator)
            .field("has_feedback", &self.feedback.is_some())
            .field("vibrate", &self.vibrate)
            .field("pending_actions", &self.deferred.len())
            .finish()
    }
}

/// Builder for constructing `PinLockView` instances.
///
/// Options start from [`PinPadConfig::default`]; `with_config` replaces them
/// wholesale and the other `with_*` methods override single fields.
#[derive(Default)]
pub struct PinLockViewBuilder {
    config: PinPadConfig,
    layout: Option<KeyLayout>,
    without_indicator: bool,
    listener: Option<Box<dyn PinLockListener>>,
    feedback: Option<Box<dyn FeedbackDevice>>,
}

impl PinLockViewBuilder {
    pub fn with_config(mut self, config: PinPadConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_pin_length(mut self, pin_length: PinLength) -> Self {
        self.config.pin_length = pin_length;
        self
    }

    pub fn with_show_delete_button(mut self, show: bool) -> Self {
        self.config.show_delete_button = show;
        self
    }

    pub fn with_vibrate(mut self, vibrate: bool) -> Self {
        self.config.vibrate = vibrate;
        self
    }

    pub fn with_button_press_animation(mut self, show: bool) -> Self {
        self.config.show_button_press_animation = show;
        self
    }

    pub fn with_indicator_type(mut self, indicator_type: IndicatorType) -> Self {
        self.config.indicator_type = indicator_type;
        self
    }

    /// Use `layout` instead of the configured key order.
    pub fn with_key_layout(mut self, layout: KeyLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Build without a dot indicator.
    pub fn without_indicator(mut self) -> Self {
        self.without_indicator = true;
        self
    }

    pub fn with_listener<L: PinLockListener + 'static>(mut self, listener: L) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn with_feedback<F: FeedbackDevice + 'static>(mut self, feedback: F) -> Self {
        self.feedback = Some(Box::new(feedback));
        self
    }

    /// Build the widget.
    ///
    /// # Errors
    /// Returns `Error::InvalidKeyLayout` if the configuration names an
    /// invalid custom key order.
    pub fn build(self) -> Result<PinLockView> {
        let layout = match self.layout {
            Some(layout) => layout,
            None => KeyLayout::from_order(&self.config.key_order)?,
        };
        Ok(PinLockView::from_parts(
            &self.config,
            layout,
            !self.without_indicator,
            self.listener,
            self.feedback,
        ))
    }
}
