//! Mock feedback device that records every request.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    HardwareError, Result,
    traits::FeedbackDevice,
    types::{DeviceInfo, HapticKind, ShakeAnimation, ShakeTarget},
};

/// One recorded feedback request.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackCall {
    Shake {
        target: ShakeTarget,
        animation: ShakeAnimation,
    },
    Haptic(HapticKind),
}

#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<FeedbackCall>,
    fail_haptics: bool,
    fail_shakes: bool,
}

/// Feedback device that records requests instead of performing them.
///
/// Requests are recorded even when the mock is told to fail, so tests can
/// check that the widget kept going after a failure.
///
/// # Examples
///
/// ```
/// use pinpad_hardware::mock::{FeedbackCall, MockFeedback};
/// use pinpad_hardware::traits::FeedbackDevice;
/// use pinpad_hardware::types::HapticKind;
///
/// let (mut feedback, handle) = MockFeedback::new();
/// feedback.trigger_haptic(HapticKind::KeyboardTap).unwrap();
///
/// assert_eq!(handle.calls(), vec![FeedbackCall::Haptic(HapticKind::KeyboardTap)]);
/// ```
#[derive(Debug)]
pub struct MockFeedback {
    recorder: Arc<Mutex<Recorder>>,
}

impl MockFeedback {
    /// Create a mock feedback device and the handle used to inspect it.
    pub fn new() -> (Self, MockFeedbackHandle) {
        let recorder = Arc::new(Mutex::new(Recorder::default()));
        let handle = MockFeedbackHandle {
            recorder: Arc::clone(&recorder),
        };
        (Self { recorder }, handle)
    }

    fn recorder(&self) -> MutexGuard<'_, Recorder> {
        // A poisoned recorder only means another test thread panicked
        self.recorder.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FeedbackDevice for MockFeedback {
    fn trigger_shake(&mut self, target: ShakeTarget, animation: &ShakeAnimation) -> Result<()> {
        let mut recorder = self.recorder();
        recorder.calls.push(FeedbackCall::Shake {
            target,
            animation: animation.clone(),
        });
        if recorder.fail_shakes {
            return Err(HardwareError::feedback("mock shake failure"));
        }
        Ok(())
    }

    fn trigger_haptic(&mut self, kind: HapticKind) -> Result<()> {
        let mut recorder = self.recorder();
        recorder.calls.push(FeedbackCall::Haptic(kind));
        if recorder.fail_haptics {
            return Err(HardwareError::unsupported("haptics"));
        }
        Ok(())
    }

    fn get_info(&self) -> DeviceInfo {
        DeviceInfo::new("Mock Feedback", "Mock Feedback v1.0")
    }
}

/// Handle for inspecting and steering a [`MockFeedback`].
#[derive(Debug, Clone)]
pub struct MockFeedbackHandle {
    recorder: Arc<Mutex<Recorder>>,
}

impl MockFeedbackHandle {
    fn recorder(&self) -> MutexGuard<'_, Recorder> {
        self.recorder.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// All requests recorded so far, oldest first.
    pub fn calls(&self) -> Vec<FeedbackCall> {
        self.recorder().calls.clone()
    }

    /// Only the haptic requests, oldest first.
    pub fn haptics(&self) -> Vec<HapticKind> {
        self.recorder()
            .calls
            .iter()
            .filter_map(|call| match call {
                FeedbackCall::Haptic(kind) => Some(*kind),
                FeedbackCall::Shake { .. } => None,
            })
            .collect()
    }

    /// Only the shake targets, oldest first.
    pub fn shakes(&self) -> Vec<ShakeTarget> {
        self.recorder()
            .calls
            .iter()
            .filter_map(|call| match call {
                FeedbackCall::Shake { target, .. } => Some(*target),
                FeedbackCall::Haptic(_) => None,
            })
            .collect()
    }

    /// Forget every recorded request.
    pub fn clear(&self) {
        self.recorder().calls.clear();
    }

    /// Make subsequent haptic requests fail.
    pub fn fail_haptics(&self, fail: bool) {
        self.recorder().fail_haptics = fail;
    }

    /// Make subsequent shake requests fail.
    pub fn fail_shakes(&self, fail: bool) {
        self.recorder().fail_shakes = fail;
    }
}
