//! Row of dots mirroring how many digits have been entered.

use pinpad_core::{IndicatorType, PinLength};
use pinpad_hardware::{FeedbackDevice, ShakeAnimation, ShakeTarget};

/// State of a single dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dot {
    Empty,
    Filled,
}

/// Presentational mirror of the PIN length.
///
/// With [`IndicatorType::Fixed`] one dot exists per PIN position and the
/// first `count` are filled. The fill variants keep exactly `count` filled
/// dots, growing and shrinking at the tail.
///
/// # Examples
///
/// ```
/// use pinpad_core::{IndicatorType, PinLength};
/// use pinpad_widget::{Dot, DotIndicator};
///
/// let mut indicator = DotIndicator::new(PinLength::new(3).unwrap(), IndicatorType::Fixed);
/// indicator.update_dot(1);
/// assert_eq!(indicator.dots(), &[Dot::Filled, Dot::Empty, Dot::Empty]);
///
/// indicator.set_indicator_type(IndicatorType::Fill);
/// assert!(indicator.dots().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotIndicator {
    indicator_type: IndicatorType,
    pin_length: PinLength,
    dots: Vec<Dot>,
}

impl DotIndicator {
    pub fn new(pin_length: PinLength, indicator_type: IndicatorType) -> Self {
        let mut indicator = Self {
            indicator_type,
            pin_length,
            dots: Vec::new(),
        };
        indicator.rebuild();
        indicator
    }

    #[must_use]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Number of filled dots.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.dots.iter().filter(|d| **d == Dot::Filled).count()
    }

    #[must_use]
    pub fn indicator_type(&self) -> IndicatorType {
        self.indicator_type
    }

    #[must_use]
    pub fn pin_length(&self) -> PinLength {
        self.pin_length
    }

    /// Whether the host should animate dots being added or removed.
    #[must_use]
    pub fn animates_layout_changes(&self) -> bool {
        self.indicator_type == IndicatorType::FillWithAnimation
    }

    /// Show `count` entered digits. Counts above the PIN length are clamped.
    pub fn update_dot(&mut self, count: usize) {
        let count = count.min(self.pin_length.get());

        match self.indicator_type {
            IndicatorType::Fixed => {
                for (i, dot) in self.dots.iter_mut().enumerate() {
                    *dot = if i < count { Dot::Filled } else { Dot::Empty };
                }
            }
            IndicatorType::Fill | IndicatorType::FillWithAnimation => {
                while self.dots.len() < count {
                    self.dots.push(Dot::Filled);
                }
                self.dots.truncate(count);
            }
        }
    }

    /// Change the number of positions and start over with no dots filled.
    pub fn set_pin_length(&mut self, pin_length: PinLength) {
        self.pin_length = pin_length;
        self.rebuild();
    }

    /// Change the variant and start over with no dots filled.
    pub fn set_indicator_type(&mut self, indicator_type: IndicatorType) {
        self.indicator_type = indicator_type;
        self.rebuild();
    }

    /// Shake the indicator.
    ///
    /// # Errors
    /// Returns the feedback device's error if the shake could not start.
    pub fn error(&self, feedback: &mut dyn FeedbackDevice) -> pinpad_hardware::Result<()> {
        feedback.trigger_shake(ShakeTarget::Indicator, &ShakeAnimation::error())
    }

    fn rebuild(&mut self) {
        self.dots = match self.indicator_type {
            IndicatorType::Fixed => vec![Dot::Empty; self.pin_length.get()],
            IndicatorType::Fill | IndicatorType::FillWithAnimation => Vec::new(),
        };
    }
}
