//! Demo listener checking entries against a known PIN.

use pinpad_core::Pin;
use pinpad_widget::PinLockListener;
use tracing::{debug, info};

/// Accepts exactly one PIN and reports every callback.
#[derive(Debug)]
pub struct CheckingListener {
    expected: Pin,
    attempts: u32,
}

impl CheckingListener {
    pub fn new(expected: Pin) -> Self {
        Self {
            expected,
            attempts: 0,
        }
    }
}

impl PinLockListener for CheckingListener {
    fn on_complete(&mut self, pin: &str) -> bool {
        self.attempts += 1;
        let accepted = pin.parse::<Pin>().is_ok_and(|entered| entered == self.expected);

        info!(attempt = self.attempts, accepted, "PIN complete");
        if accepted {
            println!("PIN accepted");
        } else {
            println!("Wrong PIN");
        }
        accepted
    }

    fn on_empty(&mut self) {
        debug!("PIN empty");
    }

    fn on_pin_change(&mut self, pin_length: usize, _intermediate_pin: &str) {
        debug!(pin_length, "PIN changed");
    }
}
