//! Async event loop driving a [`PinLockView`] from a keypad device.

use std::time::Instant;

use pinpad_hardware::{KeypadDevice, Result};
use tokio::time::{self, Instant as TokioInstant};
use tracing::{debug, info, warn};

use crate::view::PinLockView;

/// Feed key presses from `keypad` into `view` and fire deferred actions as
/// they fall due.
///
/// Time is read from the tokio clock, so tests running with a paused clock
/// control when deferred resets happen.
///
/// Returns `Ok(())` once the keypad disconnects. Deferred actions still
/// pending at that point stay queued on the view.
///
/// # Errors
/// Returns any keypad error other than a disconnect.
///
/// # Examples
///
/// ```
/// use pinpad_hardware::mock::MockKeypad;
/// use pinpad_widget::{PinLockView, run};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> pinpad_hardware::Result<()> {
/// let (mut keypad, handle) = MockKeypad::new();
/// handle.send_digits(&[1, 2]).await?;
/// drop(handle);
///
/// let mut view = PinLockView::new();
/// run(&mut view, &mut keypad).await?;
///
/// assert_eq!(view.pin().as_str(), "12");
/// # Ok(())
/// # }
/// ```
pub async fn run<K: KeypadDevice>(view: &mut PinLockView, keypad: &mut K) -> Result<()> {
    run_with(view, keypad, |_| {}).await
}

/// Like [`run`], calling `on_change` after every handled key and every
/// deferred action that ran, so the host can redraw.
///
/// # Errors
/// Returns any keypad error other than a disconnect.
pub async fn run_with<K, F>(view: &mut PinLockView, keypad: &mut K, mut on_change: F) -> Result<()>
where
    K: KeypadDevice,
    F: FnMut(&PinLockView),
{
    match keypad.get_info().await {
        Ok(device) => info!(%device, "Reading keys"),
        Err(e) => warn!(error = %e, "Keypad info unavailable"),
    }

    loop {
        let deadline = view.next_deadline();

        tokio::select! {
            input = keypad.read_input() => match input {
                Ok(event) => {
                    let now = now();
                    view.update_at(now);
                    let transition = view.handle_key_at(event, now);
                    debug!(outcome = ?transition.outcome, "Key handled");
                    on_change(&*view);
                }
                Err(e) if e.is_disconnected() => {
                    info!("Keypad disconnected, stopping");
                    return Ok(());
                }
                Err(e) => return Err(e),
            },
            () = wait_until(deadline) => {
                if view.update_at(now()) {
                    on_change(&*view);
                }
            }
        }
    }
}

fn now() -> Instant {
    TokioInstant::now().into_std()
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(TokioInstant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}
