//! Terminal-backed capability implementations.

use std::collections::VecDeque;

use pinpad_core::{Digit, KeyEvent};
use pinpad_hardware::{
    DeviceInfo, FeedbackDevice, HapticKind, HardwareError, KeypadDevice, Result, ShakeAnimation,
    ShakeTarget,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info, warn};

/// What one line of terminal input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    Keys(Vec<KeyEvent>),
    Quit,
}

/// Parse a line of keys.
///
/// Digits press digit keys, `<` or `-` presses delete, whitespace is
/// ignored and `q` on its own quits.
///
/// # Errors
/// Returns `HardwareError::InvalidData` naming the first unknown key.
pub fn parse_line(line: &str) -> Result<LineInput> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(LineInput::Quit);
    }

    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| -> Result<KeyEvent> {
            match c {
                '<' | '-' => Ok(KeyEvent::Delete),
                c if c.is_ascii_digit() => Ok(KeyEvent::Digit(Digit::from_char(c)?)),
                c => Err(HardwareError::invalid_data(format!("unknown key {c:?}"))),
            }
        })
        .collect::<Result<Vec<_>>>()
        .map(LineInput::Keys)
}

/// Keypad reading whole lines from standard input.
pub struct StdinKeypad {
    lines: Lines<BufReader<Stdin>>,
    pending: VecDeque<KeyEvent>,
}

impl StdinKeypad {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            pending: VecDeque::new(),
        }
    }
}

impl KeypadDevice for StdinKeypad {
    async fn read_input(&mut self) -> Result<KeyEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(event);
            }

            let Some(line) = self.lines.next_line().await? else {
                return Err(HardwareError::disconnected("stdin"));
            };

            match parse_line(&line) {
                Ok(LineInput::Keys(keys)) => self.pending.extend(keys),
                Ok(LineInput::Quit) => return Err(HardwareError::disconnected("stdin")),
                Err(e) => warn!(error = %e, "Ignoring input line"),
            }
        }
    }

    async fn get_info(&self) -> Result<DeviceInfo> {
        Ok(DeviceInfo::new("stdin", "Terminal Keypad"))
    }
}

impl Default for StdinKeypad {
    fn default() -> Self {
        Self::new()
    }
}

/// Feedback device that reports effects through the log.
#[derive(Debug, Default)]
pub struct TerminalFeedback;

impl FeedbackDevice for TerminalFeedback {
    fn trigger_shake(&mut self, target: ShakeTarget, animation: &ShakeAnimation) -> Result<()> {
        info!(?target, duration_ms = animation.duration.as_millis(), "Shake");
        Ok(())
    }

    fn trigger_haptic(&mut self, kind: HapticKind) -> Result<()> {
        debug!(?kind, "Haptic");
        Ok(())
    }

    fn get_info(&self) -> DeviceInfo {
        DeviceInfo::new("Terminal Feedback", "log")
    }
}
