//! Core constants for the PIN pad widget.
//!
//! This module centralizes the defaults and fixed geometry shared by the
//! keypad adapter, the PIN accumulator and the dot indicator.
//!
//! # Keypad Grid
//!
//! The keypad is a 4-row × 3-column grid of 12 cells:
//!
//! ```text
//! +-----+-----+-----+
//! |  0  |  1  |  2  |   cells 0..=8 carry layout keys 0..=8
//! +-----+-----+-----+
//! |  3  |  4  |  5  |
//! +-----+-----+-----+
//! |  6  |  7  |  8  |
//! +-----+-----+-----+
//! |  9  | 10  | 11  |   9 = blank, 10 = layout key 9, 11 = delete
//! +-----+-----+-----+
//! ```
//!
//! # Usage
//!
//! ```
//! use pinpad_core::constants::*;
//!
//! assert_eq!(KEYPAD_CELL_COUNT, KEYPAD_COLUMNS * KEYPAD_ROWS);
//! assert_eq!(DEFAULT_KEY_SET.len(), KEY_COUNT);
//!
//! use std::time::Duration;
//! let window = Duration::from_millis(ERROR_FEEDBACK_DURATION_MS);
//! assert_eq!(window.as_millis(), 200);
//! ```

// ============================================================================
// PIN
// ============================================================================

/// PIN length used when none is configured.
pub const DEFAULT_PIN_LENGTH: usize = 4;

/// Smallest accepted PIN length.
///
/// A zero-length PIN would make every state simultaneously empty and full.
pub const MIN_PIN_LENGTH: usize = 1;

/// Largest accepted PIN length.
pub const MAX_PIN_LENGTH: usize = 16;

// ============================================================================
// Keypad Grid
// ============================================================================

/// Number of digit keys on the keypad.
pub const KEY_COUNT: usize = 10;

/// Default key order, read left to right, top to bottom.
///
/// The tenth key (`0`) lands on the bottom-center cell.
pub const DEFAULT_KEY_SET: [u8; KEY_COUNT] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];

/// Number of grid columns.
pub const KEYPAD_COLUMNS: usize = 3;

/// Number of grid rows.
pub const KEYPAD_ROWS: usize = 4;

/// Total number of grid cells.
pub const KEYPAD_CELL_COUNT: usize = KEYPAD_COLUMNS * KEYPAD_ROWS;

/// Number of digit cells filled before the blank cell (the top three rows).
pub const LEADING_DIGIT_CELLS: usize = 9;

/// Cell index of the inert blank cell (bottom-left).
pub const BLANK_CELL: usize = 9;

/// Cell index of the last digit key (bottom-center).
pub const TRAILING_DIGIT_CELL: usize = 10;

/// Cell index of the delete key (bottom-right).
pub const DELETE_CELL: usize = 11;

// ============================================================================
// Feedback
// ============================================================================

/// Length of the error feedback window in milliseconds.
///
/// The shake animation runs for this long, and the second indicator reset
/// after a rejected PIN is scheduled this far in the future.
pub const ERROR_FEEDBACK_DURATION_MS: u64 = 200;

/// Horizontal offsets (in pixels) of the error shake keyframes.
pub const SHAKE_OFFSETS: [f32; 4] = [0.0, 100.0, -100.0, 0.0];

// ============================================================================
// Rendering
// ============================================================================

/// Label rendered for the delete key.
pub const DELETE_LABEL: &str = "<";

/// Glyph rendered for a filled indicator dot.
pub const FILLED_DOT_GLYPH: char = '*';

/// Glyph rendered for an empty indicator dot.
pub const EMPTY_DOT_GLYPH: char = 'o';
