//! Plain-text rendering of the widget.
//!
//! Draws the indicator row above the 4 × 3 keypad grid using ASCII only, so
//! the output can go straight to a terminal or a log.
//!
//! # Examples
//!
//! ```
//! use pinpad_widget::{PinLockView, render};
//!
//! let view = PinLockView::new();
//!
//! assert_eq!(
//!     render(&view),
//!     vec![
//!         "    o o o o    ",
//!         "",
//!         "  1    2    3  ",
//!         "  4    5    6  ",
//!         "  7    8    9  ",
//!         "       0    <  ",
//!     ]
//! );
//! ```

use pinpad_core::constants::{EMPTY_DOT_GLYPH, FILLED_DOT_GLYPH, KEYPAD_COLUMNS};
use pinpad_keypad::KeypadAdapter;

use crate::indicator::{Dot, DotIndicator};
use crate::view::PinLockView;

/// Width of one rendered keypad cell.
pub const CELL_WIDTH: usize = 5;

/// Width of a rendered keypad row.
pub const ROW_WIDTH: usize = CELL_WIDTH * KEYPAD_COLUMNS;

/// Text alignment within a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Padded with spaces on the right.
    Left,
    /// Equal padding on both sides (extra space on the right if odd).
    Center,
    /// Padded with spaces on the left.
    Right,
}

/// Render the whole widget: indicator row, a blank separator, then the grid.
///
/// Without an indicator only the grid is rendered.
#[must_use]
pub fn render(view: &PinLockView) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(indicator) = view.indicator() {
        lines.push(render_indicator(indicator));
        lines.push(String::new());
    }
    lines.extend(render_keypad(view.adapter()));
    lines
}

/// Render the dots centered in a keypad-wide row.
#[must_use]
pub fn render_indicator(indicator: &DotIndicator) -> String {
    let dots = indicator
        .dots()
        .iter()
        .map(|dot| match dot {
            Dot::Filled => FILLED_DOT_GLYPH,
            Dot::Empty => EMPTY_DOT_GLYPH,
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ");
    align_text(&dots, ROW_WIDTH, Alignment::Center)
}

/// Render the grid, one string per row. Hidden cells render as spaces.
#[must_use]
pub fn render_keypad(adapter: &KeypadAdapter) -> Vec<String> {
    adapter
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    let label = if adapter.is_visible(cell) {
                        cell.label()
                    } else {
                        String::new()
                    };
                    align_text(&label, CELL_WIDTH, Alignment::Center)
                })
                .collect::<String>()
        })
        .collect()
}

/// Truncate text to at most `max_chars` characters.
///
/// # Examples
///
/// ```
/// use pinpad_widget::truncate_text;
///
/// assert_eq!(truncate_text("HELLO WORLD", 5), "HELLO");
/// assert_eq!(truncate_text("HI", 5), "HI");
/// ```
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Pad `text` with spaces to exactly `width` characters.
///
/// Text longer than `width` is truncated.
///
/// # Examples
///
/// ```
/// use pinpad_widget::{Alignment, align_text};
///
/// assert_eq!(align_text("7", 5, Alignment::Center), "  7  ");
/// assert_eq!(align_text("AB", 5, Alignment::Right), "   AB");
/// ```
pub fn align_text(text: &str, width: usize, alignment: Alignment) -> String {
    let char_count = text.chars().count();

    if char_count >= width {
        return truncate_text(text, width);
    }

    let padding = width - char_count;

    match alignment {
        Alignment::Left => format!("{}{}", text, " ".repeat(padding)),
        Alignment::Right => format!("{}{}", " ".repeat(padding), text),
        Alignment::Center => {
            let left_pad = padding / 2;
            let right_pad = padding - left_pad;
            format!("{}{}{}", " ".repeat(left_pad), text, " ".repeat(right_pad))
        }
    }
}
