//! The 12-cell button grid.
//!
//! Cells are numbered left to right, top to bottom:
//!
//! ```text
//!  0  1  2
//!  3  4  5
//!  6  7  8
//!  9 10 11
//! ```
//!
//! Cells 0-8 carry the first nine layout keys, cell 9 is blank, cell 10
//! carries the last layout key and cell 11 is the delete key.

use pinpad_core::{
    Digit, Error, KeyEvent, Result,
    constants::{
        BLANK_CELL, DELETE_CELL, DELETE_LABEL, KEY_COUNT, KEYPAD_CELL_COUNT, KEYPAD_COLUMNS,
        LEADING_DIGIT_CELLS, TRAILING_DIGIT_CELL,
    },
};
use tracing::debug;

use crate::layout::KeyLayout;

/// Content of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A digit key.
    Digit(Digit),
    /// The inert cell left of the last digit.
    Blank,
    /// The delete key.
    Delete,
}

impl Cell {
    /// Text drawn on the cell.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Cell::Digit(d) => d.to_string(),
            Cell::Blank => String::new(),
            Cell::Delete => DELETE_LABEL.to_string(),
        }
    }
}

/// Display options of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadOptions {
    /// Whether the delete key is shown and clickable.
    pub show_delete_button: bool,

    /// Whether keys play a press animation.
    pub show_button_press_animation: bool,
}

impl Default for KeypadOptions {
    fn default() -> Self {
        Self {
            show_delete_button: true,
            show_button_press_animation: true,
        }
    }
}

/// Maps grid cells to key events. Holds no PIN state.
///
/// Every change that alters what the grid shows bumps [`revision`], which a
/// renderer can compare to decide when to redraw all cells.
///
/// [`revision`]: KeypadAdapter::revision
#[derive(Debug, Clone)]
pub struct KeypadAdapter {
    layout: KeyLayout,
    options: KeypadOptions,
    revision: u64,
}

impl KeypadAdapter {
    pub fn new(layout: KeyLayout, options: KeypadOptions) -> Self {
        Self {
            layout,
            options,
            revision: 0,
        }
    }

    #[must_use]
    pub fn layout(&self) -> &KeyLayout {
        &self.layout
    }

    #[must_use]
    pub fn options(&self) -> KeypadOptions {
        self.options
    }

    /// Render revision, incremented on every visible change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Content of `cell`.
    ///
    /// # Errors
    /// Returns `Error::InvalidCell` if `cell` is not in `0..12`.
    pub fn cell(&self, cell: usize) -> Result<Cell> {
        let content = match cell {
            c if c < LEADING_DIGIT_CELLS => self.layout.key(c).map(Cell::Digit),
            BLANK_CELL => Some(Cell::Blank),
            TRAILING_DIGIT_CELL => self.layout.key(KEY_COUNT - 1).map(Cell::Digit),
            DELETE_CELL => Some(Cell::Delete),
            _ => None,
        };
        content.ok_or(Error::InvalidCell {
            cell,
            max: KEYPAD_CELL_COUNT - 1,
        })
    }

    /// All twelve cells in grid order.
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        (0..KEYPAD_CELL_COUNT)
            .filter_map(|i| self.cell(i).ok())
            .collect()
    }

    /// The cells split into rows of three.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells()
            .chunks(KEYPAD_COLUMNS)
            .map(<[Cell]>::to_vec)
            .collect()
    }

    /// Whether `cell` is drawn. The blank cell and a hidden delete key are not.
    #[must_use]
    pub fn is_visible(&self, cell: &Cell) -> bool {
        match cell {
            Cell::Digit(_) => true,
            Cell::Blank => false,
            Cell::Delete => self.options.show_delete_button,
        }
    }

    /// Turn a click on `cell` into a key event.
    ///
    /// Returns `Ok(None)` for the blank cell and for the delete key while it
    /// is hidden.
    ///
    /// # Errors
    /// Returns `Error::InvalidCell` if `cell` is not in `0..12`.
    pub fn press(&self, cell: usize) -> Result<Option<KeyEvent>> {
        let event = match self.cell(cell)? {
            Cell::Digit(d) => Some(KeyEvent::Digit(d)),
            Cell::Delete if self.options.show_delete_button => Some(KeyEvent::Delete),
            Cell::Delete | Cell::Blank => None,
        };
        Ok(event)
    }

    /// Re-key the digit cells.
    pub fn set_key_layout(&mut self, layout: KeyLayout) {
        debug!(layout = %layout, "Keypad re-keyed");
        self.layout = layout;
        self.bump();
    }

    pub fn set_show_delete_button(&mut self, show: bool) {
        self.options.show_delete_button = show;
        self.bump();
    }

    pub fn set_show_button_press_animation(&mut self, show: bool) {
        self.options.show_button_press_animation = show;
        self.bump();
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for KeypadAdapter {
    fn default() -> Self {
        Self::new(KeyLayout::default(), KeypadOptions::default())
    }
}
