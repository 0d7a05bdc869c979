use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Input errors
    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),

    #[error("Invalid digit character: {0:?}")]
    InvalidDigitChar(char),

    #[error("Invalid PIN length: {0} (expected 1-16)")]
    InvalidPinLength(usize),

    // Keypad errors
    #[error("Invalid key layout: {0}")]
    InvalidKeyLayout(String),

    #[error("Invalid keypad cell {cell} (max {max})")]
    InvalidCell { cell: usize, max: usize },

    // Configuration errors
    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
