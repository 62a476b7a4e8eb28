//! Crate-level error types.

use std::fmt;

/// Errors produced by the breachboard crate.
///
/// The sequencer itself has no recoverable failures (all navigation input is
/// clamped); these variants cover the configuration layer only.
#[derive(Debug)]
pub enum BoardError {
    /// Generic I/O failure while reading or writing a timing preset.
    Io(std::io::Error),
    /// TOML timing parsing/serialization failure.
    TimingParse(String),
    /// Timing values outside their valid ranges.
    Timing(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::TimingParse(msg) => {
                write!(f, "timing parse error: {msg}")
            }
            Self::Timing(msg) => write!(f, "invalid timing: {msg}"),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BoardError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
