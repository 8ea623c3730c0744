//! Crate-level error types.

use std::fmt;

/// Errors produced by the cubeturn crate.
///
/// Only invalid external input surfaces here. Gesture no-ops (missed rays,
/// sub-threshold drags, moves while busy) are silently ignored instead.
#[derive(Debug)]
pub enum TurnError {
    /// Puzzle size outside the supported 2–5 range.
    InvalidPuzzleSize(u8),
    /// Axis key that is not one of `x`, `y`, `z`.
    UnknownAxis(String),
    /// Move token with an unknown face letter or modifier.
    UnknownMove(String),
    /// Layer move whose axis, position or angle does not fit the puzzle.
    InvalidMove(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPuzzleSize(size) => {
                write!(f, "unsupported puzzle size {size} (expected 2..=5)")
            }
            Self::UnknownAxis(key) => write!(f, "unknown axis key '{key}'"),
            Self::UnknownMove(token) => {
                write!(f, "unknown move notation '{token}'")
            }
            Self::InvalidMove(reason) => write!(f, "invalid move {reason}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TurnError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
