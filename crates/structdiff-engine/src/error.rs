//! Error types for the diff engine.

use std::fmt;

use structdiff_types::ValueKind;

/// Which input of a diff an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Errors that can occur during diff operations.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A root input was not a mapping. Raised before any traversal.
    #[error("{side} input must be a mapping, got {actual}")]
    InvalidInputKind { side: Side, actual: ValueKind },

    /// A JSON document could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
