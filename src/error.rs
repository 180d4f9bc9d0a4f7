//! Error types shared by every component.

use thiserror::Error;

/// Result type for combination operations
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations reported at the point of the offending call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid call shape, such as combining zero sources
    #[error("invalid argument: {0}")]
    Argument(String),

    /// A value was requested as a type other than the one stored
    #[error("type mismatch: requested {expected}, stored {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Tuple index outside `0..count`
    #[error("index {index} out of range for tuple of count {count}")]
    IndexOutOfRange { index: usize, count: usize },

    /// A statically-typed tuple was requested with the wrong number of elements
    #[error("tuple arity mismatch: requested {expected} elements, tuple holds {actual}")]
    Arity { expected: usize, actual: usize },
}
