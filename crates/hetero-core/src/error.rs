//! Error types for hetero

use thiserror::Error;

/// Errors raised by the runtime side of the containers.
///
/// Concept resolution never produces one of these: a missing instance or
/// primitive is a compile error. Only dynamic, index-by-value access into a
/// tuple can fail at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeteroError {
    /// Dynamic index past the end of the sequence.
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The element at `index` is not of the requested type.
    #[error("element {index} is a `{found}`, not a `{expected}`")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type alias for hetero operations
pub type Result<T> = std::result::Result<T, HeteroError>;
