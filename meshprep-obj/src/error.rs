//! Error types for OBJ I/O.

use thiserror::Error;

/// Result type for OBJ I/O operations.
pub type ObjResult<T> = Result<T, ObjError>;

/// Errors that can occur while reading or writing OBJ files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ObjError {
    /// A `v` record did not hold exactly three floating point fields.
    #[error("line {line}: invalid vertex")]
    InvalidVertex {
        /// 1-based line number of the offending record.
        line: usize,
    },

    /// An `f` record held fewer than three fields or a field that is not
    /// a positive integer.
    #[error("line {line}: invalid face")]
    InvalidFace {
        /// 1-based line number of the offending record.
        line: usize,
    },

    /// I/O error from the underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
