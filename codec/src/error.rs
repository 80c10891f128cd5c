//! Codec error types.

use thiserror::Error;

/// Codec errors.
///
/// Malformed assertion lines are not errors; they are skipped during
/// decoding. Only failures outside the text itself surface here.
#[derive(Debug, Error)]
pub enum CodecError {
    /// IO error reading a stored textual form.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
