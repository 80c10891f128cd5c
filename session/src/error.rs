//! Session error types.

use thiserror::Error;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Requirement document error.
    #[error("ingest error: {0}")]
    Ingest(#[from] verdict_ingest::IngestError),

    /// Codec error.
    #[error("codec error: {0}")]
    Codec(#[from] verdict_codec::CodecError),

    /// Solver bridge error.
    #[error("solve error: {0}")]
    Solve(#[from] verdict_solver::SolveError),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
