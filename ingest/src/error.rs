//! Ingestion error types.

use thiserror::Error;

/// Ingestion errors.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The requirement document is not valid JSON.
    #[error("invalid requirement document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;
