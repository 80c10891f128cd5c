//! Requirement ingestion.
//!
//! Turns structured requirement records into the flat, ordered sequence
//! of raw triples consumed by constraint building. Records typically
//! arrive as JSON documents produced by an upstream requirements parser.

mod error;
mod ingester;
mod record;

pub use error::{IngestError, IngestResult};
pub use ingester::{
    extract_triples, DEFAULT_CONDITION_VARIABLE, DEFAULT_CONSTRAINT_VARIABLE, DEFAULT_OPERATOR,
    DEFAULT_RIGHT_VALUE,
};
pub use record::{ComparisonClause, RequirementRecord};

/// Parse a JSON array of requirement records.
///
/// A malformed document is a fatal error; per-record constraint problems
/// (unsupported operators) are handled later, during building.
pub fn records_from_json(input: &str) -> IngestResult<Vec<RequirementRecord>> {
    Ok(serde_json::from_str(input)?)
}
