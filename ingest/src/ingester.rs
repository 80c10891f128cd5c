//! Extraction of raw constraint triples from requirement records.
//!
//! Defaults for missing clause fields are applied here and nowhere else.

use verdict_core::RawTriple;

use crate::record::{ComparisonClause, RequirementRecord};

/// Default left variable for a condition clause missing `left_variable`.
pub const DEFAULT_CONDITION_VARIABLE: &str = "x";

/// Default left variable for a constraint clause missing `left_variable`.
pub const DEFAULT_CONSTRAINT_VARIABLE: &str = "y";

/// Default comparison operator.
pub const DEFAULT_OPERATOR: &str = ">=";

/// Default right-hand value.
pub const DEFAULT_RIGHT_VALUE: &str = "0";

/// Flatten records into raw triples.
///
/// Records are processed in input order; within a record, the condition
/// clause contributes before the constraint clause. A missing clause
/// contributes nothing.
pub fn extract_triples(records: &[RequirementRecord]) -> Vec<RawTriple> {
    let mut triples = Vec::new();
    for record in records {
        if let Some(clause) = &record.condition {
            triples.push(clause_triple(clause, DEFAULT_CONDITION_VARIABLE));
        }
        if let Some(clause) = &record.constraint {
            triples.push(clause_triple(clause, DEFAULT_CONSTRAINT_VARIABLE));
        }
    }
    triples
}

fn clause_triple(clause: &ComparisonClause, default_left: &str) -> RawTriple {
    RawTriple::new(
        clause.left_variable.as_deref().unwrap_or(default_left),
        clause.operator.as_deref().unwrap_or(DEFAULT_OPERATOR),
        clause.right_value.as_deref().unwrap_or(DEFAULT_RIGHT_VALUE),
    )
}
