//! Requirement record types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One comparison clause of a requirement (its `condition` or
/// `constraint` slot).
///
/// All fields are optional in source documents. Defaults are applied
/// during ingestion, not during deserialization, so a record round-trips
/// through serde without gaining fields it never had.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonClause {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_variable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_value: Option<String>,
}

impl ComparisonClause {
    /// Create a fully specified clause.
    pub fn new(
        left_variable: impl Into<String>,
        operator: impl Into<String>,
        right_value: impl Into<String>,
    ) -> Self {
        Self {
            left_variable: Some(left_variable.into()),
            operator: Some(operator.into()),
            right_value: Some(right_value.into()),
        }
    }
}

/// A structured requirement record.
///
/// `subject` and `action` are reserved metadata: they are carried through
/// deserialization but constraint construction never consults them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementRecord {
    #[serde(default)]
    pub subject: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub action: HashMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ComparisonClause>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<ComparisonClause>,
}

impl RequirementRecord {
    /// Create a record with the given subject and no clauses.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Attach a condition clause.
    pub fn with_condition(mut self, clause: ComparisonClause) -> Self {
        self.condition = Some(clause);
        self
    }

    /// Attach a constraint clause.
    pub fn with_constraint(mut self, clause: ComparisonClause) -> Self {
        self.constraint = Some(clause);
        self
    }
}
