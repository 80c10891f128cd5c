//! The result value of a verification request.

use serde::Serialize;
use std::collections::BTreeMap;

/// Message attached to unsatisfiable outcomes.
pub const UNSAT_MESSAGE: &str =
    "Constraints are unsatisfiable - requirements are contradictory";

/// Verification status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Sat,
    Unsat,
}

/// Result value of a verification request.
///
/// Serializes to `{ status, satisfiable, model?, message? }`: the model
/// is present exactly on SAT, the message exactly on UNSAT.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub status: Status,
    pub satisfiable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<BTreeMap<String, i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Outcome {
    /// Satisfiable outcome carrying the engine's model.
    pub fn sat(model: BTreeMap<String, i64>) -> Self {
        Self {
            status: Status::Sat,
            satisfiable: true,
            model: Some(model),
            message: None,
        }
    }

    /// Unsatisfiable outcome with the fixed contradiction message.
    pub fn unsat() -> Self {
        Self {
            status: Status::Unsat,
            satisfiable: false,
            model: None,
            message: Some(UNSAT_MESSAGE.to_string()),
        }
    }

    /// True if this outcome reports satisfiability.
    pub fn is_sat(&self) -> bool {
        self.satisfiable
    }
}
