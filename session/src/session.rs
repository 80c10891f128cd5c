//! Verification session.

use log::debug;

use verdict_codec as codec;
use verdict_core::{build_set, ConstraintSet, Operand, VariableRegistry};
use verdict_ingest::{extract_triples, records_from_json, RequirementRecord};
use verdict_solver::{check_set, Outcome, SolverEngine};

use crate::error::SessionResult;

/// A single verification request.
///
/// Each session gets a fresh registry and constraint set; nothing is
/// shared across requests, so independent sessions may run concurrently
/// without locking. Both are immutable once solving begins.
pub struct VerifySession {
    registry: VariableRegistry,
    constraints: ConstraintSet,
}

impl VerifySession {
    /// Build a session from structured requirement records.
    pub fn from_records(records: &[RequirementRecord]) -> Self {
        let triples = extract_triples(records);
        let mut registry = VariableRegistry::new();
        let constraints = build_set(&triples, &mut registry);
        debug!(
            "built {} constraints over {} variables from {} records",
            constraints.len(),
            registry.len(),
            records.len()
        );
        Self {
            registry,
            constraints,
        }
    }

    /// Build a session from a JSON requirement document.
    pub fn from_json(document: &str) -> SessionResult<Self> {
        let records = records_from_json(document)?;
        Ok(Self::from_records(&records))
    }

    /// Rebuild a session from the canonical textual form: a raw
    /// multi-line string, or a path to a stored file.
    pub fn from_stored(input: &str) -> SessionResult<Self> {
        let constraints = codec::decode(input)?;
        let registry = registry_of(&constraints);
        Ok(Self {
            registry,
            constraints,
        })
    }

    /// The session's constraints, in construction order.
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// The session's variables, in first-seen order.
    pub fn variables(&self) -> &VariableRegistry {
        &self.registry
    }

    /// Canonical textual form of the session's constraints.
    pub fn to_text(&self) -> String {
        codec::encode(&self.constraints)
    }

    /// SMT-LIB v2 export of the session's constraints.
    pub fn to_smt_lib(&self) -> String {
        codec::to_smt_lib(&self.constraints)
    }

    /// Check satisfiability through the given engine and produce the
    /// request's outcome.
    pub fn check<E: SolverEngine>(&self, engine: &mut E) -> SessionResult<Outcome> {
        Ok(check_set(engine, &self.constraints)?)
    }
}

/// Re-register a decoded set's variables in first-appearance order,
/// left side before right within each constraint.
fn registry_of(constraints: &ConstraintSet) -> VariableRegistry {
    let mut registry = VariableRegistry::new();
    for constraint in constraints {
        for operand in [&constraint.left, &constraint.right] {
            if let Operand::Var(var) = operand {
                registry.get_or_create(var.name());
            }
        }
    }
    registry
}
