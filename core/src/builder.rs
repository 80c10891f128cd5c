//! Building typed constraints from raw string triples.
//!
//! Triples arrive from ingestion (or any other front end) as plain
//! strings. Identifier resolution goes through the request's
//! [`VariableRegistry`]; a triple whose operator token is unsupported is
//! dropped silently so the remaining triples still produce constraints.

use crate::{Constraint, ConstraintSet, Operand, Operator, VariableRegistry};

/// A raw `(left, operator, right)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTriple {
    pub left: String,
    pub operator: String,
    pub right: String,
}

impl RawTriple {
    /// Create a triple.
    pub fn new(
        left: impl Into<String>,
        operator: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            operator: operator.into(),
            right: right.into(),
        }
    }
}

/// Build a single constraint from a raw triple.
///
/// The left side is always a variable reference. The right side is a
/// literal if it parses as a signed decimal integer, otherwise a variable
/// reference. Both sides are resolved before the operator is mapped, so a
/// dropped triple still registers the variables it names.
pub fn build_constraint(
    triple: &RawTriple,
    registry: &mut VariableRegistry,
) -> Option<Constraint> {
    let left = Operand::Var(registry.get_or_create(&triple.left));
    let right = Operand::resolve(&triple.right, registry);
    let op = Operator::from_symbol(&triple.operator)?;
    Some(Constraint::new(left, op, right))
}

/// Build a set from triples in order, dropping triples that fail and
/// preserving the order of the rest.
pub fn build_set(triples: &[RawTriple], registry: &mut VariableRegistry) -> ConstraintSet {
    triples
        .iter()
        .filter_map(|triple| build_constraint(triple, registry))
        .collect()
}
