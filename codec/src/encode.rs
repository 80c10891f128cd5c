//! Canonical textual encoding.

use verdict_core::ConstraintSet;

/// Render a constraint set in its canonical line-oriented form.
///
/// One `(assert (<left> <op> <right>))` line per constraint, joined by
/// newlines in set order. Variable operands render as bare identifiers,
/// literals as signed decimals.
pub fn encode(set: &ConstraintSet) -> String {
    set.iter()
        .map(|constraint| format!("(assert {})", constraint))
        .collect::<Vec<_>>()
        .join("\n")
}
