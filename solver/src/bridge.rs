//! Submitting constraint sets and mapping verdicts.

use log::debug;

use verdict_core::ConstraintSet;

use crate::engine::{SolverEngine, Verdict};
use crate::error::{SolveError, SolveResult};
use crate::outcome::Outcome;

/// Submit every constraint in the set, check, and map the verdict to the
/// request's result value.
pub fn check_set<E: SolverEngine>(engine: &mut E, set: &ConstraintSet) -> SolveResult<Outcome> {
    for constraint in set {
        engine.add(constraint);
    }
    debug!("submitted {} constraints", set.len());

    match engine.check() {
        Verdict::Satisfiable => {
            let model = engine.model();
            debug!("verdict: sat ({} assignments)", model.len());
            Ok(Outcome::sat(model))
        }
        Verdict::Unsatisfiable => {
            debug!("verdict: unsat");
            Ok(Outcome::unsat())
        }
        Verdict::Unknown => Err(SolveError::Indeterminate),
    }
}
