//! The contract with the external satisfiability engine.

use std::collections::BTreeMap;

use verdict_core::Constraint;

/// Verdict reported by the engine for the submitted constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A satisfying assignment exists.
    Satisfiable,
    /// The constraints are provably contradictory.
    Unsatisfiable,
    /// The engine could not decide (timeout, resource limit,
    /// incompleteness). Not the same as unsatisfiable.
    Unknown,
}

/// Interface to the external satisfiability engine.
///
/// Implementations live outside this repository. The bridge relies on
/// nothing beyond submit, check, and (after a satisfiable check) a
/// concrete model.
pub trait SolverEngine {
    /// Submit one constraint.
    fn add(&mut self, constraint: &Constraint);

    /// Decide satisfiability of everything submitted so far.
    ///
    /// May block for as long as the engine needs; callers wanting a bound
    /// should impose their own timeout and treat it as [`Verdict::Unknown`].
    fn check(&mut self) -> Verdict;

    /// The satisfying assignment, by variable name.
    ///
    /// Only meaningful after `check` returned [`Verdict::Satisfiable`].
    fn model(&self) -> BTreeMap<String, i64>;
}
