//! Solver bridge error types.

use thiserror::Error;

/// Solver bridge errors.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The engine could not decide satisfiability. Distinct from an
    /// unsatisfiable outcome: "could not determine" is not "proven
    /// contradictory".
    #[error("solver could not determine satisfiability")]
    Indeterminate,
}

/// Result type for solver bridge operations.
pub type SolveResult<T> = Result<T, SolveError>;
