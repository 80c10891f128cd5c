//! Solver bridge.
//!
//! The satisfiability engine is an external collaborator reached through
//! the narrow [`SolverEngine`] contract: submit constraints, check, and
//! read a model on a satisfiable verdict. This crate maps engine
//! verdicts onto the result value handed back to callers.

mod bridge;
mod engine;
mod error;
mod outcome;

pub use bridge::check_set;
pub use engine::{SolverEngine, Verdict};
pub use error::{SolveError, SolveResult};
pub use outcome::{Outcome, Status, UNSAT_MESSAGE};
