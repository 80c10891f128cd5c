//! Verdict Core Types
//!
//! This crate provides the constraint representation shared by every
//! verdict crate:
//! - Variable handles and the per-request VariableRegistry
//! - Operand and Operator types
//! - Constraint and ConstraintSet
//! - Construction of typed constraints from raw string triples

mod builder;
mod constraint;
mod registry;

pub use builder::*;
pub use constraint::*;
pub use registry::*;
