//! Per-request verification orchestration.
//!
//! A session owns one request's variable registry and constraint set,
//! built either from structured requirement records or from a stored
//! textual form, and hands the set to a solver engine for its verdict.

mod error;
mod session;

pub use error::{SessionError, SessionResult};
pub use session::VerifySession;
