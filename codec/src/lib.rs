//! Textual constraint codec.
//!
//! The canonical form is line-oriented: one `(assert (<left> <op>
//! <right>))` per constraint, in set order. Encoding and decoding
//! round-trip: decoding the encoded form of a set yields an equal
//! sequence of (left, operator, right) tuples, with variables compared by
//! name.
//!
//! A one-way SMT-LIB v2 export is also provided for handing constraints
//! to standard solver front ends; it is not part of the round-trip.

mod decode;
mod encode;
mod error;
mod scan;
mod smtlib;

pub use decode::{decode, decode_str};
pub use encode::encode;
pub use error::{CodecError, CodecResult};
pub use smtlib::to_smt_lib;
