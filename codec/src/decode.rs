//! Decoding the canonical textual form back into a constraint set.

use std::fs;

use verdict_core::{Constraint, ConstraintSet, Operand, VariableRegistry};

use crate::error::CodecResult;
use crate::scan::{Scanner, Token};

/// Decode stored constraint text.
///
/// A multi-line input is decoded directly as raw text; an input without a
/// newline is treated as a path to a stored file (a bare filesystem path
/// has none). File read failures are fatal; malformed lines are not.
pub fn decode(input: &str) -> CodecResult<ConstraintSet> {
    if input.contains('\n') {
        Ok(decode_str(input))
    } else {
        let text = fs::read_to_string(input)?;
        Ok(decode_str(&text))
    }
}

/// Decode raw constraint text.
///
/// Lines that do not match the assertion grammar are skipped silently,
/// mirroring the builder's drop policy; this never fails. Decoded
/// variables live in a registry scoped to this call, so they are
/// name-equal (not identity-equal) to the variables of the original set.
pub fn decode_str(text: &str) -> ConstraintSet {
    let mut registry = VariableRegistry::new();
    let mut set = ConstraintSet::new();
    for line in text.lines() {
        if let Some(constraint) = decode_line(line, &mut registry) {
            set.push(constraint);
        }
    }
    set
}

/// Decode one line of the form `(assert (<ident> <op> <ident-or-int>))`.
fn decode_line(line: &str, registry: &mut VariableRegistry) -> Option<Constraint> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let inner = line.strip_prefix("(assert")?.strip_suffix(')')?;
    let tokens = Scanner::new(inner).tokenize()?;

    match tokens.as_slice() {
        [Token::LParen, Token::Ident(left), Token::Op(op), right, Token::RParen] => {
            let left = Operand::Var(registry.get_or_create(left));
            let right = match right {
                Token::Ident(name) => Operand::Var(registry.get_or_create(name)),
                Token::Int(value) => Operand::Literal(*value),
                _ => return None,
            };
            Some(Constraint::new(left, *op, right))
        }
        _ => None,
    }
}
