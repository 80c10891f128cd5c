//! Constraint types.
//!
//! A constraint compares a left operand against a right operand with one
//! of five integer comparison operators. A ConstraintSet is an ordered
//! conjunction: order is construction order, which keeps textual output
//! deterministic and diffable.

use crate::{Variable, VariableRegistry};
use std::fmt;

/// Comparison operator of an arithmetic constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `==`
    Eq,
}

impl Operator {
    /// Map an operator token to its variant.
    ///
    /// Tokens outside the five supported symbols yield `None`; callers
    /// drop the surrounding constraint instead of erroring.
    pub fn from_symbol(token: &str) -> Option<Operator> {
        match token {
            ">=" => Some(Operator::Ge),
            "<=" => Some(Operator::Le),
            ">" => Some(Operator::Gt),
            "<" => Some(Operator::Lt),
            "==" => Some(Operator::Eq),
            // `!=`, `=`, words, anything else: unsupported, drop.
            _ => None,
        }
    }

    /// The textual symbol of this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Eq => "==",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Either a literal integer or a reference to a registered variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A signed integer literal.
    Literal(i64),
    /// A reference to a variable registered for this request.
    Var(Variable),
}

impl Operand {
    /// Resolve a raw token: a token that parses as a signed decimal
    /// integer becomes a literal, anything else is registered as a
    /// variable reference.
    pub fn resolve(token: &str, registry: &mut VariableRegistry) -> Operand {
        match token.parse::<i64>() {
            Ok(value) => Operand::Literal(value),
            Err(_) => Operand::Var(registry.get_or_create(token)),
        }
    }

    /// Get the literal value if this is a literal.
    pub fn as_literal(&self) -> Option<i64> {
        match self {
            Operand::Literal(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the variable if this is a variable reference.
    pub fn as_var(&self) -> Option<&Variable> {
        match self {
            Operand::Var(var) => Some(var),
            _ => None,
        }
    }

    /// True if this is a variable reference.
    pub fn is_var(&self) -> bool {
        matches!(self, Operand::Var(_))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(value) => write!(f, "{}", value),
            Operand::Var(var) => write!(f, "{}", var),
        }
    }
}

/// A single arithmetic constraint `left <op> right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub left: Operand,
    pub op: Operator,
    pub right: Operand,
}

impl Constraint {
    /// Create a constraint.
    pub fn new(left: Operand, op: Operator, right: Operand) -> Self {
        Self { left, op, right }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.op, self.right)
    }
}

/// Ordered conjunction of constraints.
///
/// Immutable once solving begins; constructed fresh per request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a constraint, preserving insertion order.
    pub fn push(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Number of constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// True if the set holds no constraints.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Constraints in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    /// The constraints as a slice.
    pub fn as_slice(&self) -> &[Constraint] {
        &self.constraints
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        Self {
            constraints: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
