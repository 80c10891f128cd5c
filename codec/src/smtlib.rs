//! One-way SMT-LIB v2 export.
//!
//! For handing a constraint set to a standard solver front end. Not part
//! of the round-trip codec: the canonical infix form is `encode`/`decode`.

use std::collections::HashSet;

use verdict_core::{ConstraintSet, Operand, Operator};

/// Render a constraint set as an SMT-LIB v2 script over integer
/// arithmetic.
///
/// Each variable is declared once, at its first appearance. Assertions
/// use prefix form, with `==` rendered as `=`.
pub fn to_smt_lib(set: &ConstraintSet) -> String {
    let mut script = String::from("(set-logic QF_LIA)\n(set-option :produce-models true)\n\n");
    let mut declared: HashSet<String> = HashSet::new();

    for constraint in set {
        declare_operand(&constraint.left, &mut script, &mut declared);
        declare_operand(&constraint.right, &mut script, &mut declared);
        script.push_str(&format!(
            "(assert ({} {} {}))\n",
            smt_symbol(constraint.op),
            constraint.left,
            constraint.right
        ));
    }

    script.push_str("\n(check-sat)\n(get-model)\n");
    script
}

fn declare_operand(operand: &Operand, script: &mut String, declared: &mut HashSet<String>) {
    if let Operand::Var(var) = operand {
        if declared.insert(var.name().to_string()) {
            script.push_str(&format!("(declare-const {} Int)\n", var));
        }
    }
}

fn smt_symbol(op: Operator) -> &'static str {
    match op {
        Operator::Ge => ">=",
        Operator::Le => "<=",
        Operator::Gt => ">",
        Operator::Lt => "<",
        Operator::Eq => "=",
    }
}
