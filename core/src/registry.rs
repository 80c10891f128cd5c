//! Variable handles and the per-request registry.
//!
//! A registry lives for exactly one verification request. Every operand
//! that names the same variable resolves through the registry to a handle
//! for the same registered entry.

use std::collections::HashMap;
use std::fmt;

/// An integer-valued variable, identified by name.
///
/// Handles are cheap to clone; two handles are equal when their names are
/// equal. Within one registry, all handles for a name refer to the same
/// registered entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
}

impl Variable {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The variable's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Deduplicates variable handles by name.
///
/// The first registration of a name fixes its position in any later
/// enumeration. There is no deletion; the registry lifetime equals one
/// request.
#[derive(Debug, Default)]
pub struct VariableRegistry {
    /// Name lookup into `vars`.
    by_name: HashMap<String, usize>,
    /// Registered variables in first-seen order.
    vars: Vec<Variable>,
}

impl VariableRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the handle for `name`, registering the variable on first sight.
    pub fn get_or_create(&mut self, name: &str) -> Variable {
        if let Some(&idx) = self.by_name.get(name) {
            return self.vars[idx].clone();
        }
        let var = Variable::new(name);
        self.by_name.insert(name.to_string(), self.vars.len());
        self.vars.push(var.clone());
        var
    }

    /// Get the handle for a registered name.
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.by_name.get(name).map(|&idx| &self.vars[idx])
    }

    /// Check whether a name has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of registered variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Registered variables in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.vars.iter()
    }

    /// Registered names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.iter().map(|v| v.name())
    }
}
