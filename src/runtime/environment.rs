use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::parser::Expr;

/// Global definitions table
///
/// Maps a name to the expression it was last `def`-ined as. There is a
/// single flat scope: lambda parameters never live here, they are
/// substituted into the body before it is evaluated.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Evaluated values by name
    definitions: HashMap<String, Expr>,
}

impl Environment {
    /// Creates an empty table
    pub fn new() -> Self {
        Environment {
            definitions: HashMap::new(),
        }
    }

    /// Binds `name`, replacing any earlier definition
    pub fn define(&mut self, name: String, value: Expr) {
        self.definitions.insert(name, value);
    }

    /// Value bound to `name`, if any
    pub fn get(&self, name: &str) -> Option<&Expr> {
        self.definitions.get(name)
    }

    /// Checks if a name is defined
    pub fn exists(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Defined names in sorted order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.definitions.keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns a sorted copy of every definition
    pub fn snapshot(&self) -> BTreeMap<String, Expr> {
        self.definitions
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Forgets every definition
    pub fn clear(&mut self) {
        self.definitions.clear();
    }
}
