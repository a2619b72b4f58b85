//! Primitive library
//!
//! Built-in operations applied to already-evaluated arguments. The registry
//! checks fixed arities before calling a primitive, so implementations can
//! index their arguments directly.

pub mod lists;
pub mod logic;
pub mod math;

use crate::error::{Error, Result};
use crate::parser::Expr;
use std::collections::HashMap;
use std::sync::Arc;

/// Primitive trait - every built-in operation implements this
pub trait Primitive: Send + Sync {
    /// Operator name as written in source
    fn name(&self) -> &str;

    /// Short description
    fn description(&self) -> &str;

    /// Apply the primitive to evaluated arguments
    fn execute(&self, args: &[Expr]) -> Result<Expr>;

    /// Required argument count, `None` for variadic
    fn arity(&self) -> Option<usize> {
        None
    }
}

/// Named primitives available to the evaluator
pub struct PrimitiveRegistry {
    primitives: HashMap<String, Arc<dyn Primitive>>,
}

impl PrimitiveRegistry {
    /// Create new registry with the standard primitives
    pub fn new() -> Self {
        let mut registry = PrimitiveRegistry::empty();

        lists::register(&mut registry);
        logic::register(&mut registry);
        math::register(&mut registry);

        registry
    }

    /// Create empty registry
    pub fn empty() -> Self {
        PrimitiveRegistry {
            primitives: HashMap::new(),
        }
    }

    /// Register a primitive, replacing one with the same name
    pub fn register<P: Primitive + 'static>(&mut self, primitive: P) {
        let name = primitive.name().to_string();
        self.primitives.insert(name, Arc::new(primitive));
    }

    /// Get primitive by name
    pub fn get(&self, name: &str) -> Result<Arc<dyn Primitive>> {
        self.primitives
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownOperator(name.to_string()))
    }

    /// Check if primitive exists
    pub fn has(&self, name: &str) -> bool {
        self.primitives.contains_key(name)
    }

    /// Look up `name`, check its arity and apply it
    pub fn call(&self, name: &str, args: &[Expr]) -> Result<Expr> {
        let primitive = self.get(name)?;
        if let Some(arity) = primitive.arity() {
            if args.len() != arity {
                return Err(Error::bad_argnum(name));
            }
        }
        primitive.execute(args)
    }

    /// List all primitive names
    pub fn list_primitives(&self) -> Vec<String> {
        let mut names: Vec<_> = self.primitives.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get primitive count
    pub fn count(&self) -> usize {
        self.primitives.len()
    }
}

impl Default for PrimitiveRegistry {
    fn default() -> Self {
        Self::new()
    }
}
