//! Boolean primitives over the literal atoms `#t` and `#f`
//!
//! Any other operand is rejected with `not-boolean`; there is no implicit
//! truthiness here. `if` is the one place that treats every non-`#t` value
//! as false.

use crate::error::{Error, Result};
use crate::parser::Expr;
use crate::primitives::{Primitive, PrimitiveRegistry};

/// Register the boolean primitives
pub fn register(registry: &mut PrimitiveRegistry) {
    registry.register(AndPrimitive);
    registry.register(OrPrimitive);
    registry.register(NotPrimitive);
}

fn booleans(args: &[Expr]) -> Result<Vec<bool>> {
    args.iter()
        .map(|arg| arg.as_bool().ok_or(Error::NotBoolean))
        .collect()
}

/// `(and #t #f ...)` - `#t` when every operand is `#t`
pub struct AndPrimitive;

impl Primitive for AndPrimitive {
    fn name(&self) -> &str {
        "and"
    }

    fn description(&self) -> &str {
        "Logical AND"
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        Ok(Expr::boolean(booleans(args)?.into_iter().all(|b| b)))
    }
}

/// `(or #t #f ...)` - `#t` when some operand is `#t`
pub struct OrPrimitive;

impl Primitive for OrPrimitive {
    fn name(&self) -> &str {
        "or"
    }

    fn description(&self) -> &str {
        "Logical OR"
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        Ok(Expr::boolean(booleans(args)?.into_iter().any(|b| b)))
    }
}

/// `(not #t)` => `#f`
pub struct NotPrimitive;

impl Primitive for NotPrimitive {
    fn name(&self) -> &str {
        "not"
    }

    fn description(&self) -> &str {
        "Logical NOT"
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        let value = args[0].as_bool().ok_or(Error::NotBoolean)?;
        Ok(Expr::boolean(!value))
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}
