//! Structural primitives: `atom?`, `head`, `tail`, `cons`, `eq?`

use crate::error::{Error, Result};
use crate::parser::Expr;
use crate::primitives::{Primitive, PrimitiveRegistry};

/// Register the list primitives
pub fn register(registry: &mut PrimitiveRegistry) {
    registry.register(AtomPrimitive);
    registry.register(HeadPrimitive);
    registry.register(TailPrimitive);
    registry.register(ConsPrimitive);
    registry.register(EqPrimitive);
}

/// `(atom? x)` - `#t` when x is an atom
pub struct AtomPrimitive;

impl Primitive for AtomPrimitive {
    fn name(&self) -> &str {
        "atom?"
    }

    fn description(&self) -> &str {
        "Check if value is an atom"
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        Ok(Expr::boolean(args[0].is_atom()))
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}

/// `(head (a b c))` => `a`
pub struct HeadPrimitive;

impl Primitive for HeadPrimitive {
    fn name(&self) -> &str {
        "head"
    }

    fn description(&self) -> &str {
        "First element of a list"
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        match &args[0] {
            Expr::Atom(_) => Err(Error::HeadOfAtom),
            Expr::List(items) => items.first().cloned().ok_or(Error::HeadOfEmptyList),
        }
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}

/// `(tail (a b c))` => `(b c)`
pub struct TailPrimitive;

impl Primitive for TailPrimitive {
    fn name(&self) -> &str {
        "tail"
    }

    fn description(&self) -> &str {
        "All but the first element of a list"
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        match &args[0] {
            Expr::Atom(_) => Err(Error::TailOfAtom),
            Expr::List(items) => Ok(Expr::list(items.iter().skip(1).cloned().collect())),
        }
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}

/// `(cons a (b c))` => `(a b c)`, `(cons a b)` => `(a b)`
pub struct ConsPrimitive;

impl Primitive for ConsPrimitive {
    fn name(&self) -> &str {
        "cons"
    }

    fn description(&self) -> &str {
        "Prepend an element to a list"
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        let mut items = vec![args[0].clone()];
        match &args[1] {
            atom @ Expr::Atom(_) => items.push(atom.clone()),
            Expr::List(rest) => items.extend(rest.iter().cloned()),
        }
        Ok(Expr::list(items))
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }
}

/// `(eq? a b)` - structural equality
pub struct EqPrimitive;

impl Primitive for EqPrimitive {
    fn name(&self) -> &str {
        "eq?"
    }

    fn description(&self) -> &str {
        "Structural equality of two values"
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        Ok(Expr::boolean(args[0].structurally_equal(&args[1])))
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }
}
