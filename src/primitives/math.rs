//! Integer arithmetic: `+` and `*`

use crate::error::Result;
use crate::parser::Expr;
use crate::primitives::{Primitive, PrimitiveRegistry};

/// Register the arithmetic primitives
pub fn register(registry: &mut PrimitiveRegistry) {
    registry.register(AddPrimitive);
    registry.register(MulPrimitive);
}

/// Reads the leading integer of `text` the way C `atoi` does
///
/// Leading whitespace and one sign are accepted, digits are read until the
/// first non-digit, and text without a digit prefix is `0`. Overflow wraps.
pub fn parse_integer(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.chars().next() {
        Some('-') => (true, &text[1..]),
        Some('+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    for d in digits.chars().map_while(|c| c.to_digit(10)) {
        value = value.wrapping_mul(10).wrapping_add(i64::from(d));
    }

    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Integer value of an operand; lists count as `0`
fn operand(expr: &Expr) -> i64 {
    expr.as_atom().map(parse_integer).unwrap_or(0)
}

/// `(+ 1 2 3)` => `6`
pub struct AddPrimitive;

impl Primitive for AddPrimitive {
    fn name(&self) -> &str {
        "+"
    }

    fn description(&self) -> &str {
        "Sum of integer operands"
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        let sum = args
            .iter()
            .map(operand)
            .fold(0i64, |acc, n| acc.wrapping_add(n));
        Ok(Expr::atom(sum.to_string()))
    }
}

/// `(* 2 3 4)` => `24`
pub struct MulPrimitive;

impl Primitive for MulPrimitive {
    fn name(&self) -> &str {
        "*"
    }

    fn description(&self) -> &str {
        "Product of integer operands"
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        let product = args
            .iter()
            .map(operand)
            .fold(1i64, |acc, n| acc.wrapping_mul(n));
        Ok(Expr::atom(product.to_string()))
    }
}
