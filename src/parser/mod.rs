//! Expression tree and structural parser
//!
//! Turns bracketed text into [`Expr`] trees. There is no separate lexer:
//! tokens are read by the same stack machine that builds the lists.

pub mod ast;
mod sexpr_parser;

pub use ast::{equal, Expr};
pub use sexpr_parser::{parse, try_parse, SExprParser, MAX_NESTING};
