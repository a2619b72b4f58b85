//! # minisexp - a minimal S-expression language
//!
//! A structural parser and a substitution-based evaluator for a tiny Lisp:
//! atoms, lists, `if`, `def`, `quote`, lambda literals and a handful of
//! primitives. There are no environments or closures; a lambda is applied
//! by rewriting its body with the argument values, and `def` writes to a
//! single global table.
//!
//! ## Quick Start
//!
//! ```rust
//! use minisexp::{Evaluator, parse};
//!
//! let mut evaluator = Evaluator::new();
//! evaluator.eval(&parse("(def double (lambda (x) (+ x x)))"));
//! let result = evaluator.eval(&parse("(double 5)"));
//! assert_eq!(result.to_string(), "10");
//! ```
//!
//! ## Errors are values
//!
//! Failures render as lists headed by `badexpr`, the same shape whether the
//! parser or the evaluator produced them:
//!
//! ```rust
//! use minisexp::Evaluator;
//!
//! let mut evaluator = Evaluator::new();
//! assert_eq!(
//!     evaluator.eval_str("(nosuchfn 1)").to_string(),
//!     "(badexpr unknown-operator-nosuchfn)"
//! );
//! assert_eq!(
//!     evaluator.eval_str("(+ 1 2").to_string(),
//!     "(badexpr extra-brackets?)"
//! );
//! ```
//!
//! Inside the crate a failure travels as [`Error`] in a [`Result`]; use
//! [`try_parse`] and [`LispEvaluator::try_eval`] to get the tagged form.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Parser → Expr → Evaluator → Expr → Display
//!                                  │
//!                     Environment ─┴─ PrimitiveRegistry
//! ```
//!
//! - [`parser`] - [`Expr`] tree, rendering, equality and the [`SExprParser`]
//! - [`runtime`] - [`LispEvaluator`], the definitions [`Environment`] and the
//!   line-oriented [`Session`]
//! - [`primitives`] - the [`Primitive`] trait and built-in operations
//! - [`config`] - [`EvalConfig`]
//! - [`error`] - [`Error`] and its `badexpr` rendering

/// Version of the minisexp crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod parser;
pub mod primitives;
pub mod runtime;

// Re-export main types
pub use config::{EvalConfig, SubstitutionStyle};
pub use error::{Error, Result};
pub use parser::{equal, parse, try_parse, Expr, SExprParser};
pub use primitives::{Primitive, PrimitiveRegistry};
pub use runtime::{Environment, LineOutcome, LispEvaluator, Session};

/// Type alias for the S-expression parser
pub type Parser = SExprParser;

/// Type alias for the evaluator
pub type Evaluator = LispEvaluator;
