//! Evaluation of parsed expressions

mod environment;
mod lisp_evaluator;
pub mod session;
pub mod substitution;

pub use environment::Environment;
pub use lisp_evaluator::LispEvaluator;
pub use session::{LineOutcome, Session};
