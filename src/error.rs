//! Error types for the minisexp parser and evaluator
//!
//! Every variant's `Display` text is the reason atom that appears in the
//! rendered error value, so `(badexpr unknown-operator-foo)` is just
//! `Error::UnknownOperator("foo".into()).to_expr()` printed.

use thiserror::Error;

use crate::parser::Expr;

/// Head atom of every rendered error value
pub const BADEXPR: &str = "badexpr";

/// Parser and evaluator errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Parse errors
    /// Input could not be consumed past a given position
    ///
    /// The position indexes the input wrapped in one pair of brackets, so it
    /// points at the first character left unread.
    ///
    /// **Triggered by:** text after the closing bracket of a complete form
    /// **Example:** `(+ 1 2))` reports position 9
    #[error("failed-at-pos:{0}")]
    FailedAtPos(usize),

    /// More opening than closing brackets
    ///
    /// **Triggered by:** input that is not finished yet
    /// **Example:** `(+ 1 2`
    /// **Recovery:** the read loop asks for another line and re-parses
    #[error("extra-brackets?")]
    ExtraBrackets,

    /// More than one top-level form in a single input
    ///
    /// **Example:** `a b`, `(a) (b)`
    #[error("multiple-atoms")]
    MultipleAtoms,

    /// Lists nested deeper than the parser accepts
    #[error("nesting-too-deep")]
    NestingTooDeep {
        /// Nesting limit that was hit
        limit: usize,
    },

    // Runtime errors
    /// Wrong number of operands for a special form or primitive
    ///
    /// **Example:** `(atom? 1 2)`, `(if #t 1)`
    #[error("bad-argnum-for-{0}")]
    BadArgnum(String),

    /// `def` given a List where a name was expected
    #[error("def-arg-should-be-atom")]
    DefArgShouldBeAtom,

    /// Lambda applied to the wrong number of arguments
    #[error("params-size-args-size-mismatch")]
    ParamsArgsMismatch,

    /// Operator atom names neither a primitive nor a definition
    #[error("unknown-operator-{0}")]
    UnknownOperator(String),

    /// Operator position evaluated to a List that is not a lambda literal
    #[error("operator-not-atom-or-lambda")]
    OperatorNotAtomOrLambda,

    /// Boolean primitive given something other than `#t` or `#f`
    #[error("not-boolean")]
    NotBoolean,

    /// `head` of an Atom
    #[error("head-of-atom")]
    HeadOfAtom,

    /// `head` of `()`
    #[error("head-of-empty-list")]
    HeadOfEmptyList,

    /// `tail` of an Atom
    #[error("tail-of-atom")]
    TailOfAtom,

    /// Evaluation nested deeper than the configured limit
    ///
    /// **Triggered by:** unbounded recursion such as `(def f (lambda (x) (f x)))` then `(f 1)`
    #[error("recursion-limit-exceeded")]
    RecursionLimit {
        /// Depth limit that was hit
        limit: usize,
    },

    // Configuration
    /// Configuration text could not be decoded
    #[error("invalid-config")]
    InvalidConfig(String),
}

impl Error {
    /// Create a `bad-argnum-for-<form>` error
    pub fn bad_argnum(form: impl Into<String>) -> Self {
        Error::BadArgnum(form.into())
    }

    /// True when the input was structurally unfinished rather than wrong
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Error::ExtraBrackets)
    }

    /// True for failures produced by the parser
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::FailedAtPos(_)
                | Error::ExtraBrackets
                | Error::MultipleAtoms
                | Error::NestingTooDeep { .. }
        )
    }

    /// Render as the `(badexpr <reason>)` error value
    pub fn to_expr(&self) -> Expr {
        Expr::list(vec![Expr::atom(BADEXPR), Expr::atom(self.to_string())])
    }
}

/// Result type for minisexp operations
pub type Result<T> = std::result::Result<T, Error>;
