//! Line-oriented read loop state
//!
//! A [`Session`] receives input one line at a time. Lines are accumulated
//! while the text so far has unclosed brackets; once the text parses (or
//! fails for any other reason) it is evaluated and the pending buffer is
//! cleared. The binary drives a session from an editor or a file, tests
//! drive it directly.

use crate::parser::ast::Expr;
use crate::parser::try_parse;
use crate::runtime::LispEvaluator;

/// Keyword that ends a session when typed alone on a line
pub const EXIT: &str = "exit";

/// What a session did with one input line
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Blank line outside a continuation
    Skipped,
    /// Brackets are still open; more input is needed
    Incomplete,
    /// The accumulated input was evaluated (or failed to parse) to this value
    Evaluated(Expr),
    /// `exit` or `(exit)` was entered
    Exit,
}

/// Read loop state: an evaluator plus any unfinished input
pub struct Session {
    evaluator: LispEvaluator,
    pending: String,
}

impl Session {
    /// Creates a session with a default evaluator
    pub fn new() -> Self {
        Self::with_evaluator(LispEvaluator::new())
    }

    pub fn with_evaluator(evaluator: LispEvaluator) -> Self {
        Session {
            evaluator,
            pending: String::new(),
        }
    }

    pub fn evaluator(&self) -> &LispEvaluator {
        &self.evaluator
    }

    pub fn evaluator_mut(&mut self) -> &mut LispEvaluator {
        &mut self.evaluator
    }

    /// True while earlier lines are waiting for their closing brackets
    pub fn is_continuing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drops unfinished input, returning it
    pub fn cancel_pending(&mut self) -> String {
        std::mem::take(&mut self.pending)
    }

    /// Feeds one line of input
    pub fn feed_line(&mut self, line: &str) -> LineOutcome {
        if self.pending.is_empty() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return LineOutcome::Skipped;
            }
            if trimmed == EXIT {
                return LineOutcome::Exit;
            }
            self.pending.push_str(line);
        } else {
            self.pending.push(' ');
            self.pending.push_str(line);
        }

        let expr = match try_parse(&self.pending) {
            Err(err) if err.is_incomplete() => {
                tracing::trace!(pending = %self.pending, "waiting for closing brackets");
                return LineOutcome::Incomplete;
            }
            Err(err) => {
                self.pending.clear();
                return LineOutcome::Evaluated(err.to_expr());
            }
            Ok(expr) => {
                self.pending.clear();
                expr
            }
        };

        if is_exit_form(&expr) {
            return LineOutcome::Exit;
        }
        LineOutcome::Evaluated(self.evaluator.eval(&expr))
    }

    /// Reports input left unfinished at end of stream, clearing it
    pub fn finish(&mut self) -> Option<Expr> {
        if self.pending.is_empty() {
            return None;
        }
        let pending = self.cancel_pending();
        try_parse(&pending).err().map(|err| err.to_expr())
    }

    /// Feeds every line of `source`, collecting the values until `exit` or the end
    pub fn run_source(&mut self, source: &str) -> Vec<Expr> {
        let mut results = Vec::new();
        for line in source.lines() {
            match self.feed_line(line) {
                LineOutcome::Evaluated(value) => results.push(value),
                LineOutcome::Exit => return results,
                LineOutcome::Skipped | LineOutcome::Incomplete => {}
            }
        }
        results.extend(self.finish());
        results
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn is_exit_form(expr: &Expr) -> bool {
    *expr == Expr::list(vec![Expr::atom(EXIT)])
}
