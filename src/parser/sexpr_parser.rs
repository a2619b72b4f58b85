use super::ast::Expr;
use crate::error::{Error, Result};

/// Deepest list nesting the parser accepts
pub const MAX_NESTING: usize = 1024;

/// Structural S-expression parser
///
/// The source is wrapped in one synthetic pair of brackets so that a bare
/// atom and a list go through the same stack machine. Scanning keeps a stack
/// of open lists and a buffer for the token being read; the first bracket
/// that empties the stack ends the scan. Positions in errors are indices
/// into the wrapped text.
pub struct SExprParser {
    /// Wrapped source as characters
    source: Vec<char>,
    /// Current position in `source`
    current: usize,
    /// Lists that are open at the current position
    stack: Vec<Vec<Expr>>,
    /// Characters of the atom being read
    token: String,
}

impl SExprParser {
    /// Creates a parser over `source`
    pub fn new(source: &str) -> Self {
        let mut wrapped = Vec::with_capacity(source.len() + 2);
        wrapped.push('(');
        wrapped.extend(source.chars());
        wrapped.push(')');

        SExprParser {
            source: wrapped,
            current: 0,
            stack: Vec::new(),
            token: String::new(),
        }
    }

    /// Parses the whole source into a single expression
    ///
    /// Empty input yields `()`. Errors carry the reason that the rendered
    /// `badexpr` value reports.
    pub fn parse(&mut self) -> Result<Expr> {
        let mut outer = None;

        while !self.is_at_end() {
            let c = self.advance();

            if c.is_whitespace() || c == '(' || c == ')' {
                self.flush_token()?;
            }

            match c {
                '(' => {
                    // the synthetic wrapper takes one level
                    if self.stack.len() > MAX_NESTING {
                        return Err(Error::NestingTooDeep { limit: MAX_NESTING });
                    }
                    self.stack.push(Vec::new());
                }
                ')' => {
                    let list = self.stack.pop().ok_or(Error::FailedAtPos(self.current))?;
                    match self.stack.last_mut() {
                        Some(parent) => parent.push(Expr::List(list)),
                        None => {
                            outer = Some(list);
                            break;
                        }
                    }
                }
                c if c.is_whitespace() => {}
                c => self.token.push(c),
            }
        }

        if !self.is_at_end() {
            return Err(Error::FailedAtPos(self.current));
        }
        if !self.stack.is_empty() {
            return Err(Error::ExtraBrackets);
        }

        let mut outer = outer.ok_or(Error::ExtraBrackets)?;
        if outer.len() > 1 {
            return Err(Error::MultipleAtoms);
        }
        Ok(outer.pop().unwrap_or_else(Expr::nil))
    }

    /// Appends the buffered token as an atom to the innermost open list
    fn flush_token(&mut self) -> Result<()> {
        if self.token.is_empty() {
            return Ok(());
        }
        let top = self
            .stack
            .last_mut()
            .ok_or(Error::FailedAtPos(self.current))?;
        let text = std::mem::take(&mut self.token);
        tracing::trace!(atom = %text, "flushed token");
        top.push(Expr::Atom(text));
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }
}

/// Parses `text`, reporting failures as a tagged error
pub fn try_parse(text: &str) -> Result<Expr> {
    SExprParser::new(text).parse()
}

/// Parses `text`, reporting failures as a `(badexpr <reason>)` expression
pub fn parse(text: &str) -> Expr {
    try_parse(text).unwrap_or_else(|err| err.to_expr())
}
