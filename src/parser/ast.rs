use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical true atom
pub const TRUE: &str = "#t";
/// Canonical false atom
pub const FALSE: &str = "#f";

/// Special form keywords
pub const IF: &str = "if";
/// Definition keyword
pub const DEF: &str = "def";
/// Quotation keyword
pub const QUOTE: &str = "quote";
/// Lambda literal keyword
pub const LAMBDA: &str = "lambda";

/// A symbolic expression: either an atom or a list of expressions
///
/// Atoms carry non-empty token text (identifiers, numerals, `#t`, `#f`).
/// Lists may be empty. The tree is acyclic and owned; clones are deep.
///
/// The derived `PartialEq` is structural equality: atoms compare by text,
/// lists by length and element-wise in order, and an atom never equals a list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawExpr")]
pub enum Expr {
    /// Leaf token text
    Atom(String),
    /// Ordered sequence of sub-expressions
    List(Vec<Expr>),
}

/// Deserialized shape of [`Expr`] before atom text is checked
#[derive(Deserialize)]
enum RawExpr {
    Atom(String),
    List(Vec<Expr>),
}

impl TryFrom<RawExpr> for Expr {
    type Error = String;

    fn try_from(raw: RawExpr) -> Result<Self, Self::Error> {
        match raw {
            RawExpr::Atom(text) if text.is_empty() => Err("atom text is empty".to_string()),
            RawExpr::Atom(text)
                if text.chars().any(|c| c.is_whitespace() || c == '(' || c == ')') =>
            {
                Err(format!("atom text {text:?} is not a single token"))
            }
            RawExpr::Atom(text) => Ok(Expr::Atom(text)),
            RawExpr::List(items) => Ok(Expr::List(items)),
        }
    }
}

impl Expr {
    /// Creates an atom
    pub fn atom(text: impl Into<String>) -> Self {
        Expr::Atom(text.into())
    }

    /// Creates a list
    pub fn list(items: Vec<Expr>) -> Self {
        Expr::List(items)
    }

    /// The empty list `()`
    pub fn nil() -> Self {
        Expr::List(Vec::new())
    }

    /// `#t` or `#f`
    pub fn boolean(value: bool) -> Self {
        Expr::atom(if value { TRUE } else { FALSE })
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Expr::Atom(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Expr::List(_))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Expr::List(items) if items.is_empty())
    }

    /// Atom text, if this is an atom
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Expr::Atom(text) => Some(text),
            Expr::List(_) => None,
        }
    }

    /// List elements, if this is a list
    pub fn as_list(&self) -> Option<&[Expr]> {
        match self {
            Expr::Atom(_) => None,
            Expr::List(items) => Some(items),
        }
    }

    /// Text of the first element when this is a list headed by an atom
    pub fn head_atom(&self) -> Option<&str> {
        self.as_list()
            .and_then(|items| items.first())
            .and_then(Expr::as_atom)
    }

    /// True only for the atom `#t`
    pub fn is_true(&self) -> bool {
        self.as_atom() == Some(TRUE)
    }

    /// `Some(true)` for `#t`, `Some(false)` for `#f`, `None` for anything else
    pub fn as_bool(&self) -> Option<bool> {
        match self.as_atom() {
            Some(TRUE) => Some(true),
            Some(FALSE) => Some(false),
            _ => None,
        }
    }

    /// Structural equality, the same relation as `==`
    pub fn structurally_equal(&self, other: &Expr) -> bool {
        self == other
    }

    /// True when this list follows the `(badexpr reason...)` error-value convention
    pub fn is_bad_expr(&self) -> bool {
        self.head_atom() == Some(crate::error::BADEXPR)
    }

    /// Splits a lambda literal `(lambda (p1 p2 ...) body)` into parameter names and body
    ///
    /// Returns `None` unless the list has exactly three elements, starts with
    /// the atom `lambda`, and its second element is a list of atoms.
    pub fn lambda_parts(&self) -> Option<(Vec<&str>, &Expr)> {
        let items = self.as_list()?;
        if items.len() != 3 || items[0].as_atom() != Some(LAMBDA) {
            return None;
        }
        let params = items[1]
            .as_list()?
            .iter()
            .map(Expr::as_atom)
            .collect::<Option<Vec<_>>>()?;
        Some((params, &items[2]))
    }

    pub fn is_lambda(&self) -> bool {
        self.lambda_parts().is_some()
    }
}

/// Structural equality over two expressions
pub fn equal(a: &Expr, b: &Expr) -> bool {
    a.structurally_equal(b)
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Atom(text) => write!(f, "{}", text),
            Expr::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<&str> for Expr {
    fn from(text: &str) -> Self {
        Expr::atom(text)
    }
}

impl From<Vec<Expr>> for Expr {
    fn from(items: Vec<Expr>) -> Self {
        Expr::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ab() -> Expr {
        Expr::list(vec![Expr::atom("a"), Expr::atom("b")])
    }

    #[test]
    fn test_render() {
        assert_eq!(Expr::atom("x").to_string(), "x");
        assert_eq!(Expr::nil().to_string(), "()");
        let nested = Expr::list(vec![Expr::atom("+"), ab(), Expr::nil()]);
        assert_eq!(nested.to_string(), "(+ (a b) ())");
    }

    #[test]
    fn test_equality() {
        assert!(equal(&ab(), &ab()));
        assert!(!equal(&ab(), &Expr::list(vec![Expr::atom("a")])));
        // an atom never equals a one-element list rendering the same text
        let a = Expr::atom("a");
        let wrapped = Expr::list(vec![Expr::atom("a")]);
        assert!(!equal(&a, &wrapped));
        assert!(!equal(&wrapped, &a));
        assert!(equal(&Expr::nil(), &Expr::nil()));
    }

    #[test]
    fn test_booleans() {
        assert!(Expr::boolean(true).is_true());
        assert_eq!(Expr::boolean(false).as_bool(), Some(false));
        assert_eq!(Expr::atom("yes").as_bool(), None);
        assert_eq!(ab().as_bool(), None);
    }

    #[test]
    fn test_lambda_parts() {
        let lambda = Expr::list(vec![
            Expr::atom(LAMBDA),
            Expr::list(vec![Expr::atom("x"), Expr::atom("y")]),
            Expr::atom("x"),
        ]);
        let (params, body) = lambda.lambda_parts().unwrap();
        assert_eq!(params, vec!["x", "y"]);
        assert_eq!(body, &Expr::atom("x"));

        // parameter list must hold atoms only
        let bad = Expr::list(vec![
            Expr::atom(LAMBDA),
            Expr::list(vec![ab()]),
            Expr::atom("x"),
        ]);
        assert!(!bad.is_lambda());
        // parameters must be a list
        let bad = Expr::list(vec![Expr::atom(LAMBDA), Expr::atom("x"), Expr::atom("x")]);
        assert!(!bad.is_lambda());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&ab()).unwrap();
        assert_eq!(json, r#"{"List":[{"Atom":"a"},{"Atom":"b"}]}"#);
        let back: Expr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ab());
    }

    #[test]
    fn test_deserialize_rejects_malformed_atoms() {
        assert!(serde_json::from_str::<Expr>(r#"{"Atom":""}"#).is_err());
        assert!(serde_json::from_str::<Expr>(r#"{"List":[{"Atom":""}]}"#).is_err());
        assert!(serde_json::from_str::<Expr>(r#"{"Atom":"a b"}"#).is_err());
        assert!(serde_json::from_str::<Expr>(r#"{"Atom":"(a"}"#).is_err());
        assert_eq!(
            serde_json::from_str::<Expr>(r#"{"List":[]}"#).unwrap(),
            Expr::nil()
        );
    }
}
