//! Parameter substitution for lambda application
//!
//! A lambda body is rewritten with every free occurrence of a parameter
//! replaced by its argument. The walk descends into every list, `quote`
//! forms included. A nested lambda literal that re-binds a name hides that
//! name from the outer substitution for its whole extent.

use std::collections::HashMap;

use crate::parser::Expr;

/// Rewrites `body`, replacing atoms named in `bindings` with their values
pub fn substitute(body: &Expr, bindings: &HashMap<String, Expr>) -> Expr {
    if bindings.is_empty() {
        return body.clone();
    }

    match body {
        Expr::Atom(name) => bindings.get(name).cloned().unwrap_or_else(|| body.clone()),
        Expr::List(items) => {
            if let Some((params, _)) = body.lambda_parts() {
                if params.iter().any(|p| bindings.contains_key(*p)) {
                    let visible: HashMap<String, Expr> = bindings
                        .iter()
                        .filter(|(name, _)| !params.contains(&name.as_str()))
                        .map(|(name, value)| (name.clone(), value.clone()))
                        .collect();
                    tracing::trace!(
                        shadowed = params.len(),
                        remaining = visible.len(),
                        "inner lambda shadows parameters"
                    );
                    return substitute(body, &visible);
                }
            }
            Expr::List(items.iter().map(|item| substitute(item, bindings)).collect())
        }
    }
}
