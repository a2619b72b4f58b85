use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{EvalConfig, SubstitutionStyle};
use crate::error::{Error, Result};
use crate::parser::ast::{DEF, IF, QUOTE};
use crate::parser::{try_parse, Expr};
use crate::primitives::PrimitiveRegistry;
use crate::runtime::substitution::substitute;
use crate::runtime::Environment;

/// Substitution-based evaluator
///
/// Handles the special forms directly and everything else by application:
/// - `(if cond then else)` - only `#t` selects the then-branch
/// - `(def name value)` - global definition, evaluates to `()`
/// - `(quote x)` - `x` unevaluated
/// - `(lambda (params...) body)` - self-evaluating lambda literal
///
/// Atoms evaluate to their definition when one exists and to themselves
/// otherwise. Lambda application rewrites the body with the argument values
/// instead of binding them in a scope, so the definitions table is the only
/// state that outlives a call.
pub struct LispEvaluator {
    /// Global definitions table
    env: Environment,
    /// Primitive library
    registry: Arc<PrimitiveRegistry>,
    /// Evaluation limits and substitution style
    config: EvalConfig,
    /// Current nesting of `evaluate_expression` calls
    depth: usize,
}

impl LispEvaluator {
    /// Creates an evaluator with the standard primitives and default config
    pub fn new() -> Self {
        Self::with_registry_and_config(PrimitiveRegistry::new(), EvalConfig::default())
    }

    /// Creates an evaluator with the standard primitives and custom config
    pub fn with_config(config: EvalConfig) -> Self {
        Self::with_registry_and_config(PrimitiveRegistry::new(), config)
    }

    /// Creates an evaluator with a custom primitive registry
    pub fn with_registry(registry: PrimitiveRegistry) -> Self {
        Self::with_registry_and_config(registry, EvalConfig::default())
    }

    pub fn with_registry_and_config(registry: PrimitiveRegistry, config: EvalConfig) -> Self {
        LispEvaluator {
            env: Environment::new(),
            registry: Arc::new(registry),
            config,
            depth: 0,
        }
    }

    /// Global definitions made so far
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn registry(&self) -> &PrimitiveRegistry {
        &self.registry
    }

    /// Forget all definitions
    pub fn reset(&mut self) {
        self.env.clear();
    }

    /// Evaluate `expr`, reporting failure as a `(badexpr <reason>)` value
    pub fn eval(&mut self, expr: &Expr) -> Expr {
        self.try_eval(expr).unwrap_or_else(|err| err.to_expr())
    }

    /// Evaluate `expr`, reporting failure as a tagged error
    pub fn try_eval(&mut self, expr: &Expr) -> Result<Expr> {
        self.depth = 0;
        self.evaluate_expression(expr)
    }

    /// Parse and evaluate `source`; parse and evaluation failures both render as `badexpr`
    pub fn eval_str(&mut self, source: &str) -> Expr {
        try_parse(source)
            .and_then(|expr| self.try_eval(&expr))
            .unwrap_or_else(|err| err.to_expr())
    }

    /// Evaluate a single expression, tracking nesting depth
    fn evaluate_expression(&mut self, expr: &Expr) -> Result<Expr> {
        if self.depth >= self.config.max_depth {
            tracing::warn!(limit = self.config.max_depth, "recursion limit reached");
            return Err(Error::RecursionLimit {
                limit: self.config.max_depth,
            });
        }

        self.depth += 1;
        let result = self.dispatch(expr);
        self.depth -= 1;
        result
    }

    fn dispatch(&mut self, expr: &Expr) -> Result<Expr> {
        let items = match expr {
            Expr::Atom(name) => {
                return Ok(self.env.get(name).cloned().unwrap_or_else(|| expr.clone()));
            }
            Expr::List(items) if items.is_empty() => return Ok(expr.clone()),
            Expr::List(items) => items,
        };

        match items[0].as_atom() {
            Some(IF) => self.eval_if(items),
            Some(DEF) => self.eval_def(items),
            Some(QUOTE) => self.eval_quote(items),
            _ if expr.is_lambda() => Ok(expr.clone()),
            _ => self.eval_application(items),
        }
    }

    /// (if cond then else)
    fn eval_if(&mut self, items: &[Expr]) -> Result<Expr> {
        if items.len() != 4 {
            return Err(Error::bad_argnum(IF));
        }

        let condition = self.evaluate_expression(&items[1])?;
        tracing::debug!(condition = %condition, "if");
        if condition.is_true() {
            self.evaluate_expression(&items[2])
        } else {
            self.evaluate_expression(&items[3])
        }
    }

    /// (def name value) - Bind name in the definitions table
    fn eval_def(&mut self, items: &[Expr]) -> Result<Expr> {
        if items.len() != 3 {
            return Err(Error::bad_argnum(DEF));
        }

        let name = items[1].as_atom().ok_or(Error::DefArgShouldBeAtom)?;
        let value = self.evaluate_expression(&items[2])?;
        tracing::debug!(name, value = %value, "def");
        self.env.define(name.to_string(), value);

        Ok(Expr::nil())
    }

    /// (quote x)
    fn eval_quote(&mut self, items: &[Expr]) -> Result<Expr> {
        if items.len() != 2 {
            return Err(Error::bad_argnum(QUOTE));
        }
        Ok(items[1].clone())
    }

    /// (op args...) - Lambda or primitive application
    fn eval_application(&mut self, items: &[Expr]) -> Result<Expr> {
        let operator = self.evaluate_expression(&items[0])?;
        let operands = &items[1..];

        if let Some((params, body)) = operator.lambda_parts() {
            return self.apply_lambda(&params, body, operands);
        }

        match operator {
            Expr::Atom(name) => {
                if !self.registry.has(&name) {
                    return Err(Error::UnknownOperator(name));
                }
                let args = self.evaluate_operands(operands)?;
                tracing::debug!(primitive = %name, argc = args.len(), "apply primitive");
                self.registry.call(&name, &args)
            }
            Expr::List(_) => Err(Error::OperatorNotAtomOrLambda),
        }
    }

    fn apply_lambda(&mut self, params: &[&str], body: &Expr, operands: &[Expr]) -> Result<Expr> {
        if params.len() != operands.len() {
            return Err(Error::ParamsArgsMismatch);
        }

        let args = self.evaluate_operands(operands)?;
        let bindings: HashMap<String, Expr> = params
            .iter()
            .zip(args)
            .map(|(param, value)| (param.to_string(), self.splice(value)))
            .collect();

        let body = substitute(body, &bindings);
        tracing::debug!(body = %body, "apply lambda");
        self.evaluate_expression(&body)
    }

    /// Evaluate operands left to right, stopping at the first failure
    fn evaluate_operands(&mut self, operands: &[Expr]) -> Result<Vec<Expr>> {
        operands
            .iter()
            .map(|operand| self.evaluate_expression(operand))
            .collect()
    }

    /// Form an argument value takes when written into a lambda body
    fn splice(&self, value: Expr) -> Expr {
        match self.config.substitution {
            SubstitutionStyle::Quoted => Expr::list(vec![Expr::atom(QUOTE), value]),
            SubstitutionStyle::Verbatim => value,
        }
    }
}

impl Default for LispEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
