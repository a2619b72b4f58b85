//! Evaluator configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How argument values are spliced into a lambda body at application time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubstitutionStyle {
    /// Insert the bare value; it is evaluated again as part of the body
    #[default]
    Verbatim,
    /// Insert each value as `(quote <value>)` so the body sees it as data
    Quoted,
}

/// Configuration for [`LispEvaluator`](crate::runtime::LispEvaluator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EvalConfig {
    /// Maximum nesting of evaluation calls before `recursion-limit-exceeded`
    pub max_depth: usize,
    /// Argument splicing for lambda application
    pub substitution: SubstitutionStyle,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_depth: 256,
            substitution: SubstitutionStyle::Verbatim,
        }
    }
}

impl EvalConfig {
    /// Reads a configuration from JSON; missing fields keep their defaults
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Same configuration with a different depth limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Same configuration with a different substitution style
    pub fn with_substitution(mut self, substitution: SubstitutionStyle) -> Self {
        self.substitution = substitution;
        self
    }
}
