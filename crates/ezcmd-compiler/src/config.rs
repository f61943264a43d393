//! Compiler configuration

use crate::error::{CompileError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default limit on NOT/parenthesis nesting inside a condition
pub const DEFAULT_MAX_CONDITION_DEPTH: usize = 64;

/// Compiler options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerOptions {
    /// Names of the functions defined by the script being compiled
    pub functions: BTreeSet<String>,
    /// Nesting limit for condition resolution
    pub max_condition_depth: usize,
    /// Log the parameter kinds before and after every pass
    pub trace_parameters: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            functions: BTreeSet::new(),
            max_condition_depth: DEFAULT_MAX_CONDITION_DEPTH,
            trace_parameters: false,
        }
    }
}

impl CompilerOptions {
    /// Load options from a YAML document; missing keys keep their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| CompileError::InvalidOptions(e.to_string()))
    }

    /// Register a known function name
    pub fn with_function(mut self, name: impl Into<String>) -> Self {
        self.functions.insert(name.into());
        self
    }

    /// Set the condition nesting limit
    pub fn with_max_condition_depth(mut self, depth: usize) -> Self {
        self.max_condition_depth = depth;
        self
    }
}
