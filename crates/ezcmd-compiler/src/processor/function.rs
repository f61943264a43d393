//! Function tagging
//!
//! Marks strings naming a script function by inserting a `Function` marker
//! in front of them.

use super::ParameterProcessor;
use crate::error::Result;
use ezcmd_core::types::FunctionType;
use ezcmd_core::Parameter;
use std::collections::HashSet;
use tracing::debug;

/// Inserts `Function(Goto)` before strings found in the function registry
#[derive(Debug, Default)]
pub struct FunctionProcessor {
    functions: HashSet<String>,
}

impl FunctionProcessor {
    pub fn new(functions: impl IntoIterator<Item = String>) -> Self {
        Self {
            functions: functions.into_iter().collect(),
        }
    }
}

impl ParameterProcessor for FunctionProcessor {
    fn name(&self) -> &'static str {
        "FunctionProcessor"
    }

    fn should_process(&self, parameter: &Parameter) -> bool {
        matches!(parameter, Parameter::String(_))
    }

    fn convert_next(&self, parameters: &mut Vec<Parameter>, index: usize) -> Result<usize> {
        let known = match &parameters[index] {
            Parameter::String(token) => self.functions.contains(&token.value),
            _ => false,
        };

        if !known {
            return Ok(index + 1);
        }

        debug!("Tagged function reference at index {}", index);
        parameters.insert(index, Parameter::Function(FunctionType::Goto));
        Ok(index + 2)
    }
}
