//! Iteration binding
//!
//! Binds the number in front of a loop marker as its loop count.

use super::ParameterProcessor;
use crate::error::{CompileError, Result};
use ezcmd_core::Parameter;
use tracing::debug;

#[derive(Debug, Default)]
pub struct IterationProcessor;

impl IterationProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl ParameterProcessor for IterationProcessor {
    fn name(&self) -> &'static str {
        "IterationProcessor"
    }

    fn should_process(&self, parameter: &Parameter) -> bool {
        matches!(parameter, Parameter::Iteration { .. })
    }

    fn convert_next(&self, parameters: &mut Vec<Parameter>, index: usize) -> Result<usize> {
        let value = match index.checked_sub(1).map(|i| &parameters[i]) {
            Some(Parameter::Numeric(value)) => *value,
            other => {
                return Err(CompileError::IterationRequiresPrecedingNumber {
                    position: index,
                    found: other.map_or("nothing", |p| p.kind_name()),
                })
            }
        };

        let loops = value.round_ties_even() as i32;
        if let Parameter::Iteration { count } = &mut parameters[index] {
            *count = Some(loops);
        }
        debug!("Loops: {}", loops);

        // The marker shifts down onto the removed number; resume right after it
        parameters.remove(index - 1);
        Ok(index)
    }
}
