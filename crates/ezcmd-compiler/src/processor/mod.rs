//! Parameter processors
//!
//! Each processor makes one left-to-right pass over the parameter sequence,
//! replacing runs it recognises with a single reduced parameter. Later
//! processors rely on earlier ones having run, so the order returned by
//! [`standard_processors`] is significant.

pub mod action;
pub mod condition;
pub mod function;
pub mod iteration;
pub mod run_argument;
pub mod selector;

pub use action::ActionProcessor;
pub use condition::ConditionProcessor;
pub use function::FunctionProcessor;
pub use iteration::IterationProcessor;
pub use run_argument::RunArgumentProcessor;
pub use selector::SelectorProcessor;

use crate::config::CompilerOptions;
use crate::error::Result;
use crate::lexer::Relex;
use ezcmd_core::{HandlerRegistry, Parameter};
use std::sync::Arc;

/// A single reduction pass over the parameter sequence
pub trait ParameterProcessor: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Whether a reduction may start at this parameter
    fn should_process(&self, parameter: &Parameter) -> bool;

    /// Reduce the construct starting at `index`.
    ///
    /// Returns the index scanning resumes from. The sequence may have grown
    /// or shrunk; the returned cursor must account for that and must make
    /// progress through what remains.
    fn convert_next(&self, parameters: &mut Vec<Parameter>, index: usize) -> Result<usize>;

    /// Run the pass over the whole sequence
    fn process(&self, parameters: &mut Vec<Parameter>) -> Result<()> {
        let mut cursor = 0;
        while cursor < parameters.len() {
            if self.should_process(&parameters[cursor]) {
                cursor = self.convert_next(parameters, cursor)?;
            } else {
                cursor += 1;
            }
        }
        Ok(())
    }
}

/// The processors in pipeline order
pub fn standard_processors(
    options: &CompilerOptions,
    registry: Arc<dyn HandlerRegistry>,
    relexer: Arc<dyn Relex>,
) -> Vec<Box<dyn ParameterProcessor>> {
    vec![
        Box::new(SelectorProcessor::new()),
        Box::new(FunctionProcessor::new(options.functions.iter().cloned())),
        Box::new(RunArgumentProcessor::new(relexer)),
        Box::new(IterationProcessor::new()),
        Box::new(ConditionProcessor::new(registry, options.max_condition_depth)),
        Box::new(ActionProcessor::new()),
    ]
}
