//! Command grouping
//!
//! The last pass. Each maximal run of actionable parameters becomes one
//! `CommandReference`; the command kind is chosen by the highest-priority
//! marker in the run.

use super::ParameterProcessor;
use crate::error::{CompileError, Result};
use ezcmd_core::{Command, Parameter};
use tracing::debug;

type CommandBuilder = fn(Vec<Parameter>) -> Command;

/// Groups actionable runs into commands
#[derive(Debug, Default)]
pub struct ActionProcessor;

impl ActionProcessor {
    pub fn new() -> Self {
        Self
    }
}

/// Whether a parameter can take part in a command
pub fn is_actionable(parameter: &Parameter) -> bool {
    matches!(
        parameter,
        Parameter::Selector(_)
            | Parameter::Direction(_)
            | Parameter::Numeric(_)
            | Parameter::String(_)
            | Parameter::Boolean(_)
            | Parameter::NumericProperty(_)
            | Parameter::BooleanProperty(_)
            | Parameter::StringProperty(_)
            | Parameter::Reverse
            | Parameter::Relative
            | Parameter::Wait
            | Parameter::Unit(_)
            | Parameter::Control(_)
            | Parameter::Function(_)
            | Parameter::Listen
            | Parameter::Send
    )
}

/// Pick the command kind for a run, in priority order
fn classify(run: &[Parameter]) -> Option<CommandBuilder> {
    let has = |pred: fn(&Parameter) -> bool| run.iter().any(pred);

    if has(|p| matches!(p, Parameter::Function(_))) {
        Some(Command::Function)
    } else if has(|p| matches!(p, Parameter::Listen)) {
        Some(Command::Listen)
    } else if has(|p| matches!(p, Parameter::Send)) {
        Some(Command::Send)
    } else if has(|p| matches!(p, Parameter::Control(_))) {
        Some(Command::Control)
    } else if has(|p| matches!(p, Parameter::Wait)) {
        Some(Command::Wait)
    } else if has(|p| matches!(p, Parameter::Selector(_))) {
        Some(Command::Block)
    } else {
        None
    }
}

impl ParameterProcessor for ActionProcessor {
    fn name(&self) -> &'static str {
        "ActionProcessor"
    }

    fn should_process(&self, parameter: &Parameter) -> bool {
        is_actionable(parameter)
    }

    fn convert_next(&self, parameters: &mut Vec<Parameter>, index: usize) -> Result<usize> {
        let count = parameters[index..]
            .iter()
            .take_while(|p| is_actionable(p))
            .count();
        let end = index + count;

        let build = classify(&parameters[index..end])
            .ok_or(CompileError::UnknownCommandReference { position: index })?;

        let run: Vec<Parameter> = parameters.drain(index..end).collect();
        let command = build(run);
        debug!(
            "Grouped {} parameters at index {} into {}",
            count,
            index,
            command.kind_name()
        );
        parameters.insert(index, Parameter::CommandReference(command));

        Ok(index + 1)
    }
}
