//! Run-argument splitting
//!
//! A string whose first nested token is the `run` property keyword carries
//! its arguments in the same text. The string is re-lexed and split into the
//! property marker followed by the argument string.

use super::ParameterProcessor;
use crate::error::Result;
use crate::lexer::Relex;
use ezcmd_core::types::StringPropertyType;
use ezcmd_core::Parameter;
use std::sync::Arc;
use tracing::debug;

pub struct RunArgumentProcessor {
    relexer: Arc<dyn Relex>,
}

impl RunArgumentProcessor {
    pub fn new(relexer: Arc<dyn Relex>) -> Self {
        Self { relexer }
    }
}

impl ParameterProcessor for RunArgumentProcessor {
    fn name(&self) -> &'static str {
        "RunArgumentProcessor"
    }

    fn should_process(&self, parameter: &Parameter) -> bool {
        matches!(parameter, Parameter::String(_))
    }

    fn convert_next(&self, parameters: &mut Vec<Parameter>, index: usize) -> Result<usize> {
        let text = match &parameters[index] {
            Parameter::String(token)
                if matches!(
                    token.sub_tokens.first(),
                    Some(Parameter::StringProperty(StringPropertyType::Run))
                ) =>
            {
                token.value.clone()
            }
            _ => return Ok(index + 1),
        };

        debug!("Found run keyword at index {}", index);
        let arguments = self
            .relexer
            .relex(&text)
            .into_iter()
            .skip(1)
            .collect::<Vec<_>>()
            .join(" ");
        debug!("Arguments: ({})", arguments);

        parameters.splice(
            index..index + 1,
            [
                Parameter::StringProperty(StringPropertyType::Run),
                Parameter::string(arguments),
            ],
        );
        Ok(index + 2)
    }
}
