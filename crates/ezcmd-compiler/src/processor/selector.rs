//! Selector folding
//!
//! Merges a contiguous run of `Group`, `String`, `BlockType` and `Index`
//! parameters into one `Selector`.

use super::ParameterProcessor;
use crate::error::{CompileError, Result};
use ezcmd_core::ast::StringToken;
use ezcmd_core::{Parameter, Selector};
use tracing::debug;

/// Folds selector runs into `Parameter::Selector`
#[derive(Debug, Default)]
pub struct SelectorProcessor;

impl SelectorProcessor {
    pub fn new() -> Self {
        Self
    }
}

/// Fold the selector run at the start of `run`.
///
/// Returns how many parameters the run spans and the selector, or `None`
/// when the run is not a selector at all (no block type, explicit or
/// nested in the identifier). Within the run the first string and the first
/// block type win; every index overrides the previous one. `position` is
/// only used for error reporting.
pub fn fold_selector(run: &[Parameter], position: usize) -> Result<(usize, Option<Selector>)> {
    let mut is_group = false;
    let mut identifier: Option<&StringToken> = None;
    let mut block_type = None;
    let mut index = None;
    let mut count = 0;

    for param in run {
        match param {
            Parameter::Group => is_group = true,
            Parameter::String(token) if identifier.is_none() => identifier = Some(token),
            Parameter::BlockType(b) if block_type.is_none() => block_type = Some(*b),
            Parameter::Index(i) => index = Some(*i),
            _ => break,
        }
        count += 1;
    }

    let identifier = identifier.ok_or(CompileError::MissingSelectorIdentifier { position })?;

    let block_type = match block_type {
        Some(b) => b,
        None => {
            // Most recent type keyword inside the identifier wins
            let nested = identifier.sub_tokens.iter().rev().find_map(|t| match t {
                Parameter::BlockType(b) => Some(*b),
                _ => None,
            });
            let Some(nested) = nested else {
                return Ok((count, None));
            };
            if identifier.sub_tokens.iter().any(|t| matches!(t, Parameter::Group)) {
                is_group = true;
            }
            nested
        }
    };

    Ok((
        count,
        Some(Selector {
            block_type,
            is_group,
            name: identifier.value.clone(),
            index,
        }),
    ))
}

impl ParameterProcessor for SelectorProcessor {
    fn name(&self) -> &'static str {
        "SelectorProcessor"
    }

    fn should_process(&self, parameter: &Parameter) -> bool {
        matches!(
            parameter,
            Parameter::Group | Parameter::String(_) | Parameter::BlockType(_) | Parameter::Index(_)
        )
    }

    fn convert_next(&self, parameters: &mut Vec<Parameter>, index: usize) -> Result<usize> {
        let (count, selector) = fold_selector(&parameters[index..], index)?;

        if let Some(selector) = selector {
            debug!("Converted String at index {} to Selector '{}'", index, selector.name);
            parameters.splice(index..index + count, std::iter::once(Parameter::Selector(selector)));
        }

        Ok(index + 1)
    }
}
