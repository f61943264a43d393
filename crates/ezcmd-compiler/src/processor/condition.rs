//! Condition resolution
//!
//! Runs after an `If` marker in two phases:
//!
//! 1. **Parse**: every block-condition run (selector, comparator,
//!    aggregation mode, property, value, inline `Not`s) is folded into a
//!    `Condition` parameter. Leading `Not` and `(` tokens are skipped and
//!    left for the second phase; trailing `)` tokens are skipped, and an
//!    `And`/`Or` moves on to the next run.
//! 2. **Resolve**: `Not`, parentheses, `And` and `Or` are folded around the
//!    parsed conditions until one `Condition` remains after the `If`.
//!
//! `And` and `Or` share one precedence level and fold strictly left to
//! right, so `a OR b AND c` is `(a OR b) AND c`.

use super::ParameterProcessor;
use crate::error::{CompileError, Result};
use ezcmd_core::types::{cast_boolean, cast_number, cast_string, AggregationMode, ComparisonType};
use ezcmd_core::{BlockHandler, Condition, HandlerRegistry, Parameter, Primitive, Selector};
use std::sync::Arc;
use tracing::debug;

pub struct ConditionProcessor {
    registry: Arc<dyn HandlerRegistry>,
    max_depth: usize,
}

/// Parameters bound while scanning one block-condition run
#[derive(Debug, Default)]
struct ConditionRun {
    selector: Option<Selector>,
    comparator: Option<ComparisonType>,
    aggregation: Option<AggregationMode>,
    property: Option<Parameter>,
    value: Option<Primitive>,
    inverse_aggregation: bool,
    inverse_block_condition: bool,
    count: usize,
}

impl ConditionRun {
    /// Scan the run at the start of `params`, first occurrence of each kind
    /// wins
    fn scan(params: &[Parameter]) -> Self {
        let mut run = ConditionRun::default();

        for param in params {
            match param {
                Parameter::Selector(s) if run.selector.is_none() => run.selector = Some(s.clone()),
                Parameter::Comparison(c) if run.comparator.is_none() => run.comparator = Some(*c),
                Parameter::AggregationMode(m) if run.aggregation.is_none() => {
                    run.aggregation = Some(*m)
                }
                p if p.is_property() && run.property.is_none() => run.property = Some(p.clone()),
                p if p.is_primitive() && run.value.is_none() => run.value = p.as_primitive(),
                Parameter::Not => {
                    if run.aggregation.is_some() || run.selector.is_some() {
                        run.inverse_block_condition = !run.inverse_block_condition;
                    } else {
                        run.inverse_aggregation = !run.inverse_aggregation;
                    }
                }
                _ => break,
            }
            run.count += 1;
        }

        run
    }
}

fn into_condition(parameter: Parameter, position: usize) -> Result<Condition> {
    match parameter {
        Parameter::Condition(condition) => Ok(condition),
        other => Err(CompileError::InvalidConditionToken {
            position,
            found: other.kind_name(),
        }),
    }
}

/// Build the block condition for a run.
///
/// The condition kind follows the bound property when there is one, else the
/// bound value; the value is coerced to that kind.
fn block_condition(
    handler: &dyn BlockHandler,
    property: Option<&Parameter>,
    value: Option<&Primitive>,
    comparator: ComparisonType,
    position: usize,
) -> Result<Condition> {
    let block_type = handler.block_type();
    let missing_value = CompileError::MissingConditionValue { position };

    match (property, value) {
        (Some(Parameter::BooleanProperty(_)), _) | (None, Some(Primitive::Boolean(_))) => {
            let property = match property {
                Some(Parameter::BooleanProperty(p)) => *p,
                _ => handler.default_boolean_property(),
            };
            let value = value.map(cast_boolean).transpose()?.unwrap_or(true);
            debug!("Boolean condition on {:?}", property);
            Ok(Condition::BooleanBlock {
                block_type,
                property,
                comparator,
                value,
            })
        }
        (Some(Parameter::StringProperty(_)), _) | (None, Some(Primitive::String(_))) => {
            let property = match property {
                Some(Parameter::StringProperty(p)) => *p,
                _ => handler.default_string_property(),
            };
            let value = value.map(cast_string).ok_or(missing_value)?;
            debug!("String condition on {:?}", property);
            Ok(Condition::StringBlock {
                block_type,
                property,
                comparator,
                value,
            })
        }
        (Some(Parameter::NumericProperty(_)), _) | (None, Some(Primitive::Number(_))) => {
            let property = match property {
                Some(Parameter::NumericProperty(p)) => *p,
                _ => handler.default_numeric_property(handler.default_direction()),
            };
            let value = cast_number(value.ok_or(missing_value)?)?;
            debug!("Numeric condition on {:?}", property);
            Ok(Condition::NumericBlock {
                block_type,
                property,
                comparator,
                value,
            })
        }
        _ => Err(missing_value),
    }
}

impl ConditionProcessor {
    pub fn new(registry: Arc<dyn HandlerRegistry>, max_depth: usize) -> Self {
        Self {
            registry,
            max_depth,
        }
    }

    /// Phase 1: fold every block-condition run reachable from `index`
    fn parse_condition_tokens(&self, params: &mut Vec<Parameter>, mut index: usize) -> Result<()> {
        loop {
            while matches!(params.get(index), Some(Parameter::Not | Parameter::OpenParen)) {
                index += 1;
            }

            self.parse_block_condition(params, index)?;

            let mut next = index + 1;
            while matches!(params.get(next), Some(Parameter::CloseParen)) {
                next += 1;
            }

            match params.get(next) {
                Some(Parameter::And | Parameter::Or) if next + 1 < params.len() => {
                    debug!("Next token after condition is {}, continuing", params[next].kind_name());
                    index = next + 1;
                }
                _ => return Ok(()),
            }
        }
    }

    /// Replace the run at `index` with one `Condition` parameter
    fn parse_block_condition(&self, params: &mut Vec<Parameter>, index: usize) -> Result<()> {
        let run = ConditionRun::scan(params.get(index..).unwrap_or_default());

        let selector = run
            .selector
            .ok_or(CompileError::MissingConditionSelector { position: index })?;
        if run.value.is_none() && run.property.is_none() {
            return Err(CompileError::MissingConditionValue { position: index });
        }

        let handler = self
            .registry
            .get_handler(selector.block_type)
            .ok_or(CompileError::MissingBlockHandler(selector.block_type))?;

        let mut condition = block_condition(
            handler,
            run.property.as_ref(),
            run.value.as_ref(),
            run.comparator.unwrap_or_default(),
            index,
        )?;
        if run.inverse_block_condition {
            condition = Condition::not(condition);
        }

        let mut condition = Condition::aggregate(
            run.aggregation.unwrap_or_default(),
            condition,
            handler.entity_provider(&selector),
        );
        if run.inverse_aggregation {
            condition = Condition::not(condition);
        }

        debug!(
            "Parsed condition at index {} from {} parameters: {}",
            index, run.count, condition
        );
        params.splice(index..index + run.count, std::iter::once(Parameter::Condition(condition)));
        Ok(())
    }

    /// Phase 2: fold the expression at `index` and any `And`/`Or` chain
    /// that follows it into a single `Condition`
    fn resolve_chain(&self, params: &mut Vec<Parameter>, index: usize, depth: usize) -> Result<()> {
        self.resolve_primary(params, index, depth)?;

        while index + 2 < params.len() {
            let is_or = match params[index + 1] {
                Parameter::And => false,
                Parameter::Or => true,
                _ => break,
            };

            self.resolve_primary(params, index + 2, depth)?;
            let right = into_condition(params.remove(index + 2), index + 2)?;
            params.remove(index + 1);
            let left = into_condition(params.remove(index), index)?;

            let combined = if is_or {
                Condition::or(left, right)
            } else {
                Condition::and(left, right)
            };
            debug!("Folded {} at index {}", if is_or { "Or" } else { "And" }, index);
            params.insert(index, Parameter::Condition(combined));
        }

        Ok(())
    }

    /// Reduce a single operand (`Not x`, `( ... )` or a parsed condition) at
    /// `index` to one `Condition`
    fn resolve_primary(&self, params: &mut Vec<Parameter>, index: usize, depth: usize) -> Result<()> {
        if depth >= self.max_depth {
            return Err(CompileError::ConditionTooDeep {
                limit: self.max_depth,
            });
        }

        match params.get(index) {
            Some(Parameter::Condition(_)) => Ok(()),
            Some(Parameter::Not) => {
                params.remove(index);
                self.resolve_primary(params, index, depth + 1)?;
                let inner = into_condition(params.remove(index), index)?;
                params.insert(index, Parameter::Condition(Condition::not(inner)));
                Ok(())
            }
            Some(Parameter::OpenParen) => {
                self.resolve_chain(params, index + 1, depth + 1)?;
                if !matches!(params.get(index + 2), Some(Parameter::CloseParen)) {
                    return Err(CompileError::MismatchedParenthesis { position: index });
                }
                params.remove(index + 2);
                params.remove(index);
                Ok(())
            }
            Some(other) => Err(CompileError::InvalidConditionToken {
                position: index,
                found: other.kind_name(),
            }),
            None => Err(CompileError::InvalidConditionToken {
                position: index,
                found: "end of parameters",
            }),
        }
    }
}

impl ParameterProcessor for ConditionProcessor {
    fn name(&self) -> &'static str {
        "ConditionProcessor"
    }

    fn should_process(&self, parameter: &Parameter) -> bool {
        matches!(parameter, Parameter::If)
    }

    fn convert_next(&self, parameters: &mut Vec<Parameter>, index: usize) -> Result<usize> {
        debug!("Attempting to parse condition at index {}", index);
        let start = index + 1;
        self.parse_condition_tokens(parameters, start)?;
        self.resolve_chain(parameters, start, 0)?;

        // Every group opened inside the condition has been closed by now
        if matches!(parameters.get(start + 1), Some(Parameter::CloseParen)) {
            return Err(CompileError::MismatchedParenthesis { position: start + 1 });
        }
        Ok(start + 1)
    }
}
