//! Error types for EasyCommands Core

use crate::types::{PrimitiveOperator, PrimitiveType};
use thiserror::Error;

/// Core error type
///
/// Raised by the primitive type system when a cast or an operator cannot be
/// applied. Any of these aborts the compile that triggered it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Cannot convert primitive type {from} to {to}")]
    UnsupportedCoercion {
        from: PrimitiveType,
        to: PrimitiveType,
    },

    #[error("Malformed number: '{0}'")]
    MalformedNumber(String),

    #[error("Operator {operator} is not supported on {kind}")]
    UnsupportedOperator {
        operator: PrimitiveOperator,
        kind: PrimitiveType,
    },

    #[error("Operator {operator} on {kind} does not accept a {operand} operand")]
    UnsupportedOperand {
        operator: PrimitiveOperator,
        kind: PrimitiveType,
        operand: PrimitiveType,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
