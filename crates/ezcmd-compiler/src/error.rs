//! Compiler error types

use ezcmd_core::types::BlockType;
use ezcmd_core::CoreError;
use thiserror::Error;

/// Compiler error
///
/// Every error aborts the compile. Positions are indexes into the parameter
/// sequence as it stood when the failing pass reached the construct.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    /// Selector run without a string identifier
    #[error("All selectors must have a string identifier (at parameter {position})")]
    MissingSelectorIdentifier { position: usize },

    /// Loop marker not preceded by a number
    #[error("Iteration must be preceded by a number (at parameter {position}, found {found})")]
    IterationRequiresPrecedingNumber {
        position: usize,
        found: &'static str,
    },

    /// Action run that maps to no command kind
    #[error("Unknown command reference type (at parameter {position})")]
    UnknownCommandReference { position: usize },

    /// Condition without a selector
    #[error("All conditions must have a selector (at parameter {position})")]
    MissingConditionSelector { position: usize },

    /// Condition with neither a property nor a value
    #[error("Condition at parameter {position} must have either a property or a value")]
    MissingConditionValue { position: usize },

    /// Open parenthesis not closed where expected
    #[error("Mismatched parenthesis (at parameter {position})")]
    MismatchedParenthesis { position: usize },

    /// A parameter that should already have been folded into a condition
    #[error("Invalid token inside condition: {found} (at parameter {position})")]
    InvalidConditionToken {
        position: usize,
        found: &'static str,
    },

    /// Condition nesting beyond the configured limit
    #[error("Condition nesting exceeds the limit of {limit}")]
    ConditionTooDeep { limit: usize },

    /// No handler registered for a selector's block type
    #[error("No block handler registered for {0:?}")]
    MissingBlockHandler(BlockType),

    /// Options document that could not be loaded
    #[error("Invalid compiler options: {0}")]
    InvalidOptions(String),

    /// Failed coercion or operator in the primitive type system
    #[error(transparent)]
    Primitive(#[from] CoreError),
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;
