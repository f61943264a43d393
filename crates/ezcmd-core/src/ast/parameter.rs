//! Parameter definitions
//!
//! A script line arrives from the lexer as a flat sequence of parameters.
//! The compiler pipeline folds runs of low-level parameters into higher
//! level ones (`Selector`, `Condition`, `CommandReference`) in place.

use super::command::Command;
use super::condition::Condition;
use crate::types::{
    AggregationMode, BlockType, BooleanPropertyType, ComparisonType, ControlType, DirectionType,
    FunctionType, NumericPropertyType, Primitive, StringPropertyType, UnitType,
};
use serde::{Deserialize, Serialize};

/// A quoted or bare string token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringToken {
    /// Raw text of the token
    pub value: String,

    /// Tokens the lexer recognised inside the text (e.g. a block type
    /// keyword inside `"Main Door"`)
    pub sub_tokens: Vec<Parameter>,
}

impl StringToken {
    /// Create a string token without nested tokens
    pub fn new(value: impl Into<String>) -> Self {
        StringToken {
            value: value.into(),
            sub_tokens: Vec::new(),
        }
    }

    /// Set the nested tokens
    pub fn with_sub_tokens(mut self, sub_tokens: Vec<Parameter>) -> Self {
        self.sub_tokens = sub_tokens;
        self
    }
}

/// Resolved reference to a set of devices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selector {
    /// Device kind
    pub block_type: BlockType,

    /// Whether `name` is a group name rather than a device name
    pub is_group: bool,

    /// Device or group name
    pub name: String,

    /// Optional index into the matched devices
    pub index: Option<i32>,
}

impl Selector {
    /// Create a selector for a single named device
    pub fn new(block_type: BlockType, name: impl Into<String>) -> Self {
        Selector {
            block_type,
            is_group: false,
            name: name.into(),
            index: None,
        }
    }

    /// Mark the selector as addressing a group
    pub fn group(mut self) -> Self {
        self.is_group = true;
        self
    }

    /// Set the index
    pub fn with_index(mut self, index: i32) -> Self {
        self.index = Some(index);
        self
    }
}

/// One unit of the token sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Parameter {
    /// `group` / `blocks` keyword
    Group,
    String(StringToken),
    BlockType(BlockType),
    Index(i32),
    Selector(Selector),
    Direction(DirectionType),
    Numeric(f32),
    Boolean(bool),
    NumericProperty(NumericPropertyType),
    BooleanProperty(BooleanPropertyType),
    StringProperty(StringPropertyType),
    Comparison(ComparisonType),
    AggregationMode(AggregationMode),
    Not,
    And,
    Or,
    OpenParen,
    CloseParen,
    If,
    Condition(Condition),
    /// Loop marker; `count` is bound from the preceding number
    Iteration {
        count: Option<i32>,
    },
    Reverse,
    Relative,
    Wait,
    Unit(UnitType),
    Control(ControlType),
    Function(FunctionType),
    Listen,
    Send,
    CommandReference(Command),
}

impl Parameter {
    /// Create a string parameter without nested tokens
    pub fn string(value: impl Into<String>) -> Self {
        Parameter::String(StringToken::new(value))
    }

    /// Create a string parameter with nested tokens
    pub fn string_with(value: impl Into<String>, sub_tokens: Vec<Parameter>) -> Self {
        Parameter::String(StringToken::new(value).with_sub_tokens(sub_tokens))
    }

    /// Create an unbound loop marker
    pub fn iteration() -> Self {
        Parameter::Iteration { count: None }
    }

    /// Short kind name, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Parameter::Group => "Group",
            Parameter::String(_) => "String",
            Parameter::BlockType(_) => "BlockType",
            Parameter::Index(_) => "Index",
            Parameter::Selector(_) => "Selector",
            Parameter::Direction(_) => "Direction",
            Parameter::Numeric(_) => "Numeric",
            Parameter::Boolean(_) => "Boolean",
            Parameter::NumericProperty(_) => "NumericProperty",
            Parameter::BooleanProperty(_) => "BooleanProperty",
            Parameter::StringProperty(_) => "StringProperty",
            Parameter::Comparison(_) => "Comparison",
            Parameter::AggregationMode(_) => "AggregationMode",
            Parameter::Not => "Not",
            Parameter::And => "And",
            Parameter::Or => "Or",
            Parameter::OpenParen => "OpenParen",
            Parameter::CloseParen => "CloseParen",
            Parameter::If => "If",
            Parameter::Condition(_) => "Condition",
            Parameter::Iteration { .. } => "Iteration",
            Parameter::Reverse => "Reverse",
            Parameter::Relative => "Relative",
            Parameter::Wait => "Wait",
            Parameter::Unit(_) => "Unit",
            Parameter::Control(_) => "Control",
            Parameter::Function(_) => "Function",
            Parameter::Listen => "Listen",
            Parameter::Send => "Send",
            Parameter::CommandReference(_) => "CommandReference",
        }
    }

    /// Returns true for the three property kinds
    pub fn is_property(&self) -> bool {
        matches!(
            self,
            Parameter::NumericProperty(_) | Parameter::BooleanProperty(_) | Parameter::StringProperty(_)
        )
    }

    /// Returns true for literal values (numeric, boolean, string)
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Parameter::Numeric(_) | Parameter::Boolean(_) | Parameter::String(_)
        )
    }

    /// Literal value carried by this parameter, if any
    pub fn as_primitive(&self) -> Option<Primitive> {
        match self {
            Parameter::Numeric(n) => Some(Primitive::Number(*n)),
            Parameter::Boolean(b) => Some(Primitive::Boolean(*b)),
            Parameter::String(token) => Some(Primitive::String(token.value.clone())),
            _ => None,
        }
    }
}
