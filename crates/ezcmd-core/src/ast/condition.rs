//! Condition trees
//!
//! Conditions are built bottom-up by the compiler's condition pass and are
//! immutable afterwards. Block conditions test one property of a device;
//! an aggregate applies a block condition across every device a selector
//! matches.

use crate::handler::EntityProvider;
use crate::types::{
    AggregationMode, BlockType, BooleanPropertyType, ComparisonType, NumericPropertyType,
    StringPropertyType,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved boolean condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// Compare a boolean property of a device
    BooleanBlock {
        /// Block type whose handler reads the property
        block_type: BlockType,
        property: BooleanPropertyType,
        comparator: ComparisonType,
        value: bool,
    },

    /// Compare a string property of a device
    StringBlock {
        block_type: BlockType,
        property: StringPropertyType,
        comparator: ComparisonType,
        value: String,
    },

    /// Compare a numeric property of a device
    NumericBlock {
        block_type: BlockType,
        property: NumericPropertyType,
        comparator: ComparisonType,
        value: f32,
    },

    /// Evaluate a block condition over a set of devices
    Aggregate {
        mode: AggregationMode,
        condition: Box<Condition>,
        provider: EntityProvider,
    },

    Not(Box<Condition>),

    And(Box<Condition>, Box<Condition>),

    Or(Box<Condition>, Box<Condition>),
}

impl Condition {
    /// Negate a condition
    pub fn not(condition: Condition) -> Self {
        Condition::Not(Box::new(condition))
    }

    /// Conjunction of two conditions
    pub fn and(left: Condition, right: Condition) -> Self {
        Condition::And(Box::new(left), Box::new(right))
    }

    /// Disjunction of two conditions
    pub fn or(left: Condition, right: Condition) -> Self {
        Condition::Or(Box::new(left), Box::new(right))
    }

    /// Wrap a block condition in an aggregate
    pub fn aggregate(mode: AggregationMode, condition: Condition, provider: EntityProvider) -> Self {
        Condition::Aggregate {
            mode,
            condition: Box::new(condition),
            provider,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::BooleanBlock {
                property,
                comparator,
                value,
                ..
            } => write!(f, "{:?} {:?} {}", property, comparator, value),
            Condition::StringBlock {
                property,
                comparator,
                value,
                ..
            } => write!(f, "{:?} {:?} \"{}\"", property, comparator, value),
            Condition::NumericBlock {
                property,
                comparator,
                value,
                ..
            } => write!(f, "{:?} {:?} {}", property, comparator, value),
            Condition::Aggregate {
                mode,
                condition,
                provider,
            } => write!(f, "{:?} {} [{}]", mode, provider, condition),
            Condition::Not(inner) => write!(f, "NOT {}", inner),
            Condition::And(left, right) => write!(f, "({} AND {})", left, right),
            Condition::Or(left, right) => write!(f, "({} OR {})", left, right),
        }
    }
}
