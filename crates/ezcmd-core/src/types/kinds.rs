//! Kind enums for script tokens
//!
//! These are the closed vocabularies the lexer attaches to tokens. They are
//! carried unchanged through the pipeline into selectors, conditions and
//! commands.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Device kinds addressable by a selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    Piston,
    Rotor,
    Program,
    Timer,
    Light,
    Projector,
    Merge,
    Connector,
    Welder,
    Grinder,
    Door,
    Display,
    Sound,
}

impl BlockType {
    /// Every block type, in declaration order
    pub const ALL: [BlockType; 13] = [
        BlockType::Piston,
        BlockType::Rotor,
        BlockType::Program,
        BlockType::Timer,
        BlockType::Light,
        BlockType::Projector,
        BlockType::Merge,
        BlockType::Connector,
        BlockType::Welder,
        BlockType::Grinder,
        BlockType::Door,
        BlockType::Display,
        BlockType::Sound,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BooleanPropertyType {
    Power,
    Connected,
    Connectable,
    Angle,
    Locked,
    Lockable,
    Running,
    Paused,
    Stopped,
    Complete,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumericPropertyType {
    Height,
    Angle,
    Velocity,
    Progress,
    ClosedRatio,
    FontSize,
    Volume,
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StringPropertyType {
    Name,
    Run,
    Text,
    Color,
    Sound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitType {
    Seconds,
    Ticks,
    Degrees,
    Radians,
    Meters,
    Rpm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectionType {
    Up,
    Down,
    Clockwise,
    Counterclockwise,
}

/// Comparators usable inside a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparisonType {
    Greater,
    GreaterOrEqual,
    Equal,
    LessOrEqual,
    Less,
}

impl ComparisonType {
    /// Apply this comparator to the result of `Primitive::compare`
    pub fn matches(&self, ordering: Ordering) -> bool {
        match self {
            ComparisonType::Greater => ordering == Ordering::Greater,
            ComparisonType::GreaterOrEqual => ordering != Ordering::Less,
            ComparisonType::Equal => ordering == Ordering::Equal,
            ComparisonType::LessOrEqual => ordering != Ordering::Greater,
            ComparisonType::Less => ordering == Ordering::Less,
        }
    }
}

impl Default for ComparisonType {
    fn default() -> Self {
        ComparisonType::Equal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ControlType {
    Start,
    Restart,
    Stop,
    Parse,
    Loop,
    Pause,
    Resume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FunctionType {
    Goto,
    Gosub,
}

/// How a block condition is evaluated across every device a selector matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregationMode {
    /// Every matched device must satisfy the condition
    All,
    /// At least one matched device must satisfy the condition
    Any,
    /// No matched device may satisfy the condition
    None,
}

impl Default for AggregationMode {
    fn default() -> Self {
        AggregationMode::All
    }
}
