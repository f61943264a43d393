//! Type system for EasyCommands
//!
//! This module contains:
//! - Kind enums shared by parameters, conditions and commands
//! - The primitive value type and its operators
//! - Vector string parsing

pub mod kinds;
pub mod operator;
pub mod primitive;
pub mod vector;

pub use kinds::{
    AggregationMode, BlockType, BooleanPropertyType, ComparisonType, ControlType, DirectionType,
    FunctionType, NumericPropertyType, StringPropertyType, UnitType,
};
pub use operator::PrimitiveOperator;
pub use primitive::{cast_boolean, cast_number, cast_string, cast_vector, Primitive, PrimitiveType};
pub use vector::{format_vector, parse_vector};
