//! EasyCommands Core - data model for the EasyCommands script compiler
//!
//! This crate provides the types shared by the parameter-processing pipeline
//! and whatever executes its output:
//! - Kind enums (block types, properties, directions, comparisons, ...)
//! - The primitive value type system (boolean, number, string, vector)
//! - Parameter, condition and command trees
//! - The block handler seam used to resolve per-device defaults
//! - Error types

pub mod ast;
pub mod error;
pub mod handler;
pub mod types;

// Re-export commonly used types
pub use ast::{Command, Condition, Parameter, Selector};
pub use error::CoreError;
pub use handler::{BlockHandler, BlockHandlerRegistry, EntityProvider, HandlerRegistry};
pub use types::{Primitive, PrimitiveOperator, PrimitiveType};
