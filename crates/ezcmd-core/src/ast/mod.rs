//! Parameter, condition and command trees
//!
//! This module contains the node definitions for:
//! - Parameters (the token sequence reduced by the compiler pipeline)
//! - Selectors
//! - Conditions
//! - Commands

pub mod command;
pub mod condition;
pub mod parameter;

pub use command::Command;
pub use condition::Condition;
pub use parameter::{Parameter, Selector, StringToken};
