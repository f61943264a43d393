//! EasyCommands Compiler - token stream to command trees
//!
//! This crate reduces a lexed parameter sequence into selectors, conditions
//! and command references by running a fixed series of processors over it.

pub mod compiler;
pub mod config;
pub mod error;
pub mod lexer;
pub mod processor;

// Re-export main types
pub use compiler::Compiler;
pub use config::{CompilerOptions, DEFAULT_MAX_CONDITION_DEPTH};
pub use error::{CompileError, Result};
pub use lexer::{Relex, WhitespaceRelexer};

// Re-export processors
pub use processor::{
    standard_processors, ActionProcessor, ConditionProcessor, FunctionProcessor,
    IterationProcessor, ParameterProcessor, RunArgumentProcessor, SelectorProcessor,
};
