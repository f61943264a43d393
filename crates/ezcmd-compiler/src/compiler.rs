//! Main compiler
//!
//! Runs the parameter processors in pipeline order over one lexed command
//! line.

use crate::config::CompilerOptions;
use crate::error::Result;
use crate::lexer::{Relex, WhitespaceRelexer};
use crate::processor::{standard_processors, ParameterProcessor};
use ezcmd_core::{BlockHandlerRegistry, HandlerRegistry, Parameter};
use std::sync::Arc;
use tracing::{debug, trace};

/// The parameter compiler
pub struct Compiler {
    /// Compiler options
    options: CompilerOptions,
    /// Block handler lookup used by condition resolution
    registry: Arc<dyn HandlerRegistry>,
    /// Lexer used to split run arguments
    relexer: Arc<dyn Relex>,
    /// Processors in pipeline order
    processors: Vec<Box<dyn ParameterProcessor>>,
}

impl Compiler {
    /// Create a new compiler with default options and the standard handlers
    pub fn new() -> Self {
        Self::with_options(CompilerOptions::default())
    }

    /// Create a new compiler with custom options
    pub fn with_options(options: CompilerOptions) -> Self {
        let registry: Arc<dyn HandlerRegistry> = Arc::new(BlockHandlerRegistry::new());
        let relexer: Arc<dyn Relex> = Arc::new(WhitespaceRelexer);
        let processors = standard_processors(&options, registry.clone(), relexer.clone());

        Self {
            options,
            registry,
            relexer,
            processors,
        }
    }

    /// Replace the block handler registry
    pub fn with_registry(mut self, registry: Arc<dyn HandlerRegistry>) -> Self {
        self.registry = registry;
        self.rebuild();
        self
    }

    /// Replace the lexer used for run arguments
    pub fn with_relexer(mut self, relexer: Arc<dyn Relex>) -> Self {
        self.relexer = relexer;
        self.rebuild();
        self
    }

    fn rebuild(&mut self) {
        self.processors =
            standard_processors(&self.options, self.registry.clone(), self.relexer.clone());
    }

    /// Reduce `parameters` in place.
    ///
    /// On error the sequence is left as the failing pass found it; callers
    /// should discard it.
    pub fn process(&self, parameters: &mut Vec<Parameter>) -> Result<()> {
        for processor in &self.processors {
            debug!("Running {} over {} parameters", processor.name(), parameters.len());
            processor.process(parameters)?;

            if self.options.trace_parameters {
                let kinds: Vec<&str> = parameters.iter().map(Parameter::kind_name).collect();
                trace!("After {}: [{}]", processor.name(), kinds.join(", "));
            }
        }

        debug!("Compiled to {} parameters", parameters.len());
        Ok(())
    }

    /// Reduce an owned sequence and return the result
    pub fn compile(&self, mut parameters: Vec<Parameter>) -> Result<Vec<Parameter>> {
        self.process(&mut parameters)?;
        Ok(parameters)
    }

    /// Get a reference to the options
    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Processor names in the order they run
    pub fn processor_names(&self) -> Vec<&'static str> {
        self.processors.iter().map(|p| p.name()).collect()
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
