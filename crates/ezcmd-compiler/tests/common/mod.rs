//! Common test utilities for compiler integration tests

#![allow(dead_code)]

use ezcmd_compiler::{Compiler, CompilerOptions};
use ezcmd_core::types::{
    AggregationMode, BlockType, BooleanPropertyType, ComparisonType, NumericPropertyType,
};
use ezcmd_core::{Command, Condition, EntityProvider, Parameter, Selector};

/// Route compiler logs to the test writer; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Compile with default options
pub fn compile(params: Vec<Parameter>) -> ezcmd_compiler::Result<Vec<Parameter>> {
    init_tracing();
    Compiler::new().compile(params)
}

/// Compile with custom options
pub fn compile_with(
    options: CompilerOptions,
    params: Vec<Parameter>,
) -> ezcmd_compiler::Result<Vec<Parameter>> {
    init_tracing();
    Compiler::with_options(options).compile(params)
}

/// Lexer output for `"name" <type>`
pub fn named(name: &str, block_type: BlockType) -> Vec<Parameter> {
    vec![Parameter::string(name), Parameter::BlockType(block_type)]
}

/// Lexer output for `<type> group "name"`
pub fn named_group(name: &str, block_type: BlockType) -> Vec<Parameter> {
    vec![
        Parameter::BlockType(block_type),
        Parameter::Group,
        Parameter::string(name),
    ]
}

/// Concatenate token runs
pub fn tokens(runs: Vec<Vec<Parameter>>) -> Vec<Parameter> {
    runs.into_iter().flatten().collect()
}

/// Expected condition for `all <door> is open`
pub fn door_open(name: &str) -> Condition {
    Condition::aggregate(
        AggregationMode::All,
        Condition::BooleanBlock {
            block_type: BlockType::Door,
            property: BooleanPropertyType::Open,
            comparator: ComparisonType::Equal,
            value: true,
        },
        EntityProvider::Selector(Selector::new(BlockType::Door, name)),
    )
}

/// Expected condition for `all <piston> height <comparator> value`
pub fn piston_height(name: &str, comparator: ComparisonType, value: f32) -> Condition {
    Condition::aggregate(
        AggregationMode::All,
        Condition::NumericBlock {
            block_type: BlockType::Piston,
            property: NumericPropertyType::Height,
            comparator,
            value,
        },
        EntityProvider::Selector(Selector::new(BlockType::Piston, name)),
    )
}

pub trait ParameterAssertions {
    fn assert_kinds(&self, expected: &[&str]);
    fn condition_at(&self, index: usize) -> &Condition;
    fn command_at(&self, index: usize) -> &Command;
}

impl ParameterAssertions for Vec<Parameter> {
    fn assert_kinds(&self, expected: &[&str]) {
        let kinds: Vec<&str> = self.iter().map(Parameter::kind_name).collect();
        assert_eq!(kinds, expected, "Parameter kinds mismatch: {:?}", self);
    }

    fn condition_at(&self, index: usize) -> &Condition {
        match self.get(index) {
            Some(Parameter::Condition(condition)) => condition,
            other => panic!("Expected Condition at {}, got {:?}", index, other),
        }
    }

    fn command_at(&self, index: usize) -> &Command {
        match self.get(index) {
            Some(Parameter::CommandReference(command)) => command,
            other => panic!("Expected CommandReference at {}, got {:?}", index, other),
        }
    }
}
