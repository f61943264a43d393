//! Command definitions
//!
//! A command wraps the run of parameters it was built from. How each kind
//! interprets its parameters is up to the executor.

use super::parameter::Parameter;
use serde::{Deserialize, Serialize};

/// A resolved, executable action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Jump to or call a script function
    Function(Vec<Parameter>),
    /// Listen on a broadcast channel
    Listen(Vec<Parameter>),
    /// Send on a broadcast channel
    Send(Vec<Parameter>),
    /// Control the script itself (start, stop, loop, ...)
    Control(Vec<Parameter>),
    /// Wait for a duration
    Wait(Vec<Parameter>),
    /// Act on the devices matched by a selector
    Block(Vec<Parameter>),
}

impl Command {
    /// The parameters this command was built from
    pub fn parameters(&self) -> &[Parameter] {
        match self {
            Command::Function(p)
            | Command::Listen(p)
            | Command::Send(p)
            | Command::Control(p)
            | Command::Wait(p)
            | Command::Block(p) => p,
        }
    }

    /// Short kind name, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Command::Function(_) => "FunctionCommand",
            Command::Listen(_) => "ListenCommand",
            Command::Send(_) => "SendCommand",
            Command::Control(_) => "ControlCommand",
            Command::Wait(_) => "WaitCommand",
            Command::Block(_) => "BlockCommand",
        }
    }
}
