//! Shell-out layer for docker, git and go tooling.
//!
//! Every external invocation is described as a [`ShellCommand`] and executed
//! through a [`CommandRunner`]. Command handlers never spawn processes
//! themselves, which keeps them testable against a recording runner.

mod command;
mod runner;

#[cfg(test)]
pub(crate) mod recording;

pub use command::{CommandOutput, ShellCommand, TimeoutClass};
pub use runner::{CommandRunner, ProcessRunner};
