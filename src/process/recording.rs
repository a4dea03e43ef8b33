//! Test runner that records commands instead of executing them.

use super::{CommandOutput, CommandRunner, ShellCommand};
use crate::error::{CliError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// Records every command and replies with scripted output.
///
/// Responses are keyed by the rendered command line. Unscripted commands
/// succeed with empty stdout.
#[derive(Debug, Default)]
pub(crate) struct RecordingRunner {
    commands: RefCell<Vec<ShellCommand>>,
    responses: HashMap<String, String>,
    failures: Vec<String>,
}

impl RecordingRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reply to `line` with `stdout`
    pub(crate) fn respond(mut self, line: &str, stdout: &str) -> Self {
        self.responses.insert(line.to_string(), stdout.to_string());
        self
    }

    /// Make `line` exit non-zero
    pub(crate) fn fail_on(mut self, line: &str) -> Self {
        self.failures.push(line.to_string());
        self
    }

    /// Rendered command lines in execution order
    pub(crate) fn lines(&self) -> Vec<String> {
        self.commands.borrow().iter().map(|c| c.to_string()).collect()
    }

    /// Recorded commands in execution order
    pub(crate) fn commands(&self) -> Vec<ShellCommand> {
        self.commands.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &ShellCommand) -> Result<CommandOutput> {
        let line = command.to_string();
        self.commands.borrow_mut().push(command.clone());

        if self.failures.contains(&line) {
            return Err(CliError::ExecutionFailed {
                command: line,
                reason: "exit code 1".to_string(),
            }
            .into());
        }

        Ok(CommandOutput::success(
            self.responses.get(&line).cloned().unwrap_or_default(),
        ))
    }
}
