//! Command runner trait and the tokio-backed process implementation.

use super::{CommandOutput, ShellCommand, TimeoutClass};
use crate::cli::OutputManager;
use crate::config::TimeoutConfig;
use crate::error::{CliError, Result};
use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Executes [`ShellCommand`]s
pub trait CommandRunner {
    /// Run a command to completion.
    ///
    /// A non-zero exit status is returned as [`CliError::ExecutionFailed`].
    fn run(&self, command: &ShellCommand) -> impl Future<Output = Result<CommandOutput>>;
}

/// Runs commands as child processes in a working directory
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    work_dir: PathBuf,
    timeouts: TimeoutConfig,
    dry_run: bool,
    output: OutputManager,
}

impl ProcessRunner {
    /// Create a runner rooted at `work_dir`
    pub fn new(work_dir: impl Into<PathBuf>, timeouts: TimeoutConfig, output: OutputManager) -> Self {
        Self {
            work_dir: work_dir.into(),
            timeouts,
            dry_run: false,
            output,
        }
    }

    /// Echo mutating commands instead of running them
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    fn timeout_for(&self, command: &ShellCommand) -> Duration {
        match command.timeout_class() {
            TimeoutClass::Standard => self.timeouts.command(),
            TimeoutClass::LongRunning => self.timeouts.docker_build(),
        }
    }
}

impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &ShellCommand) -> Result<CommandOutput> {
        let line = command.to_string();

        if command.is_echoed() {
            let _ = self.output.command(&line);
        }

        if self.dry_run && !command.is_captured() {
            log::debug!("dry-run: skipping `{}`", line);
            return Ok(CommandOutput::success(""));
        }

        let program = which::which(command.program()).map_err(|_| CliError::ToolNotFound {
            tool: command.program().to_string(),
        })?;

        let mut child = Command::new(program);
        child
            .args(command.get_args())
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        if command.is_captured() {
            child.stdout(Stdio::piped()).stderr(Stdio::piped());
        } else {
            child.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let limit = self.timeout_for(command);
        log::debug!("spawning `{}` in {} (timeout {}s)", line, self.work_dir.display(), limit.as_secs());

        let output = timeout(limit, child.output())
            .await
            .map_err(|_| {
                log::warn!("`{}` timed out after {}s", line, limit.as_secs());
                CliError::TimedOut {
                    command: line.clone(),
                    seconds: limit.as_secs(),
                }
            })?
            .map_err(|e| CliError::ExecutionFailed {
                command: line.clone(),
                reason: e.to_string(),
            })?;

        let result = CommandOutput {
            status_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        log::debug!("`{}` exited with {:?}", line, result.status_code);

        if !output.status.success() {
            let stderr = result.stderr.trim();
            let reason = match result.status_code {
                Some(code) if stderr.is_empty() => format!("exit code {}", code),
                Some(code) => format!("exit code {}: {}", code, stderr),
                None => "terminated by signal".to_string(),
            };
            return Err(CliError::ExecutionFailed {
                command: line,
                reason,
            }
            .into());
        }

        Ok(result)
    }
}
