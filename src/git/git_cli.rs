//! `git` command-line backend for [`GitOperations`].

use crate::error::{GitError, Result, TaskError};
use crate::git::GitOperations;
use crate::process::{CommandRunner, ShellCommand};

/// Git operations backed by the `git` executable
#[derive(Debug)]
pub struct GitCli<'a, R> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> GitCli<'a, R> {
    /// Run git through `runner`
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    async fn query(&self, args: &[&str]) -> Result<String> {
        let cmd = ShellCommand::new("git").args(args.iter().copied()).capture();
        let output = self.runner.run(&cmd).await?;
        Ok(output.stdout_trimmed().to_string())
    }

    async fn mutate(&self, args: &[&str]) -> Result<()> {
        let cmd = ShellCommand::new("git").args(args.iter().copied()).echo();
        self.runner.run(&cmd).await?;
        Ok(())
    }
}

fn branch_error(e: TaskError) -> TaskError {
    match e {
        TaskError::Cli(err) => GitError::BranchOperationFailed {
            reason: err.to_string(),
        }
        .into(),
        other => other,
    }
}

impl<R: CommandRunner> GitOperations for GitCli<'_, R> {
    async fn describe(&self) -> Result<String> {
        self.query(&["describe", "--dirty", "--always"]).await
    }

    async fn current_branch(&self) -> Result<String> {
        self.query(&["rev-parse", "--abbrev-ref", "HEAD"]).await
    }

    async fn is_working_directory_clean(&self) -> Result<bool> {
        let status = self.query(&["status", "--porcelain"]).await?;
        Ok(status.is_empty())
    }

    async fn checkout_branch(&self, branch_name: &str) -> Result<()> {
        self.mutate(&["checkout", branch_name])
            .await
            .map_err(branch_error)
    }

    async fn create_branch(&self, branch_name: &str) -> Result<()> {
        self.mutate(&["checkout", "-b", branch_name])
            .await
            .map_err(branch_error)
    }

    async fn commit_all(&self, message: &str) -> Result<()> {
        self.mutate(&["commit", "-a", "-m", message])
            .await
            .map_err(|e| match e {
                TaskError::Cli(err) => GitError::CommitFailed {
                    reason: err.to_string(),
                }
                .into(),
                other => other,
            })
    }
}
