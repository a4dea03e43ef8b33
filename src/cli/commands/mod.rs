//! Command execution for the build, push and release tasks.
//!
//! Handlers are generic over [`CommandRunner`] so the workflows can be
//! exercised against a recording runner in tests.

mod build;
mod push;
mod release;

use crate::cli::{Args, Command, RuntimeConfig};
use crate::error::Result;
use crate::process::{CommandRunner, ProcessRunner};

pub use build::execute_build;
pub use push::execute_push;
pub use release::execute_release;

/// Execute the main command based on parsed arguments
pub async fn execute_command(args: Args) -> Result<i32> {
    // Validate arguments
    if let Err(validation_error) = args.validate() {
        // Create output for validation errors (never quiet)
        let output = super::OutputManager::new(false, false);
        output.error(&validation_error.to_string());
        return Ok(1);
    }

    let config = RuntimeConfig::from_args(&args)?;
    let runner = ProcessRunner::new(
        config.workspace.clone(),
        config.tasks.timeouts,
        config.output().clone(),
    )
    .with_dry_run(config.dry_run);

    log::debug!(
        "running '{}' in {} (dry run: {})",
        args.command.name(),
        config.workspace.display(),
        config.dry_run
    );

    match dispatch(&args.command, &config, &runner).await {
        Ok(()) => Ok(0),
        Err(e) => {
            config.error_println(&format!("Command '{}' failed: {}", args.command.name(), e));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                config.indent("Recovery suggestions:");
                for suggestion in suggestions {
                    config.indent(&format!("  • {}", suggestion));
                }
            }

            Ok(1)
        }
    }
}

async fn dispatch<R: CommandRunner>(
    command: &Command,
    config: &RuntimeConfig,
    runner: &R,
) -> Result<()> {
    match command {
        Command::Build(image) => execute_build(image, config, runner).await,
        Command::Push(image) => execute_push(image, config, runner).await,
        Command::Release {
            version,
            skip_release_notes,
        } => execute_release(version, *skip_release_notes, config, runner).await,
    }
}
