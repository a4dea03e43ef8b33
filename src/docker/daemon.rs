//! Docker daemon availability check.

use crate::error::{CliError, Result, TaskError};
use crate::process::{CommandRunner, ShellCommand};
use std::time::Duration;
use tokio::time::timeout;

/// Timeout for Docker info check (5 seconds)
/// Quick daemon availability check shouldn't take long
pub const DOCKER_INFO_TIMEOUT: Duration = Duration::from_secs(5);

/// Platform-specific Docker startup instructions
#[cfg(target_os = "macos")]
const DOCKER_START_HELP: &str = "Start Docker Desktop from Applications or Spotlight";

#[cfg(target_os = "linux")]
const DOCKER_START_HELP: &str = "Start Docker daemon: sudo systemctl start docker";

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
const DOCKER_START_HELP: &str = "Start Docker Desktop";

/// Checks if Docker is installed and the daemon is running.
///
/// # Returns
///
/// * `Ok(())` - Docker is available
/// * `Err` - Docker is not installed or daemon is not running
pub async fn check_docker_available<R: CommandRunner>(runner: &R) -> Result<()> {
    let cmd = ShellCommand::new("docker")
        .args(["info", "--format", "{{.ServerVersion}}"])
        .capture();

    match timeout(DOCKER_INFO_TIMEOUT, runner.run(&cmd)).await {
        Err(_) => Err(CliError::ExecutionFailed {
            command: "docker info".to_string(),
            reason: format!(
                "Docker daemon check timed out after {} seconds.\n\
                 {}",
                DOCKER_INFO_TIMEOUT.as_secs(),
                DOCKER_START_HELP
            ),
        }
        .into()),

        Ok(Ok(output)) => {
            log::debug!("docker server version {}", output.stdout_trimmed());
            Ok(())
        }

        Ok(Err(TaskError::Cli(CliError::ExecutionFailed { reason, .. }))) => {
            Err(CliError::ExecutionFailed {
                command: "docker info".to_string(),
                reason: format!(
                    "Docker daemon is not responding ({}).\n\
                     {}",
                    reason, DOCKER_START_HELP
                ),
            }
            .into())
        }

        Ok(Err(e)) => Err(e),
    }
}
