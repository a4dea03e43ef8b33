//! Build command implementation.
//!
//! Runs the unit tests, then builds one docker image per selected binary,
//! stamped with the current commit and branch.

use crate::binaries::{Binary, check_binaries};
use crate::cli::{ImageArgs, RuntimeConfig};
use crate::docker::{ImageRef, build_command, check_docker_available};
use crate::error::Result;
use crate::git::{GitCli, GitOperations};
use crate::process::{CommandRunner, ShellCommand};

/// Execute build command
pub async fn execute_build<R: CommandRunner>(
    image: &ImageArgs,
    config: &RuntimeConfig,
    runner: &R,
) -> Result<()> {
    let binaries = check_binaries(&image.binaries)?;
    config.section("Build");

    let built = build_images(&binaries, image, config, runner).await?;

    config.success_println(&format!("Built {} image(s)", built.len()));
    for image in &built {
        config.indent(&image.to_string());
    }
    Ok(())
}

/// Build `binaries` and return the image references produced
pub(super) async fn build_images<R: CommandRunner>(
    binaries: &[Binary],
    image: &ImageArgs,
    config: &RuntimeConfig,
    runner: &R,
) -> Result<Vec<ImageRef>> {
    check_docker_available(runner).await?;

    if image.skip_tests {
        config.warning_println("Skipping unit tests (--skip-tests)");
    } else {
        let tests = ShellCommand::new("go")
            .args(["test", "./..."])
            .echo()
            .long_running();
        runner.run(&tests).await?;
    }

    let git = GitCli::new(runner);
    let commit = git.describe().await?;
    let branch = git.current_branch().await?;
    config.verbose_println(&format!("commit {} on branch {}", commit, branch));

    let mut built = Vec::with_capacity(binaries.len());
    for binary in binaries {
        let image_ref = ImageRef::new(image.docker_user.as_str(), *binary, image.tag.as_str());
        let cmd = build_command(&image_ref, &commit, &branch, &config.tasks.dockerfile_dir);
        runner.run(&cmd).await?;
        built.push(image_ref);
    }

    Ok(built)
}
