//! Release command implementation.
//!
//! Cuts or updates the `vX.Y` release branch, pins the deployment manifest and
//! embedded version to the new release, commits, and returns to the main branch.

use crate::cli::RuntimeConfig;
use crate::error::{GitError, Result};
use crate::git::{GitCli, GitOperations};
use crate::process::{CommandRunner, ShellCommand};
use crate::version::{
    ReleaseNotes, ReleaseVersion, Substitution, check_release_notes, image_substitutions, update_file,
    version_substitution,
};
use std::path::Path;

/// Execute release command
pub async fn execute_release<R: CommandRunner>(
    version: &str,
    skip_release_notes: bool,
    config: &RuntimeConfig,
    runner: &R,
) -> Result<()> {
    let git = GitCli::new(runner);

    // Nothing may be mutated before this check.
    if !git.is_working_directory_clean().await? {
        return Err(GitError::DirtyWorkingDirectory.into());
    }

    let version = ReleaseVersion::parse(version)?;
    config.section(&format!("Release {}", version.tag()));

    if skip_release_notes {
        config.warning_println("Skipping release notes check (--skip-release-notes)");
    } else {
        let notes = &config.tasks.release_notes;
        match check_release_notes(&config.resolve(notes), &version)? {
            ReleaseNotes::Mentioned => config.verbose_println("Release notes mention this version"),
            ReleaseNotes::NoNotesFile => config.warning_println(&format!(
                "No release notes at {}, skipping release notes check",
                notes.display()
            )),
        }
    }

    // Move HEAD to the release branch: patch releases reuse it, others create it.
    let branch = version.release_branch();
    if version.is_patch_release() {
        git.checkout_branch(&branch).await?;
    } else {
        git.create_branch(&branch).await?;
    }

    rewrite(config, &config.tasks.manifest, &image_substitutions(&version))?;
    rewrite(config, &config.tasks.version_file, &[version_substitution(&version)])?;

    let gofmt = ShellCommand::new("gofmt")
        .arg("-w")
        .arg(config.tasks.version_file.to_string_lossy())
        .echo();
    runner.run(&gofmt).await?;

    git.commit_all(&format!("Automated update for release {}", version.tag()))
        .await?;
    git.checkout_branch(&config.tasks.main_branch).await?;

    config.success_println(&format!(
        "Release {} committed on branch {}",
        version.tag(),
        branch
    ));
    Ok(())
}

fn rewrite(config: &RuntimeConfig, relative: &Path, substitutions: &[Substitution]) -> Result<()> {
    let path = config.resolve(relative);

    if config.dry_run {
        config.indent(&format!("would update {}", relative.display()));
        return Ok(());
    }

    let lines_changed = update_file(&path, substitutions)?;
    if lines_changed == 0 {
        config.warning_println(&format!("{}: nothing to update", relative.display()));
    } else {
        config.verbose_println(&format!(
            "{}: {} line(s) updated",
            relative.display(),
            lines_changed
        ));
    }
    Ok(())
}
