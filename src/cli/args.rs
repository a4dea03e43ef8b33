//! Command line argument parsing and validation.

use crate::config::{CONFIG_FILE_NAME, TasksConfig};
use crate::error::{CliError, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Build, push and release the load-balancer images
#[derive(Parser, Debug)]
#[command(
    name = "lb_tasks",
    version,
    about = "Build, push and release the load-balancer container images",
    long_about = "Build, push and release the load-balancer container images.

Usage:
  lb_tasks build --binaries=all
  lb_tasks push --binaries=controller-pool --tag=v0.9.3 --docker-user=acnodal
  lb_tasks release 0.9.3"
)]
pub struct Args {
    /// Project root to run in
    #[arg(short = 'C', long, global = true, env = "LB_TASKS_WORKSPACE", default_value = ".")]
    pub workspace: PathBuf,

    /// Config file (default: <workspace>/lb-tasks.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print mutating commands without running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Show extra progress output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Task to run
    #[command(subcommand)]
    pub command: Command,
}

/// Image selection shared by `build` and `push`
#[derive(clap::Args, Debug, Clone)]
pub struct ImageArgs {
    /// Binaries to build. One or more of controller-acnodal, controller-pool,
    /// speaker-acnodal, speaker-local, or 'all'
    #[arg(long = "binaries", value_name = "NAME", value_delimiter = ',')]
    pub binaries: Vec<String>,

    /// Docker image tag to use
    #[arg(long, default_value = "dev", env = "LB_TASKS_TAG")]
    pub tag: String,

    /// Docker user under which to tag the images
    #[arg(long, default_value = "metallb", env = "LB_TASKS_DOCKER_USER")]
    pub docker_user: String,

    /// Skip `go test ./...` before building
    #[arg(long)]
    pub skip_tests: bool,
}

/// Available tasks
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build docker images
    Build(ImageArgs),

    /// Build and push docker images to registry
    Push(ImageArgs),

    /// Tag a new release
    Release {
        /// Version to release, e.g. 0.9.3
        version: String,

        /// Do not require a release notes entry for the version
        #[arg(long)]
        skip_release_notes: bool,
    },
}

impl Command {
    /// Command name for messages
    pub fn name(&self) -> &'static str {
        match self {
            Command::Build(_) => "build",
            Command::Push(_) => "push",
            Command::Release { .. } => "release",
        }
    }
}

fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {}
        _ => return false,
    }
    tag.len() <= 128 && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Command::Build(image) | Command::Push(image) = &self.command {
            if !is_valid_tag(&image.tag) {
                return Err(CliError::InvalidArguments {
                    reason: format!("Invalid docker tag '{}'", image.tag),
                }
                .into());
            }
            if image.docker_user.is_empty()
                || image
                    .docker_user
                    .chars()
                    .any(|c| c.is_whitespace() || c == ':')
            {
                return Err(CliError::InvalidArguments {
                    reason: format!("Invalid docker user '{}'", image.docker_user),
                }
                .into());
            }
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Project root
    pub workspace: PathBuf,
    /// Project layout and timeouts
    pub tasks: TasksConfig,
    /// Skip mutating commands and file rewrites
    pub dry_run: bool,
    output: super::OutputManager,
}

impl RuntimeConfig {
    /// Create runtime configuration
    pub fn new(
        workspace: impl Into<PathBuf>,
        tasks: TasksConfig,
        dry_run: bool,
        output: super::OutputManager,
    ) -> Self {
        Self {
            workspace: workspace.into(),
            tasks,
            dry_run,
            output,
        }
    }

    /// Load the config file named by `args` (or the workspace default)
    pub fn from_args(args: &Args) -> Result<Self> {
        let config_path = args
            .config
            .clone()
            .unwrap_or_else(|| args.workspace.join(CONFIG_FILE_NAME));
        let tasks = TasksConfig::load(&config_path)?;

        Ok(Self::new(
            args.workspace.clone(),
            tasks,
            args.dry_run,
            super::OutputManager::new(args.verbose, args.quiet),
        ))
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Resolve a project-relative path against the workspace
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.workspace.join(path)
    }

    /// Print section header
    pub fn section(&self, title: &str) {
        let _ = self.output.section(title);
    }

    /// Print verbose message
    pub fn verbose_println(&self, message: &str) {
        let _ = self.output.verbose(message);
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print warning message
    pub fn warning_println(&self, message: &str) {
        let _ = self.output.warn(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        let _ = self.output.indent(message);
    }
}
