//! Error types for lb_tasks operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lb_tasks operations
pub type Result<T> = std::result::Result<T, TaskError>;

/// Main error type for all lb_tasks operations
#[derive(Error, Debug)]
pub enum TaskError {
    /// Binary selection errors
    #[error("{0}")]
    Binary(#[from] BinaryError),

    /// Version management errors
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    /// Git operation errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// CLI and process execution errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Binary selection errors
#[derive(Error, Debug)]
pub enum BinaryError {
    /// Requested binary is not one of the known images
    #[error("Unknown binary {name}\nKnown binaries: {}", .known.join(", "))]
    Unknown {
        /// Name that was requested
        name: String,
        /// Sorted list of known binary names
        known: Vec<String>,
    },
}

/// Version management errors
#[derive(Error, Debug)]
pub enum VersionError {
    /// Version parsing failed
    #[error("Failed to parse version '{version}': {source}")]
    ParseFailed {
        /// Version string
        version: String,
        /// Parsing error
        #[source]
        source: semver::Error,
    },

    /// Failed to rewrite a versioned file
    #[error("Failed to update {path}: {reason}")]
    FileUpdateFailed {
        /// Path of the file being rewritten
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// Release notes exist but could not be read
    #[error("Failed to read release notes {path}: {reason}")]
    ReleaseNotesUnreadable {
        /// Release notes file
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// Release notes do not mention the version being released
    #[error("no release notes for v{version} in {path}")]
    ReleaseNotesMissing {
        /// Version being released
        version: String,
        /// Release notes file that was searched
        path: PathBuf,
    },
}

/// Git operation errors
#[derive(Error, Debug)]
pub enum GitError {
    /// Working directory not clean
    #[error("git checkout not clean, cannot release")]
    DirtyWorkingDirectory,

    /// Branch operation failed
    #[error("Git branch operation failed: {reason}")]
    BranchOperationFailed {
        /// Reason for the error
        reason: String,
    },

    /// Commit failed
    #[error("Git commit failed: {reason}")]
    CommitFailed {
        /// Reason for the error
        reason: String,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {path}: {reason}")]
    ReadFailed {
        /// Config file path
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// Config file contents are invalid
    #[error("Invalid config file {path}: {source}")]
    Invalid {
        /// Config file path
        path: PathBuf,
        /// Parse error
        #[source]
        source: toml::de::Error,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Required external tool is not installed
    #[error("Required tool '{tool}' not found in PATH")]
    ToolNotFound {
        /// Tool name
        tool: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },

    /// Command did not finish in time
    #[error("Command timed out after {seconds}s: {command}")]
    TimedOut {
        /// Command that timed out
        command: String,
        /// Timeout that elapsed
        seconds: u64,
    },
}

impl TaskError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            TaskError::Git(GitError::DirtyWorkingDirectory) => vec![
                "Commit pending changes: git add . && git commit -m 'message'".to_string(),
                "Stash changes temporarily: git stash".to_string(),
            ],
            TaskError::Version(VersionError::ParseFailed { .. }) => vec![
                "Pass a full semantic version such as 0.9.3 (no leading 'v')".to_string(),
            ],
            TaskError::Version(VersionError::ReleaseNotesMissing { version, .. }) => vec![
                format!("Add a '## Version {}' section to the release notes", version),
                "Or rerun with --skip-release-notes".to_string(),
            ],
            TaskError::Cli(CliError::ToolNotFound { tool }) => {
                vec![format!("Install '{}' and make sure it is on PATH", tool)]
            }
            TaskError::Cli(CliError::TimedOut { .. }) => vec![
                "Raise the limit with LB_TASKS_TIMEOUT_BUILD or LB_TASKS_TIMEOUT_COMMAND"
                    .to_string(),
            ],
            // The message already lists the known binaries.
            TaskError::Binary(_) => Vec::new(),
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
