//! Project layout and timeout configuration.
//!
//! Values come from an optional `lb-tasks.toml` at the workspace root, with
//! environment overrides for timeouts.

use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default config file name, looked up in the workspace root
pub const CONFIG_FILE_NAME: &str = "lb-tasks.toml";

/// Project layout used by the build and release commands
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TasksConfig {
    /// Directory holding `Dockerfile.<binary>`
    pub dockerfile_dir: PathBuf,
    /// Deployment manifest whose image lines are pinned on release
    pub manifest: PathBuf,
    /// Go source file holding the embedded version string
    pub version_file: PathBuf,
    /// Release notes that must mention the version being released
    pub release_notes: PathBuf,
    /// Branch to return to after the release commit
    pub main_branch: String,
    /// Process timeouts
    pub timeouts: TimeoutConfig,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            dockerfile_dir: PathBuf::from("build/package"),
            manifest: PathBuf::from("deployments/metallb.yaml"),
            version_file: PathBuf::from("internal/version/version.go"),
            release_notes: PathBuf::from("website/content/release-notes/_index.md"),
            main_branch: "main".to_string(),
            timeouts: TimeoutConfig::default(),
        }
    }
}

impl TasksConfig {
    /// Load config from `path`.
    ///
    /// A missing file yields defaults; a present but malformed file is an error.
    /// Timeout env overrides are applied on top in both cases.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
            Self::from_toml_str(&content).map_err(|source| ConfigError::Invalid {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Self::default()
        };

        config.timeouts = config.timeouts.with_env_overrides();
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Timeouts for external processes, in seconds
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TimeoutConfig {
    /// Limit for `docker build`, which may pull base images
    pub docker_build_secs: u64,
    /// Limit for every other command
    pub command_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            docker_build_secs: 1800,
            command_secs: 600,
        }
    }
}

impl TimeoutConfig {
    const MAX_BUILD_SECS: u64 = 4 * 3600;
    const MAX_COMMAND_SECS: u64 = 3600;

    /// Parse a timeout from an environment variable, clamped to `max`
    fn parse_timeout_env(var_name: &str, default: u64, max: u64) -> u64 {
        std::env::var(var_name)
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(|v| v.min(max))
            .unwrap_or(default)
    }

    /// Apply `LB_TASKS_TIMEOUT_BUILD` / `LB_TASKS_TIMEOUT_COMMAND`
    pub fn with_env_overrides(self) -> Self {
        Self {
            docker_build_secs: Self::parse_timeout_env(
                "LB_TASKS_TIMEOUT_BUILD",
                self.docker_build_secs,
                Self::MAX_BUILD_SECS,
            ),
            command_secs: Self::parse_timeout_env(
                "LB_TASKS_TIMEOUT_COMMAND",
                self.command_secs,
                Self::MAX_COMMAND_SECS,
            ),
        }
    }

    /// Timeout for `docker build`
    pub fn docker_build(&self) -> Duration {
        Duration::from_secs(self.docker_build_secs)
    }

    /// Timeout for every other command
    pub fn command(&self) -> Duration {
        Duration::from_secs(self.command_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TasksConfig::from_toml_str("").unwrap();
        assert_eq!(config, TasksConfig::default());
        assert_eq!(config.main_branch, "main");
        assert_eq!(config.dockerfile_dir, PathBuf::from("build/package"));
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = TasksConfig::from_toml_str(
            r#"
main_branch = "master"

[timeouts]
command_secs = 30
"#,
        )
        .unwrap();
        assert_eq!(config.main_branch, "master");
        assert_eq!(config.timeouts.command_secs, 30);
        assert_eq!(config.timeouts.docker_build_secs, 1800);
        assert_eq!(config.manifest, PathBuf::from("deployments/metallb.yaml"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(TasksConfig::from_toml_str("registry = \"quay.io\"").is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TasksConfig::load(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.version_file, PathBuf::from("internal/version/version.go"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "main_branch = [").unwrap();
        assert!(TasksConfig::load(&path).is_err());
    }

    #[test]
    fn test_parse_timeout_env_unset_uses_default() {
        let value =
            TimeoutConfig::parse_timeout_env("LB_TASKS_TEST_TIMEOUT_NEVER_SET", 42, 100);
        assert_eq!(value, 42);
    }
}
