//! Release version handling.
//!
//! This module wraps semantic version parsing and derives the branch and tag
//! names a release uses. File rewriting lives in `updater`.

mod updater;

pub use updater::{
    ReleaseNotes, Substitution, check_release_notes, image_substitutions, update_file,
    version_substitution,
};

use crate::error::{Result, VersionError};
use std::fmt;

/// A release version, e.g. `0.9.3`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReleaseVersion(semver::Version);

impl ReleaseVersion {
    /// Parse a bare semantic version (no leading `v`)
    pub fn parse(version: &str) -> Result<Self> {
        semver::Version::parse(version)
            .map(Self)
            .map_err(|source| {
                VersionError::ParseFailed {
                    version: version.to_string(),
                    source,
                }
                .into()
            })
    }

    /// Patch releases go onto an existing `vX.Y` branch
    pub fn is_patch_release(&self) -> bool {
        self.0.patch != 0
    }

    /// Release branch name, `v<major>.<minor>`
    pub fn release_branch(&self) -> String {
        format!("v{}.{}", self.0.major, self.0.minor)
    }

    /// Tag-style name, `v<version>`
    pub fn tag(&self) -> String {
        format!("v{}", self.0)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;

    #[test]
    fn test_patch_release_detection() {
        assert!(ReleaseVersion::parse("0.9.3").unwrap().is_patch_release());
        assert!(!ReleaseVersion::parse("0.10.0").unwrap().is_patch_release());
        assert!(!ReleaseVersion::parse("1.0.0").unwrap().is_patch_release());
    }

    #[test]
    fn test_release_branch_and_tag() {
        let version = ReleaseVersion::parse("0.9.3").unwrap();
        assert_eq!(version.release_branch(), "v0.9");
        assert_eq!(version.tag(), "v0.9.3");
        assert_eq!(version.to_string(), "0.9.3");
    }

    #[test]
    fn test_prerelease_keeps_suffix() {
        let version = ReleaseVersion::parse("0.10.0-rc.1").unwrap();
        assert_eq!(version.release_branch(), "v0.10");
        assert_eq!(version.to_string(), "0.10.0-rc.1");
    }

    #[test]
    fn test_invalid_versions_fail_fast() {
        for bad in ["v0.9.3", "0.9", "", "latest"] {
            let err = ReleaseVersion::parse(bad).unwrap_err();
            assert!(
                matches!(err, TaskError::Version(VersionError::ParseFailed { .. })),
                "{bad} should not parse"
            );
        }
    }
}
