//! In-place rewriting of the deployment manifest and embedded version file.
//!
//! Substitutions run line by line, so a pattern never spans a newline.

use crate::error::{Result, VersionError};
use crate::version::ReleaseVersion;
use regex::Regex;
use std::path::Path;

/// A regex replacement applied to every line of a file
#[derive(Debug, Clone)]
pub struct Substitution {
    pattern: Regex,
    replacement: String,
}

impl Substitution {
    /// Build a substitution. `replacement` is inserted literally.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    /// Apply to one line (without its terminator)
    fn apply<'a>(&self, line: &'a str) -> std::borrow::Cow<'a, str> {
        self.pattern
            .replace_all(line, regex::NoExpand(self.replacement.as_str()))
    }
}

/// Pin the speaker and controller image lines to `v<version>`
pub fn image_substitutions(version: &ReleaseVersion) -> Vec<Substitution> {
    ["speaker", "controller"]
        .into_iter()
        .map(|image| {
            Substitution::new(
                &format!(r"image: metallb/{}:.*", image),
                format!("image: metallb/{}:{}", image, version.tag()),
            )
            .expect("static image pattern is valid")
        })
        .collect()
}

/// Set the embedded `version = "<version>"` assignment
pub fn version_substitution(version: &ReleaseVersion) -> Substitution {
    Substitution::new(r"version\s+=.*", format!("version = \"{}\"", version))
        .expect("static version pattern is valid")
}

/// Apply `substitutions` to every line of `path` and write it back.
///
/// Returns the number of lines whose content changed. Line terminators are
/// preserved and the file is only written when something changed.
pub fn update_file(path: &Path, substitutions: &[Substitution]) -> Result<usize> {
    let content = std::fs::read_to_string(path).map_err(|e| VersionError::FileUpdateFailed {
        path: path.to_path_buf(),
        reason: format!("Failed to read file: {}", e),
    })?;

    let (updated, lines_changed) = apply_substitutions(&content, substitutions);

    if lines_changed > 0 {
        std::fs::write(path, &updated).map_err(|e| VersionError::FileUpdateFailed {
            path: path.to_path_buf(),
            reason: format!("Failed to write file: {}", e),
        })?;
    }
    log::debug!("{}: {} line(s) changed", path.display(), lines_changed);

    Ok(lines_changed)
}

fn apply_substitutions(content: &str, substitutions: &[Substitution]) -> (String, usize) {
    let mut out = String::with_capacity(content.len());
    let mut changed = 0;

    for raw in content.split_inclusive('\n') {
        let (line, terminator) = match raw.strip_suffix('\n') {
            Some(stripped) => match stripped.strip_suffix('\r') {
                Some(s) => (s, "\r\n"),
                None => (stripped, "\n"),
            },
            None => (raw, ""),
        };

        let mut current = line.to_string();
        for sub in substitutions {
            current = sub.apply(&current).into_owned();
        }
        if current != line {
            changed += 1;
        }
        out.push_str(&current);
        out.push_str(terminator);
    }

    (out, changed)
}

/// What the release notes check found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseNotes {
    /// The notes carry a `## Version <version>` heading
    Mentioned,
    /// The project has no release notes file at the configured path
    NoNotesFile,
}

/// Require a `## Version <version>` heading in the release notes.
///
/// A project without a notes file is not an error; the caller decides how to report it.
pub fn check_release_notes(path: &Path, version: &ReleaseVersion) -> Result<ReleaseNotes> {
    let notes = match std::fs::read_to_string(path) {
        Ok(notes) => notes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ReleaseNotes::NoNotesFile),
        Err(e) => {
            return Err(VersionError::ReleaseNotesUnreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into());
        }
    };

    if notes.contains(&format!("## Version {}", version)) {
        Ok(ReleaseNotes::Mentioned)
    } else {
        Err(VersionError::ReleaseNotesMissing {
            version: version.to_string(),
            path: path.to_path_buf(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;

    const MANIFEST: &str = "\
apiVersion: apps/v1
kind: DaemonSet
spec:
  containers:
  - name: speaker
    image: metallb/speaker:main
---
  - name: controller
    image: metallb/controller:v0.9.2
    imagePullPolicy: Always
";

    fn version(v: &str) -> ReleaseVersion {
        ReleaseVersion::parse(v).unwrap()
    }

    #[test]
    fn test_image_lines_pinned() {
        let (out, changed) = apply_substitutions(MANIFEST, &image_substitutions(&version("0.9.3")));
        assert_eq!(changed, 2);
        assert!(out.contains("    image: metallb/speaker:v0.9.3\n"));
        assert!(out.contains("    image: metallb/controller:v0.9.3\n"));
        assert!(out.contains("imagePullPolicy: Always\n"));
    }

    #[test]
    fn test_already_pinned_lines_unchanged() {
        let input = "image: metallb/speaker:v0.9.3\n";
        let (out, changed) = apply_substitutions(input, &image_substitutions(&version("0.9.3")));
        assert_eq!(out, input);
        assert_eq!(changed, 0);
    }

    #[test]
    fn test_version_assignment_rewritten() {
        let input = "package version\n\nvar (\n\tversion  = \"devel\"\n\tcommit = \"\"\n)\n";
        let (out, changed) = apply_substitutions(input, &[version_substitution(&version("0.10.0"))]);
        assert_eq!(changed, 1);
        assert_eq!(
            out,
            "package version\n\nvar (\n\tversion = \"0.10.0\"\n\tcommit = \"\"\n)\n"
        );
    }

    #[test]
    fn test_crlf_and_missing_final_newline_preserved() {
        let input = "image: metallb/speaker:dev\r\nlast line";
        let (out, _) = apply_substitutions(input, &image_substitutions(&version("1.0.0")));
        assert_eq!(out, "image: metallb/speaker:v1.0.0\r\nlast line");
    }

    #[test]
    fn test_update_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metallb.yaml");
        std::fs::write(&path, MANIFEST).unwrap();

        let changed = update_file(&path, &image_substitutions(&version("0.9.4"))).unwrap();
        assert_eq!(changed, 2);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("image: metallb/controller:v0.9.4"));
    }

    #[test]
    fn test_update_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = update_file(&dir.path().join("absent.yaml"), &[]).unwrap_err();
        assert!(matches!(err, TaskError::Version(VersionError::FileUpdateFailed { .. })));
    }

    #[test]
    fn test_release_notes_check() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_index.md");
        std::fs::write(&path, "# Release notes\n\n## Version 0.9.3\n\nBug fixes.\n").unwrap();

        assert_eq!(
            check_release_notes(&path, &version("0.9.3")).unwrap(),
            ReleaseNotes::Mentioned
        );
        let err = check_release_notes(&path, &version("0.9.4")).unwrap_err();
        assert!(matches!(
            err,
            TaskError::Version(VersionError::ReleaseNotesMissing { .. })
        ));
    }

    #[test]
    fn test_absent_release_notes_file_is_reported_not_failed() {
        let dir = tempfile::tempdir().unwrap();
        let notes = check_release_notes(&dir.path().join("_index.md"), &version("0.9.3")).unwrap();
        assert_eq!(notes, ReleaseNotes::NoNotesFile);
    }

    #[test]
    fn test_unreadable_release_notes_have_own_error() {
        // A directory at the notes path cannot be read as a file.
        let dir = tempfile::tempdir().unwrap();
        let err = check_release_notes(dir.path(), &version("0.9.3")).unwrap_err();
        assert!(matches!(
            err,
            TaskError::Version(VersionError::ReleaseNotesUnreadable { .. })
        ));
    }
}
