use lb_tasks::TaskError;
use lb_tasks::error::VersionError;
use lb_tasks::version::{
    ReleaseNotes, ReleaseVersion, check_release_notes, image_substitutions, update_file,
    version_substitution,
};
use std::fs;

const MANIFEST: &str = "\
apiVersion: apps/v1
kind: DaemonSet
spec:
  template:
    spec:
      containers:
      - name: speaker
        image: metallb/speaker:main
---
apiVersion: apps/v1
kind: Deployment
spec:
  template:
    spec:
      containers:
      - name: controller
        image: metallb/controller:v0.9.2
";

#[test]
fn test_manifest_images_pinned_to_release() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("metallb.yaml");
    fs::write(&manifest, MANIFEST).unwrap();
    let version = ReleaseVersion::parse("0.9.3").unwrap();

    let changed = update_file(&manifest, &image_substitutions(&version)).unwrap();

    assert_eq!(changed, 2);
    let rewritten = fs::read_to_string(&manifest).unwrap();
    assert!(rewritten.contains("        image: metallb/speaker:v0.9.3\n"));
    assert!(rewritten.contains("        image: metallb/controller:v0.9.3\n"));
    assert!(rewritten.starts_with("apiVersion: apps/v1\nkind: DaemonSet\n"));
    assert_eq!(rewritten.lines().count(), MANIFEST.lines().count());
}

#[test]
fn test_version_file_rewritten_then_stable() {
    let dir = tempfile::tempdir().unwrap();
    let version_go = dir.path().join("version.go");
    fs::write(
        &version_go,
        "package version\n\nconst (\n\tversion = \"devel\"\n)\n",
    )
    .unwrap();
    let version = ReleaseVersion::parse("0.10.0").unwrap();

    assert_eq!(update_file(&version_go, &[version_substitution(&version)]).unwrap(), 1);
    assert_eq!(
        fs::read_to_string(&version_go).unwrap(),
        "package version\n\nconst (\n\tversion = \"0.10.0\"\n)\n"
    );

    // A second pass finds nothing left to change.
    assert_eq!(update_file(&version_go, &[version_substitution(&version)]).unwrap(), 0);
}

#[test]
fn test_missing_file_cannot_be_updated() {
    let dir = tempfile::tempdir().unwrap();
    let version = ReleaseVersion::parse("0.9.3").unwrap();

    let err = update_file(&dir.path().join("absent.yaml"), &image_substitutions(&version))
        .unwrap_err();

    assert!(matches!(
        err,
        TaskError::Version(VersionError::FileUpdateFailed { .. })
    ));
}

#[test]
fn test_release_notes_outcomes() {
    let dir = tempfile::tempdir().unwrap();
    let notes = dir.path().join("_index.md");
    let version = ReleaseVersion::parse("0.9.3").unwrap();

    assert_eq!(
        check_release_notes(&notes, &version).unwrap(),
        ReleaseNotes::NoNotesFile
    );

    fs::write(&notes, "# Release Notes\n\n## Version 0.9.3\n\nBug fixes.\n").unwrap();
    assert_eq!(
        check_release_notes(&notes, &version).unwrap(),
        ReleaseNotes::Mentioned
    );

    let next = ReleaseVersion::parse("0.9.4").unwrap();
    assert!(matches!(
        check_release_notes(&notes, &next),
        Err(TaskError::Version(VersionError::ReleaseNotesMissing { .. }))
    ));
}
