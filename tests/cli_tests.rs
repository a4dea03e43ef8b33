use assert_cmd::Command;
use predicates::prelude::*;

fn lb_tasks(workspace: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("lb_tasks").unwrap();
    cmd.arg("-C").arg(workspace).env_remove("LB_TASKS_WORKSPACE");
    cmd
}

#[test]
fn test_help_lists_tasks() {
    let dir = tempfile::tempdir().unwrap();
    lb_tasks(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("push"))
        .stdout(predicate::str::contains("release"));
}

#[test]
fn test_unknown_binary_exits_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    lb_tasks(dir.path())
        .args(["build", "--binaries=bogus"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown binary bogus"))
        .stderr(predicate::str::contains(
            "Known binaries: controller-acnodal, controller-pool, speaker-acnodal, speaker-local",
        ));
}

#[test]
fn test_unknown_binary_rejected_for_push() {
    let dir = tempfile::tempdir().unwrap();
    lb_tasks(dir.path())
        .args(["push", "--binaries=controller-pool,speaker"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown binary speaker"));
}

#[test]
fn test_invalid_tag_rejected() {
    let dir = tempfile::tempdir().unwrap();
    lb_tasks(dir.path())
        .args(["build", "--tag=not:valid"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid docker tag"));
}

#[test]
fn test_release_requires_version_argument() {
    let dir = tempfile::tempdir().unwrap();
    lb_tasks(dir.path()).arg("release").assert().failure();
}

#[test]
fn test_malformed_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("lb-tasks.toml"), "main_branch = [").unwrap();
    lb_tasks(dir.path())
        .args(["build", "--binaries=all"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file"));
}
