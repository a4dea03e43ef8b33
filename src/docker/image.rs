//! Image naming and the docker commands that build and push them.

use crate::binaries::Binary;
use crate::process::ShellCommand;
use std::fmt;
use std::path::Path;

/// Fully qualified image reference, `user/binary:tag`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Docker user (registry namespace)
    pub user: String,
    /// Binary the image packages
    pub binary: Binary,
    /// Image tag
    pub tag: String,
}

impl ImageRef {
    /// Create an image reference
    pub fn new(user: impl Into<String>, binary: Binary, tag: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            binary,
            tag: tag.into(),
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:{}", self.user, self.binary, self.tag)
    }
}

/// `docker build` for one image.
///
/// The binary, commit and branch are passed as build args. The Dockerfile is
/// `<dockerfile_dir>/Dockerfile.<binary>` and the context is the workspace root.
pub fn build_command(image: &ImageRef, commit: &str, branch: &str, dockerfile_dir: &Path) -> ShellCommand {
    let dockerfile = dockerfile_dir.join(format!("Dockerfile.{}", image.binary));

    ShellCommand::new("docker")
        .args(["build", "-t"])
        .arg(image.to_string())
        .arg("--build-arg")
        .arg(format!("cmd={}", image.binary))
        .arg("--build-arg")
        .arg(format!("commit={}", commit))
        .arg("--build-arg")
        .arg(format!("branch={}", branch))
        .arg("-f")
        .arg(dockerfile.to_string_lossy())
        .arg(".")
        .echo()
        .long_running()
}

/// `docker push` for one image
pub fn push_command(image: &ImageRef) -> ShellCommand {
    ShellCommand::new("docker")
        .arg("push")
        .arg(image.to_string())
        .echo()
        .long_running()
}
