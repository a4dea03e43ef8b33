//! Git operations trait.
//!
//! Defines the repository operations the build and release workflows need.
//! The implementation in `git_cli` shells out to `git` through a
//! [`CommandRunner`](crate::process::CommandRunner).

use crate::error::Result;
use std::future::Future;

/// Repository operations needed by build and release
pub trait GitOperations {
    /// Describe HEAD, including a `-dirty` suffix for a modified tree
    fn describe(&self) -> impl Future<Output = Result<String>>;

    /// Name of the checked-out branch (`HEAD` when detached)
    fn current_branch(&self) -> impl Future<Output = Result<String>>;

    /// Check if working directory is clean
    fn is_working_directory_clean(&self) -> impl Future<Output = Result<bool>>;

    /// Checkout an existing branch
    fn checkout_branch(&self, branch_name: &str) -> impl Future<Output = Result<()>>;

    /// Create a branch from HEAD and check it out
    fn create_branch(&self, branch_name: &str) -> impl Future<Output = Result<()>>;

    /// Commit all tracked modifications
    fn commit_all(&self, message: &str) -> impl Future<Output = Result<()>>;
}
