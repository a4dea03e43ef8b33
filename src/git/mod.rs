//! Git queries and mutations used by the build and release commands.

mod git_cli;
mod operations;

pub use git_cli::GitCli;
pub use operations::GitOperations;
