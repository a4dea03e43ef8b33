//! # lb_tasks
//!
//! Image build and release automation for the load-balancer controller and
//! speaker binaries.
//!
//! ## Features
//!
//! - **Image builds**: one `docker build` per binary, stamped with commit and branch
//! - **Image pushes**: build-then-push per binary
//! - **Releases**: release branch handling, manifest and version pinning, release commit
//! - **Dry runs**: print every mutating command without running it
//!
//! ## Usage
//!
//! ```bash
//! lb_tasks build --binaries=all
//! lb_tasks push --binaries=speaker-local --tag=v0.9.3
//! lb_tasks release 0.9.3
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod binaries;
pub mod cli;
pub mod config;
pub mod docker;
pub mod error;
pub mod git;
pub mod process;
pub mod version;

pub use binaries::{Binary, check_binaries};
pub use cli::Args;
pub use config::TasksConfig;
pub use error::{Result, TaskError};
pub use git::{GitCli, GitOperations};
pub use process::{CommandRunner, ProcessRunner, ShellCommand};
pub use version::ReleaseVersion;
