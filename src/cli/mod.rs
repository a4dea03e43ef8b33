//! Command line interface for lb_tasks.
//!
//! This module provides argument parsing, command dispatch and user feedback
//! for the build, push and release tasks.

mod args;
pub mod commands;
mod output;

pub use args::{Args, Command, ImageArgs, RuntimeConfig};
pub use commands::execute_command;
pub use output::OutputManager;

use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute_command(args).await
}
