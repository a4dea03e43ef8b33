//! Docker invocations for building and pushing binary images.
//!
//! # Module Structure
//!
//! - `image` - Image references and `docker build` / `docker push` commands
//! - `daemon` - Daemon availability check

mod daemon;
mod image;

pub use daemon::{DOCKER_INFO_TIMEOUT, check_docker_available};
pub use image::{ImageRef, build_command, push_command};
