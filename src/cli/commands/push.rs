//! Push command implementation.

use super::build::build_images;
use crate::binaries::check_binaries;
use crate::cli::{ImageArgs, RuntimeConfig};
use crate::docker::push_command;
use crate::error::Result;
use crate::process::CommandRunner;

/// Execute push command.
///
/// Each binary is built and pushed before the next one starts, so a failure
/// leaves every earlier image already published.
pub async fn execute_push<R: CommandRunner>(
    image: &ImageArgs,
    config: &RuntimeConfig,
    runner: &R,
) -> Result<()> {
    let binaries = check_binaries(&image.binaries)?;
    config.section("Push");

    for binary in &binaries {
        config.verbose_println(&format!("Building {}", binary));
        for image_ref in build_images(std::slice::from_ref(binary), image, config, runner).await? {
            runner.run(&push_command(&image_ref)).await?;
            config.success_println(&format!("Pushed {}", image_ref));
        }
    }

    Ok(())
}
