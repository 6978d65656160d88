//! Game execution pipeline

use log::info;

use crate::error::LaunchError;
use crate::session::CommandLine;

use crate::launch::operations::spawn::spawn_error;
use crate::launch::operations::{ProcessSpawner, ensure_save_dir};

/// Start the engine for a built command line.
///
/// The save directory, when there is one, is created before the process
/// starts. Returns as soon as the process is running.
pub fn launch_session(
    cmd: &CommandLine,
    spawner: &mut dyn ProcessSpawner,
) -> Result<(), LaunchError> {
    info!("Launching: {}", cmd);

    if let Some(dir) = cmd.save_dir() {
        ensure_save_dir(dir)?;
    }

    spawner
        .spawn(cmd.executable(), &cmd.argv())
        .map_err(|e| spawn_error(cmd.executable(), e))?;
    info!("Started {}", cmd.executable());
    Ok(())
}
