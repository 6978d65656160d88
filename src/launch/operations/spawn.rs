use std::io;
use std::process::Command;

use crate::error::LaunchError;

/// Starts the engine process. The launcher never waits for it.
pub trait ProcessSpawner {
    fn spawn(&mut self, exe: &str, args: &[String]) -> io::Result<()>;
}

/// Spawns real child processes
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn spawn(&mut self, exe: &str, args: &[String]) -> io::Result<()> {
        // the child outlives the launcher; dropping the handle doesn't kill it
        Command::new(exe).args(args).spawn()?;
        Ok(())
    }
}

/// Map a spawn failure, telling a missing executable apart from other errors
pub fn spawn_error(exe: &str, source: io::Error) -> LaunchError {
    if source.kind() == io::ErrorKind::NotFound {
        LaunchError::ExecutableNotFound {
            exe: exe.to_string(),
        }
    } else {
        LaunchError::Spawn {
            exe: exe.to_string(),
            source,
        }
    }
}
