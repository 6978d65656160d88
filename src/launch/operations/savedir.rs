use std::fs;
use std::path::Path;

use log::debug;

use crate::error::LaunchError;

/// Create the save directory and any missing parents. Already existing is fine.
pub fn ensure_save_dir(path: &Path) -> Result<(), LaunchError> {
    debug!("Creating save directory {}", path.display());
    fs::create_dir_all(path).map_err(|source| LaunchError::SaveDir {
        path: path.to_path_buf(),
        source,
    })
}
