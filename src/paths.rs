use std::path::PathBuf;
use std::sync::LazyLock;

/// Directory holding the launcher's preset files
pub static PATH_INI_DIR: LazyLock<PathBuf> = LazyLock::new(|| PathBuf::from("./inis"));

/// Preset loaded at start and saved after every change
pub static PATH_DEFAULT_PRESET: LazyLock<PathBuf> =
    LazyLock::new(|| PATH_INI_DIR.join("launcher.toml"));
