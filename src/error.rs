//! Errors used across the launcher.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::Game;

/// Convenience wrapper around *Result<T, AppError>*.
pub type AppResult<T> = Result<T, AppError>;

/// Error returned by front-end commands.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// The selected options can't be turned into a command line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// Recording and playing back a demo were both requested.
    #[error("demo recording and demo playback can't be enabled at the same time")]
    DemoConflict,

    /// Demo mode is on but no file name was given.
    #[error("no demo file given for demo {0}")]
    MissingDemoFile(&'static str),

    /// The level index has no map in the selected game.
    #[error("level {level} doesn't exist in {game}")]
    LevelUnavailable { game: Game, level: usize },

    /// The extra arguments have unbalanced quotes.
    #[error("can't split extra arguments: {0}")]
    ExtraArgs(String),
}

/// Starting the executable failed. Never fatal for the launcher itself.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("couldn't create save directory {}: {source}", .path.display())]
    SaveDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("executable '{exe}' not found")]
    ExecutableNotFound { exe: String },

    #[error("couldn't start '{exe}': {source}")]
    Spawn {
        exe: String,
        #[source]
        source: io::Error,
    },
}

/// Reading or writing settings failed.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Resolution input that isn't `WIDTHxHEIGHT`.
    #[error("invalid resolution value '{0}'")]
    InvalidResolution(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("malformed preset file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("couldn't serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
