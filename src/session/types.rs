//! Session module type definitions

use crate::error::SessionError;

/// Argument slots of a command line, declared in the order they are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Config,
    Screen,
    Resolution,
    SaveDir,
    Complevel,
    Fast,
    Respawn,
    Warp,
    Skill,
    Files,
    Deh,
    Iwad,
    Custom,
    PlayDemo,
    Record,
}

/// One word of a fragment. Quoted tokens are paths and show up in quotes
/// when the command line is displayed; the child process gets them bare.
/// `Verbatim` is user text shown as typed and passed as its shell-split words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Plain(String),
    Quoted(String),
    Verbatim { text: String, words: Vec<String> },
}

impl Token {
    pub fn plain(s: impl Into<String>) -> Self {
        Token::Plain(s.into())
    }

    pub fn quoted(s: impl Into<String>) -> Self {
        Token::Quoted(s.into())
    }

    /// Arguments this token contributes to the child process
    pub fn args(&self) -> &[String] {
        match self {
            Token::Plain(s) | Token::Quoted(s) => std::slice::from_ref(s),
            Token::Verbatim { words, .. } => words,
        }
    }
}

/// Warp destination as (major, minor).
///
/// Doom 2 style maps only use `major`; episodic games use (episode, map).
/// A zero major means no warp, the game starts at the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Warp {
    pub major: u32,
    pub minor: u32,
}

impl Warp {
    pub const MENU: Warp = Warp { major: 0, minor: 0 };

    pub fn map(major: u32) -> Self {
        Self { major, minor: 0 }
    }

    pub fn episode(episode: u32, map: u32) -> Self {
        Self {
            major: episode,
            minor: map,
        }
    }

    pub fn is_menu(&self) -> bool {
        self.major == 0
    }
}

/// What a custom session does with demos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoMode {
    Normal,
    RecordOnly,
    PlaybackOnly,
}

impl DemoMode {
    /// Decide the mode from the two user toggles. Both at once has no
    /// defined meaning and is refused.
    pub fn from_flags(record: bool, playback: bool) -> Result<Self, SessionError> {
        match (record, playback) {
            (false, false) => Ok(DemoMode::Normal),
            (true, false) => Ok(DemoMode::RecordOnly),
            (false, true) => Ok(DemoMode::PlaybackOnly),
            (true, true) => Err(SessionError::DemoConflict),
        }
    }
}
