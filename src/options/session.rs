use crate::catalog::{COMPAT_PRESETS, Game, IWADS, MAX_LEVEL_INDEX, SKILLS};

/// Options for the session being edited.
///
/// Bounded indices are private and only change through setters, which
/// return `false` and keep the previous value when given something out of
/// range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub game: Game,
    skill: usize,
    level: usize,
    iwad: usize,
    compat: usize,
    /// Add-on files in load order, relative to the add-on directory
    pub files: Vec<String>,
    pub fast: bool,
    pub respawn: bool,
    /// Free-form arguments appended to the command line
    pub extra_args: String,
    pub record: bool,
    pub record_name: String,
    pub playback: bool,
    pub playback_file: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            game: Game::default(),
            skill: 2,
            level: 0,
            iwad: 1,
            compat: 0,
            files: Vec::new(),
            fast: false,
            respawn: false,
            extra_args: String::new(),
            record: false,
            record_name: "MyDemo".to_string(),
            playback: false,
            playback_file: String::new(),
        }
    }
}

fn assign(field: &mut usize, value: usize, len: usize) -> bool {
    if value < len {
        *field = value;
        true
    } else {
        false
    }
}

impl SessionOptions {
    pub fn skill(&self) -> usize {
        self.skill
    }

    pub fn set_skill(&mut self, skill: usize) -> bool {
        assign(&mut self.skill, skill, SKILLS.len())
    }

    /// Level index; 0 starts at the main menu
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn set_level(&mut self, level: usize) -> bool {
        assign(&mut self.level, level, MAX_LEVEL_INDEX + 1)
    }

    pub fn iwad(&self) -> usize {
        self.iwad
    }

    /// File name of the selected IWAD
    pub fn iwad_name(&self) -> &'static str {
        IWADS[self.iwad]
    }

    pub fn set_iwad(&mut self, iwad: usize) -> bool {
        assign(&mut self.iwad, iwad, IWADS.len())
    }

    pub fn compat(&self) -> usize {
        self.compat
    }

    pub fn set_compat(&mut self, compat: usize) -> bool {
        assign(&mut self.compat, compat, COMPAT_PRESETS.len())
    }

    pub fn set_files<I, S>(&mut self, files: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
    }
}
