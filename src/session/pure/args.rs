// Command line assembly (pure, no I/O)

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::session::types::{Slot, Token, Warp};

/// Engine command line under construction.
///
/// Every rule owns one slot and is idempotent: calling it again replaces the
/// slot or removes it. Slots are emitted in [`Slot`] order after the
/// executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    exe: String,
    slots: BTreeMap<Slot, Vec<Token>>,
    save_dir: Option<PathBuf>,
}

impl CommandLine {
    pub fn new(exe: impl Into<String>) -> Self {
        Self {
            exe: exe.into(),
            slots: BTreeMap::new(),
            save_dir: None,
        }
    }

    pub fn executable(&self) -> &str {
        &self.exe
    }

    /// Directory that has to exist before the engine starts
    pub fn save_dir(&self) -> Option<&Path> {
        self.save_dir.as_deref()
    }

    #[cfg(test)]
    pub fn contains(&self, slot: Slot) -> bool {
        self.slots.contains_key(&slot)
    }

    /// Rendered text of one slot, e.g. `-iwad "./DOOM2.WAD"`
    #[cfg(test)]
    pub fn fragment(&self, slot: Slot) -> Option<String> {
        self.slots.get(&slot).map(|tokens| render(tokens))
    }

    pub fn fragments(&self) -> Vec<String> {
        self.slots.values().map(|tokens| render(tokens)).collect()
    }

    /// Arguments for the child process, without quoting
    pub fn argv(&self) -> Vec<String> {
        self.slots
            .values()
            .flatten()
            .flat_map(Token::args)
            .cloned()
            .collect()
    }

    fn set(&mut self, slot: Slot, tokens: Vec<Token>) {
        self.slots.insert(slot, tokens);
    }

    fn clear(&mut self, slot: Slot) {
        self.slots.remove(&slot);
    }

    fn set_or_clear(&mut self, slot: Slot, tokens: Option<Vec<Token>>) {
        match tokens {
            Some(tokens) => self.set(slot, tokens),
            None => self.clear(slot),
        }
    }

    pub fn config(&mut self, path: &str) {
        let tokens = (!path.is_empty()).then(|| vec![Token::plain("-config"), Token::quoted(path)]);
        self.set_or_clear(Slot::Config, tokens);
    }

    /// Windowed leaves the choice to the engine config
    pub fn screen(&mut self, fullscreen: bool) {
        self.set_or_clear(Slot::Screen, fullscreen.then(|| vec![Token::plain("-fullscreen")]));
    }

    /// Sizes outside 300..8000 x 200..4500 drop both values
    pub fn resolution(&mut self, width: u32, height: u32) {
        let valid = 299 < width && width < 8000 && 199 < height && height < 4500;
        let tokens = valid.then(|| {
            vec![
                Token::plain("-width"),
                Token::plain(width.to_string()),
                Token::plain("-height"),
                Token::plain(height.to_string()),
            ]
        });
        self.set_or_clear(Slot::Resolution, tokens);
    }

    pub fn savedir(&mut self, dir: &str) {
        if dir.is_empty() {
            self.clear(Slot::SaveDir);
            self.save_dir = None;
        } else {
            self.set(Slot::SaveDir, vec![Token::plain("-save"), Token::quoted(dir)]);
            self.save_dir = Some(PathBuf::from(dir));
        }
    }

    /// A level of 0 means "let the engine decide" and emits nothing
    pub fn complevel(&mut self, level: u32) {
        let tokens = (level != 0)
            .then(|| vec![Token::plain("-complevel"), Token::plain(level.to_string())]);
        self.set_or_clear(Slot::Complevel, tokens);
    }

    pub fn fast(&mut self, fast: bool) {
        self.set_or_clear(Slot::Fast, fast.then(|| vec![Token::plain("-fast")]));
    }

    pub fn respawn(&mut self, respawn: bool) {
        self.set_or_clear(Slot::Respawn, respawn.then(|| vec![Token::plain("-respawn")]));
    }

    pub fn warp(&mut self, warp: Warp) {
        if warp.is_menu() {
            self.clear(Slot::Warp);
            return;
        }
        let mut tokens = vec![Token::plain("-warp"), Token::plain(warp.major.to_string())];
        if warp.minor != 0 {
            tokens.push(Token::plain(warp.minor.to_string()));
        }
        self.set(Slot::Warp, tokens);
    }

    /// Skill only matters when warping; the menu asks for it anyway
    pub fn skill(&mut self, skill_index: usize, warp: Warp) {
        let tokens = (!warp.is_menu())
            .then(|| vec![Token::plain("-skill"), Token::plain((skill_index + 1).to_string())]);
        self.set_or_clear(Slot::Skill, tokens);
    }

    pub fn files(&mut self, files: &[String]) {
        if files.is_empty() {
            self.clear(Slot::Files);
            return;
        }
        let mut tokens = vec![Token::plain("-file")];
        tokens.extend(files.iter().map(Token::quoted));
        self.set(Slot::Files, tokens);
    }

    pub fn deh(&mut self, patch: Option<&str>) {
        let tokens = patch.map(|p| vec![Token::plain("-deh"), Token::quoted(p)]);
        self.set_or_clear(Slot::Deh, tokens);
    }

    pub fn iwad(&mut self, path: &str) {
        self.set(Slot::Iwad, vec![Token::plain("-iwad"), Token::quoted(path)]);
    }

    /// Extra arguments, displayed as typed and split with shell quoting for
    /// the child process. Unbalanced quotes leave the slot untouched.
    pub fn custom(&mut self, args: &str) -> Result<(), shell_words::ParseError> {
        let words = shell_words::split(args)?;
        let tokens = (!words.is_empty()).then(|| {
            vec![Token::Verbatim {
                text: args.trim().to_string(),
                words,
            }]
        });
        self.set_or_clear(Slot::Custom, tokens);
        Ok(())
    }

    /// Demo playback; removes any recording request
    pub fn playdemo(&mut self, path: &str) {
        self.clear(Slot::Record);
        let tokens = (!path.is_empty())
            .then(|| vec![Token::plain("-playdemo"), Token::quoted(path)]);
        self.set_or_clear(Slot::PlayDemo, tokens);
    }

    /// Demo recording to `<path>.lmp`; removes any playback request
    pub fn record(&mut self, path: &str) {
        self.clear(Slot::PlayDemo);
        let tokens = (!path.is_empty())
            .then(|| vec![Token::plain("-record"), Token::quoted(format!("{path}.lmp"))]);
        self.set_or_clear(Slot::Record, tokens);
    }
}

fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Token::Plain(s) => s.clone(),
            Token::Quoted(s) => format!("\"{}\"", s),
            Token::Verbatim { text, .. } => text.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.exe)?;
        for fragment in self.fragments() {
            write!(f, " {}", fragment)?;
        }
        Ok(())
    }
}
