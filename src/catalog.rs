//! Fixed game data: campaigns, IWADs, skills, compatibility presets and level lists.

use std::fmt;
use std::str::FromStr;

/// Game selection for a session.
///
/// Every variant except `Custom` is an official release with its own fixed
/// IWAD, compatibility level and level numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Game {
    #[default]
    Ultimate,
    Doom2,
    Plutonia,
    Tnt,
    Nrftl,
    Master,
    Custom,
}

impl Game {
    pub const ALL: [Game; 7] = [
        Game::Ultimate,
        Game::Doom2,
        Game::Plutonia,
        Game::Tnt,
        Game::Nrftl,
        Game::Master,
        Game::Custom,
    ];

    /// Identifier used in preset files and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Game::Ultimate => "ultimate",
            Game::Doom2 => "doom2",
            Game::Plutonia => "plutonia",
            Game::Tnt => "tnt",
            Game::Nrftl => "nrftl",
            Game::Master => "master",
            Game::Custom => "custom",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Game::Ultimate => "THE ULTIMATE DOOM",
            Game::Doom2 => "DOOM 2: HELL ON EARTH",
            Game::Plutonia => "FINAL DOOM: THE PLUTONIA EXPERIMENT",
            Game::Tnt => "FINAL DOOM: TNT EVILUTION",
            Game::Nrftl => "DOOM 2: NO REST FOR THE LIVING",
            Game::Master => "MASTER LEVELS FOR DOOM 2",
            Game::Custom => "CUSTOM GAME",
        }
    }

    /// Level names selectable for an official release. Custom games pick
    /// their list from the IWAD, see [`levels_for_iwad`].
    pub fn levels(&self) -> &'static [&'static str] {
        match self {
            Game::Ultimate => ULTIMATE_LEVELS,
            Game::Doom2 | Game::Plutonia | Game::Tnt => DOOM2_LEVELS,
            Game::Nrftl => &DOOM2_LEVELS[..=NRFTL_MAP_COUNT],
            Game::Master => MASTER_LEVELS,
            Game::Custom => DOOM2_LEVELS,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Game {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v = s.trim().to_lowercase();
        Game::ALL
            .into_iter()
            .find(|g| g.id() == v)
            .ok_or_else(|| format!("'{s}' is not a known game"))
    }
}

pub const IWADS: [&str; 6] = [
    "DOOM.WAD",
    "DOOM2.WAD",
    "PLUTONIA.WAD",
    "TNT.WAD",
    "freedoom1.wad",
    "freedoom2.wad",
];

/// IWADs numbered as ExMy instead of MAPxx
pub const EPISODIC_IWADS: [&str; 2] = ["DOOM.WAD", "freedoom1.wad"];

/// Official patch that always has to go with TNT.WAD
pub const TNT_IWAD: &str = "TNT.WAD";
pub const TNT_PATCH: &str = "tnt31.wad";

pub const NRFTL_WAD: &str = "NERVE.WAD";
pub const NRFTL_MAP_COUNT: usize = 9;

pub const SKILLS: [&str; 5] = [
    "I'm Too Young to Die!",
    "Hey, Not Too Rough",
    "Hurt Me Plenty",
    "Ultra-Violence",
    "Nightmare!",
];

pub const COMPAT_PRESETS: [&str; 6] = [
    "DOOM2 mode (-complevel 2)",
    "Ultimate DOOM mode (-complevel 3)",
    "Final DOOM mode (-complevel 4)",
    "BOOM compatible mode (-complevel 9)",
    "MBF compatible mode (-complevel 11)",
    "Don't set -complevel",
];

/// Numeric level for each entry of [`COMPAT_PRESETS`]; 0 means no flag.
pub const COMPAT_LEVELS: [u32; 6] = [2, 3, 4, 9, 11, 0];

/// Highest level index any selection can hold
pub const MAX_LEVEL_INDEX: usize = 39;

pub const ULTIMATE_LEVELS: &[&str] = &[
    "NONE", "E1M1", "E1M2", "E1M3", "E1M4", "E1M5", "E1M6", "E1M7", "E1M8", "E1M9", "E2M1",
    "E2M2", "E2M3", "E2M4", "E2M5", "E2M6", "E2M7", "E2M8", "E2M9", "E3M1", "E3M2", "E3M3",
    "E3M4", "E3M5", "E3M6", "E3M7", "E3M8", "E3M9", "E4M1", "E4M2", "E4M3", "E4M4", "E4M5",
    "E4M6", "E4M7", "E4M8", "E4M9",
];

pub const DOOM2_LEVELS: &[&str] = &[
    "NONE", "MAP1", "MAP2", "MAP3", "MAP4", "MAP5", "MAP6", "MAP7", "MAP8", "MAP9", "MAP10",
    "MAP11", "MAP12", "MAP13", "MAP14", "MAP15", "MAP16", "MAP17", "MAP18", "MAP19", "MAP20",
    "MAP21", "MAP22", "MAP23", "MAP24", "MAP25", "MAP26", "MAP27", "MAP28", "MAP29", "MAP30",
    "MAP31", "MAP32",
];

pub const MASTER_LEVELS: &[&str] = &[
    "ATTACK", "BLACKTWR", "BLOODSEA", "CANYON", "CATWALK", "COMBINE", "FISTULA", "GARRISON",
    "GERYON", "MANOR", "MEPHISTO", "MINOS", "NESSUS", "PARADOX", "SUBSPACE", "SUBTERRA",
    "TEETH", "TEETH2", "TTRAP", "VESPERAS", "VIRGIL",
];

/// Map slot of each Master Level inside its own WAD, indexed like [`MASTER_LEVELS`]
pub const MASTER_WARPS: [u32; 21] = [
    1, 25, 7, 1, 1, 1, 1, 1, 8, 1, 7, 5, 7, 1, 1, 1, 31, 32, 1, 9, 3,
];

/// File holding a Master Level. TEETH2 is the secret map inside TEETH.WAD.
pub fn master_level_file(index: usize) -> Option<String> {
    let name = match *MASTER_LEVELS.get(index)? {
        "TEETH2" => "TEETH",
        name => name,
    };
    Some(format!("{name}.WAD"))
}

pub fn is_episodic_iwad(iwad: &str) -> bool {
    EPISODIC_IWADS.contains(&iwad)
}

pub fn levels_for_iwad(iwad: &str) -> &'static [&'static str] {
    if is_episodic_iwad(iwad) {
        ULTIMATE_LEVELS
    } else {
        DOOM2_LEVELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_ids_round_trip_through_from_str() {
        for game in Game::ALL {
            assert_eq!(game.id().parse::<Game>(), Ok(game));
        }
        assert_eq!(" TNT ".parse::<Game>(), Ok(Game::Tnt));
        assert!("heretic".parse::<Game>().is_err());
    }

    #[test]
    fn master_tables_line_up() {
        assert_eq!(MASTER_LEVELS.len(), MASTER_WARPS.len());
        assert_eq!(master_level_file(0).as_deref(), Some("ATTACK.WAD"));
        assert_eq!(master_level_file(16).as_deref(), Some("TEETH.WAD"));
        assert_eq!(master_level_file(17).as_deref(), Some("TEETH.WAD"));
        assert_eq!(master_level_file(21), None);
    }

    #[test]
    fn level_lists_fit_the_level_index_bound() {
        for game in Game::ALL {
            assert!(game.levels().len() <= MAX_LEVEL_INDEX + 1);
        }
        assert_eq!(Game::Nrftl.levels().last(), Some(&"MAP9"));
        assert_eq!(levels_for_iwad("freedoom1.wad").len(), 37);
        assert_eq!(levels_for_iwad("TNT.WAD").len(), 33);
    }

    #[test]
    fn compat_tables_have_matching_length() {
        assert_eq!(COMPAT_PRESETS.len(), COMPAT_LEVELS.len());
        assert_eq!(COMPAT_LEVELS[COMPAT_LEVELS.len() - 1], 0);
    }
}
