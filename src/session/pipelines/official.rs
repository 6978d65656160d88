//! Official release sessions

use crate::catalog::{Game, NRFTL_WAD, TNT_IWAD, TNT_PATCH, master_level_file};
use crate::error::SessionError;
use crate::options::{GlobalSettings, SessionOptions};
use crate::session::pure::{CommandLine, episodic_warp, map_warp, master_warp, nrftl_warp};
use crate::session::types::Warp;

use super::{base_command, join_path};

/// Fixed IWAD and compatibility level of an official release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Release {
    pub iwad: &'static str,
    pub complevel: u32,
}

/// Dispatch table for official releases; `None` for custom games
pub fn release(game: Game) -> Option<Release> {
    let (iwad, complevel) = match game {
        Game::Ultimate => ("DOOM.WAD", 3),
        Game::Doom2 | Game::Nrftl | Game::Master => ("DOOM2.WAD", 2),
        Game::Plutonia => ("PLUTONIA.WAD", 4),
        Game::Tnt => (TNT_IWAD, 4),
        Game::Custom => return None,
    };
    Some(Release { iwad, complevel })
}

/// Files bundled with the release and the warp target for a level
fn release_level(game: Game, level: usize, global: &GlobalSettings) -> Option<(Vec<String>, Warp)> {
    if level >= game.levels().len() {
        return None;
    }
    let target = match game {
        Game::Ultimate => (vec![], episodic_warp(level)),
        Game::Doom2 | Game::Plutonia => (vec![], map_warp(level)),
        // TNT.WAD is broken without the official patch
        Game::Tnt => (vec![join_path(&global.iwad_dir, TNT_PATCH)], map_warp(level)),
        // starting at the menu would play a desynced title demo
        Game::Nrftl => (vec![join_path(&global.nrftl_dir, NRFTL_WAD)], nrftl_warp(level)),
        Game::Master => {
            let file = master_level_file(level)?;
            (vec![join_path(&global.master_dir, &file)], master_warp(level)?)
        }
        Game::Custom => return None,
    };
    Some(target)
}

pub fn build_official(
    game: Game,
    rel: Release,
    opts: &SessionOptions,
    global: &GlobalSettings,
) -> Result<CommandLine, SessionError> {
    let level = opts.level();
    let (files, warp) =
        release_level(game, level, global).ok_or(SessionError::LevelUnavailable { game, level })?;

    let mut cmd = base_command(global);
    let savedir = if global.make_savedirs {
        join_path(&global.save_dir, game.id())
    } else {
        global.save_dir.clone()
    };
    cmd.savedir(&savedir);
    cmd.complevel(rel.complevel);
    cmd.warp(warp);
    cmd.skill(opts.skill(), warp);
    cmd.files(&files);
    cmd.iwad(&join_path(&global.iwad_dir, rel.iwad));
    Ok(cmd)
}
