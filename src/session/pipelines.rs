//! Session pipelines - option store to command line
//!
//! - `official.rs`: fixed releases (Ultimate, Doom 2, Final Doom, NRFTL, Master Levels)
//! - `custom.rs`: custom games and demo recording/playback

mod custom;
mod official;

use std::path::Path;

use log::debug;

use crate::error::SessionError;
use crate::options::{GlobalSettings, OptionStore};
use crate::session::pure::CommandLine;
use crate::session::types::DemoMode;

use custom::build_custom;
use official::{build_official, release};

/// Executable plus the arguments every session shares
fn base_command(global: &GlobalSettings) -> CommandLine {
    let video = global.video();
    let mut cmd = CommandLine::new(global.executable());
    cmd.config(&global.engine_config);
    cmd.screen(video.fullscreen);
    cmd.resolution(video.width, video.height);
    cmd
}

fn join_path(dir: &str, name: &str) -> String {
    Path::new(dir).join(name).to_string_lossy().into_owned()
}

/// Build the command line for the current options.
///
/// Nothing is stored: the result depends only on `store`, so building twice
/// gives the same command line.
pub fn build_session(store: &OptionStore) -> Result<CommandLine, SessionError> {
    let opts = &store.session;
    let cmd = match release(opts.game) {
        Some(rel) => build_official(opts.game, rel, opts, &store.global)?,
        None => {
            let mode = DemoMode::from_flags(opts.record, opts.playback)?;
            build_custom(opts, &store.global, mode)?
        }
    };
    debug!("Built {} session: {}", opts.game, cmd);
    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Game;
    use crate::session::types::Slot;

    #[test]
    fn join_path_keeps_relative_dirs() {
        assert_eq!(join_path(".", "DOOM2.WAD"), "./DOOM2.WAD");
        assert_eq!(join_path("/games/doom/", "tnt31.wad"), "/games/doom/tnt31.wad");
    }

    #[test]
    fn base_command_follows_renderer() {
        let mut global = GlobalSettings::default();
        global.engine_config = "boom.cfg".to_string();
        assert_eq!(
            base_command(&global).to_string(),
            "prboom-plus -config \"boom.cfg\" -width 640 -height 480"
        );

        global.use_opengl = true;
        global.opengl_video.fullscreen = true;
        assert_eq!(
            base_command(&global).to_string(),
            "glboom-plus -config \"boom.cfg\" -fullscreen -width 1280 -height 720"
        );
    }

    #[test]
    fn defaults_only_force_the_iwad() {
        let cmd = build_session(&OptionStore::default()).unwrap();
        assert!(!cmd.contains(Slot::Screen));
        assert!(!cmd.contains(Slot::Config));
        let mut global = GlobalSettings::default();
        global.software_video.width = 0;
        let store = OptionStore {
            global,
            ..Default::default()
        };
        let cmd = build_session(&store).unwrap();
        assert_eq!(
            cmd.to_string(),
            "prboom-plus -save \"./saves/ultimate\" -complevel 3 -iwad \"./DOOM.WAD\""
        );
    }

    #[test]
    fn out_of_range_resolution_is_skipped() {
        let mut global = GlobalSettings::default();
        global.software_video.width = 200;
        assert!(!base_command(&global).contains(Slot::Resolution));
    }

    #[test]
    fn build_session_is_deterministic() {
        let mut store = OptionStore::default();
        store.session.game = Game::Doom2;
        assert!(store.session.set_level(5));
        let first = build_session(&store).unwrap();
        let second = build_session(&store).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.fragment(Slot::Warp).as_deref(), Some("-warp 5"));
    }

    #[test]
    fn demo_flags_only_apply_to_custom_games() {
        let mut store = OptionStore::default();
        store.session.record = true;
        store.session.playback = true;
        // official releases ignore the demo toggles
        assert!(build_session(&store).is_ok());

        store.session.game = Game::Custom;
        assert_eq!(build_session(&store), Err(SessionError::DemoConflict));

        store.session.record = false;
        store.session.playback_file = "run.lmp".to_string();
        let cmd = build_session(&store).unwrap();
        assert!(cmd.contains(Slot::PlayDemo));
        assert!(!cmd.contains(Slot::SaveDir));
    }

    #[test]
    fn switching_games_changes_iwad() {
        let mut store = OptionStore::default();
        for (game, iwad) in [
            (Game::Ultimate, "./DOOM.WAD"),
            (Game::Plutonia, "./PLUTONIA.WAD"),
            (Game::Nrftl, "./DOOM2.WAD"),
            (Game::Custom, "./DOOM2.WAD"),
        ] {
            store.session.game = game;
            let cmd = build_session(&store).unwrap();
            assert_eq!(cmd.fragment(Slot::Iwad), Some(format!("-iwad \"{iwad}\"")));
        }
    }
}
