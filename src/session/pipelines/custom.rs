//! Custom game and demo sessions

use log::warn;

use crate::catalog::{COMPAT_LEVELS, Game, TNT_IWAD, TNT_PATCH, is_episodic_iwad, levels_for_iwad};
use crate::error::SessionError;
use crate::options::{GlobalSettings, SessionOptions};
use crate::session::pure::{CommandLine, custom_savedir_name, episodic_warp, map_warp, split_patches};
use crate::session::types::DemoMode;

use super::{base_command, join_path};

/// Build a custom game session in the given demo mode.
///
/// Playback leaves out the save directory, skill and warp: a demo carries
/// its own start conditions and must not write saves.
pub fn build_custom(
    opts: &SessionOptions,
    global: &GlobalSettings,
    mode: DemoMode,
) -> Result<CommandLine, SessionError> {
    let iwad = opts.iwad_name();
    let mut cmd = base_command(global);

    let (patch, wads, ignored) = split_patches(&opts.files);
    for file in ignored {
        warn!("Only one DeHackEd patch can be loaded, ignoring {}", file);
    }

    let savedir = if global.make_savedirs {
        join_path(&global.save_dir, &custom_savedir_name(iwad, &wads))
    } else {
        global.save_dir.clone()
    };
    cmd.savedir(&savedir);
    cmd.complevel(COMPAT_LEVELS[opts.compat()]);
    cmd.fast(opts.fast);
    cmd.respawn(opts.respawn);

    let mut files = Vec::with_capacity(wads.len() + 1);
    if iwad == TNT_IWAD {
        files.push(join_path(&global.iwad_dir, TNT_PATCH));
    }
    files.extend(wads.iter().map(|wad| join_path(&global.addon_dir, wad)));
    cmd.files(&files);
    cmd.deh(patch.map(|p| join_path(&global.addon_dir, p)).as_deref());
    cmd.iwad(&join_path(&global.iwad_dir, iwad));
    cmd.custom(&opts.extra_args)
        .map_err(|e| SessionError::ExtraArgs(e.to_string()))?;

    match mode {
        DemoMode::Normal => level_params(&mut cmd, opts)?,
        DemoMode::RecordOnly => {
            if opts.record_name.trim().is_empty() {
                return Err(SessionError::MissingDemoFile("recording"));
            }
            level_params(&mut cmd, opts)?;
            cmd.record(&join_path(&global.demo_dir, opts.record_name.trim()));
        }
        DemoMode::PlaybackOnly => {
            if opts.playback_file.trim().is_empty() {
                return Err(SessionError::MissingDemoFile("playback"));
            }
            cmd.savedir("");
            cmd.playdemo(opts.playback_file.trim());
        }
    }

    Ok(cmd)
}

/// Warp and skill; the map numbering follows the IWAD
fn level_params(cmd: &mut CommandLine, opts: &SessionOptions) -> Result<(), SessionError> {
    let iwad = opts.iwad_name();
    let level = opts.level();
    if level >= levels_for_iwad(iwad).len() {
        return Err(SessionError::LevelUnavailable {
            game: Game::Custom,
            level,
        });
    }
    let warp = if is_episodic_iwad(iwad) {
        episodic_warp(level)
    } else {
        map_warp(level)
    };
    cmd.warp(warp);
    cmd.skill(opts.skill(), warp);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::types::Slot;

    fn custom(files: &[&str]) -> SessionOptions {
        let mut opts = SessionOptions::default();
        opts.game = Game::Custom;
        opts.set_files(files.iter().copied());
        opts
    }

    fn build(opts: &SessionOptions, mode: DemoMode) -> CommandLine {
        build_custom(opts, &GlobalSettings::default(), mode).unwrap()
    }

    // ── save folders ──

    #[test]
    fn savedir_without_addons() {
        let cmd = build(&custom(&[]), DemoMode::Normal);
        assert_eq!(
            cmd.fragment(Slot::SaveDir).as_deref(),
            Some("-save \"./saves/DOOM2_CustomGame\"")
        );
    }

    #[test]
    fn savedir_with_addons_ignores_patches() {
        let cmd = build(&custom(&["mymod.wad", "fix.deh", "extra.wad"]), DemoMode::Normal);
        assert_eq!(
            cmd.fragment(Slot::SaveDir).as_deref(),
            Some("-save \"./saves/DOOM2_mymod_extra\"")
        );
    }

    #[test]
    fn only_a_patch_counts_as_no_addons() {
        let cmd = build(&custom(&["fix.bex"]), DemoMode::Normal);
        assert_eq!(cmd.save_dir(), Some(std::path::Path::new("./saves/DOOM2_CustomGame")));
        assert!(!cmd.contains(Slot::Files));
        assert_eq!(cmd.fragment(Slot::Deh).as_deref(), Some("-deh \"./fix.bex\""));
    }

    // ── files ──

    #[test]
    fn files_keep_load_order_and_first_patch_wins() {
        let cmd = build(
            &custom(&["b.wad", "one.deh", "a.wad", "two.deh"]),
            DemoMode::Normal,
        );
        assert_eq!(
            cmd.fragment(Slot::Files).as_deref(),
            Some("-file \"./b.wad\" \"./a.wad\"")
        );
        assert_eq!(cmd.fragment(Slot::Deh).as_deref(), Some("-deh \"./one.deh\""));
    }

    #[test]
    fn tnt_iwad_prepends_the_patch() {
        let mut opts = custom(&[]);
        assert!(opts.set_iwad(3));
        let cmd = build(&opts, DemoMode::Normal);
        assert_eq!(cmd.fragment(Slot::Files).as_deref(), Some("-file \"./tnt31.wad\""));

        opts.set_files(["mod.wad"]);
        let cmd = build(&opts, DemoMode::Normal);
        assert_eq!(
            cmd.fragment(Slot::Files).as_deref(),
            Some("-file \"./tnt31.wad\" \"./mod.wad\"")
        );
        assert_eq!(cmd.save_dir(), Some(std::path::Path::new("./saves/TNT_mod")));
    }

    // ── options ──

    #[test]
    fn compat_dont_set_omits_complevel() {
        let mut opts = custom(&[]);
        assert!(opts.set_compat(3));
        assert_eq!(
            build(&opts, DemoMode::Normal).fragment(Slot::Complevel).as_deref(),
            Some("-complevel 9")
        );
        assert!(opts.set_compat(5));
        assert!(!build(&opts, DemoMode::Normal).contains(Slot::Complevel));
    }

    #[test]
    fn flags_and_extra_args() {
        let mut opts = custom(&[]);
        opts.fast = true;
        opts.respawn = true;
        opts.extra_args = "-nomonsters -timer 10".to_string();
        let cmd = build(&opts, DemoMode::Normal);
        assert!(cmd.contains(Slot::Fast));
        assert!(cmd.contains(Slot::Respawn));
        assert_eq!(
            cmd.fragment(Slot::Custom).as_deref(),
            Some("-nomonsters -timer 10")
        );
        assert!(cmd.to_string().ends_with("-iwad \"./DOOM2.WAD\" -nomonsters -timer 10"));
    }

    #[test]
    fn quoted_extra_args_reach_the_engine_whole() {
        let mut opts = custom(&[]);
        opts.extra_args = "-config \"my boom.cfg\"".to_string();
        let cmd = build(&opts, DemoMode::Normal);
        assert!(cmd.argv().ends_with(&["-config".to_string(), "my boom.cfg".to_string()]));

        opts.extra_args = "-config \"my boom.cfg".to_string();
        assert!(matches!(
            build_custom(&opts, &GlobalSettings::default(), DemoMode::Normal),
            Err(SessionError::ExtraArgs(_))
        ));
    }

    #[test]
    fn warp_numbering_follows_iwad() {
        let mut opts = custom(&[]);
        assert!(opts.set_level(10));
        assert_eq!(
            build(&opts, DemoMode::Normal).fragment(Slot::Warp).as_deref(),
            Some("-warp 10")
        );
        assert!(opts.set_iwad(4)); // freedoom1.wad
        assert_eq!(
            build(&opts, DemoMode::Normal).fragment(Slot::Warp).as_deref(),
            Some("-warp 2 1")
        );
    }

    #[test]
    fn skill_only_when_warping() {
        let mut opts = custom(&[]);
        assert!(!build(&opts, DemoMode::Normal).contains(Slot::Skill));
        assert!(opts.set_level(1));
        assert!(build(&opts, DemoMode::Normal).contains(Slot::Skill));
    }

    #[test]
    fn level_past_doom2_list_is_refused() {
        let mut opts = custom(&[]);
        assert!(opts.set_level(33));
        assert_eq!(
            build_custom(&opts, &GlobalSettings::default(), DemoMode::Normal),
            Err(SessionError::LevelUnavailable { game: Game::Custom, level: 33 })
        );
    }

    // ── demos ──

    #[test]
    fn record_keeps_savedir_and_level() {
        let mut opts = custom(&[]);
        assert!(opts.set_level(3));
        opts.record = true;
        let cmd = build(&opts, DemoMode::RecordOnly);
        assert!(cmd.contains(Slot::SaveDir));
        assert!(cmd.contains(Slot::Warp));
        assert!(cmd.contains(Slot::Skill));
        assert_eq!(
            cmd.fragment(Slot::Record).as_deref(),
            Some("-record \"./MyDemo.lmp\"")
        );
        assert!(!cmd.contains(Slot::PlayDemo));
    }

    #[test]
    fn playback_drops_savedir_skill_and_warp() {
        let mut opts = custom(&["mod.wad"]);
        assert!(opts.set_level(3));
        opts.playback = true;
        opts.playback_file = "/demos/run.lmp".to_string();
        let cmd = build(&opts, DemoMode::PlaybackOnly);
        assert!(!cmd.contains(Slot::SaveDir));
        assert_eq!(cmd.save_dir(), None);
        assert!(!cmd.contains(Slot::Skill));
        assert!(!cmd.contains(Slot::Warp));
        assert!(cmd.contains(Slot::Files));
        assert_eq!(
            cmd.fragment(Slot::PlayDemo).as_deref(),
            Some("-playdemo \"/demos/run.lmp\"")
        );
        assert!(!cmd.contains(Slot::Record));
    }

    #[test]
    fn demo_without_file_is_refused() {
        let mut opts = custom(&[]);
        opts.record_name = "  ".to_string();
        assert_eq!(
            build_custom(&opts, &GlobalSettings::default(), DemoMode::RecordOnly),
            Err(SessionError::MissingDemoFile("recording"))
        );
        assert_eq!(
            build_custom(&opts, &GlobalSettings::default(), DemoMode::PlaybackOnly),
            Err(SessionError::MissingDemoFile("playback"))
        );
    }
}
