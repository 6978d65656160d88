//! Command handlers
//!
//! Every command works on one `OptionStore` loaded from the active preset.
//! Commands that change it save it back before returning.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::addons::{resync, scan_addons, update_load_order};
use crate::catalog::{COMPAT_PRESETS, Game, IWADS, SKILLS, levels_for_iwad};
use crate::config::{load_settings, save_settings};
use crate::error::AppResult;
use crate::launch::{SystemSpawner, launch_session};
use crate::options::{OptionStore, SessionOptions};
use crate::paths::PATH_DEFAULT_PRESET;
use crate::session::build_session;
use crate::{Cli, Command, PresetCommand, SessionArgs, SettingsArgs};

/// Runs the command specified by the passed CLI arguments.
pub fn run_command(args: Cli) -> AppResult<()> {
    let preset = args
        .config
        .clone()
        .unwrap_or_else(|| PATH_DEFAULT_PRESET.to_path_buf());
    let mut store = OptionStore::default();
    load_settings(&mut store, Some(&preset))?;

    let changed = match args.cmd {
        Command::Play { dry_run } => {
            let dropped = resync_addons(&mut store);
            play(&store, dry_run)?;
            dropped
        }
        Command::Show => {
            let dropped = resync_addons(&mut store);
            show(&store);
            dropped
        }
        Command::Session(a) => {
            apply_session(&mut store, a);
            true
        }
        Command::Settings(a) => {
            apply_settings(&mut store, a)?;
            true
        }
        Command::Files { select, clear } => {
            let before = store.session.files.clone();
            files(&mut store, &select, clear);
            store.session.files != before
        }
        Command::Preset(PresetCommand::Save { path }) => {
            save_settings(&store, Some(&path))?;
            false
        }
        Command::Preset(PresetCommand::Load { path }) => {
            if !load_settings(&mut store, Some(&path))? {
                warn!("Preset {} doesn't exist", path.display());
            }
            true
        }
        Command::Reset => {
            store.global.restore_defaults();
            info!("Global settings restored to defaults");
            true
        }
        Command::List => {
            list(&store);
            false
        }
    };

    if changed {
        save_settings(&store, Some(&preset))?;
    }
    Ok(())
}

/// Drop load order entries whose file is gone from the add-on directory.
/// Returns whether anything was dropped.
fn resync_addons(store: &mut OptionStore) -> bool {
    let dir = Path::new(&store.global.addon_dir);
    let kept = resync(&store.session.files, &scan_addons(dir));
    if kept.len() == store.session.files.len() {
        return false;
    }
    for name in store.session.files.iter().filter(|f| !kept.contains(f)) {
        warn!("{} is no longer in {}, removed from the load order", name, dir.display());
    }
    store.session.set_files(kept);
    true
}

fn play(store: &OptionStore, dry_run: bool) -> AppResult<()> {
    let cmd = build_session(store)?;
    if dry_run {
        println!("{}", cmd);
        return Ok(());
    }
    launch_session(&cmd, &mut SystemSpawner)?;
    Ok(())
}

fn show(store: &OptionStore) {
    let g = &store.global;
    let s = &store.session;
    let video = g.video();

    println!("[GlobalSettings]");
    println!("  iwad_dir        {}", g.iwad_dir);
    println!("  master_dir      {}", g.master_dir);
    println!("  nrftl_dir       {}", g.nrftl_dir);
    println!("  addon_dir       {}", g.addon_dir);
    println!("  save_dir        {}", g.save_dir);
    println!("  demo_dir        {}", g.demo_dir);
    println!("  executable      {}", g.executable());
    println!(
        "  video           {}x{}{}{}",
        video.width,
        video.height,
        if video.fullscreen { " fullscreen" } else { " windowed" },
        if video.fullscreen_desktop { " (desktop)" } else { "" }
    );
    println!("  make_savedirs   {}", g.make_savedirs);
    println!("  engine_config   {}", g.engine_config);

    println!("[Session]");
    println!("  game            {} ({})", s.game.title(), s.game);
    println!("  skill           {}", SKILLS[s.skill()]);
    println!("  level           {}", level_name(s));
    if s.game == Game::Custom {
        println!("  iwad            {}", s.iwad_name());
        println!("  compat          {}", COMPAT_PRESETS[s.compat()]);
        println!("  files           {}", s.files.join(" "));
        println!("  extra_args      {}", s.extra_args);
        println!("  record          {} ({})", s.record, s.record_name);
        println!("  playback        {} ({})", s.playback, s.playback_file);
    }
    println!("  fast/respawn    {}/{}", s.fast, s.respawn);

    match build_session(store) {
        Ok(cmd) => println!("\n{}", cmd),
        Err(e) => warn!("No command line: {}", e),
    }
}

/// Level names for the selected game; custom games go by their IWAD
fn level_list(s: &SessionOptions) -> &'static [&'static str] {
    match s.game {
        Game::Custom => levels_for_iwad(s.iwad_name()),
        game => game.levels(),
    }
}

fn level_name(s: &SessionOptions) -> &'static str {
    level_list(s).get(s.level()).copied().unwrap_or("?")
}

fn reject(key: &str, value: usize) {
    warn!("Ignoring {} {}: out of range", key, value);
}

fn apply_session(store: &mut OptionStore, a: SessionArgs) {
    let s = &mut store.session;
    if let Some(game) = a.game {
        s.game = game;
    }
    if let Some(v) = a.skill.filter(|&v| !s.set_skill(v)) {
        reject("skill", v);
    }
    if let Some(v) = a.level.filter(|&v| !s.set_level(v)) {
        reject("level", v);
    }
    if let Some(v) = a.iwad.filter(|&v| !s.set_iwad(v)) {
        reject("iwad", v);
    }
    if let Some(v) = a.compat.filter(|&v| !s.set_compat(v)) {
        reject("compat", v);
    }
    if let Some(v) = a.fast {
        s.fast = v;
    }
    if let Some(v) = a.respawn {
        s.respawn = v;
    }
    if let Some(v) = a.extra_args {
        s.extra_args = v;
    }
    if let Some(v) = a.record {
        s.record = v;
    }
    if let Some(v) = a.record_name {
        s.record_name = v;
    }
    if let Some(v) = a.playback {
        s.playback = v;
    }
    if let Some(v) = a.playback_file {
        s.playback_file = v;
    }
}

fn apply_settings(store: &mut OptionStore, a: SettingsArgs) -> AppResult<()> {
    let g = &mut store.global;
    let dirs = [
        (&mut g.iwad_dir, a.iwad_dir),
        (&mut g.master_dir, a.master_dir),
        (&mut g.nrftl_dir, a.nrftl_dir),
        (&mut g.addon_dir, a.addon_dir),
        (&mut g.save_dir, a.save_dir),
        (&mut g.demo_dir, a.demo_dir),
        (&mut g.software_exe, a.software_exe),
        (&mut g.opengl_exe, a.opengl_exe),
        (&mut g.engine_config, a.engine_config),
    ];
    for (field, value) in dirs {
        if let Some(v) = value {
            *field = v;
        }
    }
    if let Some(v) = a.opengl {
        g.use_opengl = v;
    }
    if let Some(v) = a.make_savedirs {
        g.make_savedirs = v;
    }

    // video options apply to whichever renderer is selected after the switch above
    let video = g.video_mut();
    if let Some(res) = a.resolution {
        video.set_resolution(&res)?;
    }
    if let Some(v) = a.fullscreen {
        video.fullscreen = v;
    }
    if let Some(v) = a.fullscreen_desktop {
        video.fullscreen_desktop = v;
    }
    Ok(())
}

fn files(store: &mut OptionStore, select: &[String], clear: bool) {
    let dir = PathBuf::from(&store.global.addon_dir);
    let available = scan_addons(&dir);
    let current = resync(&store.session.files, &available);
    if current.len() != store.session.files.len() {
        info!("Dropped add-ons missing from {}", dir.display());
    }

    let order = if clear {
        Vec::new()
    } else if select.is_empty() {
        current
    } else {
        for name in select.iter().filter(|f| !available.contains(f)) {
            warn!("{} isn't in {}", name, dir.display());
        }
        let picked: Vec<String> = select
            .iter()
            .filter(|f| available.contains(f))
            .cloned()
            .collect();
        update_load_order(&current, &picked)
    };
    store.session.set_files(order);

    print_files(&dir, &available, &store.session.files);
}

fn print_files(dir: &Path, available: &[String], order: &[String]) {
    println!("Available in {}:", dir.display());
    for name in available {
        let mark = if order.contains(name) { '*' } else { ' ' };
        println!("  {} {}", mark, name);
    }
    println!("Load order:");
    for (i, name) in order.iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }
}

fn list(store: &OptionStore) {
    println!("Games:");
    for game in Game::ALL {
        println!("  {:<10} {}", game.id(), game.title());
    }
    println!("IWADs:");
    for (i, iwad) in IWADS.iter().enumerate() {
        println!("  {}  {}", i, iwad);
    }
    println!("Skills:");
    for (i, skill) in SKILLS.iter().enumerate() {
        println!("  {}  {}", i, skill);
    }
    println!("Compatibility:");
    for (i, compat) in COMPAT_PRESETS.iter().enumerate() {
        println!("  {}  {}", i, compat);
    }

    println!("Levels ({}):", store.session.game);
    for (i, level) in level_list(&store.session).iter().enumerate() {
        println!("  {:>2}  {}", i, level);
    }
}
