use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::catalog::Game;
use crate::config::types::{CustomSection, GlobalSection, PresetFile, join_files, split_files};
use crate::error::SettingsError;
use crate::options::{GlobalSettings, OptionStore, SessionOptions, VideoSettings};
use crate::paths::PATH_DEFAULT_PRESET;

/// Write every setting of `store` to `path`, or to the default preset.
pub fn save_settings(store: &OptionStore, path: Option<&Path>) -> Result<(), SettingsError> {
    let path = path.unwrap_or(PATH_DEFAULT_PRESET.as_path());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let doc = PresetFile {
        global: global_section(&store.global),
        custom: custom_section(&store.session),
    };
    fs::write(path, toml::to_string_pretty(&doc)?)?;
    info!("Saved settings to {}", path.display());
    Ok(())
}

/// Read a preset into `store`.
///
/// Returns `Ok(false)` without touching anything when the file doesn't
/// exist. Values the setters refuse are logged and skipped.
pub fn load_settings(store: &mut OptionStore, path: Option<&Path>) -> Result<bool, SettingsError> {
    let path = path.unwrap_or(PATH_DEFAULT_PRESET.as_path());
    if !path.exists() {
        info!("No settings at {}, keeping current values", path.display());
        return Ok(false);
    }
    let doc: PresetFile = toml::from_str(&fs::read_to_string(path)?)?;
    apply_global(&mut store.global, doc.global);
    apply_custom(&mut store.session, doc.custom);
    info!("Loaded settings from {}", path.display());
    Ok(true)
}

fn global_section(g: &GlobalSettings) -> GlobalSection {
    let sw = &g.software_video;
    let gl = &g.opengl_video;
    GlobalSection {
        iwad_dir: Some(g.iwad_dir.clone()),
        master_dir: Some(g.master_dir.clone()),
        nrftl_dir: Some(g.nrftl_dir.clone()),
        addon_dir: Some(g.addon_dir.clone()),
        save_dir: Some(g.save_dir.clone()),
        demo_dir: Some(g.demo_dir.clone()),
        software_exe: Some(g.software_exe.clone()),
        opengl_exe: Some(g.opengl_exe.clone()),
        use_opengl: Some(g.use_opengl),
        sw_width: Some(sw.width.into()),
        sw_height: Some(sw.height.into()),
        sw_fullscreen: Some(sw.fullscreen),
        sw_fullscreen_desktop: Some(sw.fullscreen_desktop),
        gl_width: Some(gl.width.into()),
        gl_height: Some(gl.height.into()),
        gl_fullscreen: Some(gl.fullscreen),
        gl_fullscreen_desktop: Some(gl.fullscreen_desktop),
        make_savedirs: Some(g.make_savedirs),
        engine_config: Some(g.engine_config.clone()),
    }
}

fn custom_section(s: &SessionOptions) -> CustomSection {
    CustomSection {
        game: Some(s.game.id().to_string()),
        skill: Some(s.skill() as i64),
        level: Some(s.level() as i64),
        iwad: Some(s.iwad() as i64),
        compat: Some(s.compat() as i64),
        files: Some(join_files(&s.files)),
        fast: Some(s.fast),
        respawn: Some(s.respawn),
        extra_args: Some(s.extra_args.clone()),
        record: Some(s.record),
        record_name: Some(s.record_name.clone()),
        playback: Some(s.playback),
        playback_file: Some(s.playback_file.clone()),
    }
}

fn set<T>(field: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *field = v;
    }
}

fn apply_dimension(field: &mut u32, value: Option<i64>, key: &str) {
    let Some(v) = value else { return };
    match u32::try_from(v) {
        Ok(v) => *field = v,
        Err(_) => warn!("Ignoring {} = {}: not a valid size", key, v),
    }
}

fn apply_video(video: &mut VideoSettings, prefix: &str, dims: [Option<i64>; 2], flags: [Option<bool>; 2]) {
    let [width, height] = dims;
    let [fullscreen, desktop] = flags;
    apply_dimension(&mut video.width, width, &format!("{prefix}_width"));
    apply_dimension(&mut video.height, height, &format!("{prefix}_height"));
    set(&mut video.fullscreen, fullscreen);
    set(&mut video.fullscreen_desktop, desktop);
}

fn apply_global(g: &mut GlobalSettings, s: GlobalSection) {
    set(&mut g.iwad_dir, s.iwad_dir);
    set(&mut g.master_dir, s.master_dir);
    set(&mut g.nrftl_dir, s.nrftl_dir);
    set(&mut g.addon_dir, s.addon_dir);
    set(&mut g.save_dir, s.save_dir);
    set(&mut g.demo_dir, s.demo_dir);
    set(&mut g.software_exe, s.software_exe);
    set(&mut g.opengl_exe, s.opengl_exe);
    set(&mut g.use_opengl, s.use_opengl);
    apply_video(
        &mut g.software_video,
        "sw",
        [s.sw_width, s.sw_height],
        [s.sw_fullscreen, s.sw_fullscreen_desktop],
    );
    apply_video(
        &mut g.opengl_video,
        "gl",
        [s.gl_width, s.gl_height],
        [s.gl_fullscreen, s.gl_fullscreen_desktop],
    );
    set(&mut g.make_savedirs, s.make_savedirs);
    set(&mut g.engine_config, s.engine_config);
}

/// Route a stored index through its setter; negatives and overflow count as out of range
fn apply_index(
    opts: &mut SessionOptions,
    value: Option<i64>,
    key: &str,
    setter: fn(&mut SessionOptions, usize) -> bool,
) {
    let Some(v) = value else { return };
    let accepted = usize::try_from(v).is_ok_and(|i| setter(opts, i));
    if !accepted {
        warn!("Ignoring {} = {}: out of range", key, v);
    }
}

fn apply_custom(opts: &mut SessionOptions, s: CustomSection) {
    if let Some(id) = s.game {
        match id.parse::<Game>() {
            Ok(game) => opts.game = game,
            Err(e) => warn!("Ignoring game: {}", e),
        }
    }
    apply_index(opts, s.skill, "skill", SessionOptions::set_skill);
    apply_index(opts, s.level, "level", SessionOptions::set_level);
    apply_index(opts, s.iwad, "iwad", SessionOptions::set_iwad);
    apply_index(opts, s.compat, "compat", SessionOptions::set_compat);
    if let Some(files) = s.files {
        opts.set_files(split_files(&files));
    }
    set(&mut opts.fast, s.fast);
    set(&mut opts.respawn, s.respawn);
    set(&mut opts.extra_args, s.extra_args);
    set(&mut opts.record, s.record);
    set(&mut opts.record_name, s.record_name);
    set(&mut opts.playback, s.playback);
    set(&mut opts.playback_file, s.playback_file);
}
