//! Boomlauncher builds command lines for PrBoom+ style Doom engines and
//! starts them with per-game save folders.

mod addons;
mod app;
mod catalog;
mod config;
mod error;
mod launch;
mod options;
mod paths;
mod session;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::{LevelFilter, error};
use simple_logger::SimpleLogger;

use crate::catalog::Game;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Preset file to load at start and save after changes.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Show debug output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// The command to execute.
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the engine with the current options.
    Play {
        /// Only print the command line.
        #[arg(long)]
        dry_run: bool,
    },

    /// Print all settings and the resulting command line.
    Show,

    /// Change options of the session.
    Session(SessionArgs),

    /// Change global settings.
    Settings(SettingsArgs),

    /// Show available add-ons or change the load order.
    Files {
        /// New selection; new files are appended, a smaller selection removes files.
        select: Vec<String>,

        /// Remove every file from the load order.
        #[arg(long, conflicts_with = "select")]
        clear: bool,
    },

    /// Save or load a named preset.
    #[command(subcommand)]
    Preset(PresetCommand),

    /// Restore the default global settings.
    Reset,

    /// List games, IWADs, skills, compatibility modes and levels.
    List,
}

#[derive(Args, Default)]
pub struct SessionArgs {
    /// Game to play (ultimate, doom2, plutonia, tnt, nrftl, master, custom).
    #[arg(long)]
    game: Option<Game>,

    /// Skill index, 0 to 4.
    #[arg(long)]
    skill: Option<usize>,

    /// Level index; 0 starts at the main menu.
    #[arg(long)]
    level: Option<usize>,

    /// IWAD index used by custom games.
    #[arg(long)]
    iwad: Option<usize>,

    /// Compatibility preset index used by custom games.
    #[arg(long)]
    compat: Option<usize>,

    #[arg(long)]
    fast: Option<bool>,

    #[arg(long)]
    respawn: Option<bool>,

    /// Extra arguments appended to the command line.
    #[arg(long, allow_hyphen_values = true)]
    extra_args: Option<String>,

    /// Record a demo (custom games only).
    #[arg(long)]
    record: Option<bool>,

    /// Demo name, saved as <demo dir>/<name>.lmp.
    #[arg(long)]
    record_name: Option<String>,

    /// Play back a demo (custom games only).
    #[arg(long)]
    playback: Option<bool>,

    /// Demo file to play back.
    #[arg(long)]
    playback_file: Option<String>,
}

#[derive(Args, Default)]
pub struct SettingsArgs {
    #[arg(long)]
    iwad_dir: Option<String>,

    #[arg(long)]
    master_dir: Option<String>,

    #[arg(long)]
    nrftl_dir: Option<String>,

    #[arg(long)]
    addon_dir: Option<String>,

    #[arg(long)]
    save_dir: Option<String>,

    #[arg(long)]
    demo_dir: Option<String>,

    #[arg(long)]
    software_exe: Option<String>,

    #[arg(long)]
    opengl_exe: Option<String>,

    /// Use the OpenGL renderer instead of the software one.
    #[arg(long)]
    opengl: Option<bool>,

    /// Resolution of the selected renderer, e.g. 800x600.
    #[arg(long)]
    resolution: Option<String>,

    /// Fullscreen for the selected renderer.
    #[arg(long)]
    fullscreen: Option<bool>,

    /// Desktop fullscreen for the selected renderer.
    #[arg(long)]
    fullscreen_desktop: Option<bool>,

    /// Give each game or mod its own save folder.
    #[arg(long)]
    make_savedirs: Option<bool>,

    /// Engine config file passed with -config; empty for the engine default.
    #[arg(long)]
    engine_config: Option<String>,
}

#[derive(Subcommand)]
pub enum PresetCommand {
    /// Write the current options to a preset file.
    Save { path: PathBuf },

    /// Read options from a preset file.
    Load { path: PathBuf },
}

fn main() {
    let args = Cli::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to start logger: {e}");
    }

    if let Err(e) = app::run_command(args) {
        error!("{e}");
        std::process::exit(1);
    }
}
