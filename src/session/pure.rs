//! Pure functions for the session module
//!
//! These functions have no side effects and are deterministic.

mod args;
mod files;
mod warp;

pub use args::CommandLine;
pub use files::{custom_savedir_name, split_patches};
pub use warp::{episodic_warp, map_warp, master_warp, nrftl_warp};
