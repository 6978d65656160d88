//! Config module - preset files on disk
//!
//! A preset is a TOML document with a `[GlobalSettings]` and a `[CustomGame]`
//! table. Loading goes through the option setters, so a preset can never put
//! the store into a state the front-end couldn't.

pub mod operations;
pub mod types;

pub use operations::{load_settings, save_settings};
