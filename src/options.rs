//! Options module - validated launcher state
//!
//! Pure data and validation only. Disk I/O lives in `config`, scanning of
//! the add-on directory in `addons`.

mod global;
mod session;

pub use global::{GlobalSettings, VideoSettings};
pub use session::SessionOptions;

/// Everything the launcher knows about one configuration.
///
/// Owned by the front-end and lent to the session factory and the settings
/// persistence; nothing else keeps a copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionStore {
    pub global: GlobalSettings,
    pub session: SessionOptions,
}
