//! Operations module (atomic side effects)

pub mod savedir;
pub mod spawn;

pub use savedir::ensure_save_dir;
pub use spawn::{ProcessSpawner, SystemSpawner};
