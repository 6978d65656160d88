//! Launch module - starting the engine
//!
//! ## Module Structure
//! - `operations/`: atomic side effects (save directory, process spawn)
//! - `pipelines/`: the launch sequence

mod operations;
mod pipelines;

pub use operations::SystemSpawner;
pub use pipelines::launch_session;
