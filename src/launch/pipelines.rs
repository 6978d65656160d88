//! Pipelines module (orchestration)

pub mod execute;

pub use execute::launch_session;
