//! Session module - turning options into an engine command line
//!
//! ## Module Structure
//! - `types.rs`: slots, tokens, warp targets, demo modes
//! - `pure/`: the argument rules and level/file helpers
//! - `pipelines/`: per-game assembly of a full command line

mod pipelines;
mod pure;
mod types;

pub use pipelines::build_session;
pub use pure::CommandLine;
