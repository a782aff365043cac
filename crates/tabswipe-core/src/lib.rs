//! TabSwipe Core
//!
//! Ambient functionality shared by the TabSwipe crates: logging setup,
//! configuration, profiling hooks, hash collections and math types.

pub mod alloc;
pub mod config;
pub mod logging;
pub mod math;
pub mod profiling;

pub use config::{ProfilingMode, SwipeConfig, TransitionEffect};
