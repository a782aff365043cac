//! Profiling utilities based on the `puffin` crate.
//!
//! Without the `profiling` feature the scope macros compile to nothing.

use crate::config::ProfilingMode;

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_function {
    () => {};
    ($data:expr) => {};
}

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {};
    ($name:expr, $data:expr) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::{profile_function, profile_scope};

#[cfg(feature = "profiling")]
static PROFILING_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Enable profiling according to `mode`.
///
/// # Example
/// ```no_run
/// use tabswipe_core::profiling::init_profiling;
/// use tabswipe_core::ProfilingMode;
///
/// init_profiling(ProfilingMode::WithWebServer);
/// ```
#[cfg(feature = "profiling")]
pub fn init_profiling(mode: ProfilingMode) {
    match mode {
        ProfilingMode::Off => puffin::set_scopes_on(false),
        ProfilingMode::On => puffin::set_scopes_on(true),
        ProfilingMode::WithWebServer => {
            puffin::set_scopes_on(true);
            match puffin_http::Server::new("0.0.0.0:8585") {
                Ok(server) => {
                    tracing::info!("Puffin profiler server started on http://0.0.0.0:8585");
                    let _ = PROFILING_SERVER.set(server);
                }
                Err(e) => {
                    tracing::error!("Failed to start puffin server: {}", e);
                }
            }
        }
    }
}

#[cfg(not(feature = "profiling"))]
pub fn init_profiling(mode: ProfilingMode) {
    if mode != ProfilingMode::Off {
        tracing::warn!("profiling requested but the `profiling` feature is disabled");
    }
}

/// Mark the start of a new profiling frame, typically once per gesture.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
