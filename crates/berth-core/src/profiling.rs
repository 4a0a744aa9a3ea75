//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the scope macros expand to nothing
//! and the init functions are no-ops.

#[cfg(feature = "profiling")]
use std::sync::OnceLock;

#[cfg(feature = "profiling")]
pub use puffin::{GlobalProfiler, profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __berth_profile_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::__berth_profile_noop as profile_function;
#[cfg(not(feature = "profiling"))]
pub use crate::__berth_profile_noop as profile_scope;

use crate::config::{Config, ProfilingMode};

/// Profiling backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Record scopes in-process only.
    InProcess,
    /// Send profiling data to puffin_viewer via HTTP.
    PuffinHttp,
}

/// Default address of the puffin HTTP server.
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8585";

#[cfg(feature = "profiling")]
static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

/// Initialize profiling with the specified backend.
///
/// # Example
/// ```no_run
/// use berth_core::profiling::{init_profiling, ProfilingBackend};
///
/// init_profiling(ProfilingBackend::PuffinHttp);
/// ```
#[cfg(feature = "profiling")]
pub fn init_profiling(backend: ProfilingBackend) {
    puffin::set_scopes_on(true);

    if backend == ProfilingBackend::PuffinHttp {
        match puffin_http::Server::new(DEFAULT_SERVER_ADDR) {
            Ok(server) => {
                tracing::info!("Puffin profiler server started on http://{}", DEFAULT_SERVER_ADDR);
                let _ = PROFILING_SERVER.set(server);
            }
            Err(e) => {
                tracing::error!("Failed to start puffin server: {}", e);
            }
        }
    }
}

#[cfg(not(feature = "profiling"))]
pub fn init_profiling(backend: ProfilingBackend) {
    tracing::warn!("Profiling requested ({:?}) but the profiling feature is disabled", backend);
}

/// Initialize profiling according to [`Config::profiling`].
pub fn init_from_config(config: &Config) {
    match config.profiling {
        #[cfg(feature = "profiling")]
        ProfilingMode::Off => puffin::set_scopes_on(false),
        #[cfg(not(feature = "profiling"))]
        ProfilingMode::Off => {}
        ProfilingMode::On => init_profiling(ProfilingBackend::InProcess),
        ProfilingMode::WithWebserver => init_profiling(ProfilingBackend::PuffinHttp),
    }
}

/// Mark the start of a new profiling frame.
///
/// Hosts call this once per processed input event batch so that a drag's
/// per-move resolution cost shows up as separate frames.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(all(test, feature = "profiling"))]
mod tests {
    use super::*;

    #[test]
    fn test_config_off_disables_scopes() {
        init_from_config(&Config::default());
        assert!(!puffin::are_scopes_on());
        new_frame();
    }
}
