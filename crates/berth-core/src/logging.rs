//! Logging setup based on `tracing-subscriber`.
//!
//! The library crates only emit `tracing` events; applications decide whether
//! and how to collect them by calling one of the functions below once at
//! startup.

use tracing_subscriber::EnvFilter;

/// Default filter directives used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,berth_dock=debug";

/// Install a fmt subscriber honoring `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Install a fmt subscriber with explicit filter directives.
///
/// Unlike [`init`], this ignores `RUST_LOG`. Returns `false` if a global
/// subscriber was already installed.
pub fn init_with_filter(directives: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        init_with_filter("warn");
        assert!(!init_with_filter(DEFAULT_FILTER));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
