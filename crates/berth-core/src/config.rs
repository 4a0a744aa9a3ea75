/// Engine-wide configuration for Berth.
#[derive(Debug)]
pub struct Config {
    pub profiling: ProfilingMode,
    /// Emit a `trace` event for every recomputed drop target while dragging.
    ///
    /// Off by default; pointer moves are frequent enough to drown other output.
    pub trace_drop_targets: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            profiling: ProfilingMode::Off,
            trace_drop_targets: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingMode {
    /// Profiling scopes are compiled in but not recorded
    Off,
    /// Scopes are recorded and can be inspected in-process
    On,
    /// Scopes are recorded and served to external tools such as 'puffin_viewer'
    WithWebserver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_quiet() {
        let config = Config::default();
        assert_eq!(config.profiling, ProfilingMode::Off);
        assert!(!config.trace_drop_targets);
    }
}
