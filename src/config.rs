//! Application configuration.
//!
//! Interval durations are fixed; only the store location, the starting
//! preferences and the tick period are configurable.

use std::path::PathBuf;

use tokio::time::Duration;

use crate::cli::commands::RunArgs;
use crate::engine::TICK_PERIOD;
use crate::storage::FileStore;
use crate::types::Theme;

/// Settings for an interactive timer session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Location of the key-value store file
    pub store_path: PathBuf,
    /// Initial value of the alternate-breaks switch
    pub alternate_breaks: bool,
    /// Initial color theme
    pub theme: Theme,
    /// Time between ticks
    pub tick_period: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: FileStore::default_path(),
            alternate_breaks: true,
            theme: Theme::Light,
            tick_period: TICK_PERIOD,
        }
    }
}

impl AppConfig {
    /// Builds the configuration for `pomodoro run`.
    pub fn from_run_args(args: &RunArgs) -> Self {
        Self {
            store_path: args.store.resolve(),
            alternate_breaks: !args.no_breaks,
            theme: if args.dark { Theme::Dark } else { Theme::Light },
            ..Self::default()
        }
    }

    /// Returns the log filter to use when `RUST_LOG` is not set.
    pub fn log_level(verbose: bool) -> &'static str {
        if verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::StoreArgs;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();

        assert!(config.alternate_breaks);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.tick_period, Duration::from_secs(1));
        assert_eq!(config.store_path, FileStore::default_path());
    }

    #[test]
    fn test_from_run_args() {
        let args = RunArgs {
            no_breaks: true,
            dark: true,
            store: StoreArgs {
                store: Some(PathBuf::from("/tmp/cycles.json")),
            },
        };

        let config = AppConfig::from_run_args(&args);

        assert!(!config.alternate_breaks);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.store_path, PathBuf::from("/tmp/cycles.json"));
    }

    #[test]
    fn test_log_level() {
        assert_eq!(AppConfig::log_level(true), "debug");
        assert_eq!(AppConfig::log_level(false), "warn");
    }
}
