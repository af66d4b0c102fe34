//! Command definitions for the Pomodoro Timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::storage::FileStore;

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomodoro Timer CLI - focus and break countdowns in the terminal
#[derive(Parser, Debug)]
#[command(
    name = "pomodoro",
    version,
    about = "Pomodoro focus/break timer with cycle tracking",
    long_about = "A single-screen Pomodoro timer for the terminal.\n\
                  Counts down 25-minute focus intervals and 5-minute breaks \
                  and remembers how many focus cycles you have completed.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive timer
    Run(RunArgs),

    /// Print the number of completed focus cycles
    Cycles(StoreArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Arguments
// ============================================================================

/// Arguments for the run command
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Restart the same interval on completion instead of alternating
    #[arg(long)]
    pub no_breaks: bool,

    /// Start with the dark theme
    #[arg(long)]
    pub dark: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Location of the cycle store
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Path of the store file (defaults to the user data directory)
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,
}

impl StoreArgs {
    /// The configured path, or the default store location.
    pub fn resolve(&self) -> PathBuf {
        self.store.clone().unwrap_or_else(FileStore::default_path)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_no_args() {
            let cli = Cli::parse_from(["pomodoro"]);
            assert!(cli.command.is_none());
            assert!(!cli.verbose);
        }

        #[test]
        fn test_parse_short_verbose_flag() {
            let cli = Cli::parse_from(["pomodoro", "-v", "cycles"]);
            assert!(cli.verbose);
        }

        #[test]
        fn test_parse_run_defaults() {
            let cli = Cli::parse_from(["pomodoro", "run"]);
            match cli.command {
                Some(Commands::Run(args)) => {
                    assert!(!args.no_breaks);
                    assert!(!args.dark);
                    assert!(args.store.store.is_none());
                }
                _ => panic!("Expected Run command"),
            }
        }

        #[test]
        fn test_parse_run_with_options() {
            let cli = Cli::parse_from([
                "pomodoro",
                "run",
                "--no-breaks",
                "--dark",
                "--store",
                "/tmp/s.json",
            ]);
            match cli.command {
                Some(Commands::Run(args)) => {
                    assert!(args.no_breaks);
                    assert!(args.dark);
                    assert_eq!(args.store.resolve(), PathBuf::from("/tmp/s.json"));
                }
                _ => panic!("Expected Run command"),
            }
        }

        #[test]
        fn test_parse_cycles() {
            let cli = Cli::parse_from(["pomodoro", "cycles", "--store", "x.json"]);
            match cli.command {
                Some(Commands::Cycles(args)) => {
                    assert_eq!(args.store, Some(PathBuf::from("x.json")));
                }
                _ => panic!("Expected Cycles command"),
            }
        }

        #[test]
        fn test_parse_completions_zsh() {
            let cli = Cli::parse_from(["pomodoro", "completions", "zsh"]);
            match cli.command {
                Some(Commands::Completions { shell }) => {
                    assert_eq!(shell, clap_complete::Shell::Zsh);
                }
                _ => panic!("Expected Completions command"),
            }
        }

        #[test]
        fn test_parse_unknown_command_fails() {
            assert!(Cli::try_parse_from(["pomodoro", "start"]).is_err());
        }
    }

    mod store_args_tests {
        use super::*;

        #[test]
        fn test_resolve_default() {
            let args = StoreArgs::default();
            assert_eq!(args.resolve(), FileStore::default_path());
        }
    }
}
