//! Pomodoro Timer CLI - focus and break countdowns in the terminal
//!
//! This tool helps you stay focused using the Pomodoro Technique:
//! - 25 minutes of focused work
//! - 5 minutes of short break
//! - A running count of completed focus cycles

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use pomodoro::cli::{spawn_line_reader, Cli, Commands, Display};
use pomodoro::storage::{CycleStore, FileStore};
use pomodoro::{App, AppConfig};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new(AppConfig::log_level(true))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(AppConfig::log_level(false)))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Run(args)) => {
            let config = AppConfig::from_run_args(&args);
            tracing::debug!(store = ?config.store_path, "Starting interactive session");

            let app = App::from_config(&config);
            let lines = spawn_line_reader(std::io::BufReader::new(std::io::stdin()))
                .context("Failed to start input reader")?;
            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::warn!("Could not listen for Ctrl-C: {}", e);
                    std::future::pending::<()>().await;
                }
            };
            app.run(lines, shutdown).await?;
        }
        Some(Commands::Cycles(args)) => {
            let store = CycleStore::new(Arc::new(FileStore::new(args.resolve())));
            Display::show_cycles(store.load_cycles());
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["pomodoro"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["pomodoro", "run", "--dark"]);
        assert!(matches!(cli.command, Some(Commands::Run(ref a)) if a.dark));
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["pomodoro", "--verbose", "cycles"]);
        assert!(cli.verbose);
    }

    #[tokio::test]
    async fn test_execute_cycles_with_missing_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let cli = Cli::parse_from(["pomodoro", "cycles", "--store", path.to_str().unwrap()]);

        assert!(execute(cli).await.is_ok());
    }
}
