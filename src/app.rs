//! Interactive timer session.
//!
//! Reads one command per line, forwards it to the [`TimerSession`], and
//! renders the engine's events. Completions are handed to a [`Notifier`].

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use crate::cli::{Display, InputLines, UserIntent};
use crate::config::AppConfig;
use crate::engine::{TimerEngine, TimerEvent, TimerSession};
use crate::notification::{Completion, Notifier, TerminalNotifier};
use crate::storage::{CycleStore, FileStore};
use crate::types::TimerState;

/// Whether the input loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The interactive application.
pub struct App<N> {
    session: TimerSession,
    events: mpsc::UnboundedReceiver<TimerEvent>,
    notifier: N,
    display: Display,
}

impl App<TerminalNotifier> {
    /// Creates the terminal application backed by the configured store file.
    pub fn from_config(config: &AppConfig) -> Self {
        let store = CycleStore::new(Arc::new(FileStore::new(config.store_path.clone())));
        Self::build(config, store, TerminalNotifier::default())
    }
}

impl<N: Notifier> App<N> {
    pub fn build(config: &AppConfig, store: CycleStore, notifier: N) -> Self {
        let (event_tx, events) = mpsc::unbounded_channel();
        let engine = TimerEngine::new(store, config.alternate_breaks, event_tx);

        Self {
            session: TimerSession::with_tick_period(engine, config.tick_period),
            events,
            notifier,
            display: Display::new(config.theme),
        }
    }

    /// Runs until `quit`, end of input, or `shutdown` resolves.
    ///
    /// Returns the final timer state. The tick task is cancelled on exit.
    ///
    /// # Errors
    ///
    /// Returns an error if reading a line of input failed.
    pub async fn run<F>(mut self, mut lines: InputLines, shutdown: F) -> Result<TimerState>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        self.display.show_panel(&self.session.snapshot().await);
        Display::show_help();

        loop {
            // Pending events are rendered before the next command is read.
            tokio::select! {
                biased;

                () = &mut shutdown => {
                    tracing::debug!("Shutdown requested");
                    break;
                }
                Some(event) = self.events.recv() => self.handle_event(event).await,
                line = lines.recv() => {
                    match line.transpose().context("Failed to read command")? {
                        Some(line) => {
                            if self.dispatch(&line).await == Flow::Quit {
                                break;
                            }
                        }
                        None => break,
                    }
                }
            }
        }

        self.session.shutdown();
        println!();
        Ok(self.session.snapshot().await)
    }

    async fn dispatch(&mut self, line: &str) -> Flow {
        let intent = match line.parse::<UserIntent>() {
            Ok(intent) => intent,
            Err(message) => {
                Display::show_error(&message);
                return Flow::Continue;
            }
        };
        tracing::debug!(?intent, "User intent");

        match intent {
            UserIntent::StartPause => self.session.start_pause().await,
            UserIntent::Reset => self.session.reset().await,
            UserIntent::ToggleMode => self.session.toggle_mode().await,
            UserIntent::ToggleBreaks => {
                let enabled = !self.session.snapshot().await.alternate_breaks_enabled;
                self.session.set_alternate_breaks(enabled).await;
            }
            UserIntent::ToggleTheme => {
                self.display.set_theme(self.display.theme().toggled());
                self.display.show_panel(&self.session.snapshot().await);
            }
            UserIntent::Status => self.display.show_panel(&self.session.snapshot().await),
            UserIntent::Help => Display::show_help(),
            UserIntent::Quit => return Flow::Quit,
        }

        Flow::Continue
    }

    async fn handle_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Tick { .. } => {
                self.display
                    .show_status_line(&self.session.snapshot().await);
            }
            TimerEvent::FocusCompleted { .. } => self.notify(Completion::Focus),
            TimerEvent::BreakCompleted => self.notify(Completion::Break),
            TimerEvent::Started
            | TimerEvent::Paused
            | TimerEvent::Reset { .. }
            | TimerEvent::ModeChanged { .. }
            | TimerEvent::AlternateBreaksChanged { .. } => {
                self.display.show_panel(&self.session.snapshot().await);
            }
        }
    }

    fn notify(&self, completion: Completion) {
        if let Err(e) = self.notifier.notify(completion) {
            tracing::warn!("Notification failed: {} ({})", e, e.suggestion());
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
