//! Timer engine for the Pomodoro Timer.
//!
//! This module provides the focus/break state machine:
//! - Start/pause, reset and manual mode toggling
//! - One-second countdown ticks
//! - Completion handling (cycle counting, persistence, mode alternation)
//! - Event firing for the display and notifications
//!
//! The engine itself never schedules anything; see [`super::ticker`] for the
//! periodic tick source.

use tokio::sync::mpsc;

use crate::notification::Completion;
use crate::storage::CycleStore;
use crate::types::{TimerMode, TimerState};

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events for the display and notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Countdown started or resumed
    Started,
    /// Countdown paused
    Paused,
    /// Countdown stopped and restored to the full duration of `mode`
    Reset {
        /// Mode that was restarted
        mode: TimerMode,
    },
    /// Mode switched, countdown restored to the new mode's duration
    ModeChanged {
        /// The new mode
        mode: TimerMode,
    },
    /// One second elapsed
    Tick {
        /// Remaining seconds after the decrement
        remaining_seconds: u32,
    },
    /// A focus interval reached zero
    FocusCompleted {
        /// Total completed focus intervals, including this one
        completed_cycles: u32,
    },
    /// A short break reached zero
    BreakCompleted,
    /// The alternate-breaks preference changed
    AlternateBreaksChanged {
        /// New value
        enabled: bool,
    },
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Owns the timer state and applies every transition to it.
pub struct TimerEngine {
    /// Current timer state
    state: TimerState,
    /// Persistence for the completed-cycle counter
    store: CycleStore,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TimerEngine {
    /// Creates a stopped engine in focus mode.
    ///
    /// The completed-cycle count is loaded from `store`; any load failure
    /// starts the count at 0.
    pub fn new(
        store: CycleStore,
        alternate_breaks_enabled: bool,
        event_tx: mpsc::UnboundedSender<TimerEvent>,
    ) -> Self {
        let completed_cycles = store.load_cycles();
        tracing::debug!("Loaded {} completed cycles", completed_cycles);

        Self {
            state: TimerState::new(completed_cycles, alternate_breaks_enabled),
            store,
            event_tx,
        }
    }

    /// Flips between running and paused.
    pub fn start_pause(&mut self) {
        self.state.is_running = !self.state.is_running;

        if self.state.is_running {
            tracing::info!(mode = self.state.mode.as_str(), "Timer started");
            self.emit(TimerEvent::Started);
        } else {
            tracing::info!(mode = self.state.mode.as_str(), "Timer paused");
            self.emit(TimerEvent::Paused);
        }
    }

    /// Stops the countdown and restores the current mode's full duration.
    pub fn reset(&mut self) {
        self.state.reset();
        self.emit(TimerEvent::Reset {
            mode: self.state.mode,
        });
    }

    /// Stops the countdown and switches to the other mode.
    pub fn toggle_mode(&mut self) {
        self.state.is_running = false;
        self.state.enter_mode(self.state.mode.toggled());

        tracing::info!(mode = self.state.mode.as_str(), "Mode toggled");
        self.emit(TimerEvent::ModeChanged {
            mode: self.state.mode,
        });
    }

    /// Sets whether completion switches modes.
    ///
    /// The current countdown is left alone; the new value applies at the
    /// next completion.
    pub fn set_alternate_breaks(&mut self, enabled: bool) {
        if self.state.alternate_breaks_enabled == enabled {
            return;
        }
        self.state.alternate_breaks_enabled = enabled;
        self.emit(TimerEvent::AlternateBreaksChanged { enabled });
    }

    /// Consumes one tick.
    ///
    /// Ignored while paused. Returns the completion when this tick finished
    /// the interval.
    pub fn tick(&mut self) -> Option<Completion> {
        if !self.state.is_running {
            return None;
        }

        let completed = self.state.tick();

        self.emit(TimerEvent::Tick {
            remaining_seconds: self.state.remaining_seconds,
        });

        if completed {
            Some(self.handle_timer_complete())
        } else {
            None
        }
    }

    /// Handles an interval reaching zero.
    fn handle_timer_complete(&mut self) -> Completion {
        let finished = self.state.mode;
        self.state.is_running = false;

        match finished {
            TimerMode::Focus => {
                self.state.increment_cycles();
                self.store.save_cycles(self.state.completed_cycles);

                tracing::info!(
                    completed_cycles = self.state.completed_cycles,
                    "Focus interval completed"
                );
                self.emit(TimerEvent::FocusCompleted {
                    completed_cycles: self.state.completed_cycles,
                });
            }
            TimerMode::ShortBreak => {
                tracing::info!("Break completed");
                self.emit(TimerEvent::BreakCompleted);
            }
        }

        if self.state.alternate_breaks_enabled {
            self.state.enter_mode(finished.toggled());
            self.emit(TimerEvent::ModeChanged {
                mode: self.state.mode,
            });
        } else {
            self.state.enter_mode(finished);
            self.emit(TimerEvent::Reset { mode: finished });
        }

        Completion::for_mode(finished)
    }

    /// Returns true while ticks are being consumed.
    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Returns a reference to the current timer state.
    pub fn get_state(&self) -> &TimerState {
        &self.state
    }

    /// Returns a mutable reference to the timer state (for testing).
    #[cfg(test)]
    pub fn get_state_mut(&mut self) -> &mut TimerState {
        &mut self.state
    }

    fn emit(&self, event: TimerEvent) {
        if self.event_tx.send(event).is_err() {
            tracing::trace!("No listener for timer events");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
