//! Timer session: the engine plus its single tick source.
//!
//! Every user intent goes through [`TimerSession`], which keeps at most one
//! [`TickTask`] alive and cancels it whenever the engine stops running.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::Duration;

use super::ticker::{TickTask, TICK_PERIOD};
use super::timer::TimerEngine;
use crate::types::TimerState;

/// Owns the engine and its tick task.
pub struct TimerSession {
    engine: Arc<Mutex<TimerEngine>>,
    ticker: Option<TickTask>,
    tick_period: Duration,
}

impl TimerSession {
    /// Creates a session ticking once per second.
    pub fn new(engine: TimerEngine) -> Self {
        Self::with_tick_period(engine, TICK_PERIOD)
    }

    pub fn with_tick_period(engine: TimerEngine, tick_period: Duration) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            ticker: None,
            tick_period,
        }
    }

    /// Starts or pauses the countdown.
    ///
    /// Starting always replaces any previous tick task.
    pub async fn start_pause(&mut self) {
        let running = {
            let mut engine = self.engine.lock().await;
            engine.start_pause();
            engine.is_running()
        };

        self.cancel_ticker();
        if running {
            self.ticker = Some(TickTask::spawn(self.engine.clone(), self.tick_period));
        }
    }

    /// Stops and restores the current mode's full duration.
    pub async fn reset(&mut self) {
        self.cancel_ticker();
        self.engine.lock().await.reset();
    }

    /// Stops and switches to the other mode.
    pub async fn toggle_mode(&mut self) {
        self.cancel_ticker();
        self.engine.lock().await.toggle_mode();
    }

    pub async fn set_alternate_breaks(&mut self, enabled: bool) {
        self.engine.lock().await.set_alternate_breaks(enabled);
    }

    /// Returns a copy of the current state.
    pub async fn snapshot(&self) -> TimerState {
        self.engine.lock().await.get_state().clone()
    }

    /// Returns true while a tick task is still alive.
    pub fn has_active_ticker(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Cancels the tick task. The engine keeps its state.
    pub fn shutdown(&mut self) {
        self.cancel_ticker();
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
