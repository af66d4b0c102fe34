//! Periodic tick source for the timer engine.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

use super::timer::TimerEngine;

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A running tick loop.
///
/// The first tick fires one full period after spawning. The loop exits on its
/// own once the engine stops running; dropping the handle aborts it.
#[derive(Debug)]
pub struct TickTask {
    handle: JoinHandle<()>,
}

impl TickTask {
    /// Spawns a tick loop driving `engine` every `period`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(engine: Arc<Mutex<TimerEngine>>, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                let mut guard = engine.lock().await;
                if !guard.is_running() {
                    break;
                }
                if guard.tick().is_some() {
                    break;
                }
            }

            tracing::debug!("Tick loop finished");
        });

        Self { handle }
    }

    /// Returns true once the loop has exited or been aborted.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stops the loop.
    ///
    /// On a current-thread runtime no tick is delivered after this returns.
    /// On a multi-thread runtime a tick already in progress may still finish.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TickTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
