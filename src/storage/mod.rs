//! Persistence for the completed-cycle counter.
//!
//! The store itself is an opaque string key-value map ([`KeyValueStore`]).
//! [`CycleStore`] maps the cycle counter onto one fixed key and owns the
//! failure policy: every storage error is logged and swallowed, so a broken
//! store behaves like a cold start on load and a skipped write on save.

mod error;
mod file;
mod memory;

use std::sync::Arc;

pub use self::error::StorageError;
pub use self::file::FileStore;
pub use self::memory::MemoryStore;

/// Key under which the completed-cycle count is stored.
pub const CYCLES_KEY: &str = "@pomodoro_cycles_v1";

/// String key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// ============================================================================
// CycleStore
// ============================================================================

/// Loads and saves the completed-cycle counter.
#[derive(Clone)]
pub struct CycleStore {
    store: Arc<dyn KeyValueStore>,
}

impl CycleStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Reads the persisted count.
    ///
    /// Missing, unreadable, and non-numeric values all yield 0.
    pub fn load_cycles(&self) -> u32 {
        match self.store.get(CYCLES_KEY) {
            Ok(Some(value)) => parse_cycles(&value),
            Ok(None) => 0,
            Err(e) => {
                tracing::warn!("Could not load completed cycles, starting from 0: {}", e);
                0
            }
        }
    }

    /// Persists `cycles` without waiting for the write.
    ///
    /// Inside a tokio runtime the write runs on the blocking pool; outside one
    /// it runs inline. Failures are logged and dropped.
    pub fn save_cycles(&self, cycles: u32) {
        let value = cycles.to_string();

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let store = Arc::clone(&self.store);
                handle.spawn_blocking(move || write_cycles(store.as_ref(), &value));
            }
            Err(_) => write_cycles(self.store.as_ref(), &value),
        }
    }
}

impl std::fmt::Debug for CycleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CycleStore").field("key", &CYCLES_KEY).finish()
    }
}

fn write_cycles(store: &dyn KeyValueStore, value: &str) {
    match store.set(CYCLES_KEY, value) {
        Ok(()) => tracing::debug!("Saved completed cycles: {}", value),
        Err(e) => tracing::warn!("Skipped saving completed cycles: {}", e),
    }
}

/// Parses a stored decimal count, treating anything else as 0.
fn parse_cycles(value: &str) -> u32 {
    match value.trim().parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            tracing::warn!("Ignoring non-numeric cycle count {:?}", value);
            0
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
