//! Pomodoro Timer Library
//!
//! This library provides the core functionality for the Pomodoro Timer CLI.
//! It includes:
//! - Timer engine for focus/break countdowns and cycle counting
//! - Tick task and session management around the engine
//! - Persistence of the completed-cycle counter
//! - Completion notifications
//! - CLI command parsing, display utilities and the interactive session
//! - Type definitions for timer state and preferences

pub mod app;
pub mod cli;
pub mod config;
pub mod engine;
pub mod notification;
pub mod storage;
pub mod types;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::AppConfig;
pub use engine::{TickTask, TimerEngine, TimerEvent, TimerSession};
pub use notification::{
    Completion, MockNotifier, NotificationError, Notifier, TerminalNotifier,
};
pub use storage::{CycleStore, FileStore, KeyValueStore, MemoryStore, StorageError, CYCLES_KEY};
pub use types::{format_time, Theme, TimerMode, TimerState};
