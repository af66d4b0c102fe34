//! Timer engine module for the Pomodoro Timer.
//!
//! This module contains the timer core:
//! - `timer`: Focus/break state machine and its events
//! - `ticker`: The periodic tick task driving the engine
//! - `session`: Owner of the engine and its single active tick task

pub mod session;
pub mod ticker;
pub mod timer;

pub use session::TimerSession;
pub use ticker::{TickTask, TICK_PERIOD};
pub use timer::{TimerEngine, TimerEvent};
