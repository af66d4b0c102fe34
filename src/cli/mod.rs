//! CLI module for the Pomodoro Timer.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `input`: Interactive key commands
//! - `display`: Output formatting and display logic

pub mod commands;
pub mod display;
pub mod input;

pub use commands::{Cli, Commands, RunArgs, StoreArgs};
pub use display::Display;
pub use input::{spawn_line_reader, InputLines, UserIntent};
