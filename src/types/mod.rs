//! Core data types for the Pomodoro Timer.
//!
//! This module defines the data structures used for:
//! - Timer mode and its fixed durations
//! - Timer state shared between the engine and the display
//! - Presentation preferences (theme)

use serde::{Deserialize, Serialize};

/// Focus interval length in seconds (25 minutes).
pub const FOCUS_SECONDS: u32 = 25 * 60;

/// Short break length in seconds (5 minutes).
pub const SHORT_BREAK_SECONDS: u32 = 5 * 60;

// ============================================================================
// TimerMode
// ============================================================================

/// Which interval the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    /// Work countdown
    #[default]
    Focus,
    /// Rest countdown
    ShortBreak,
}

impl TimerMode {
    /// Returns the string representation of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerMode::Focus => "focus",
            TimerMode::ShortBreak => "short_break",
        }
    }

    /// Full length of this mode's interval.
    pub fn duration_seconds(&self) -> u32 {
        match self {
            TimerMode::Focus => FOCUS_SECONDS,
            TimerMode::ShortBreak => SHORT_BREAK_SECONDS,
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            TimerMode::Focus => TimerMode::ShortBreak,
            TimerMode::ShortBreak => TimerMode::Focus,
        }
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// Represents the current state of the timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    /// Current mode
    pub mode: TimerMode,
    /// Remaining seconds in the current interval
    pub remaining_seconds: u32,
    /// Whether ticks are being consumed
    pub is_running: bool,
    /// Number of completed focus intervals
    pub completed_cycles: u32,
    /// Switch to the other mode on completion instead of restarting
    pub alternate_breaks_enabled: bool,
}

impl TimerState {
    /// Creates a stopped focus state with the given cycle count.
    pub fn new(completed_cycles: u32, alternate_breaks_enabled: bool) -> Self {
        Self {
            mode: TimerMode::Focus,
            remaining_seconds: TimerMode::Focus.duration_seconds(),
            is_running: false,
            completed_cycles,
            alternate_breaks_enabled,
        }
    }

    /// Stops the countdown and restores the current mode's full duration.
    pub fn reset(&mut self) {
        self.is_running = false;
        self.remaining_seconds = self.mode.duration_seconds();
    }

    /// Moves to `mode` and restores its full duration.
    ///
    /// Does not touch `is_running`.
    pub fn enter_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.remaining_seconds = mode.duration_seconds();
    }

    /// Decrements the countdown by one second.
    ///
    /// Returns true if the countdown has reached zero.
    pub fn tick(&mut self) -> bool {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.remaining_seconds == 0
    }

    /// Increments the completed cycle count.
    pub fn increment_cycles(&mut self) {
        self.completed_cycles = self.completed_cycles.saturating_add(1);
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(0, true)
    }
}

// ============================================================================
// Theme
// ============================================================================

/// Color theme used by the terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats seconds as zero-padded `MM:SS`.
pub fn format_time(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

// ============================================================================
// Tests
// ============================================================================
