//! Notification content for completed intervals.

use crate::types::TimerMode;

/// Title shown for every completion.
pub const COMPLETION_TITLE: &str = "Cycle complete";

const FOCUS_COMPLETE_MESSAGE: &str = "You completed a focus cycle!";
const BREAK_COMPLETE_MESSAGE: &str = "Break finished";

/// Which kind of interval just finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// A focus interval reached zero.
    Focus,
    /// A short break reached zero.
    Break,
}

impl Completion {
    /// The completion produced when `mode` reaches zero.
    pub fn for_mode(mode: TimerMode) -> Self {
        match mode {
            TimerMode::Focus => Completion::Focus,
            TimerMode::ShortBreak => Completion::Break,
        }
    }

    pub fn title(&self) -> &'static str {
        COMPLETION_TITLE
    }

    pub fn message(&self) -> &'static str {
        match self {
            Completion::Focus => FOCUS_COMPLETE_MESSAGE,
            Completion::Break => BREAK_COMPLETE_MESSAGE,
        }
    }
}
