//! Display utilities for the Pomodoro Timer CLI.
//!
//! This module renders the timer screen:
//! - Full panel (title, switches, timer, controls, cycle counter, hint)
//! - One-line live status updated on every tick
//! - Help and error messages

use std::io::Write;

use crate::cli::input::HELP_TEXT;
use crate::types::{format_time, Theme, TimerMode, TimerState};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const CLEAR_LINE: &str = "\r\x1b[2K";

const FOOTER_HINT: &str = "Tip: use Start to begin and Reset to go back to 25:00";

/// ANSI colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    title: &'static str,
    text: &'static str,
    focus: &'static str,
    rest: &'static str,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                title: "\x1b[30m",
                text: "\x1b[90m",
                focus: "\x1b[34m",
                rest: "\x1b[32m",
            },
            Theme::Dark => Palette {
                title: "\x1b[97m",
                text: "\x1b[37m",
                focus: "\x1b[96m",
                rest: "\x1b[92m",
            },
        }
    }

    fn mode(&self, mode: TimerMode) -> &'static str {
        match mode {
            TimerMode::Focus => self.focus,
            TimerMode::ShortBreak => self.rest,
        }
    }
}

// ============================================================================
// Display
// ============================================================================

/// Renders timer state to the terminal.
#[derive(Debug, Clone)]
pub struct Display {
    theme: Theme,
}

impl Display {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Label shown above the countdown.
    pub fn mode_label(mode: TimerMode) -> &'static str {
        match mode {
            TimerMode::Focus => "FOCUS",
            TimerMode::ShortBreak => "BREAK",
        }
    }

    /// Run-state caption under the countdown.
    pub fn run_label(is_running: bool) -> &'static str {
        if is_running {
            "Running..."
        } else {
            "Paused"
        }
    }

    /// Renders the whole screen.
    pub fn render_panel(&self, state: &TimerState) -> String {
        let p = Palette::for_theme(self.theme);
        let on_off = |b: bool| if b { "on" } else { "off" };
        let start_label = if state.is_running { "Pause" } else { "Start" };

        let mut lines = Vec::new();
        lines.push(format!("{BOLD}{}Pomodoro{RESET}", p.title));
        lines.push(format!(
            "{}Breaks: {}   Theme: {}{RESET}",
            p.text,
            on_off(state.alternate_breaks_enabled),
            if self.theme.is_dark() { "dark" } else { "light" },
        ));
        lines.push(String::new());
        lines.push(format!(
            "  {BOLD}{}{}{RESET}",
            p.mode(state.mode),
            Self::mode_label(state.mode)
        ));
        lines.push(format!(
            "  {BOLD}{}{}{RESET}",
            p.title,
            format_time(state.remaining_seconds)
        ));
        lines.push(format!("  {}{}{RESET}", p.text, Self::run_label(state.is_running)));
        lines.push(String::new());
        lines.push(format!(
            "{}[s] {}   [r] Reset   [t] Switch{RESET}",
            p.title, start_label
        ));
        lines.push(String::new());
        lines.push(format!("{}Completed cycles{RESET}", p.text));
        lines.push(format!("{BOLD}{}{}{RESET}", p.title, state.completed_cycles));
        lines.push(String::new());
        lines.push(format!("{}{}{RESET}", p.text, FOOTER_HINT));

        lines.join("\n")
    }

    /// Renders the single live status line.
    pub fn render_status_line(&self, state: &TimerState) -> String {
        let p = Palette::for_theme(self.theme);
        format!(
            "{}{}{RESET} {BOLD}{}{}{RESET} {}{} · cycles {}{RESET}",
            p.mode(state.mode),
            Self::mode_label(state.mode),
            p.title,
            format_time(state.remaining_seconds),
            p.text,
            Self::run_label(state.is_running),
            state.completed_cycles,
        )
    }

    /// Prints the whole screen.
    pub fn show_panel(&self, state: &TimerState) {
        println!("{CLEAR_LINE}{}", self.render_panel(state));
    }

    /// Overwrites the current terminal line with the live status.
    pub fn show_status_line(&self, state: &TimerState) {
        print!("{CLEAR_LINE}{}", self.render_status_line(state));
        if let Err(e) = std::io::stdout().flush() {
            tracing::trace!("Could not flush status line: {}", e);
        }
    }

    pub fn show_help() {
        println!("{CLEAR_LINE}Commands (type and press Enter):\n{}", HELP_TEXT);
    }

    pub fn show_cycles(cycles: u32) {
        println!("Completed cycles: {}", cycles);
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

// ============================================================================
// Tests
// ============================================================================
