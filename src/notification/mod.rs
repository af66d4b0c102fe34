//! Completion notifications.
//!
//! The engine reports every finished interval exactly once; the run loop
//! forwards those completions to a [`Notifier`]. Notification failures are
//! logged by the caller and never affect the timer.

mod content;
pub mod error;

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub use self::content::{Completion, COMPLETION_TITLE};
pub use self::error::NotificationError;

/// Delivers completion notifications to the user.
pub trait Notifier {
    /// Shows the acknowledgment for a finished interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification could not be delivered.
    fn notify(&self, completion: Completion) -> Result<(), NotificationError>;
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, completion: Completion) -> Result<(), NotificationError> {
        (**self).notify(completion)
    }
}

// ============================================================================
// TerminalNotifier
// ============================================================================

/// Prints a framed completion message to stdout.
#[derive(Debug, Clone)]
pub struct TerminalNotifier {
    bell: bool,
}

impl TerminalNotifier {
    pub fn new(bell: bool) -> Self {
        Self { bell }
    }

    /// Renders the notification text without writing it.
    pub fn render(&self, completion: Completion) -> String {
        let title = completion.title();
        let message = completion.message();
        let width = title.len().max(message.len()) + 4;
        let rule = "─".repeat(width);

        let mut out = String::new();
        if self.bell {
            out.push('\x07');
        }
        out.push_str(&format!("\n┌{}┐\n", rule));
        out.push_str(&format!("│  {:<w$}  │\n", title, w = width - 4));
        out.push_str(&format!("│  {:<w$}  │\n", message, w = width - 4));
        out.push_str(&format!("└{}┘\n", rule));
        out
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, completion: Completion) -> Result<(), NotificationError> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(self.render(completion).as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| NotificationError::SendFailed(e.to_string()))
    }
}

// ============================================================================
// MockNotifier
// ============================================================================

/// Records completions instead of showing them.
#[derive(Debug, Default)]
pub struct MockNotifier {
    notifications: Mutex<Vec<Completion>>,
    should_fail: AtomicBool,
}

impl MockNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn notifications(&self) -> Vec<Completion> {
        self.notifications
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, completion: Completion) -> Result<(), NotificationError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(NotificationError::SendFailed("Mock failure".to_string()));
        }
        self.notifications
            .lock()
            .map_err(|_| NotificationError::NotAvailable)?
            .push(completion);
        Ok(())
    }
}
