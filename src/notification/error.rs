//! Notification error types.

use thiserror::Error;

/// Errors that can occur while delivering a completion notification.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Writing the notification to its output failed.
    #[error("failed to send notification: {0}")]
    SendFailed(String),

    /// No notification output is available.
    #[error("notification output is unavailable")]
    NotAvailable,
}

impl NotificationError {
    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::SendFailed(_) => "check that the terminal is still attached",
            Self::NotAvailable => "run the timer from an interactive terminal",
        }
    }
}
