//! Transient status-line notices.

use chrono::{DateTime, Local};

/// A message shown in the footer until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub at: DateTime<Local>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            at: Local::now(),
        }
    }

    /// `[HH:MM:SS] message`, with only the first line of multi-line messages.
    #[must_use]
    pub fn display(&self) -> String {
        let first_line = self.message.lines().next().unwrap_or_default();
        format!("[{}] {first_line}", self.at.format("%H:%M:%S"))
    }
}
