//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! shim in `main.rs` executes them against the Zellij host, keeping the
//! handler itself free of host calls and therefore testable.
//!
//! # Example
//!
//! ```rust
//! use content_picker::Action;
//! use std::time::Duration;
//!
//! let actions = vec![
//!     Action::ScheduleTimer(Duration::from_millis(300)),
//!     Action::InsertText { text: "A\n\nx".to_string(), close: false },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Asks the host to deliver a timer event after the given delay.
    ///
    /// Used by the search debounce; every keystroke schedules one.
    ScheduleTimer(Duration),

    /// Writes the confirmed document text into the target pane.
    InsertText {
        text: String,
        /// Hide the plugin after writing.
        close: bool,
    },
}
