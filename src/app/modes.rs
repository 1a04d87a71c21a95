//! Input and view mode state types for the application.
//!
//! The picker has two views, the selected list and the open dropdown. On top
//! of either view an input mode decides how keys are interpreted:
//!
//! - **Normal**: navigation and commands for the current view
//! - **Dragging**: a selected row is grabbed; movement swaps it
//! - **Confirming**: the insert prompt is open; only yes/no are accepted
//!
//! `InputMode` is derived from state (`AppState::input_mode`) rather than
//! stored, so it can never disagree with the drag session or pending insert.

/// Which list is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The ordered list of selected items with the insert button.
    ///
    /// Keybindings: j/k (navigate), / (open dropdown), e (expand),
    /// x (remove), Space (grab), i (insert), q (quit).
    Selection,

    /// The searchable catalog with checkboxes.
    ///
    /// Keybindings: typing edits the query, arrows navigate, Enter toggles,
    /// Ctrl+e expands, Tab/Esc closes.
    Dropdown,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// A selected row is being dragged by keyboard or mouse.
    Dragging,
    /// The insert confirmation is waiting for an answer.
    Confirming,
}
