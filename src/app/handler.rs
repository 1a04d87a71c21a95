//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for everything that happens to
//! the picker: keys and clicks already translated by the shim, debounce timer
//! ticks, permission results and teardown. Each call mutates [`AppState`] and
//! returns whether a re-render is needed plus the side effects to run.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `OpenDropdown`, `CloseDropdown`, `ToggleDropdown`
//! - **Search**: `Char`, `Backspace`, `DebounceElapsed`
//! - **Selection**: `ToggleSelected`, `RemoveSelected`, `ToggleExpand`
//! - **Reorder**: `Grab`, `DragMove`, `DragEnd`
//! - **Insert**: `RequestInsert`, `ConfirmInsert`, `DeclineInsert`
//! - **Mouse**: `Click` with a target resolved from the last frame's hit map
//! - **System**: `PermissionsResult`, `Teardown`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use content_picker::app::{handle_event, AppState, Event, Settings};
//! use content_picker::catalog::{BuiltinCatalog, CatalogProvider};
//! use content_picker::ui::Theme;
//!
//! let mut state = AppState::new(BuiltinCatalog.load()?, Theme::default(), Settings::default());
//! let (render, actions) = handle_event(&mut state, &Event::OpenDropdown)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), content_picker::PickerError>(())
//! ```

use super::insert::{ActionSink, AnsweredPrompt};
use super::modes::{InputMode, ViewMode};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{ContentItem, ItemKey};
use crate::picker::{DragSession, InsertOutcome, PendingInsert, Pointer, Toggled};
use crate::ui::viewmodel::HitTarget;

/// Events triggered by user input or the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down; while dragging, swaps the grabbed row down.
    KeyDown,
    /// Moves the cursor up; while dragging, swaps the grabbed row up.
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    OpenDropdown,
    CloseDropdown,
    ToggleDropdown,
    /// Appends a character to the search query (dropdown only).
    Char(char),
    /// Removes the last character from the search query (dropdown only).
    Backspace,
    /// Checks or unchecks the dropdown row under the cursor.
    ToggleSelected,
    /// Removes the selected row under the cursor.
    RemoveSelected,
    /// Expands or collapses the item under the cursor in the active view.
    ToggleExpand,
    /// Grabs the selected row under the cursor, or drops the grabbed row.
    Grab,
    /// The mouse moved during a drag, optionally over a selected row.
    DragMove {
        pointer: Pointer,
        over: Option<usize>,
    },
    /// The mouse button was released, or the keyboard drop key pressed.
    DragEnd,
    /// A left click on a region of the last rendered frame.
    Click { target: HitTarget, pointer: Pointer },
    /// Opens the insert confirmation for the current selection.
    RequestInsert,
    ConfirmInsert,
    DeclineInsert,
    /// A debounce timer scheduled by an earlier keystroke fired.
    DebounceElapsed,
    /// The host answered the permission request.
    PermissionsResult { granted: bool },
    /// The plugin is about to unload.
    Teardown,
}

impl Event {
    /// Events that count as the user doing something, which dismisses the
    /// current notification.
    const fn is_user_input(&self) -> bool {
        !matches!(
            self,
            Self::DragMove { .. }
                | Self::DebounceElapsed
                | Self::PermissionsResult { .. }
                | Self::Teardown
        )
    }

    const fn allowed_while_confirming(&self) -> bool {
        matches!(
            self,
            Self::ConfirmInsert
                | Self::DeclineInsert
                | Self::CloseFocus
                | Self::DebounceElapsed
                | Self::PermissionsResult { .. }
                | Self::Teardown
                | Self::Click {
                    target: HitTarget::ConfirmAccept | HitTarget::ConfirmDecline,
                    ..
                }
        )
    }

    const fn allowed_while_dragging(&self) -> bool {
        matches!(
            self,
            Self::KeyDown
                | Self::KeyUp
                | Self::Grab
                | Self::DragMove { .. }
                | Self::DragEnd
                | Self::CloseFocus
                | Self::DebounceElapsed
                | Self::PermissionsResult { .. }
                | Self::Teardown
        )
    }
}

/// Processes an event, mutates application state, and returns whether to
/// re-render along with the actions to execute.
///
/// # Errors
///
/// Currently every failure inside the picker is reported to the user as a
/// notification, so this only errors if a future transition propagates one.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let gated = match state.input_mode() {
        InputMode::Confirming => !event.allowed_while_confirming(),
        InputMode::Dragging => !event.allowed_while_dragging(),
        InputMode::Normal => false,
    };
    if gated {
        tracing::trace!(mode = ?state.input_mode(), "event ignored in current mode");
        return Ok((false, vec![]));
    }

    let cleared_notice = event.is_user_input() && state.notification.take().is_some();

    let (render, actions) = match event {
        Event::KeyDown => {
            if state.drag.is_some() {
                (drag_step(state, true), vec![])
            } else {
                state.move_cursor_down();
                (true, vec![])
            }
        }
        Event::KeyUp => {
            if state.drag.is_some() {
                (drag_step(state, false), vec![])
            } else {
                state.move_cursor_up();
                (true, vec![])
            }
        }
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::OpenDropdown => (set_view(state, ViewMode::Dropdown), vec![]),
        Event::CloseDropdown => (set_view(state, ViewMode::Selection), vec![]),
        Event::ToggleDropdown => (toggle_view(state), vec![]),
        Event::Char(c) => {
            if state.view_mode != ViewMode::Dropdown {
                return Ok((cleared_notice, vec![]));
            }
            let mut query = state.search.query().to_string();
            query.push(*c);
            tracing::trace!(query = %query, char = %c, "search query updated");
            (true, update_query(state, query))
        }
        Event::Backspace => {
            if state.view_mode != ViewMode::Dropdown || state.search.query().is_empty() {
                return Ok((cleared_notice, vec![]));
            }
            let mut query = state.search.query().to_string();
            query.pop();
            (true, update_query(state, query))
        }
        Event::ToggleSelected => {
            if state.view_mode != ViewMode::Dropdown {
                return Ok((cleared_notice, vec![]));
            }
            match state.current_catalog_item().cloned() {
                Some(item) => {
                    toggle_item(state, &item);
                    (true, vec![])
                }
                None => (cleared_notice, vec![]),
            }
        }
        Event::RemoveSelected => {
            if state.view_mode != ViewMode::Selection {
                return Ok((cleared_notice, vec![]));
            }
            match state.selection.remove_at(state.selection_cursor) {
                Some(item) => {
                    tracing::debug!(key = %item.key(), "removed from selection");
                    state.clamp_selection_cursor();
                    (true, vec![])
                }
                None => (cleared_notice, vec![]),
            }
        }
        Event::ToggleExpand => {
            let key = match state.view_mode {
                ViewMode::Dropdown => state.current_catalog_item(),
                ViewMode::Selection => state.current_selected_item(),
            }
            .map(|item| item.key().clone());
            match key {
                Some(key) => {
                    toggle_expand(state, &key);
                    (true, vec![])
                }
                None => (cleared_notice, vec![]),
            }
        }
        Event::Grab => {
            if state.drag.take().is_some() {
                tracing::debug!("dropped grabbed row");
                (true, vec![])
            } else if state.view_mode == ViewMode::Selection && !state.selection.is_empty() {
                tracing::debug!(index = state.selection_cursor, "grabbed row");
                state.drag = Some(DragSession::start(state.selection_cursor, None));
                (true, vec![])
            } else {
                (cleared_notice, vec![])
            }
        }
        Event::DragMove { pointer, over } => {
            let Some(drag) = state.drag.as_mut() else {
                return Ok((false, vec![]));
            };
            drag.move_pointer(*pointer);
            if let Some(target) = over {
                drag.hover(&mut state.selection, *target);
                state.selection_cursor = drag.index();
            }
            (true, vec![])
        }
        Event::DragEnd => (state.drag.take().is_some() || cleared_notice, vec![]),
        Event::Click { target, pointer } => handle_click(state, *target, *pointer),
        Event::RequestInsert => {
            request_insert(state);
            (true, vec![])
        }
        Event::ConfirmInsert => finish_insert(state, true)?,
        Event::DeclineInsert => finish_insert(state, false)?,
        Event::DebounceElapsed => match state.search.on_timer() {
            Some(query) => {
                tracing::debug!(query = %query, "debounced query committed");
                state.apply_search_filter();
                (true, vec![])
            }
            None => (false, vec![]),
        },
        Event::PermissionsResult { granted } => {
            state.can_write = *granted;
            if *granted {
                (false, vec![])
            } else {
                tracing::warn!("permissions denied, inserting is disabled");
                state.notify("Permission denied: text cannot be written to panes");
                (true, vec![])
            }
        }
        Event::Teardown => {
            tracing::debug!("tearing down picker");
            state.search.cancel();
            state.drag = None;
            state.pending_insert = None;
            (false, vec![])
        }
    };

    Ok((render || cleared_notice, actions))
}

fn set_view(state: &mut AppState, view_mode: ViewMode) -> bool {
    if state.view_mode == view_mode {
        return false;
    }
    tracing::debug!(from = ?state.view_mode, to = ?view_mode, "switching view");
    state.view_mode = view_mode;
    state.clamp_selection_cursor();
    true
}

fn toggle_view(state: &mut AppState) -> bool {
    let next = match state.view_mode {
        ViewMode::Dropdown => ViewMode::Selection,
        ViewMode::Selection => ViewMode::Dropdown,
    };
    set_view(state, next)
}

/// Feeds a new immediate query to the debouncer and returns the timer to
/// schedule, or applies the filter at once when debouncing is disabled.
fn update_query(state: &mut AppState, query: String) -> Vec<Action> {
    match state.search.input(query) {
        Some(delay) => vec![Action::ScheduleTimer(delay)],
        None => {
            state.apply_search_filter();
            vec![]
        }
    }
}

fn toggle_item(state: &mut AppState, item: &ContentItem) {
    match state.selection.toggle(item) {
        Toggled::Added => tracing::debug!(key = %item.key(), "selected"),
        Toggled::Removed => tracing::debug!(key = %item.key(), "deselected"),
    }
    state.clamp_selection_cursor();
}

fn toggle_expand(state: &mut AppState, key: &ItemKey) {
    let expanded = state.expanded.toggle(key);
    tracing::debug!(key = %key, expanded, "toggled expansion");
}

/// Swaps the grabbed row with its neighbour and moves the cursor with it.
fn drag_step(state: &mut AppState, down: bool) -> bool {
    let Some(drag) = state.drag.as_mut() else {
        return false;
    };
    let target = if down {
        drag.index() + 1
    } else {
        match drag.index().checked_sub(1) {
            Some(target) => target,
            None => return false,
        }
    };
    let swapped = drag.hover(&mut state.selection, target);
    state.selection_cursor = drag.index();
    swapped
}

fn handle_click(state: &mut AppState, target: HitTarget, pointer: Pointer) -> (bool, Vec<Action>) {
    tracing::debug!(?target, row = pointer.row, col = pointer.col, "click");

    match target {
        HitTarget::Trigger => (toggle_view(state), vec![]),
        HitTarget::CatalogRow(position) => match state.filtered_item(position).cloned() {
            Some(item) => {
                state.catalog_cursor = position;
                toggle_item(state, &item);
                (true, vec![])
            }
            None => (false, vec![]),
        },
        HitTarget::CatalogExpand(position) => {
            match state.filtered_item(position).map(|item| item.key().clone()) {
                Some(key) => {
                    state.catalog_cursor = position;
                    toggle_expand(state, &key);
                    (true, vec![])
                }
                None => (false, vec![]),
            }
        }
        HitTarget::SelectedRow(index) if index < state.selection.len() => {
            state.selection_cursor = index;
            state.drag = Some(DragSession::start(index, Some(pointer)));
            (true, vec![])
        }
        HitTarget::SelectedExpand(index) => {
            match state.selection.get(index).map(|item| item.key().clone()) {
                Some(key) => {
                    state.selection_cursor = index;
                    toggle_expand(state, &key);
                    (true, vec![])
                }
                None => (false, vec![]),
            }
        }
        HitTarget::InsertButton => {
            request_insert(state);
            (true, vec![])
        }
        HitTarget::ConfirmAccept => finish_insert(state, true).unwrap_or((true, vec![])),
        HitTarget::ConfirmDecline => finish_insert(state, false).unwrap_or((true, vec![])),
        HitTarget::SelectedRow(_) => (false, vec![]),
    }
}

fn request_insert(state: &mut AppState) {
    state.drag = None;
    let pending = PendingInsert::new(state.selection.items());
    tracing::debug!(items = pending.item_count(), "insert requested");
    state.pending_insert = Some(pending);
}

/// Completes the open insert prompt with the user's answer.
fn finish_insert(state: &mut AppState, answer: bool) -> Result<(bool, Vec<Action>)> {
    let Some(pending) = state.pending_insert.take() else {
        return Ok((false, vec![]));
    };

    let mut actions = Vec::new();
    let mut prompt = AnsweredPrompt::new(answer);
    let mut sink = ActionSink {
        actions: &mut actions,
        close: state.settings.close_on_insert,
        can_write: state.can_write,
    };

    match pending.run(&mut prompt, &mut sink) {
        Ok(InsertOutcome::Inserted { .. }) => {
            if let Some(notice) = prompt.into_notice() {
                state.notify(notice);
            }
        }
        Ok(InsertOutcome::Declined) => {}
        Err(e) => {
            tracing::warn!(error = %e, "insert failed");
            state.notify(format!("Insert failed: {e}"));
        }
    }

    Ok((true, actions))
}
