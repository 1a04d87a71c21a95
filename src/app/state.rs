//! Application state management.
//!
//! [`AppState`] is the single source of truth for the picker: the catalog and
//! its filtered view, the selection, expansion state, the search debouncer,
//! cursors, and the in-flight drag or insert prompt. The event handler mutates
//! it; `compute_viewmodel` (see `app::view`) reads it.
//!
//! # Example
//!
//! ```rust
//! use content_picker::app::{AppState, Settings};
//! use content_picker::catalog::{BuiltinCatalog, CatalogProvider};
//! use content_picker::ui::Theme;
//!
//! let catalog = BuiltinCatalog.load()?;
//! let state = AppState::new(catalog, Theme::default(), Settings::default());
//! assert_eq!(state.filtered.len(), 5);
//! # Ok::<(), content_picker::PickerError>(())
//! ```

use super::modes::{InputMode, ViewMode};
use super::notification::Notification;
use crate::catalog::Catalog;
use crate::domain::ContentItem;
use crate::picker::{
    DragSession, ExpandedSet, PendingInsert, SearchDebouncer, Selection, DEFAULT_DEBOUNCE,
};
use crate::ui::theme::Theme;
use std::time::Duration;

/// Behavioural settings taken from the plugin configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub debounce: Duration,
    pub close_on_insert: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            close_on_insert: false,
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every available item, fixed for the lifetime of the plugin.
    pub catalog: Catalog,

    /// Catalog indices matching the effective search query, in catalog order.
    ///
    /// Recomputed by `apply_search_filter()` whenever the debounced query
    /// changes.
    pub filtered: Vec<usize>,

    pub selection: Selection,
    pub expanded: ExpandedSet,
    pub search: SearchDebouncer,

    pub view_mode: ViewMode,

    /// Cursor within `filtered` (dropdown view).
    pub catalog_cursor: usize,
    /// Cursor within `selection` (selection view).
    pub selection_cursor: usize,

    pub drag: Option<DragSession>,
    pub pending_insert: Option<PendingInsert>,
    pub notification: Option<Notification>,

    /// `false` once the user denied the host permissions needed to write
    /// into panes.
    pub can_write: bool,

    pub theme: Theme,
    pub settings: Settings,

    /// Number of times the filter has been recomputed.
    pub filter_runs: usize,
}

impl AppState {
    /// Creates state over `catalog` with the full catalog visible.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme, settings: Settings) -> Self {
        let filtered = (0..catalog.len()).collect();
        Self {
            catalog,
            filtered,
            selection: Selection::default(),
            expanded: ExpandedSet::default(),
            search: SearchDebouncer::new(settings.debounce),
            view_mode: ViewMode::Selection,
            catalog_cursor: 0,
            selection_cursor: 0,
            drag: None,
            pending_insert: None,
            notification: None,
            can_write: true,
            theme,
            settings,
            filter_runs: 0,
        }
    }

    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        if self.pending_insert.is_some() {
            InputMode::Confirming
        } else if self.drag.is_some() {
            InputMode::Dragging
        } else {
            InputMode::Normal
        }
    }

    /// The dropdown item under the cursor.
    #[must_use]
    pub fn current_catalog_item(&self) -> Option<&ContentItem> {
        self.filtered
            .get(self.catalog_cursor)
            .and_then(|&index| self.catalog.get(index))
    }

    /// The selected item under the cursor.
    #[must_use]
    pub fn current_selected_item(&self) -> Option<&ContentItem> {
        self.selection.get(self.selection_cursor)
    }

    /// Item shown at `position` of the filtered dropdown list.
    #[must_use]
    pub fn filtered_item(&self, position: usize) -> Option<&ContentItem> {
        self.filtered
            .get(position)
            .and_then(|&index| self.catalog.get(index))
    }

    /// Moves the active view's cursor down, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        let (cursor, len) = self.active_cursor();
        if len == 0 {
            return;
        }
        *cursor = (*cursor + 1) % len;
    }

    /// Moves the active view's cursor up, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        let (cursor, len) = self.active_cursor();
        if len == 0 {
            return;
        }
        *cursor = if *cursor == 0 { len - 1 } else { *cursor - 1 };
    }

    fn active_cursor(&mut self) -> (&mut usize, usize) {
        match self.view_mode {
            ViewMode::Dropdown => (&mut self.catalog_cursor, self.filtered.len()),
            ViewMode::Selection => (&mut self.selection_cursor, self.selection.len()),
        }
    }

    /// Keeps the selection cursor inside the list after removals.
    pub fn clamp_selection_cursor(&mut self) {
        self.selection_cursor = self
            .selection_cursor
            .min(self.selection.len().saturating_sub(1));
    }

    /// Recomputes `filtered` from the effective (debounced) query.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_items = self.catalog.len(),
            query_len = self.search.effective().len()
        )
        .entered();

        self.filtered = self.catalog.filter(self.search.effective());
        self.filter_runs += 1;
        self.catalog_cursor = self.catalog_cursor.min(self.filtered.len().saturating_sub(1));

        tracing::debug!(
            filtered_count = self.filtered.len(),
            runs = self.filter_runs,
            "search filter applied"
        );
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        let notification = Notification::new(message);
        tracing::info!(message = %notification.message, "notification");
        self.notification = Some(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let catalog = Catalog::new(vec![
            ContentItem::new("Alpha", "a"),
            ContentItem::new("Beta", "b"),
            ContentItem::new("Gamma", "c"),
        ])
        .unwrap();
        AppState::new(catalog, Theme::default(), Settings::default())
    }

    #[test]
    fn new_state_shows_whole_catalog() {
        let state = state();
        assert_eq!(state.filtered, vec![0, 1, 2]);
        assert_eq!(state.view_mode, ViewMode::Selection);
        assert_eq!(state.input_mode(), InputMode::Normal);
    }

    #[test]
    fn cursor_wraps_in_dropdown() {
        let mut state = state();
        state.view_mode = ViewMode::Dropdown;
        state.move_cursor_up();
        assert_eq!(state.catalog_cursor, 2);
        state.move_cursor_down();
        assert_eq!(state.catalog_cursor, 0);
    }

    #[test]
    fn cursor_is_inert_on_empty_selection() {
        let mut state = state();
        state.move_cursor_down();
        state.move_cursor_up();
        assert_eq!(state.selection_cursor, 0);
    }

    #[test]
    fn filter_clamps_cursor() {
        let mut state = state();
        state.view_mode = ViewMode::Dropdown;
        state.catalog_cursor = 2;
        state.search = SearchDebouncer::new(Duration::ZERO);
        state.search.input("alpha");
        state.apply_search_filter();
        assert_eq!(state.filtered, vec![0]);
        assert_eq!(state.catalog_cursor, 0);
        assert_eq!(state.current_catalog_item().map(ContentItem::title), Some("Alpha"));
    }

    #[test]
    fn pending_insert_wins_over_drag_for_input_mode() {
        let mut state = state();
        state.drag = Some(DragSession::start(0, None));
        assert_eq!(state.input_mode(), InputMode::Dragging);
        state.pending_insert = Some(PendingInsert::new(&[]));
        assert_eq!(state.input_mode(), InputMode::Confirming);
    }
}
