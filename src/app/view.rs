//! View model computation.
//!
//! Turns an [`AppState`] snapshot into a [`UIViewModel`] for a given pane size.
//! All wrapping, clamping, windowing and positioning happens here so that the
//! renderer and the mouse hit map agree on where everything is.
//!
//! # Layout
//!
//! ```text
//!  1  (blank)
//!  2  Content Picker                      header
//!  3  ─────────────────────────────────── border
//!  4  Select content items             ▾  trigger
//!  5  Selected content items (2)  [ Insert into Document ]
//!  6  ─────────────────────────────────── (search box rows 6-8 in the dropdown)
//!  7    ≡  Title                   see more
//!          first body line
//!          second body line…
//!  …
//! -2  ─────────────────────────────────── border
//! -1  keybindings or notification         footer
//!  0  (blank)
//! ```

use super::modes::{InputMode, ViewMode};
use super::AppState;
use crate::domain::ContentItem;
use crate::picker::PendingInsert;
use crate::ui::helpers::{
    clamp_lines, display_width, match_range, truncate, visible_window, wrap_text,
};
use crate::ui::viewmodel::{
    ButtonInfo, ConfirmDialog, DragPreview, EmptyState, EntryView, FooterInfo, HeaderInfo,
    HitMap, HitTarget, SearchBarInfo, SectionInfo, TriggerInfo, UIViewModel, FOOTER_HEIGHT,
    SEARCH_HEIGHT, SEARCH_ROW, SECTION_ROW, TRIGGER_ROW,
};

/// Lines of body text shown for a collapsed item.
const COLLAPSED_LINES: usize = 2;
/// Width of the checkbox / drag handle column; bodies are indented to match.
const MARKER_WIDTH: usize = 5;
const HINT_MORE: &str = "see more";
const HINT_LESS: &str = "see less";
const INSERT_LABEL: &str = "[ Insert into Document ]";
const ACCEPT_LABEL: &str = "[ y: Insert ]";
const DECLINE_LABEL: &str = "[ n: Cancel ]";
const DIALOG_MAX_WIDTH: usize = 72;
const PREVIEW_MAX_WIDTH: usize = 44;

/// Pre-layout data for one list row.
struct RowSource<'a> {
    item: &'a ContentItem,
    checked: Option<bool>,
    is_cursor: bool,
    is_dragged: bool,
    row_target: HitTarget,
    hint_target: HitTarget,
    /// Selected rows switch to the alternate accent once expanded.
    alt_hint: bool,
}

impl AppState {
    /// Computes a renderable view model for a `rows` x `cols` pane.
    ///
    /// # Example
    ///
    /// ```rust
    /// use content_picker::app::{AppState, Settings};
    /// use content_picker::catalog::{BuiltinCatalog, CatalogProvider};
    /// use content_picker::ui::Theme;
    ///
    /// let state = AppState::new(BuiltinCatalog.load()?, Theme::default(), Settings::default());
    /// let vm = state.compute_viewmodel(24, 80);
    /// assert!(vm.entries.is_empty());
    /// assert!(vm.empty_state.is_some());
    /// # Ok::<(), content_picker::PickerError>(())
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let mut hit_map = HitMap::default();
        hit_map.push(TRIGGER_ROW, 1..cols + 1, HitTarget::Trigger);

        let section = self.compute_section(cols, &mut hit_map);
        let (entries, empty_state) = self.compute_entries(rows, cols, &mut hit_map);

        let confirm = self
            .pending_insert
            .as_ref()
            .map(|pending| compute_confirm(pending, rows, cols));
        if let Some(dialog) = &confirm {
            hit_map.clear();
            let row = dialog.button_row();
            for (button, target) in [
                (&dialog.accept, HitTarget::ConfirmAccept),
                (&dialog.decline, HitTarget::ConfirmDecline),
            ] {
                hit_map.push(row, button.col..button.col + display_width(&button.label), target);
            }
        }

        UIViewModel {
            header: HeaderInfo {
                title: " Content Picker ".to_string(),
            },
            trigger: TriggerInfo {
                label: "Select content items".to_string(),
                open: self.view_mode == ViewMode::Dropdown,
            },
            section,
            search_bar: self.compute_search_bar(),
            entries,
            empty_state,
            footer: self.compute_footer(),
            confirm,
            drag_preview: self.compute_drag_preview(rows, cols),
            hit_map,
        }
    }

    /// First screen row available to the list in the current view.
    const fn list_top(&self) -> usize {
        match self.view_mode {
            ViewMode::Dropdown => SEARCH_ROW + SEARCH_HEIGHT,
            ViewMode::Selection => SECTION_ROW + 2,
        }
    }

    fn compute_section(&self, cols: usize, hit_map: &mut HitMap) -> SectionInfo {
        match self.view_mode {
            ViewMode::Dropdown => SectionInfo {
                title: format!(
                    "Select content items to insert ({}/{})",
                    self.filtered.len(),
                    self.catalog.len()
                ),
                button: None,
            },
            ViewMode::Selection => {
                let width = display_width(INSERT_LABEL);
                let col = cols.saturating_sub(width).max(1);
                hit_map.push(SECTION_ROW, col..col + width, HitTarget::InsertButton);
                SectionInfo {
                    title: format!("Selected content items ({})", self.selection.len()),
                    button: Some(ButtonInfo {
                        label: INSERT_LABEL.to_string(),
                        col,
                    }),
                }
            }
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        (self.view_mode == ViewMode::Dropdown).then(|| SearchBarInfo {
            query: self.search.query().to_string(),
            placeholder: "Search content items...".to_string(),
            pending: self.search.is_pending(),
        })
    }

    fn row_sources(&self) -> Vec<RowSource<'_>> {
        match self.view_mode {
            ViewMode::Dropdown => self
                .filtered
                .iter()
                .enumerate()
                .filter_map(|(position, &index)| {
                    let item = self.catalog.get(index)?;
                    Some(RowSource {
                        item,
                        checked: Some(self.selection.is_selected(item.key())),
                        is_cursor: position == self.catalog_cursor,
                        is_dragged: false,
                        row_target: HitTarget::CatalogRow(position),
                        hint_target: HitTarget::CatalogExpand(position),
                        alt_hint: false,
                    })
                })
                .collect(),
            ViewMode::Selection => {
                let dragged = self.drag.map(|drag| drag.index());
                self.selection
                    .iter()
                    .enumerate()
                    .map(|(position, item)| RowSource {
                        item,
                        checked: None,
                        is_cursor: position == self.selection_cursor,
                        is_dragged: dragged == Some(position),
                        row_target: HitTarget::SelectedRow(position),
                        hint_target: HitTarget::SelectedExpand(position),
                        alt_hint: true,
                    })
                    .collect()
            }
        }
    }

    fn compute_entries(
        &self,
        rows: usize,
        cols: usize,
        hit_map: &mut HitMap,
    ) -> (Vec<EntryView>, Option<EmptyState>) {
        let list_top = self.list_top();
        let list_bottom = rows.saturating_sub(FOOTER_HEIGHT);
        let available = (list_bottom + 1).saturating_sub(list_top);

        let sources = self.row_sources();
        if sources.is_empty() {
            return (vec![], Some(self.compute_empty_state(list_top)));
        }

        let body_width = cols.saturating_sub(MARKER_WIDTH + 1).max(1);
        let hint_col = cols.saturating_sub(display_width(HINT_MORE)).max(1);
        let title_width = hint_col.saturating_sub(MARKER_WIDTH + 3);

        let bodies: Vec<(Vec<String>, bool)> = sources
            .iter()
            .map(|source| {
                let expanded = self.expanded.is_expanded(source.item.key());
                let lines = wrap_text(source.item.content(), body_width);
                let lines = if expanded {
                    lines
                } else {
                    clamp_lines(lines, COLLAPSED_LINES, body_width)
                };
                (lines, expanded)
            })
            .collect();

        let heights: Vec<usize> = bodies.iter().map(|(lines, _)| lines.len() + 1).collect();
        let cursor = sources.iter().position(|s| s.is_cursor).unwrap_or(0);
        let window = visible_window(&heights, cursor, available);

        let query = self.search.effective();
        let mut entries = Vec::with_capacity(window.len());
        let mut row = list_top;

        for index in window {
            if row > list_bottom {
                break;
            }
            let source = &sources[index];
            let (mut body, expanded) = bodies[index].clone();
            body.truncate(list_bottom - row);

            for line_row in row..=row + body.len() {
                hit_map.push(line_row, 1..cols + 1, source.row_target);
            }
            let hint = if expanded { HINT_LESS } else { HINT_MORE };
            hit_map.push(row, hint_col..hint_col + display_width(hint), source.hint_target);

            let title = truncate(source.item.title(), title_width);
            let highlight_range = if source.checked.is_some() {
                match_range(&title, query)
            } else {
                None
            };

            entries.push(EntryView {
                row,
                title,
                checked: source.checked,
                body,
                hint: hint.to_string(),
                alt_hint: expanded && source.alt_hint,
                hint_col,
                is_cursor: source.is_cursor,
                is_dragged: source.is_dragged,
                highlight_range,
            });
            row += heights[index];
        }

        (entries, None)
    }

    fn compute_empty_state(&self, row: usize) -> EmptyState {
        match self.view_mode {
            ViewMode::Selection => EmptyState {
                row,
                message: "Start by selecting Content Items from the dropdown list.".to_string(),
                subtitle: "Press / or click the bar above to browse the catalog".to_string(),
            },
            ViewMode::Dropdown if self.catalog.is_empty() => EmptyState {
                row,
                message: "The catalog has no content items".to_string(),
                subtitle: "Point catalog_file at a TOML or JSON catalog".to_string(),
            },
            ViewMode::Dropdown => EmptyState {
                row,
                message: format!("No content items match \"{}\"", self.search.effective()),
                subtitle: "Keep typing or press Backspace to widen the search".to_string(),
            },
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode(), self.view_mode) {
            (InputMode::Confirming, _) => "y/Enter: insert  n/Esc: cancel",
            (InputMode::Dragging, _) => "j/k: move item  Space/Enter: drop",
            (InputMode::Normal, ViewMode::Dropdown) => {
                "Type to search  ↑/↓ or Ctrl+n/p: navigate  Enter: toggle  Ctrl+e: expand  Tab/Esc: close"
            }
            (InputMode::Normal, ViewMode::Selection) => {
                "j/k: navigate  /: add items  e: expand  Space: grab  x: remove  i: insert  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            notification: self.notification.as_ref().map(|n| n.display()),
        }
    }

    fn compute_drag_preview(&self, rows: usize, cols: usize) -> Option<DragPreview> {
        let drag = self.drag?;
        let pointer = drag.pointer()?;
        let item = self.selection.get(drag.index())?;

        let width = PREVIEW_MAX_WIDTH.min(cols.saturating_sub(2)).max(8);
        let inner = width - 4;
        let lines = clamp_lines(wrap_text(item.content(), inner), COLLAPSED_LINES, inner);
        let height = lines.len() + 3;

        Some(DragPreview {
            row: pointer.row.min((rows + 1).saturating_sub(height)).max(1),
            col: pointer.col.min((cols + 1).saturating_sub(width)).max(1),
            width,
            title: truncate(item.title(), inner),
            lines,
        })
    }
}

fn compute_confirm(pending: &PendingInsert, rows: usize, cols: usize) -> ConfirmDialog {
    let width = DIALOG_MAX_WIDTH.min(cols.saturating_sub(4)).max(24);
    let inner = width - 4;
    let max_lines = rows.saturating_sub(8).max(1);
    let lines = clamp_lines(wrap_text(&pending.prompt(), inner), max_lines, inner);

    let height = lines.len() + 4;
    let top = (rows.saturating_sub(height) / 2).max(1);
    let left = (cols.saturating_sub(width) / 2).max(1);

    let accept_col = left + 2;
    let decline_col = accept_col + display_width(ACCEPT_LABEL) + 3;

    ConfirmDialog {
        top,
        left,
        width,
        lines,
        accept: ButtonInfo {
            label: ACCEPT_LABEL.to_string(),
            col: accept_col,
        },
        decline: ButtonInfo {
            label: DECLINE_LABEL.to_string(),
            col: decline_col,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Settings;
    use crate::catalog::Catalog;
    use crate::domain::ItemKey;
    use crate::picker::{DragSession, Pointer};
    use crate::ui::viewmodel::footer_border_row;
    use crate::ui::Theme;

    fn long_body() -> String {
        "word ".repeat(60)
    }

    fn state() -> AppState {
        let catalog = Catalog::new(vec![
            ContentItem::new("Alpha", long_body()),
            ContentItem::new("Beta", "short"),
            ContentItem::new("Gamma", long_body()),
        ])
        .unwrap();
        AppState::new(catalog, Theme::default(), Settings::default())
    }

    fn select_all(state: &mut AppState) {
        for index in 0..state.catalog.len() {
            let item = state.catalog.get(index).cloned().unwrap();
            state.selection.toggle(&item);
        }
    }

    #[test]
    fn empty_selection_shows_prompt_text() {
        let vm = state().compute_viewmodel(24, 80);
        let empty = vm.empty_state.unwrap();
        assert_eq!(
            empty.message,
            "Start by selecting Content Items from the dropdown list."
        );
        assert_eq!(vm.section.title, "Selected content items (0)");
    }

    #[test]
    fn collapsed_bodies_are_clamped_to_two_lines() {
        let mut state = state();
        select_all(&mut state);
        let vm = state.compute_viewmodel(40, 80);

        assert_eq!(vm.entries[0].body.len(), 2);
        assert!(vm.entries[0].body[1].ends_with('…'));
        assert_eq!(vm.entries[1].body, vec!["short".to_string()]);
        assert_eq!(vm.entries[0].hint, "see more");
    }

    #[test]
    fn expansion_is_shared_between_dropdown_and_selection() {
        let mut state = state();
        select_all(&mut state);
        state.expanded.toggle(&ItemKey::new("Alpha"));

        let selected = state.compute_viewmodel(60, 80);
        assert!(selected.entries[0].body.len() > 2);
        assert_eq!(selected.entries[0].hint, "see less");
        assert!(selected.entries[0].alt_hint);

        state.view_mode = ViewMode::Dropdown;
        let dropdown = state.compute_viewmodel(60, 80);
        assert!(dropdown.entries[0].body.len() > 2);
        assert_eq!(dropdown.entries[0].hint, "see less");
    }

    #[test]
    fn rows_are_stacked_by_height() {
        let mut state = state();
        select_all(&mut state);
        let vm = state.compute_viewmodel(40, 80);
        assert_eq!(vm.entries[0].row, 7);
        assert_eq!(vm.entries[1].row, 10);
        assert_eq!(vm.entries[2].row, 12);
    }

    #[test]
    fn hit_map_resolves_rows_hints_and_button() {
        let mut state = state();
        select_all(&mut state);
        let vm = state.compute_viewmodel(40, 80);
        let entry = &vm.entries[1];

        assert_eq!(vm.hit_map.target_at(entry.row, 2), Some(HitTarget::SelectedRow(1)));
        assert_eq!(vm.hit_map.target_at(entry.row + 1, 20), Some(HitTarget::SelectedRow(1)));
        assert_eq!(
            vm.hit_map.target_at(entry.row, entry.hint_col),
            Some(HitTarget::SelectedExpand(1))
        );
        assert_eq!(vm.hit_map.target_at(TRIGGER_ROW, 5), Some(HitTarget::Trigger));
        assert_eq!(vm.hit_map.target_at(SECTION_ROW, 70), Some(HitTarget::InsertButton));
    }

    #[test]
    fn dropdown_marks_checked_rows_and_highlights_matches() {
        let mut state = state();
        state.selection.toggle(&ContentItem::new("Beta", "short"));
        state.view_mode = ViewMode::Dropdown;
        state.search = crate::picker::SearchDebouncer::new(std::time::Duration::ZERO);
        state.search.input("et");
        state.apply_search_filter();

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.entries.len(), 1);
        assert_eq!(vm.entries[0].checked, Some(true));
        assert_eq!(vm.entries[0].highlight_range, Some((1, 3)));
        assert!(vm.search_bar.is_some());
        assert_eq!(vm.entries[0].row, 9);
    }

    #[test]
    fn empty_filter_result_names_the_query() {
        let mut state = state();
        state.view_mode = ViewMode::Dropdown;
        state.search = crate::picker::SearchDebouncer::new(std::time::Duration::ZERO);
        state.search.input("zzz");
        state.apply_search_filter();

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.entries.is_empty());
        assert_eq!(vm.empty_state.unwrap().message, "No content items match \"zzz\"");
    }

    #[test]
    fn small_pane_windows_around_cursor() {
        let mut state = state();
        select_all(&mut state);
        state.selection_cursor = 2;
        let vm = state.compute_viewmodel(13, 80);

        assert!(vm.entries.iter().any(|e| e.is_cursor && e.title == "Gamma"));
        assert!(vm.entries.iter().all(|e| e.row + e.height() - 1 <= 10));
    }

    #[test]
    fn bottom_entry_stops_above_footer_border() {
        let mut state = state();
        select_all(&mut state);
        state.selection_cursor = 2;
        let border_row = footer_border_row(13);
        let vm = state.compute_viewmodel(13, 80);

        assert_eq!(border_row, 11);
        let last_line = vm
            .entries
            .iter()
            .map(|e| e.row + e.height() - 1)
            .max()
            .unwrap();
        assert!(last_line < border_row);
        assert_eq!(vm.hit_map.target_at(border_row, 2), None);
        assert_eq!(vm.hit_map.target_at(border_row + 1, 2), None);
    }

    #[test]
    fn drag_preview_follows_pointer_only_for_mouse_drags() {
        let mut state = state();
        select_all(&mut state);

        state.drag = Some(DragSession::start(1, None));
        let vm = state.compute_viewmodel(40, 80);
        assert!(vm.drag_preview.is_none());
        assert!(vm.entries[1].is_dragged);

        state.drag = Some(DragSession::start(0, Some(Pointer::new(12, 10))));
        let preview = state.compute_viewmodel(40, 80).drag_preview.unwrap();
        assert_eq!((preview.row, preview.col), (12, 10));
        assert_eq!(preview.title, "Alpha");
        assert_eq!(preview.lines.len(), 2);
    }

    #[test]
    fn drag_preview_stays_on_screen() {
        let mut state = state();
        select_all(&mut state);
        state.drag = Some(DragSession::start(0, Some(Pointer::new(40, 80))));

        let preview = state.compute_viewmodel(40, 80).drag_preview.unwrap();
        assert!(preview.col + preview.width - 1 <= 80);
        assert!(preview.row + preview.lines.len() + 2 <= 40);
    }

    #[test]
    fn confirm_dialog_takes_over_the_hit_map() {
        let mut state = state();
        select_all(&mut state);
        state.pending_insert = Some(PendingInsert::new(state.selection.items()));

        let vm = state.compute_viewmodel(24, 80);
        let dialog = vm.confirm.unwrap();
        assert!(dialog.lines[0].starts_with("Are you sure"));
        assert!(dialog.top + dialog.height() - 1 <= 24);
        assert_eq!(
            vm.hit_map.target_at(dialog.button_row(), dialog.accept.col),
            Some(HitTarget::ConfirmAccept)
        );
        assert_eq!(
            vm.hit_map.target_at(dialog.button_row(), dialog.decline.col),
            Some(HitTarget::ConfirmDecline)
        );
        assert_eq!(vm.hit_map.target_at(TRIGGER_ROW, 5), None);
        assert_eq!(vm.footer.keybindings, "y/Enter: insert  n/Esc: cancel");
    }
}
