//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. Every line is
//! pre-wrapped and every element carries its screen row, so the renderer only
//! prints and the shim can resolve mouse positions through [`HitMap`].

use std::ops::Range;

/// Row of the header title (row 1 is left blank).
pub const HEADER_ROW: usize = 2;
/// Row of the dropdown trigger bar.
pub const TRIGGER_ROW: usize = 4;
/// Row of the section label ("Selected content items", dropdown label).
pub const SECTION_ROW: usize = 5;
/// First row of the three-line search box in the dropdown.
pub const SEARCH_ROW: usize = 6;
pub const SEARCH_HEIGHT: usize = 3;
/// Border, footer line and the trailing blank row at the bottom of the screen.
pub const FOOTER_HEIGHT: usize = 3;

/// Row of the border drawn above the footer in a pane of `rows` lines.
#[must_use]
pub const fn footer_border_row(rows: usize) -> usize {
    rows.saturating_sub(FOOTER_HEIGHT - 1)
}

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub trigger: TriggerInfo,
    pub section: SectionInfo,
    /// Present while the dropdown is open.
    pub search_bar: Option<SearchBarInfo>,
    /// Visible rows of whichever list is showing.
    pub entries: Vec<EntryView>,
    pub empty_state: Option<EmptyState>,
    pub footer: FooterInfo,
    pub confirm: Option<ConfirmDialog>,
    pub drag_preview: Option<DragPreview>,
    pub hit_map: HitMap,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// The bar that opens and closes the dropdown.
#[derive(Debug, Clone)]
pub struct TriggerInfo {
    pub label: String,
    pub open: bool,
}

/// Label row above the active list, with an optional right-aligned button.
#[derive(Debug, Clone)]
pub struct SectionInfo {
    pub title: String,
    pub button: Option<ButtonInfo>,
}

#[derive(Debug, Clone)]
pub struct ButtonInfo {
    pub label: String,
    /// 1-indexed column of the first cell.
    pub col: usize,
}

#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    pub placeholder: String,
    /// A typed value has not been applied to the list yet.
    pub pending: bool,
}

/// One item as displayed in the dropdown or the selected list.
#[derive(Debug, Clone)]
pub struct EntryView {
    /// Screen row of the title line.
    pub row: usize,
    /// Title, already truncated to fit beside the marker and hint.
    pub title: String,
    /// `Some` for dropdown rows (checkbox state), `None` for selected rows.
    pub checked: Option<bool>,
    /// Wrapped body lines, clamped unless expanded and cut at the screen edge.
    pub body: Vec<String>,
    pub hint: String,
    /// Draw the hint in the alternate accent (expanded selected rows).
    pub alt_hint: bool,
    /// 1-indexed column where the hint starts.
    pub hint_col: usize,
    pub is_cursor: bool,
    /// The row being dragged, rendered dimmed.
    pub is_dragged: bool,
    /// Char range of the title matching the search query.
    pub highlight_range: Option<(usize, usize)>,
}

impl EntryView {
    #[must_use]
    pub fn height(&self) -> usize {
        1 + self.body.len()
    }
}

#[derive(Debug, Clone)]
pub struct EmptyState {
    pub row: usize,
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
    /// Timestamped notice shown instead of the keybindings.
    pub notification: Option<String>,
}

/// Modal yes/no prompt drawn over the list.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub lines: Vec<String>,
    pub accept: ButtonInfo,
    pub decline: ButtonInfo,
}

impl ConfirmDialog {
    /// Borders, message lines, a spacer, and the button row.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len() + 4
    }

    #[must_use]
    pub fn button_row(&self) -> usize {
        self.top + self.lines.len() + 2
    }
}

/// Floating copy of the dragged item that follows the mouse.
#[derive(Debug, Clone)]
pub struct DragPreview {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub title: String,
    pub lines: Vec<String>,
}

/// What a screen cell does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Trigger,
    /// Index into the filtered dropdown list.
    CatalogRow(usize),
    CatalogExpand(usize),
    /// Index into the selection.
    SelectedRow(usize),
    SelectedExpand(usize),
    InsertButton,
    ConfirmAccept,
    ConfirmDecline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub row: usize,
    pub cols: Range<usize>,
    pub target: HitTarget,
}

/// Screen regions mapped to click targets, in 1-indexed cell coordinates.
///
/// Later regions take precedence, so hints pushed after their row win.
///
/// ```rust
/// use content_picker::ui::viewmodel::{HitMap, HitTarget};
///
/// let mut map = HitMap::default();
/// map.push(7, 1..81, HitTarget::SelectedRow(0));
/// map.push(7, 70..78, HitTarget::SelectedExpand(0));
///
/// assert_eq!(map.target_at(7, 10), Some(HitTarget::SelectedRow(0)));
/// assert_eq!(map.target_at(7, 72), Some(HitTarget::SelectedExpand(0)));
/// assert_eq!(map.target_at(8, 10), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<HitRegion>,
}

impl HitMap {
    pub fn push(&mut self, row: usize, cols: Range<usize>, target: HitTarget) {
        self.regions.push(HitRegion { row, cols, target });
    }

    /// Drops every region, so a modal overlay can install its own.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    #[must_use]
    pub fn target_at(&self, row: usize, col: usize) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|region| region.row == row && region.cols.contains(&col))
            .map(|region| region.target)
    }

    /// Screen row of the first region for `target`, if it is on screen.
    #[must_use]
    pub fn row_of(&self, target: HitTarget) -> Option<usize> {
        self.regions
            .iter()
            .find(|region| region.target == target)
            .map(|region| region.row)
    }

    #[must_use]
    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }
}
