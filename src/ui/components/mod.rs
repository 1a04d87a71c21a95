//! Composable UI component renderers.
//!
//! Each component prints one part of the frame at rows already decided by the
//! view model, so rendering never has to re-measure anything.
//!
//! # Components
//!
//! - `header`: Title bar
//! - `trigger`: Dropdown trigger bar and section label with the insert button
//! - `search`: Search input box
//! - `list`: Dropdown rows and selected rows
//! - `empty`: Empty state message
//! - `overlay`: Confirmation prompt and drag preview
//! - `footer`: Keybinding hints or the latest notification
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Trigger]
//! [Section label]                [ Insert into Document ]
//! [Border, or the 3-line search box when the dropdown is open]
//! [Entries or empty state]
//! [Border]
//! [Footer]
//! ```
//!
//! Overlays are drawn last, on top of everything else.

mod empty;
mod footer;
mod header;
mod list;
mod overlay;
mod search;
mod trigger;

pub use empty::render_empty_state;
pub use footer::render_footer;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{footer_border_row, UIViewModel, HEADER_ROW, SEARCH_ROW};

use header::render_header;
use list::render_entries;
use overlay::{render_confirm, render_drag_preview};
use search::render_search_bar;
use trigger::{render_section, render_trigger};

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame from the view model.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = render_header(HEADER_ROW, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_trigger(current_row, &vm.trigger, theme, cols);
    current_row = render_section(current_row, &vm.section, theme, cols);

    match &vm.search_bar {
        Some(search) => {
            debug_assert_eq!(current_row, SEARCH_ROW);
            render_search_bar(current_row, search, theme, cols);
        }
        None => {
            render_border(current_row, &theme.colors.border, cols);
        }
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(empty, theme, cols);
    } else {
        render_entries(&vm.entries, theme, cols);
    }

    let footer_row = render_border(footer_border_row(rows), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(preview) = &vm.drag_preview {
        render_drag_preview(preview, theme);
    }
    if let Some(dialog) = &vm.confirm {
        render_confirm(dialog, theme);
    }
}
