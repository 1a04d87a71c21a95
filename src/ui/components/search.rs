//! Search bar component renderer.
//!
//! Renders the dropdown's search input as a bordered three-line box.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthChar;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;
/// Shown at the right edge while a typed query is waiting on the debounce.
const PENDING_MARKER: &str = "…";

/// Renders the search input box at the specified row.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────────────┐ [margin]
/// [margin] │ / Search content items...    │ [margin]
/// [margin] └──────────────────────────────┘ [margin]
/// ```
///
/// An empty query shows the dimmed placeholder. The typed query is always
/// shown as typed, even before the list has caught up with it.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = &theme.colors.search_bar_border;

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let marker = if search.pending { PENDING_MARKER } else { "" };
    let text_room = inner_width.saturating_sub(3 + display_width(marker) + 1);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│ / ");

    let shown = if search.query.is_empty() {
        let placeholder = truncate(&search.placeholder, text_room);
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{placeholder}");
        print!("{}", Theme::reset());
        display_width(&placeholder)
    } else {
        // Keep the tail of long queries visible, where the user is typing.
        let query = tail(&search.query, text_room);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{query}");
        display_width(&query)
    };

    print!("{}", " ".repeat(text_room.saturating_sub(shown)));
    print!("{}", Theme::fg(&theme.colors.accent));
    print!("{marker} ");
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Last `width` columns of `text`.
fn tail(text: &str, width: usize) -> String {
    let mut taken = 0;
    let mut chars: Vec<char> = Vec::new();
    for ch in text.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if taken + w > width {
            break;
        }
        taken += w;
        chars.push(ch);
    }
    chars.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_keeps_end_of_long_query() {
        assert_eq!(tail("temperature", 4), "ture");
        assert_eq!(tail("food", 10), "food");
        assert_eq!(tail("food", 0), "");
    }
}
