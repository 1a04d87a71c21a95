//! Empty state component renderer.
//!
//! Shown in place of the list when there is nothing to display: no items
//! selected yet, or no catalog items matching the search.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message one row below `empty.row`.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// Both lines are centered. The message uses `empty_state_fg`, the subtitle
/// `text_dim` with dim styling.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    let message = truncate(&empty.message, cols);
    let msg_width = display_width(&message);
    let msg_padding = cols.saturating_sub(msg_width) / 2;

    position_cursor(empty.row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_width)));
    print!("{}", Theme::reset());

    let subtitle = truncate(&empty.subtitle, cols);
    let sub_width = display_width(&subtitle);
    let sub_padding = cols.saturating_sub(sub_width) / 2;

    position_cursor(empty.row + 2, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{subtitle}");
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_width)));
    print!("{}", Theme::reset());
}
