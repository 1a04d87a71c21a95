//! Footer component renderer.
//!
//! Shows the keybinding hints for the current mode, or the latest
//! notification in their place until the next key press.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Text wider than the pane is truncated with an ellipsis so it never wraps
/// into the next line.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Example
///
/// ```rust,no_run
/// use content_picker::ui::components::render_footer;
/// use content_picker::ui::viewmodel::FooterInfo;
/// use content_picker::ui::Theme;
///
/// let footer = FooterInfo {
///     keybindings: "j/k: navigate  q: quit".to_string(),
///     notification: None,
/// };
/// let next_row = render_footer(24, &footer, &Theme::default(), 80);
/// assert_eq!(next_row, 25);
/// ```
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let (text, color) = match &footer.notification {
        Some(notice) => (notice.as_str(), &theme.colors.notification_fg),
        None => (footer.keybindings.as_str(), &theme.colors.text_dim),
    };

    let text = truncate(text, cols);
    let text_width = display_width(&text);
    let padding = cols.saturating_sub(text_width) / 2;

    position_cursor(row, 1);
    if footer.notification.is_some() {
        print!("{}", Theme::bold());
    }
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_width)));
    print!("{}", Theme::reset());
    row + 1
}
