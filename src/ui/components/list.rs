//! Item list renderer shared by the dropdown and the selected list.
//!
//! Each entry is a title line followed by its (possibly clamped) body:
//!
//! ```text
//!  [x] Importance of Food Safety                               see more
//!      Food safety is crucial for preventing foodborne
//!      illnesses and ensuring public health. Proper food…
//!   ≡  Cross-Contamination Prevention                          see less
//! ```
//!
//! Dropdown rows carry a checkbox, selected rows a drag handle. Dropdown rows
//! already in the selection are tinted with `checked_bg` when the theme sets it.

use crate::ui::helpers::{display_width, position_cursor, render_highlighted_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EntryView;

/// Column where titles and bodies start.
const TEXT_COL: usize = 6;

/// Renders every visible entry at its pre-computed row.
pub fn render_entries(entries: &[EntryView], theme: &Theme, cols: usize) {
    for entry in entries {
        render_title_line(entry, theme, cols);
        render_body(entry, theme, cols);
    }
}

fn base_style(entry: &EntryView, theme: &Theme) {
    if entry.is_dragged {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    } else if entry.is_cursor {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        if let Some(bg) = row_bg(entry, theme) {
            print!("{}", Theme::bg(bg));
        }
    }
}

fn row_bg<'a>(entry: &EntryView, theme: &'a Theme) -> Option<&'a str> {
    if entry.is_cursor || entry.is_dragged || entry.checked != Some(true) {
        return None;
    }
    theme.colors.checked_bg.as_deref()
}

fn render_title_line(entry: &EntryView, theme: &Theme, cols: usize) {
    position_cursor(entry.row, 1);
    base_style(entry, theme);

    match entry.checked {
        Some(checked) => {
            if !entry.is_cursor {
                print!("{}", Theme::fg(&theme.colors.checkbox_fg));
            }
            print!(" {} ", if checked { "[x]" } else { "[ ]" });
        }
        None => {
            if entry.is_dragged {
                print!("{}", Theme::fg(&theme.colors.accent));
            } else if !entry.is_cursor {
                print!("{}", Theme::fg(&theme.colors.text_dim));
            }
            print!("  ≡  ");
        }
    }

    base_style(entry, theme);
    print!("{}", Theme::bold());
    render_highlighted_text(
        &entry.title,
        entry.highlight_range,
        theme,
        entry.is_cursor,
        row_bg(entry, theme),
    );
    print!("{}", Theme::reset());
    base_style(entry, theme);

    let used = TEXT_COL - 1 + display_width(&entry.title);
    print!("{}", " ".repeat(entry.hint_col.saturating_sub(used + 1)));

    let hint_color = if entry.alt_hint {
        &theme.colors.accent_alt
    } else {
        &theme.colors.accent
    };
    print!("{}", Theme::fg(hint_color));
    print!("{}", entry.hint);
    base_style(entry, theme);

    let end = entry.hint_col.max(used + 1) + display_width(&entry.hint);
    print!("{}", " ".repeat((cols + 1).saturating_sub(end)));
    print!("{}", Theme::reset());
}

fn render_body(entry: &EntryView, theme: &Theme, cols: usize) {
    for (offset, line) in entry.body.iter().enumerate() {
        position_cursor(entry.row + 1 + offset, 1);
        if entry.is_dragged {
            print!("{}", Theme::dim());
        }
        print!("{}", Theme::fg(&theme.colors.text_dim));
        if let Some(bg) = row_bg(entry, theme) {
            print!("{}", Theme::bg(bg));
        }
        print!("{}", " ".repeat(TEXT_COL - 1));
        print!("{line}");
        print!(
            "{}",
            " ".repeat(cols.saturating_sub(TEXT_COL - 1 + display_width(line)))
        );
        print!("{}", Theme::reset());
    }
}
