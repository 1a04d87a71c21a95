//! Dropdown trigger bar and the section label beneath it.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SectionInfo, TriggerInfo};

/// Renders the bar that opens and closes the dropdown.
///
/// ```text
///  Select content items                                              ▾
/// ```
///
/// The chevron points up while the dropdown is open.
pub fn render_trigger(row: usize, trigger: &TriggerInfo, theme: &Theme, cols: usize) -> usize {
    let chevron = if trigger.open { "▴" } else { "▾" };
    let label = truncate(&trigger.label, cols.saturating_sub(4));
    let gap = cols.saturating_sub(display_width(&label) + 3);

    position_cursor(row, 1);
    if trigger.open {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!(" {label}");
    print!("{}", " ".repeat(gap));
    print!("{}", Theme::fg(&theme.colors.accent));
    print!("{chevron} ");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the list label with its optional right-aligned button.
pub fn render_section(row: usize, section: &SectionInfo, theme: &Theme, cols: usize) -> usize {
    let title_room = section
        .button
        .as_ref()
        .map_or(cols, |button| button.col.saturating_sub(2));
    let title = truncate(&section.title, title_room.saturating_sub(1));

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(" {title}");
    print!("{}", Theme::reset());
    print!(
        "{}",
        " ".repeat(cols.saturating_sub(display_width(&title) + 1))
    );

    if let Some(button) = &section.button {
        position_cursor(row, button.col);
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.button_fg));
        print!("{}", Theme::bg(&theme.colors.button_bg));
        print!("{}", button.label);
        print!("{}", Theme::reset());
    }
    row + 1
}
