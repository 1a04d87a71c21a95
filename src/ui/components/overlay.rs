//! Floating boxes drawn over the list: the insert confirmation prompt and
//! the preview that follows the mouse while dragging.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ButtonInfo, ConfirmDialog, DragPreview};

const DIALOG_TITLE: &str = " Confirm ";

/// Renders the modal yes/no prompt.
///
/// ```text
/// ┌─ Confirm ──────────────────────────┐
/// │ Are you sure you want to insert…   │
/// │                                    │
/// │ [ y: Insert ]   [ n: Cancel ]      │
/// └────────────────────────────────────┘
/// ```
pub fn render_confirm(dialog: &ConfirmDialog, theme: &Theme) {
    let inner = dialog.width.saturating_sub(2);
    let border = &theme.colors.border;
    let bg = &theme.colors.overlay_bg;

    position_cursor(dialog.top, dialog.left);
    print!("{}{}", Theme::bg(bg), Theme::fg(border));
    let title_width = display_width(DIALOG_TITLE).min(inner.saturating_sub(1));
    print!(
        "┌─{}{}┐",
        &DIALOG_TITLE[..title_width],
        "─".repeat(inner.saturating_sub(1 + title_width))
    );
    print!("{}", Theme::reset());

    let mut row = dialog.top + 1;
    for line in &dialog.lines {
        boxed_line(row, dialog.left, inner, line, &theme.colors.text_normal, theme);
        row += 1;
    }
    boxed_line(row, dialog.left, inner, "", &theme.colors.text_normal, theme);
    boxed_line(row + 1, dialog.left, inner, "", &theme.colors.text_normal, theme);
    render_button(dialog.button_row(), &dialog.accept, theme);
    render_button(dialog.button_row(), &dialog.decline, theme);

    position_cursor(dialog.top + dialog.height() - 1, dialog.left);
    print!("{}{}", Theme::bg(bg), Theme::fg(border));
    print!("└{}┘", "─".repeat(inner));
    print!("{}", Theme::reset());
}

/// Renders the floating copy of the dragged item at the pointer.
pub fn render_drag_preview(preview: &DragPreview, theme: &Theme) {
    let inner = preview.width.saturating_sub(2);
    let border = &theme.colors.accent;
    let bg = &theme.colors.overlay_bg;

    position_cursor(preview.row, preview.col);
    print!("{}{}", Theme::bg(bg), Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner));
    print!("{}", Theme::reset());

    position_cursor(preview.row + 1, preview.col);
    print!("{}{}│ ", Theme::bg(bg), Theme::fg(border));
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal));
    print!("{}", preview.title);
    print!(
        "{}",
        " ".repeat(inner.saturating_sub(2 + display_width(&preview.title)))
    );
    print!("{}{}{} │", Theme::reset(), Theme::bg(bg), Theme::fg(border));
    print!("{}", Theme::reset());

    for (offset, line) in preview.lines.iter().enumerate() {
        boxed_line(
            preview.row + 2 + offset,
            preview.col,
            inner,
            line,
            &theme.colors.text_dim,
            theme,
        );
    }

    position_cursor(preview.row + 2 + preview.lines.len(), preview.col);
    print!("{}{}", Theme::bg(bg), Theme::fg(border));
    print!("└{}┘", "─".repeat(inner));
    print!("{}", Theme::reset());
}

/// One `│ text │` line of a box whose interior is `inner` columns wide.
fn boxed_line(row: usize, col: usize, inner: usize, text: &str, color: &str, theme: &Theme) {
    let bg = &theme.colors.overlay_bg;
    let border = &theme.colors.border;

    position_cursor(row, col);
    print!("{}{}│ ", Theme::bg(bg), Theme::fg(border));
    print!("{}", Theme::fg(color));
    print!("{text}");
    print!("{}", " ".repeat(inner.saturating_sub(2 + display_width(text))));
    print!("{} │", Theme::fg(border));
    print!("{}", Theme::reset());
}

fn render_button(row: usize, button: &ButtonInfo, theme: &Theme) {
    position_cursor(row, button.col);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.button_fg));
    print!("{}", Theme::bg(&theme.colors.button_bg));
    print!("{}", button.label);
    print!("{}", Theme::reset());
}
