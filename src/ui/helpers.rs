//! Shared rendering utilities and text layout helpers.
//!
//! Layout functions here are pure (they return strings and ranges) so the view
//! model can pre-compute every line before anything is printed. Widths are
//! measured in terminal cells via `unicode-width`, not bytes or chars.
//!
//! # Example
//!
//! ```rust
//! use content_picker::ui::helpers::{clamp_lines, wrap_text};
//!
//! let lines = wrap_text("one two three four five", 9);
//! assert_eq!(lines, vec!["one two", "three", "four five"]);
//!
//! let clamped = clamp_lines(lines, 2, 9);
//! assert_eq!(clamped, vec!["one two", "three…"]);
//! ```

use crate::ui::theme::Theme;
use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text` in terminal cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Truncates `text` to at most `width` cells, ending in `…` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Word-wraps `text` to lines of at most `width` cells.
///
/// Explicit newlines start a new line; words wider than `width` are split
/// across lines. Empty input yields no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut used = 0;

        for word in paragraph.split_whitespace() {
            let word_width = display_width(word);

            if used > 0 && used + 1 + word_width <= width {
                line.push(' ');
                line.push_str(word);
                used += 1 + word_width;
                continue;
            }
            if used > 0 {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            if word_width <= width {
                line.push_str(word);
                used = word_width;
                continue;
            }

            for ch in word.chars() {
                let w = ch.width().unwrap_or(0);
                if used + w > width {
                    lines.push(std::mem::take(&mut line));
                    used = 0;
                }
                line.push(ch);
                used += w;
            }
        }

        if used > 0 || paragraph.trim().is_empty() {
            lines.push(line);
        }
    }

    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Keeps at most `max` lines, marking the last kept line with `…` when
/// anything was dropped.
#[must_use]
pub fn clamp_lines(mut lines: Vec<String>, max: usize, width: usize) -> Vec<String> {
    if lines.len() <= max {
        return lines;
    }
    lines.truncate(max);
    if let Some(last) = lines.last_mut() {
        let marked = format!("{last}{ELLIPSIS}");
        *last = if display_width(&marked) <= width {
            marked
        } else {
            truncate(&marked, width)
        };
    }
    lines
}

/// Char-index range of the first case-insensitive occurrence of `query` in
/// `text`, for highlighting search matches.
#[must_use]
pub fn match_range(text: &str, query: &str) -> Option<(usize, usize)> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return None;
    }
    let chars: Vec<char> = text.chars().collect();

    for start in 0..chars.len() {
        let mut folded = String::new();
        for (offset, ch) in chars[start..].iter().enumerate() {
            folded.extend(ch.to_lowercase());
            if folded.len() >= needle.len() {
                if folded == needle {
                    return Some((start, start + offset + 1));
                }
                break;
            }
            if !needle.starts_with(&folded) {
                break;
            }
        }
    }
    None
}

/// Picks the range of variable-height rows to show so that `cursor` stays
/// visible within `available` screen lines.
///
/// Up to half the space is spent on rows above the cursor, then rows below
/// fill what is left, then any remainder goes back above.
#[must_use]
pub fn visible_window(heights: &[usize], cursor: usize, available: usize) -> Range<usize> {
    if heights.is_empty() {
        return 0..0;
    }
    let cursor = cursor.min(heights.len() - 1);
    let mut start = cursor;
    let mut end = cursor + 1;
    let mut used = heights[cursor];

    while start > 0 && used + heights[start - 1] <= available / 2 {
        start -= 1;
        used += heights[start];
    }
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }
    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }

    start..end
}

/// Renders text with one highlighted char range for search matches.
///
/// Highlighting is skipped on the cursor row so the selection colors win.
/// `row_bg` is restored after the match so tinted rows stay tinted.
pub fn render_highlighted_text(
    text: &str,
    range: Option<(usize, usize)>,
    theme: &Theme,
    is_cursor: bool,
    row_bg: Option<&str>,
) {
    let Some((start, end)) = range.filter(|_| !is_cursor) else {
        print!("{text}");
        return;
    };

    let chars: Vec<char> = text.chars().collect();
    let end = end.min(chars.len());
    let start = start.min(end);

    let before: String = chars[..start].iter().collect();
    let matched: String = chars[start..end].iter().collect();
    let after: String = chars[end..].iter().collect();

    print!("{before}");
    print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
    print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
    print!("{matched}");
    print!("{}", Theme::reset());
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    if let Some(bg) = row_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{after}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exact", 5), "exact");
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("Importance of Food Safety", 10), "Importanc…");
        assert_eq!(display_width(&truncate("Importance of Food Safety", 10)), 10);
    }

    #[test]
    fn truncate_counts_wide_chars_as_two_cells() {
        let cut = truncate("食品安全の重要性", 7);
        assert!(display_width(&cut) <= 7);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn wrap_respects_width_and_words() {
        let lines = wrap_text("Food safety is paramount to public health", 12);
        assert_eq!(lines, vec!["Food safety", "is paramount", "to public", "health"]);
        assert!(lines.iter().all(|l| display_width(l) <= 12));
    }

    #[test]
    fn wrap_splits_overlong_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_keeps_blank_lines_between_paragraphs() {
        assert_eq!(wrap_text("A\n\nx", 10), vec!["A", "", "x"]);
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn clamp_adds_ellipsis_only_when_lines_dropped() {
        let lines = vec!["one".to_string(), "two".to_string()];
        assert_eq!(clamp_lines(lines.clone(), 2, 10), lines);

        let lines = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        assert_eq!(clamp_lines(lines, 2, 10), vec!["one", "two…"]);
    }

    #[test]
    fn clamp_truncates_full_width_last_line() {
        let lines = vec!["aaaa".to_string(), "bbbb".to_string(), "cccc".to_string()];
        assert_eq!(clamp_lines(lines, 2, 4), vec!["aaaa", "bbb…"]);
    }

    #[test]
    fn match_range_is_case_insensitive() {
        assert_eq!(
            match_range("The Role of Temperature in Food Safety", "temperature"),
            Some((12, 23))
        );
        assert_eq!(match_range("Food", "xyz"), None);
        assert_eq!(match_range("Food", ""), None);
    }

    #[test]
    fn window_keeps_cursor_visible() {
        let heights = [3, 3, 3, 3, 3];
        assert_eq!(visible_window(&heights, 0, 9), 0..3);
        assert_eq!(visible_window(&heights, 4, 9), 2..5);
        let middle = visible_window(&heights, 2, 9);
        assert!(middle.contains(&2));
        assert_eq!(middle.len(), 3);
    }

    #[test]
    fn window_handles_uneven_heights() {
        let heights = [1, 8, 1, 1];
        let range = visible_window(&heights, 2, 4);
        assert!(range.contains(&2));
        assert!(!range.contains(&1));
    }

    #[test]
    fn window_always_includes_an_oversized_cursor_row() {
        assert_eq!(visible_window(&[20], 0, 5), 0..1);
        assert_eq!(visible_window(&[], 0, 5), 0..0);
    }
}
