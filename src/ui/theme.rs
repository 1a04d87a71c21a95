//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents with a name and a flat table of hex colors. Four
//! Catppuccin flavours are compiled into the plugin; a custom file can be
//! supplied through the `theme_file` configuration key.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! accent = "#89b4fa"
//! accent_alt = "#f38ba8"
//! checkbox_fg = "#a6e3a1"
//! checked_bg = "#313244"      # optional
//! button_fg = "#1e1e2e"
//! button_bg = "#cba6f7"
//! notification_fg = "#f9e2af"
//! overlay_bg = "#313244"
//! ```

use crate::domain::error::{PickerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex color strings for every styled element.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Cursor row foreground.
    pub selection_fg: String,
    /// Cursor row background.
    pub selection_bg: String,

    pub text_normal: String,
    /// Item bodies, footer hints, placeholders.
    pub text_dim: String,

    pub border: String,
    pub search_bar_border: String,

    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// "see more" hint.
    pub accent: String,
    /// "see less" hint on expanded selected items.
    pub accent_alt: String,

    /// Checked checkbox mark in the dropdown.
    pub checkbox_fg: String,
    /// Background of dropdown rows that are already selected.
    #[serde(default)]
    pub checked_bg: Option<String>,

    pub button_fg: String,
    pub button_bg: String,

    /// Footer notices (insert results, load failures).
    pub notification_fg: String,

    /// Background of the confirm dialog and the drag preview.
    pub overlay_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name, returning `None` for unknown names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use content_picker::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::Theme`] if the file cannot be read or does not
    /// parse into a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| PickerError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| PickerError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Converts a hex color to RGB, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_theme_parses() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} failed to parse"));
            assert_eq!(theme.name, name);
            assert!(theme.colors.checked_bg.is_some(), "{name} has no checked_bg");
        }
    }

    #[test]
    fn fg_and_bg_encode_rgb() {
        assert_eq!(Theme::fg("#1e1e2e"), "\u{1b}[38;2;30;30;46m");
        assert_eq!(Theme::bg("f5c2e7"), "\u{1b}[48;2;245;194;231m");
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#abc"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#zzzzzz"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_file_round_trips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let source = toml::to_string(&Theme::default()).unwrap();
        write!(file, "{}", source.replace("catppuccin-mocha", "custom")).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn checked_background_is_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let source = toml::to_string(&Theme::default()).unwrap();
        let without: Vec<&str> = source
            .lines()
            .filter(|line| !line.starts_with("checked_bg"))
            .collect();
        write!(file, "{}", without.join("\n")).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert!(theme.colors.checked_bg.is_none());
    }

    #[test]
    fn incomplete_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"broken\"\n[colors]\nheader_fg = \"#ffffff\"").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, PickerError::Theme(_)));
    }
}
