//! Content Picker: a Zellij plugin for assembling text from a catalog of
//! snippets and inserting it into the focused pane.
//!
//! The plugin provides:
//! - A dropdown over the content catalog with a debounced title search
//! - Checkbox selection that keeps the order items were picked in
//! - Drag-to-reorder of the selection, by mouse or keyboard, with live swaps
//! - Expand/collapse of long items, shared between both lists
//! - Confirm-then-insert of the assembled text into the last focused pane

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, actions                          │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Picker Model  │   │ Catalog Layer │
//! │ (ui/)         │   │ (picker/)     │   │ (catalog/)    │
//! │ - Rendering   │   │ - Selection   │   │ - Providers   │
//! │ - Theming     │   │ - Reorder     │   │ - TOML/JSON   │
//! │ - Hit map     │   │ - Debounce    │   │ - Filter      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Errors, content items (domain/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to rotating OTLP files     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Catalog providers, file formats and the title filter
//! - [`domain`]: Core domain types (content items, errors)
//! - [`infrastructure`]: Sandbox path utilities
//! - [`picker`]: Host-independent selection, reorder, expansion, search and insert logic
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/content-picker.wasm" {
//!         catalog_file "~/.config/zellij/snippets.toml"
//!         debounce_ms "300"
//!         close_on_insert "true"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use content_picker::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config {
//!     debounce_ms: 0,
//!     ..Default::default()
//! });
//!
//! for event in [Event::OpenDropdown, Event::Char('l'), Event::ToggleSelected] {
//!     handle_event(&mut state, &event)?;
//! }
//! handle_event(&mut state, &Event::RequestInsert)?;
//! let (_, actions) = handle_event(&mut state, &Event::ConfirmInsert)?;
//! assert!(matches!(actions.as_slice(), [Action::InsertText { .. }]));
//! # Ok::<(), content_picker::PickerError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod picker;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, Settings, ViewMode};
pub use catalog::{BuiltinCatalog, Catalog, CatalogProvider, FileCatalog};
pub use domain::{ContentItem, ItemKey, PickerError, Result};
pub use ui::Theme;

use infrastructure::{expand_tilde, strip_host_prefix};
use std::collections::BTreeMap;
use std::time::Duration;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TOML or JSON catalog file, already mapped into the sandbox.
    ///
    /// `None` uses the built-in food-safety catalog.
    pub catalog_file: Option<String>,

    /// Search debounce window in milliseconds. `0` filters on every keystroke.
    pub debounce_ms: u64,

    /// Hide the plugin pane after a successful insert.
    pub close_on_insert: bool,

    /// Built-in theme name: `catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe` or `catppuccin-macchiato`. Ignored if `theme_file`
    /// is set.
    pub theme_name: Option<String>,

    /// Custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            debounce_ms: 300,
            close_on_insert: false,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration with per-key fallbacks; unparsable values fall
    /// back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use content_picker::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog_file".to_string(), "~/snippets.toml".to_string());
    /// map.insert("debounce_ms".to_string(), "150".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.catalog_file.as_deref(), Some("/host/snippets.toml"));
    /// assert_eq!(config.debounce_ms, 150);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
        };
        let path = |key: &str| value(key).map(expand_tilde);

        let debounce_ms = config
            .get("debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(300);

        let close_on_insert = config
            .get("close_on_insert")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            catalog_file: path("catalog_file"),
            debounce_ms,
            close_on_insert,
            theme_name: value("theme").map(str::to_string),
            theme_file: path("theme_file"),
            trace_level: value("trace_level").map(str::to_string),
        }
    }

    #[must_use]
    pub const fn settings(&self) -> Settings {
        Settings {
            debounce: Duration::from_millis(self.debounce_ms),
            close_on_insert: self.close_on_insert,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(theme_file).unwrap_or_else(|e| {
                    tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

/// Initializes the picker from configuration, loading the configured
/// catalog file or the built-in catalog.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    match &config.catalog_file {
        Some(path) => initialize_with(config, &FileCatalog::new(path)),
        None => initialize_with(config, &BuiltinCatalog),
    }
}

/// Initializes the picker with an explicit catalog provider.
///
/// If the provider fails, the built-in catalog is used instead and the
/// failure is shown as a notification.
#[must_use]
pub fn initialize_with(config: &Config, provider: &dyn CatalogProvider) -> AppState {
    let _span = tracing::debug_span!("initialize", source = %provider.describe()).entered();

    let (catalog, failure) = match provider.load() {
        Ok(catalog) => (catalog, None),
        Err(e) => {
            tracing::warn!(source = %provider.describe(), error = %e, "catalog load failed, using built-in catalog");
            let fallback = BuiltinCatalog.load().unwrap_or_default();
            (fallback, Some(e))
        }
    };
    tracing::debug!(item_count = catalog.len(), "catalog loaded");

    let mut state = AppState::new(catalog, config.theme(), config.settings());
    if let Some(e) = failure {
        let source = provider.describe();
        let source = source.strip_prefix("file:").map_or(source.clone(), strip_host_prefix);
        state.notify(format!("Could not load {source} ({e}); using the built-in catalog"));
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("catalog_file", "~/snippets.json"),
            ("debounce_ms", "0"),
            ("close_on_insert", "true"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "/themes/custom.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.catalog_file.as_deref(), Some("/host/snippets.json"));
        assert_eq!(config.debounce_ms, 0);
        assert!(config.close_on_insert);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("/themes/custom.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.settings().debounce, Duration::ZERO);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("debounce_ms", "soon"),
            ("close_on_insert", "yes"),
            ("catalog_file", "  "),
        ]));
        assert_eq!(config.debounce_ms, 300);
        assert!(!config.close_on_insert);
        assert!(config.catalog_file.is_none());
    }

    #[test]
    fn text_values_are_trimmed_and_blank_ones_ignored() {
        let config = Config::from_zellij(&map(&[
            ("theme", "  catppuccin-frappe "),
            ("trace_level", "   "),
            ("theme_file", ""),
        ]));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
        assert!(config.trace_level.is_none());
        assert!(config.theme_file.is_none());
    }

    #[test]
    fn default_config_uses_builtin_catalog() {
        let state = initialize(&Config::default());
        assert_eq!(state.catalog.len(), 5);
        assert!(state.notification.is_none());
        assert_eq!(state.settings.debounce, Duration::from_millis(300));
    }

    #[test]
    fn loads_catalog_file() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[[items]]\ntitle = \"Greeting\"\ncontent = \"Hello\"\n\n[[items]]\ntitle = \"Farewell\"\ncontent = \"Bye\""
        )
        .unwrap();

        let config = Config {
            catalog_file: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        let state = initialize(&config);

        let titles: Vec<&str> = state.catalog.items().iter().map(ContentItem::title).collect();
        assert_eq!(titles, vec!["Greeting", "Farewell"]);
        assert!(state.notification.is_none());
    }

    #[test]
    fn missing_catalog_falls_back_with_notice() {
        let config = Config {
            catalog_file: Some("/host/does-not-exist.toml".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);

        assert_eq!(state.catalog.len(), 5);
        let notice = state.notification.map(|n| n.message).unwrap_or_default();
        assert!(notice.starts_with("Could not load ~/does-not-exist.toml"));
        assert!(notice.ends_with("using the built-in catalog"));
    }
}
