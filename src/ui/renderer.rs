//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! The view model's hit map is handed back so the shim can resolve the next
//! mouse event against exactly what was drawn.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::HitMap;

/// Renders the plugin UI to stdout and returns the frame's click regions.
///
/// Prints ANSI-styled output with `print!`. Does not clear the screen; Zellij
/// hands the plugin a fresh pane for every render call.
///
/// # Example
///
/// ```rust,no_run
/// use content_picker::app::{AppState, Settings};
/// use content_picker::catalog::{BuiltinCatalog, CatalogProvider};
/// use content_picker::ui::{render, Theme};
///
/// let state = AppState::new(BuiltinCatalog.load()?, Theme::default(), Settings::default());
/// let hit_map = render(&state, 24, 80);
/// assert!(hit_map.target_at(4, 1).is_some());
/// # Ok::<(), content_picker::PickerError>(())
/// ```
pub fn render(state: &AppState, rows: usize, cols: usize) -> HitMap {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, &state.theme, cols, rows);
    viewmodel.hit_map
}
