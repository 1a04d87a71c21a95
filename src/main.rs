//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the content picker library and
//! the Zellij plugin system. It translates host events into library events,
//! executes the resulting actions through the Zellij API, and keeps the two
//! pieces of host state the library cannot see: the last frame's hit map and
//! the terminal pane that had focus before the picker.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`
//! 2. **Subscribe**: Key, Mouse, Timer, `PaneUpdate`, `TabUpdate`,
//!    `PermissionRequestResult`, `BeforeClose`
//! 3. **Update**: Translate the event, delegate to `handle_event`, run actions
//! 4. **Render**: Draw the frame and keep its hit map for the next mouse event
//!
//! # Event Mapping
//!
//! - `Key` → navigation, search, selection, drag and confirm events by mode
//! - `Mouse(LeftClick)` → `Event::Click` on the region under the pointer
//! - `Mouse(Hold)` → `Event::DragMove`, `Mouse(Release)` → `Event::DragEnd`
//! - `Mouse(ScrollUp/Down)` → `Event::KeyUp` / `Event::KeyDown`
//! - `Timer` → `Event::DebounceElapsed`
//! - `BeforeClose` → `Event::Teardown`
//!
//! # Keybindings
//!
//! Selected list:
//! - `j`/`k`/arrows: Move
//! - `/`, `o`: Open the dropdown
//! - `Tab`: Toggle the dropdown
//! - `e`: Expand or collapse
//! - `x`/`d`: Remove
//! - `Space`: Grab, then `j`/`k` to move it and `Space`/`Enter` to drop
//! - `i`: Insert into document
//! - `q`/`Esc`: Close plugin
//!
//! Dropdown:
//! - Type to search, `Backspace` to delete
//! - `Up`/`Down`, `Ctrl+p`/`Ctrl+n`: Move
//! - `Enter`: Toggle checkbox
//! - `Ctrl+e`: Expand or collapse
//! - `Tab`: Toggle the dropdown, `Esc`: Close it
//!
//! Confirmation: `y`/`Enter` insert, `n`/`Esc` cancel.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use content_picker::app::AppState;
use content_picker::picker::Pointer;
use content_picker::ui::{HitMap, HitTarget};
use content_picker::{handle_event, Action, Config, Event, InputMode, ViewMode};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: AppState,

    /// Click regions of the last rendered frame.
    hit_map: HitMap,

    /// Terminal pane that most recently had focus, where text is inserted.
    target_pane: Option<u32>,

    /// Position of the active tab, from the last `TabUpdate`.
    active_tab: Option<usize>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: content_picker::initialize(&Config::default()),
            hit_map: HitMap::default(),
            target_pane: None,
            active_tab: None,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        content_picker::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = content_picker::initialize(&config);

        request_permission(&[
            PermissionType::WriteToStdin,
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::PaneUpdate,
            EventType::TabUpdate,
            EventType::PermissionRequestResult,
            EventType::BeforeClose,
        ]);

        tracing::debug!(items = self.app.catalog.len(), "plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match self.map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_) => Event::DebounceElapsed,
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Event::PermissionsResult {
                    granted: matches!(status, PermissionStatus::Granted),
                }
            }
            zellij_tile::prelude::Event::TabUpdate(tabs) => {
                self.active_tab = tabs.iter().find(|tab| tab.active).map(|tab| tab.position);
                return false;
            }
            zellij_tile::prelude::Event::PaneUpdate(manifest) => {
                self.track_focused_pane(&manifest);
                return false;
            }
            zellij_tile::prelude::Event::BeforeClose => Event::Teardown,
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    self.execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.hit_map = content_picker::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::PaneUpdate(..) => "PaneUpdate".to_string(),
            zellij_tile::prelude::Event::TabUpdate(..) => "TabUpdate".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            zellij_tile::prelude::Event::BeforeClose => "BeforeClose".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                BareKey::Char('e') if self.app.view_mode == ViewMode::Dropdown => {
                    Some(Event::ToggleExpand)
                }
                _ => None,
            };
        }

        match self.app.input_mode() {
            InputMode::Confirming => match key.bare_key {
                BareKey::Char('y') | BareKey::Enter => Some(Event::ConfirmInsert),
                BareKey::Char('n') | BareKey::Esc => Some(Event::DeclineInsert),
                _ => None,
            },
            InputMode::Dragging => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Some(Event::KeyDown),
                BareKey::Up | BareKey::Char('k') => Some(Event::KeyUp),
                BareKey::Char(' ') | BareKey::Enter => Some(Event::Grab),
                BareKey::Esc => Some(Event::DragEnd),
                _ => None,
            },
            InputMode::Normal => match self.app.view_mode {
                ViewMode::Dropdown => Self::map_dropdown_key(key),
                ViewMode::Selection => Self::map_selection_key(key),
            },
        }
    }

    fn map_dropdown_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Enter => Event::ToggleSelected,
            BareKey::Tab => Event::ToggleDropdown,
            BareKey::Esc => Event::CloseDropdown,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_selection_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('/' | 'o') => Event::OpenDropdown,
            BareKey::Tab => Event::ToggleDropdown,
            BareKey::Char('e') => Event::ToggleExpand,
            BareKey::Char('x' | 'd') => Event::RemoveSelected,
            BareKey::Char(' ') => Event::Grab,
            BareKey::Char('i') => Event::RequestInsert,
            BareKey::Char('q') | BareKey::Esc => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Resolves mouse events against the last frame's hit map.
    ///
    /// Zellij reports 0-indexed lines and columns; the hit map is 1-indexed.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        let to_pointer = |line: isize, col: usize| {
            usize::try_from(line)
                .ok()
                .map(|line| Pointer::new(line + 1, col + 1))
        };

        match mouse {
            Mouse::ScrollUp(_) => Some(Event::KeyUp),
            Mouse::ScrollDown(_) => Some(Event::KeyDown),
            Mouse::LeftClick(line, col) => {
                let pointer = to_pointer(line, col)?;
                let target = self.hit_map.target_at(pointer.row, pointer.col)?;
                Some(Event::Click { target, pointer })
            }
            Mouse::Hold(line, col) => {
                self.app.drag?;
                let pointer = to_pointer(line, col)?;
                let over = match self.hit_map.target_at(pointer.row, pointer.col) {
                    Some(HitTarget::SelectedRow(index) | HitTarget::SelectedExpand(index)) => {
                        Some(index)
                    }
                    _ => None,
                };
                Some(Event::DragMove { pointer, over })
            }
            Mouse::Release(..) => self.app.drag.map(|_| Event::DragEnd),
            _ => None,
        }
    }

    /// Remembers the focused terminal pane of the active tab.
    fn track_focused_pane(&mut self, manifest: &PaneManifest) {
        let focused = manifest
            .panes
            .iter()
            .filter(|(tab, _)| self.active_tab.map_or(true, |active| **tab == active))
            .flat_map(|(_, panes)| panes.iter())
            .find(|pane| pane.is_focused && !pane.is_plugin)
            .map(|pane| pane.id);

        if let Some(id) = focused {
            if self.target_pane != Some(id) {
                tracing::debug!(pane_id = id, "tracking focused terminal pane");
            }
            self.target_pane = Some(id);
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleTimer(delay) => {
                set_timeout(delay.as_secs_f64());
            }
            Action::InsertText { text, close } => {
                match self.target_pane {
                    Some(id) => {
                        tracing::debug!(pane_id = id, chars = text.chars().count(), "writing to pane");
                        write_chars_to_pane_id(text, PaneId::Terminal(id));
                    }
                    None => {
                        tracing::debug!("no tracked pane, writing to focused pane");
                        hide_self();
                        write_chars(text);
                    }
                }
                if *close {
                    hide_self();
                }
            }
        }
    }
}
