//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the Zellij shim (`main.rs`) and the host-independent
//! picker model (`picker`). It owns the event-driven state machine behind the
//! interactive UI.
//!
//! # Architecture
//!
//! ```text
//! Key / Mouse / Timer → Event → handle_event → AppState mutations → Actions
//!                                                    │
//!                                        compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`insert`]: Prompt and sink adapters for the insert flow
//! - [`modes`]: View and input mode types
//! - [`notification`]: Footer notices
//! - [`state`]: Central application state container
//! - `view`: View model computation

pub mod actions;
pub mod handler;
pub mod insert;
pub mod modes;
pub mod notification;
pub mod state;
mod view;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, ViewMode};
pub use notification::Notification;
pub use state::{AppState, Settings};
