//! Host-independent picker model.
//!
//! Everything here is plain data plus pure transitions; the Zellij plugin in
//! `app` wires these into events, timers and rendering.

pub mod debounce;
pub mod document;
pub mod expansion;
pub mod reorder;
pub mod selection;

pub use debounce::{SearchDebouncer, DEFAULT_DEBOUNCE};
pub use document::{
    build_document_text, insert_with_confirmation, DocumentSink, InsertOutcome, PendingInsert,
    Prompter,
};
pub use expansion::ExpandedSet;
pub use reorder::{DragSession, Pointer};
pub use selection::{Selection, Toggled};
