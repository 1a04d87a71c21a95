//! Domain layer for the content picker.
//!
//! Core types independent of Zellij APIs and rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Content item model and identity key
//!
//! # Examples
//!
//! ```
//! use content_picker::domain::{ContentItem, Result};
//!
//! fn make_item() -> Result<ContentItem> {
//!     Ok(ContentItem::new("Understanding Food Quality", "Food quality refers to..."))
//! }
//! ```

pub mod error;
pub mod item;

pub use error::{PickerError, Result};
pub use item::{ContentItem, ItemKey};
