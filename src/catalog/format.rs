//! On-disk catalog document format.
//!
//! Catalogs are TOML or JSON documents with an `items` array:
//!
//! ```toml
//! name = "food-safety"
//!
//! [[items]]
//! id = "temperature"          # optional, defaults to the title
//! title = "The Role of Temperature in Food Safety"
//! content = "Temperature control is a critical factor..."
//! ```

use crate::domain::error::{PickerError, Result};
use crate::domain::ContentItem;
use serde::{Deserialize, Serialize};

/// Serialized catalog container.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogDocument {
    /// Optional human-readable catalog name, used in log output.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

/// One serialized content item.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemRecord {
    /// Explicit identity key. Falls back to `title` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
}

impl From<ItemRecord> for ContentItem {
    fn from(record: ItemRecord) -> Self {
        match record.id {
            Some(id) if !id.trim().is_empty() => Self::with_key(id, record.title, record.content),
            _ => Self::new(record.title, record.content),
        }
    }
}

/// Supported catalog encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Picks the format from a file extension, defaulting to TOML.
    #[must_use]
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension.map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Parses a catalog document in the given format.
///
/// # Errors
///
/// Returns [`PickerError::Catalog`] when the text is not a valid document.
pub fn parse_document(text: &str, format: CatalogFormat) -> Result<CatalogDocument> {
    match format {
        CatalogFormat::Toml => toml::from_str(text)
            .map_err(|e| PickerError::Catalog(format!("failed to parse catalog TOML: {e}"))),
        CatalogFormat::Json => serde_json::from_str(text)
            .map_err(|e| PickerError::Catalog(format!("failed to parse catalog JSON: {e}"))),
    }
}
