//! Content item domain model.
//!
//! A [`ContentItem`] is a short titled text snippet sourced from a catalog.
//! Items are identified by an [`ItemKey`], which is the title unless the
//! catalog supplies an explicit id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a content item within its catalog.
///
/// Selection membership and expansion state are both tracked by key, so two
/// rows rendering the same key always share state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(String);

impl ItemKey {
    /// Creates a key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A titled text snippet that can be selected and inserted.
///
/// # Examples
///
/// ```
/// use content_picker::domain::ContentItem;
///
/// let item = ContentItem::new("Importance of Food Safety", "Food safety is paramount...");
/// assert_eq!(item.key().as_str(), "Importance of Food Safety");
///
/// let item = ContentItem::with_key("intro", "Introduction", "Hello");
/// assert_eq!(item.key().as_str(), "intro");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    key: ItemKey,
    title: String,
    content: String,
}

impl ContentItem {
    /// Creates an item keyed by its title.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            key: ItemKey::new(title.clone()),
            title,
            content: content.into(),
        }
    }

    /// Creates an item with an explicit key.
    pub fn with_key(
        key: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            key: ItemKey::new(key),
            title: title.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub const fn key(&self) -> &ItemKey {
        &self.key
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Renders the item as a document block: title, blank line, content.
    #[must_use]
    pub fn to_block(&self) -> String {
        format!("{}\n\n{}", self.title, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_the_default_key() {
        let item = ContentItem::new("Cross-Contamination Prevention", "Keep raw food apart.");
        assert_eq!(item.key(), &ItemKey::new("Cross-Contamination Prevention"));
    }

    #[test]
    fn explicit_key_overrides_title() {
        let a = ContentItem::with_key("a", "Same", "first");
        let b = ContentItem::with_key("b", "Same", "second");
        assert_ne!(a.key(), b.key());
        assert_eq!(a.title(), b.title());
    }

    #[test]
    fn block_separates_title_and_content_with_blank_line() {
        let item = ContentItem::new("A", "x");
        assert_eq!(item.to_block(), "A\n\nx");
    }
}
