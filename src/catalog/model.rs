//! Validated, immutable catalog of content items and its title filter.

use crate::domain::error::{PickerError, Result};
use crate::domain::ContentItem;
use std::collections::HashSet;

/// Ordered, immutable sequence of content items.
///
/// Construction validates that every title is non-empty and every key is
/// unique, so downstream selection and expansion tracking can rely on keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<ContentItem>,
}

impl Catalog {
    /// Builds a catalog from items in display order.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::Catalog`] if a title is blank or two items share
    /// a key.
    pub fn new(items: Vec<ContentItem>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if item.title().trim().is_empty() {
                return Err(PickerError::Catalog(format!(
                    "item {} has an empty title",
                    position + 1
                )));
            }
            if !seen.insert(item.key()) {
                return Err(PickerError::Catalog(format!(
                    "duplicate item key: {}",
                    item.key()
                )));
            }
        }
        Ok(Self { items })
    }

    #[must_use]
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ContentItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the indices of items whose title contains `query`, ignoring case.
    ///
    /// Catalog order is preserved. An empty query matches every item.
    ///
    /// # Examples
    ///
    /// ```
    /// use content_picker::catalog::Catalog;
    /// use content_picker::domain::ContentItem;
    ///
    /// let catalog = Catalog::new(vec![
    ///     ContentItem::new("Importance of Food Safety", "..."),
    ///     ContentItem::new("Understanding Food Quality", "..."),
    /// ])?;
    /// assert_eq!(catalog.filter("QUALITY"), vec![1]);
    /// assert_eq!(catalog.filter(""), vec![0, 1]);
    /// # Ok::<(), content_picker::PickerError>(())
    /// ```
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<usize> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| title_matches(item.title(), &needle))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Case-insensitive substring test; `needle` must already be lower-cased.
fn title_matches(title: &str, needle: &str) -> bool {
    needle.is_empty() || title.to_lowercase().contains(needle)
}
