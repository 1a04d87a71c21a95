//! Ordered, duplicate-free selection of content items.

use crate::domain::{ContentItem, ItemKey};

/// Result of [`Selection::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    /// The item was appended to the end of the selection.
    Added,
    /// The item was removed; remaining items keep their relative order.
    Removed,
}

/// The user's selected items, in display and insert order.
///
/// Membership is decided by [`ItemKey`] equality, never by object identity,
/// and no key ever appears twice.
///
/// # Examples
///
/// ```
/// use content_picker::domain::ContentItem;
/// use content_picker::picker::{Selection, Toggled};
///
/// let a = ContentItem::new("A", "x");
/// let mut selection = Selection::default();
/// assert_eq!(selection.toggle(&a), Toggled::Added);
/// assert!(selection.is_selected(a.key()));
/// assert_eq!(selection.toggle(&a), Toggled::Removed);
/// assert!(selection.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<ContentItem>,
}

impl Selection {
    /// Removes the item if its key is present, otherwise appends it.
    pub fn toggle(&mut self, item: &ContentItem) -> Toggled {
        if let Some(position) = self.position(item.key()) {
            self.items.remove(position);
            Toggled::Removed
        } else {
            self.items.push(item.clone());
            Toggled::Added
        }
    }

    #[must_use]
    pub fn is_selected(&self, key: &ItemKey) -> bool {
        self.position(key).is_some()
    }

    #[must_use]
    pub fn position(&self, key: &ItemKey) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    /// Exchanges the items at `i` and `j`.
    ///
    /// Returns `false` without touching the list when `i == j` or either index
    /// is out of range.
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        if i == j || i >= self.items.len() || j >= self.items.len() {
            return false;
        }
        self.items.swap(i, j);
        true
    }

    /// Removes the item at `index`, if any.
    pub fn remove_at(&mut self, index: usize) -> Option<ContentItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ContentItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a ContentItem;
    type IntoIter = std::slice::Iter<'a, ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> ContentItem {
        ContentItem::new(title, format!("{title} body"))
    }

    fn titles(selection: &Selection) -> Vec<&str> {
        selection.iter().map(ContentItem::title).collect()
    }

    #[test]
    fn selecting_in_order_appends() {
        let mut selection = Selection::default();
        for t in ["A", "B", "C"] {
            selection.toggle(&item(t));
        }
        assert_eq!(titles(&selection), vec!["A", "B", "C"]);
    }

    #[test]
    fn removing_middle_item_preserves_order() {
        let mut selection = Selection::default();
        for t in ["A", "B", "C"] {
            selection.toggle(&item(t));
        }
        assert_eq!(selection.toggle(&item("B")), Toggled::Removed);
        assert_eq!(titles(&selection), vec!["A", "C"]);
    }

    #[test]
    fn double_toggle_is_a_no_op() {
        let mut selection = Selection::default();
        selection.toggle(&item("A"));
        selection.toggle(&item("B"));
        let before = selection.clone();

        selection.toggle(&item("C"));
        selection.toggle(&item("C"));
        assert_eq!(selection, before);

        selection.toggle(&item("A"));
        selection.toggle(&item("A"));
        assert_eq!(titles(&selection), vec!["B", "A"]);
    }

    #[test]
    fn membership_is_by_key_not_identity() {
        let mut selection = Selection::default();
        selection.toggle(&ContentItem::new("A", "original"));
        assert!(selection.is_selected(&ItemKey::new("A")));
        assert_eq!(selection.toggle(&ContentItem::new("A", "different body")), Toggled::Removed);
        assert!(selection.is_empty());
    }

    #[test]
    fn swap_exchanges_exactly_two_positions() {
        let mut selection = Selection::default();
        for t in ["A", "B", "C", "D"] {
            selection.toggle(&item(t));
        }
        assert!(selection.swap(0, 2));
        assert_eq!(titles(&selection), vec!["C", "B", "A", "D"]);
        assert!(selection.swap(3, 1));
        assert_eq!(titles(&selection), vec!["C", "D", "A", "B"]);
    }

    #[test]
    fn swap_with_same_index_is_a_no_op() {
        let mut selection = Selection::default();
        selection.toggle(&item("A"));
        selection.toggle(&item("B"));
        assert!(!selection.swap(1, 1));
        assert_eq!(titles(&selection), vec!["A", "B"]);
    }

    #[test]
    fn swap_out_of_range_is_a_no_op() {
        let mut selection = Selection::default();
        selection.toggle(&item("A"));
        selection.toggle(&item("B"));
        assert!(!selection.swap(0, 2));
        assert!(!selection.swap(5, 1));
        assert!(!selection.swap(usize::MAX, 0));
        assert_eq!(titles(&selection), vec!["A", "B"]);
    }

    #[test]
    fn remove_at_out_of_range_returns_none() {
        let mut selection = Selection::default();
        selection.toggle(&item("A"));
        assert!(selection.remove_at(1).is_none());
        assert_eq!(selection.remove_at(0).map(|i| i.title().to_string()), Some("A".into()));
    }
}
