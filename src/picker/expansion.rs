//! Expand/collapse state shared by every surface that renders an item.

use crate::domain::ItemKey;
use std::collections::HashSet;

/// Keys whose bodies are rendered in full rather than clamped to two lines.
///
/// The set is keyed by [`ItemKey`], so expanding an item in the dropdown also
/// expands the same item in the selected list. It survives selection and
/// search changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSet {
    keys: HashSet<ItemKey>,
}

impl ExpandedSet {
    /// Flips membership of `key` and returns the new expanded state.
    pub fn toggle(&mut self, key: &ItemKey) -> bool {
        if self.keys.remove(key) {
            false
        } else {
            self.keys.insert(key.clone());
            true
        }
    }

    #[must_use]
    pub fn is_expanded(&self, key: &ItemKey) -> bool {
        self.keys.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut expanded = ExpandedSet::default();
        let key = ItemKey::new("T");
        assert!(expanded.toggle(&key));
        assert!(expanded.is_expanded(&key));
        assert!(!expanded.toggle(&key));
        assert!(!expanded.is_expanded(&key));
    }

    #[test]
    fn keys_are_independent() {
        let mut expanded = ExpandedSet::default();
        expanded.toggle(&ItemKey::new("A"));
        assert!(!expanded.is_expanded(&ItemKey::new("B")));
        assert_eq!(expanded.len(), 1);
    }
}
