//! Live swap-on-hover drag sessions over the selection.
//!
//! A drag carries the dragged row's *current* index as its payload. Every time
//! the drag hovers a different row the two positions are swapped immediately
//! and the payload index follows the dragged item, so the list is already in
//! its final order when the drag ends.
//!
//! ```text
//! start(1)      [A, B, C, D]   payload = 1 (B)
//! hover(2)  ->  [A, C, B, D]   payload = 2
//! hover(3)  ->  [A, C, D, B]   payload = 3
//! hover(3)  ->  no-op (self-hover)
//! end           [A, C, D, B]
//! ```

use crate::picker::Selection;

/// Screen position of the pointer, 1-indexed like ANSI cursor addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer {
    pub row: usize,
    pub col: usize,
}

impl Pointer {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An in-progress drag of one selected row.
///
/// Mouse drags carry a pointer (which positions the floating preview);
/// keyboard drags do not, so they never show the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    index: usize,
    pointer: Option<Pointer>,
}

impl DragSession {
    /// Starts a drag with the row's current index as payload.
    #[must_use]
    pub const fn start(index: usize, pointer: Option<Pointer>) -> Self {
        Self { index, pointer }
    }

    /// Current index of the dragged item in the selection.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn pointer(&self) -> Option<Pointer> {
        self.pointer
    }

    pub fn move_pointer(&mut self, pointer: Pointer) {
        self.pointer = Some(pointer);
    }

    /// Handles the drag passing over the row at `target`.
    ///
    /// Swaps the dragged item with `target` and tracks its new index. Returns
    /// `false` and leaves everything untouched on self-hover, or when either
    /// index no longer exists (for example because the list shrank).
    pub fn hover(&mut self, selection: &mut Selection, target: usize) -> bool {
        if target == self.index {
            return false;
        }
        if selection.swap(self.index, target) {
            tracing::trace!(from = self.index, to = target, "drag swap");
            self.index = target;
            true
        } else {
            tracing::debug!(from = self.index, to = target, "ignoring out-of-range drag hover");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentItem;

    fn selection(titles: &[&str]) -> Selection {
        let mut selection = Selection::default();
        for t in titles {
            selection.toggle(&ContentItem::new(*t, ""));
        }
        selection
    }

    fn titles(selection: &Selection) -> Vec<&str> {
        selection.iter().map(ContentItem::title).collect()
    }

    #[test]
    fn hover_swaps_continuously_and_tracks_index() {
        let mut list = selection(&["A", "B", "C", "D"]);
        let mut drag = DragSession::start(1, None);

        assert!(drag.hover(&mut list, 2));
        assert_eq!(titles(&list), vec!["A", "C", "B", "D"]);
        assert_eq!(drag.index(), 2);

        assert!(drag.hover(&mut list, 3));
        assert_eq!(titles(&list), vec!["A", "C", "D", "B"]);
        assert_eq!(drag.index(), 3);
    }

    #[test]
    fn self_hover_is_a_no_op() {
        let mut list = selection(&["A", "B"]);
        let mut drag = DragSession::start(0, None);
        assert!(!drag.hover(&mut list, 0));
        assert_eq!(titles(&list), vec!["A", "B"]);
    }

    #[test]
    fn hover_after_list_shrank_is_a_no_op() {
        let mut list = selection(&["A", "B", "C"]);
        let mut drag = DragSession::start(2, None);
        list.remove_at(2);

        assert!(!drag.hover(&mut list, 0));
        assert_eq!(titles(&list), vec!["A", "B"]);
        assert_eq!(drag.index(), 2);
    }

    #[test]
    fn hover_onto_missing_row_is_a_no_op() {
        let mut list = selection(&["A", "B"]);
        let mut drag = DragSession::start(0, None);
        assert!(!drag.hover(&mut list, 9));
        assert_eq!(drag.index(), 0);
    }

    #[test]
    fn pointer_follows_moves() {
        let mut drag = DragSession::start(0, Some(Pointer::new(5, 3)));
        drag.move_pointer(Pointer::new(7, 10));
        assert_eq!(drag.pointer(), Some(Pointer::new(7, 10)));
    }
}
