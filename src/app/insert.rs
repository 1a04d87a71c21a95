//! Host adapters for the confirm-then-insert flow.
//!
//! The plugin cannot block on a dialog, so the question is asked by opening
//! the confirm overlay and the answer arrives later as an event. By then the
//! answer is known, which [`AnsweredPrompt`] replays into
//! [`PendingInsert::run`](crate::picker::PendingInsert::run). Insertion itself
//! becomes an [`Action::InsertText`] for the shim to execute.

use crate::app::Action;
use crate::domain::error::{PickerError, Result};
use crate::picker::{DocumentSink, Prompter};

/// A prompter whose answer was collected by the confirm overlay.
#[derive(Debug)]
pub struct AnsweredPrompt {
    answer: bool,
    notice: Option<String>,
}

impl AnsweredPrompt {
    pub const fn new(answer: bool) -> Self {
        Self {
            answer,
            notice: None,
        }
    }

    /// The last message passed to `notify`, if any.
    pub fn into_notice(self) -> Option<String> {
        self.notice
    }
}

impl Prompter for AnsweredPrompt {
    fn confirm(&mut self, _message: &str) -> bool {
        self.answer
    }

    fn notify(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }
}

/// Queues the text as an [`Action::InsertText`].
#[derive(Debug)]
pub struct ActionSink<'a> {
    pub actions: &'a mut Vec<Action>,
    pub close: bool,
    /// Whether the host granted permission to write to panes.
    pub can_write: bool,
}

impl DocumentSink for ActionSink<'_> {
    fn insert(&mut self, text: &str) -> Result<()> {
        if !self.can_write {
            return Err(PickerError::Insert(
                "permission to write to panes was denied".to_string(),
            ));
        }
        self.actions.push(Action::InsertText {
            text: text.to_string(),
            close: self.close,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentItem;
    use crate::picker::{insert_with_confirmation, InsertOutcome};

    #[test]
    fn accepted_prompt_queues_insert_action() {
        let mut actions = Vec::new();
        let mut prompt = AnsweredPrompt::new(true);
        let mut sink = ActionSink {
            actions: &mut actions,
            close: true,
            can_write: true,
        };

        let outcome =
            insert_with_confirmation(&[ContentItem::new("A", "x")], &mut prompt, &mut sink).unwrap();

        assert_eq!(outcome, InsertOutcome::Inserted { items: 1, chars: 4 });
        assert_eq!(
            actions,
            vec![Action::InsertText {
                text: "A\n\nx".to_string(),
                close: true
            }]
        );
        assert!(prompt.into_notice().is_some());
    }

    #[test]
    fn denied_permission_fails_the_insert() {
        let mut actions = Vec::new();
        let mut prompt = AnsweredPrompt::new(true);
        let mut sink = ActionSink {
            actions: &mut actions,
            close: false,
            can_write: false,
        };

        let result = insert_with_confirmation(&[ContentItem::new("A", "x")], &mut prompt, &mut sink);

        assert!(matches!(result, Err(PickerError::Insert(_))));
        assert!(actions.is_empty());
        assert!(prompt.into_notice().is_none());
    }
}
