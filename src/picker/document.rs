//! Serialising the selection and handing it to the document after confirmation.

use crate::domain::error::Result;
use crate::domain::ContentItem;

/// Separator between serialised items, and between title and body.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Asks the user yes/no questions and tells them what happened.
pub trait Prompter {
    fn confirm(&mut self, message: &str) -> bool;
    fn notify(&mut self, message: &str);
}

/// Destination of the inserted text.
pub trait DocumentSink {
    fn insert(&mut self, text: &str) -> Result<()>;
}

/// Serialises items as `"{title}\n\n{content}"` blocks joined by a blank line.
///
/// # Examples
///
/// ```
/// use content_picker::domain::ContentItem;
/// use content_picker::picker::build_document_text;
///
/// let items = [ContentItem::new("A", "x"), ContentItem::new("B", "y")];
/// assert_eq!(build_document_text(&items), "A\n\nx\n\nB\n\ny");
/// assert_eq!(build_document_text(&[]), "");
/// ```
#[must_use]
pub fn build_document_text(items: &[ContentItem]) -> String {
    items
        .iter()
        .map(ContentItem::to_block)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted { items: usize, chars: usize },
    Declined,
}

/// Text captured at the moment the user asked to insert.
///
/// Holding the snapshot means reordering or deselecting while the prompt is
/// open cannot change what gets inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingInsert {
    text: String,
    item_count: usize,
}

impl PendingInsert {
    #[must_use]
    pub fn new(items: &[ContentItem]) -> Self {
        Self {
            text: build_document_text(items),
            item_count: items.len(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to insert the following text into the document?{BLOCK_SEPARATOR}{}",
            self.text
        )
    }

    /// Confirms with the user and, on acceptance, inserts and notifies.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if insertion fails; the user is not notified
    /// of success in that case.
    pub fn run(self, prompter: &mut dyn Prompter, sink: &mut dyn DocumentSink) -> Result<InsertOutcome> {
        let _span = tracing::debug_span!("insert", items = self.item_count).entered();

        if !prompter.confirm(&self.prompt()) {
            tracing::debug!("insert declined");
            return Ok(InsertOutcome::Declined);
        }

        sink.insert(&self.text)?;
        let chars = self.text.chars().count();
        prompter.notify(&format!(
            "Inserted {} item{} ({chars} chars) into the document",
            self.item_count,
            if self.item_count == 1 { "" } else { "s" }
        ));
        tracing::info!(items = self.item_count, chars, "inserted selection");

        Ok(InsertOutcome::Inserted {
            items: self.item_count,
            chars,
        })
    }
}

/// Builds the text for `items`, confirms, and inserts in one call.
///
/// # Errors
///
/// Propagates the sink's error.
pub fn insert_with_confirmation(
    items: &[ContentItem],
    prompter: &mut dyn Prompter,
    sink: &mut dyn DocumentSink,
) -> Result<InsertOutcome> {
    PendingInsert::new(items).run(prompter, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PickerError;

    struct ScriptedPrompter {
        answer: bool,
        asked: Vec<String>,
        notices: Vec<String>,
    }

    impl ScriptedPrompter {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: Vec::new(),
                notices: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&mut self, message: &str) -> bool {
            self.asked.push(message.to_string());
            self.answer
        }

        fn notify(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        written: Vec<String>,
    }

    impl DocumentSink for RecordingSink {
        fn insert(&mut self, text: &str) -> Result<()> {
            self.written.push(text.to_string());
            Ok(())
        }
    }

    struct FailingSink;

    impl DocumentSink for FailingSink {
        fn insert(&mut self, _text: &str) -> Result<()> {
            Err(PickerError::Insert("pane closed".into()))
        }
    }

    fn items() -> Vec<ContentItem> {
        vec![ContentItem::new("A", "x"), ContentItem::new("B", "y")]
    }

    #[test]
    fn joins_blocks_with_blank_lines() {
        assert_eq!(build_document_text(&items()), "A\n\nx\n\nB\n\ny");
    }

    #[test]
    fn single_item_has_no_trailing_separator() {
        assert_eq!(build_document_text(&[ContentItem::new("A", "x")]), "A\n\nx");
    }

    #[test]
    fn accepted_insert_writes_and_notifies() {
        let mut prompter = ScriptedPrompter::answering(true);
        let mut sink = RecordingSink::default();

        let outcome = insert_with_confirmation(&items(), &mut prompter, &mut sink).unwrap();

        assert_eq!(outcome, InsertOutcome::Inserted { items: 2, chars: 10 });
        assert_eq!(sink.written, vec!["A\n\nx\n\nB\n\ny".to_string()]);
        assert_eq!(
            prompter.asked,
            vec![
                "Are you sure you want to insert the following text into the document?\n\nA\n\nx\n\nB\n\ny"
                    .to_string()
            ]
        );
        assert_eq!(prompter.notices.len(), 1);
        assert!(prompter.notices[0].starts_with("Inserted 2 items"));
    }

    #[test]
    fn declined_insert_has_no_effect() {
        let mut prompter = ScriptedPrompter::answering(false);
        let mut sink = RecordingSink::default();

        let outcome = insert_with_confirmation(&items(), &mut prompter, &mut sink).unwrap();

        assert_eq!(outcome, InsertOutcome::Declined);
        assert!(sink.written.is_empty());
        assert!(prompter.notices.is_empty());
    }

    #[test]
    fn empty_selection_inserts_empty_text() {
        let mut prompter = ScriptedPrompter::answering(true);
        let mut sink = RecordingSink::default();

        let outcome = insert_with_confirmation(&[], &mut prompter, &mut sink).unwrap();

        assert_eq!(outcome, InsertOutcome::Inserted { items: 0, chars: 0 });
        assert_eq!(sink.written, vec![String::new()]);
    }

    #[test]
    fn sink_failure_propagates_without_notice() {
        let mut prompter = ScriptedPrompter::answering(true);
        let err = insert_with_confirmation(&items(), &mut prompter, &mut FailingSink).unwrap_err();
        assert!(matches!(err, PickerError::Insert(_)));
        assert!(prompter.notices.is_empty());
    }

    #[test]
    fn snapshot_is_taken_at_creation() {
        let mut selected = items();
        let pending = PendingInsert::new(&selected);
        selected.reverse();
        assert_eq!(pending.text(), "A\n\nx\n\nB\n\ny");
        assert_eq!(pending.item_count(), 2);
    }
}
