//! Undo/Redo command stack.
//!
//! Every mutation runs inside `execute`, which snapshots the document
//! before and after. Undo restores the "before" snapshot, redo the "after"
//! one. Decks are small, so whole-document snapshots stay cheap and no
//! per-operation inverse has to be maintained.
//!
//! Drag gestures are grouped with `begin_batch` / `end_batch`: the gesture
//! becomes a single undo step however many moves it made.

use crate::document::DeckDocument;

/// One undoable step.
#[derive(Debug, Clone)]
pub struct Command {
    before: DeckDocument,
    after: DeckDocument,
    pub description: String,
}

/// Manages undo/redo stacks with batch grouping for drag gestures.
pub struct CommandStack {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
    /// Maximum undo depth.
    max_depth: usize,
    /// Batch nesting depth (0 = not batching).
    batch_depth: usize,
    /// Document captured at the start of a batch.
    batch_snapshot: Option<DeckDocument>,
    batch_description: String,
}

impl Default for CommandStack {
    fn default() -> Self {
        Self::new(100)
    }
}

impl CommandStack {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::new(),
            max_depth,
            batch_depth: 0,
            batch_snapshot: None,
            batch_description: String::new(),
        }
    }

    /// Start a batch group. All edits until the matching `end_batch()` are
    /// applied live but recorded as one undo step.
    pub fn begin_batch(&mut self, doc: &DeckDocument, description: &str) {
        if self.batch_depth == 0 {
            self.batch_snapshot = Some(doc.clone());
            self.batch_description = description.to_string();
        }
        self.batch_depth += 1;
    }

    /// End a batch group. When the outermost batch closes and the document
    /// changed, one command is pushed.
    pub fn end_batch(&mut self, doc: &DeckDocument) {
        if self.batch_depth == 0 {
            return;
        }
        self.batch_depth -= 1;
        if self.batch_depth > 0 {
            return;
        }
        if let Some(before) = self.batch_snapshot.take() {
            let description = std::mem::take(&mut self.batch_description);
            self.record(before, doc.clone(), description);
        }
    }

    /// Run `edit` against the document and record it for undo.
    ///
    /// Edits that leave the document unchanged are not recorded.
    pub fn execute<R>(
        &mut self,
        doc: &mut DeckDocument,
        description: &str,
        edit: impl FnOnce(&mut DeckDocument) -> R,
    ) -> R {
        if self.batch_depth > 0 {
            // The snapshot taken at begin_batch() covers the cumulative effect.
            return edit(doc);
        }
        let before = doc.clone();
        let result = edit(doc);
        self.record(before, doc.clone(), description.to_string());
        result
    }

    fn record(&mut self, before: DeckDocument, after: DeckDocument, description: String) {
        if before == after {
            return;
        }
        self.undo_stack.push(Command {
            before,
            after,
            description,
        });
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
        // New action invalidates redo history
        self.redo_stack.clear();
    }

    /// Undo the last command. Returns its description.
    pub fn undo(&mut self, doc: &mut DeckDocument) -> Option<String> {
        let cmd = self.undo_stack.pop()?;
        *doc = cmd.before.clone();
        let desc = cmd.description.clone();
        self.redo_stack.push(cmd);
        Some(desc)
    }

    /// Redo the last undone command. Returns its description.
    pub fn redo(&mut self, doc: &mut DeckDocument) -> Option<String> {
        let cmd = self.redo_stack.pop()?;
        *doc = cmd.after.clone();
        let desc = cmd.description.clone();
        self.undo_stack.push(cmd);
        Some(desc)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
