//! # Document Store
//!
//! Owns the present document and its history. All edits go through
//! [`Store::dispatch`]; undo and redo only move snapshots between the
//! history stacks and never reduce anything.

use pagesmith_model::Document;
use std::sync::Arc;
use tracing::debug;

use crate::mutations::{Action, Dispatcher};
use crate::undo_stack::UndoStack;

#[derive(Debug)]
pub struct Store {
    present: Arc<Document>,
    history: UndoStack,
    dispatcher: Dispatcher,
}

impl Store {
    pub fn new(initial: Document) -> Self {
        Self::with_dispatcher(initial, Dispatcher::new())
    }

    /// Store whose dispatcher carries suggestion rules
    pub fn with_dispatcher(initial: Document, dispatcher: Dispatcher) -> Self {
        Self {
            present: Arc::new(initial),
            history: UndoStack::new(),
            dispatcher,
        }
    }

    /// Bound the undo history (0 = unlimited)
    pub fn with_max_levels(mut self, max_levels: usize) -> Self {
        self.history = UndoStack::with_max_levels(max_levels);
        self
    }

    /// Reduce `action` against the present
    ///
    /// Returns whether a history step was recorded. Actions that change
    /// nothing leave both the present and the history untouched.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = self.dispatcher.reduce(&self.present, &action);
        if Arc::ptr_eq(&next, &self.present) {
            return false;
        }

        let previous = std::mem::replace(&mut self.present, next);
        self.history.record(previous, action.name());
        debug!(
            "Dispatched {} ({} undo levels)",
            action.name(),
            self.history.undo_levels()
        );
        true
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.present) {
            Some(previous) => {
                self.present = previous;
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.present) {
            Some(next) => {
                self.present = next;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn present(&self) -> &Document {
        &self.present
    }

    /// Shared handle to the present; stays valid after later dispatches
    pub fn snapshot(&self) -> Arc<Document> {
        Arc::clone(&self.present)
    }

    pub fn max_levels(&self) -> usize {
        self.history.max_levels()
    }

    /// Forget past and future; the present is kept
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn undo_levels(&self) -> usize {
        self.history.undo_levels()
    }

    pub fn redo_levels(&self) -> usize {
        self.history.redo_levels()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.history.redo_description()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Document::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutations::MetadataPatch;
    use pagesmith_model::ElementType;

    fn retitle(title: &str) -> Action {
        Action::UpdateMetadata(MetadataPatch {
            title: Some(title.to_string()),
            ..MetadataPatch::default()
        })
    }

    #[test]
    fn test_dispatch_records_history() {
        let mut store = Store::default();
        assert!(store.dispatch(Action::add_element(ElementType::Hero)));

        assert!(store.can_undo());
        assert!(!store.can_redo());
        assert_eq!(store.undo_description(), Some("add-element"));
        assert_eq!(store.present().element_count(), 1);
    }

    #[test]
    fn test_noop_dispatch_keeps_reference() {
        let mut store = Store::default();
        let before = store.snapshot();

        assert!(!store.dispatch(Action::DeleteElement {
            element_id: "ghost".into()
        }));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
        assert_eq!(store.undo_levels(), 0);
    }

    #[test]
    fn test_undo_redo_restore_exact_snapshots() {
        let mut store = Store::default();
        let original = store.snapshot();
        store.dispatch(retitle("A"));
        let edited = store.snapshot();

        assert!(store.undo());
        assert!(Arc::ptr_eq(&original, &store.snapshot()));
        assert_eq!(store.redo_description(), Some("update-metadata"));

        assert!(store.redo());
        assert!(Arc::ptr_eq(&edited, &store.snapshot()));
        assert!(!store.redo());
    }

    #[test]
    fn test_mutation_after_undo_clears_future() {
        let mut store = Store::default();
        store.dispatch(retitle("A"));
        store.undo();
        assert!(store.can_redo());

        store.dispatch(retitle("B"));
        assert!(!store.can_redo());
        assert!(!store.redo());
        assert_eq!(store.present().metadata.title, "B");
    }

    #[test]
    fn test_history_bound_and_clear() {
        let mut store = Store::default().with_max_levels(2);
        for title in ["A", "B", "C"] {
            store.dispatch(retitle(title));
        }
        assert_eq!(store.max_levels(), 2);
        assert_eq!(store.undo_levels(), 2);

        store.undo();
        store.clear_history();
        assert_eq!(store.undo_levels(), 0);
        assert_eq!(store.redo_levels(), 0);
        assert_eq!(store.present().metadata.title, "B");
    }
}
