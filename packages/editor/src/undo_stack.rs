//! # Undo/Redo Stack
//!
//! Snapshot history for the document store.
//!
//! ## Design
//!
//! - Every recorded step keeps the whole previous document as an
//!   `Arc<Document>`; moving a step between stacks never copies it
//! - Undo swaps the present with the newest past snapshot
//! - Redo swaps it back
//! - Recording a new step clears the redo stack
//! - The undo stack is unbounded unless a limit is set; then the oldest
//!   snapshots drop first
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//! stack.record(Arc::clone(&present), "add-element");
//! present = next;
//!
//! if let Some(previous) = stack.undo(&present) {
//!     present = previous;
//! }
//! ```

use pagesmith_model::Document;
use std::sync::Arc;

/// Default bound on undo levels (0 = unlimited)
pub const DEFAULT_MAX_LEVELS: usize = 0;

/// One side of a recorded step
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub snapshot: Arc<Document>,

    /// Name of the action that moved away from `snapshot`
    pub description: Option<String>,
}

/// Undo/redo stack of document snapshots
#[derive(Debug)]
pub struct UndoStack {
    /// Past snapshots (most recent last)
    undo_stack: Vec<HistoryEntry>,

    /// Undone snapshots (most recent last)
    redo_stack: Vec<HistoryEntry>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl UndoStack {
    /// Create a new undo stack with unlimited levels
    pub fn new() -> Self {
        Self::with_max_levels(DEFAULT_MAX_LEVELS)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Record `previous` as the state before a new step
    pub fn record(&mut self, previous: Arc<Document>, description: impl Into<String>) {
        self.undo_stack.push(HistoryEntry {
            snapshot: previous,
            description: Some(description.into()),
        });

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            let excess = self.undo_stack.len() - self.max_levels;
            self.undo_stack.drain(..excess);
        }

        // New action invalidates future
        self.redo_stack.clear();
    }

    /// Step back from `present`; `None` when there is nothing to undo
    pub fn undo(&mut self, present: &Arc<Document>) -> Option<Arc<Document>> {
        let entry = self.undo_stack.pop()?;
        self.redo_stack.push(HistoryEntry {
            snapshot: Arc::clone(present),
            description: entry.description,
        });
        Some(entry.snapshot)
    }

    /// Step forward from `present`; `None` when there is nothing to redo
    pub fn redo(&mut self, present: &Arc<Document>) -> Option<Arc<Document>> {
        let entry = self.redo_stack.pop()?;
        self.undo_stack.push(HistoryEntry {
            snapshot: Arc::clone(present),
            description: entry.description,
        });
        Some(entry.snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
