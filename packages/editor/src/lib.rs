//! # Pagesmith Editor
//!
//! Core document editing engine for Pagesmith.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ session: selection, breakpoint, drag state  │
//! └─────────────────────────────────────────────┘
//!                     ↓ Action
//! ┌─────────────────────────────────────────────┐
//! │ store: present snapshot + undo/redo history │
//! │  - mutations: pure Document reducer         │
//! │  - templates, persistence: whole documents  │
//! └─────────────────────────────────────────────┘
//!                     ↓ Arc<Document>
//! ┌─────────────────────────────────────────────┐
//! │ pipeline: evaluator (VDOM) / compiler-html  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **One entry point**: the document only changes through `Store::dispatch`
//! 2. **Snapshots, not diffs**: history holds `Arc<Document>` values
//! 3. **No-ops are free**: an action that changes nothing returns the same
//!    snapshot and records no history
//! 4. **Derived views**: previews are recomputed from the present snapshot
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagesmith_editor::{Action, Gateway, FilePersistence, Store};
//! use pagesmith_model::ElementType;
//!
//! let mut store = Store::default();
//! let mut gateway = Gateway::new(FilePersistence::new(".pagesmith"));
//! gateway.restore(&mut store);
//!
//! store.dispatch(Action::add_element(ElementType::Hero));
//! store.undo();
//!
//! gateway.save(&store)?;
//! ```

mod errors;
mod mutations;
mod persistence;
mod pipeline;
mod session;
mod store;
pub mod templates;
mod undo_stack;

pub use errors::{EditorError, ImportError, PersistenceError, TemplateError};
pub use mutations::{
    move_element, Action, AddElementRule, ColorsPatch, Dispatcher, ElementPatch, FontsPatch,
    MetadataPatch, PagePatch, SettingsPatch, SuggestionRule, ThemePatch, UpdateMetadataRule,
};
pub use persistence::{
    export_file_name, ExportArtifact, FilePersistence, Gateway, MemoryPersistence,
    PersistencePort, EXPORT_FORMAT_VERSION, EXPORT_MIME_TYPE, PROJECT_KEY,
};
pub use pipeline::{Pipeline, Preview, PreviewMode, PreviewRequest};
pub use session::{DragState, EditSession, DRAG_THRESHOLD_PX};
pub use store::Store;
pub use templates::TemplateInfo;
pub use undo_stack::{HistoryEntry, UndoStack, DEFAULT_MAX_LEVELS};

// Re-export common types for convenience
pub use pagesmith_evaluator::{SelectionOptions, VirtualDomDocument};
pub use pagesmith_model::Document;
