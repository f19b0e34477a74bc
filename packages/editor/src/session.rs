//! # Edit Session Management
//!
//! UI-local editing state around one document store: the selected element,
//! the preview breakpoint and an in-progress drag.
//!
//! Nothing here is global. A front-end owns one `EditSession` and passes it
//! by reference; the session only changes the document by dispatching
//! actions to its store.

use pagesmith_evaluator::SelectionOptions;
use pagesmith_model::Breakpoint;
use tracing::debug;

use crate::mutations::{move_element, Action};
use crate::store::Store;

/// Pointer travel before a press turns into a drag
pub const DRAG_THRESHOLD_PX: f32 = 8.0;

/// Drag-to-reorder gesture
///
/// `Idle -> Pressed -> Dragging`, ended by a drop or a cancel.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,

    /// Pointer is down on an element but has not moved far enough
    Pressed { element_id: String },

    /// Element is being dragged over `target_index`, counted among the
    /// visible elements of the canvas
    Dragging {
        element_id: String,
        target_index: usize,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

pub struct EditSession {
    /// Document being edited
    pub store: Store,

    /// Currently selected element id
    selected: Option<String>,

    breakpoint: Breakpoint,

    drag: DragState,
}

impl EditSession {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            selected: None,
            breakpoint: Breakpoint::default(),
            drag: DragState::Idle,
        }
    }

    /// Dispatch through the store, then drop a selection whose element is gone
    pub fn dispatch(&mut self, action: Action) -> bool {
        let changed = self.store.dispatch(action);
        self.prune_selection();
        changed
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.store.undo();
        self.prune_selection();
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.store.redo();
        self.prune_selection();
        changed
    }

    /// Select `element_id`; unknown ids leave the selection as it was
    pub fn select(&mut self, element_id: &str) -> bool {
        if self.store.present().find_element(element_id).is_none() {
            debug!("Ignoring selection of unknown element {}", element_id);
            return false;
        }
        self.selected = Some(element_id.to_string());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.breakpoint = breakpoint;
    }

    /// Selection highlighting for the preview canvas
    pub fn selection_options(&self) -> SelectionOptions {
        SelectionOptions {
            show_selection: self.selected.is_some(),
            selected_id: self.selected.clone(),
        }
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Pointer down on an element
    pub fn press(&mut self, element_id: &str) {
        self.drag = DragState::Pressed {
            element_id: element_id.to_string(),
        };
    }

    /// Pointer moved `distance` px from the press while over `target_index`
    pub fn drag_over(&mut self, target_index: usize, distance: f32) {
        self.drag = match std::mem::take(&mut self.drag) {
            DragState::Pressed { element_id } if distance >= DRAG_THRESHOLD_PX => {
                DragState::Dragging {
                    element_id,
                    target_index,
                }
            }
            DragState::Dragging { element_id, .. } => DragState::Dragging {
                element_id,
                target_index,
            },
            other => other,
        };
    }

    /// Pointer up: a drag dispatches exactly one reorder on the active page
    ///
    /// Returns whether the document changed. A press that never became a drag
    /// selects the element instead.
    pub fn drop(&mut self) -> bool {
        match std::mem::take(&mut self.drag) {
            DragState::Idle => false,
            DragState::Pressed { element_id } => {
                self.select(&element_id);
                false
            }
            DragState::Dragging {
                element_id,
                target_index,
            } => {
                let doc = self.store.present();
                let action = move_element(doc, &doc.active_page_id, &element_id, target_index);
                match action {
                    Some(action) => self.dispatch(action),
                    None => {
                        debug!("Drop of {} changed nothing", element_id);
                        false
                    }
                }
            }
        }
    }

    /// Abandon the gesture without touching the document
    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    fn prune_selection(&mut self) {
        let present = self.store.present();
        if let Some(id) = &self.selected {
            if present.find_element(id).is_none() {
                debug!("Selected element {} no longer exists", id);
                self.selected = None;
            }
        }
    }
}
