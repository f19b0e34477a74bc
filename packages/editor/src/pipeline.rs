//! # Preview Pipeline
//!
//! Coordinates store state with the render projector: Dispatch → Project
//!
//! The Pipeline manages:
//! - Resolving which page to preview
//! - Choosing between the visual tree and the markup code view
//! - Caching the last projection, keyed by snapshot and request

use pagesmith_compiler_html::{compile_to_markup, MarkupOptions};
use pagesmith_evaluator::{project, SelectionOptions, VirtualDomDocument};
use pagesmith_model::{Breakpoint, Document};
use std::sync::Arc;
use tracing::debug;

use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    #[default]
    Visual,
    Code,
}

/// What to preview
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreviewRequest {
    /// Page to render; the active page when `None`
    pub page_id: Option<String>,
    pub breakpoint: Breakpoint,
    pub selection: SelectionOptions,
    pub mode: PreviewMode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    Tree(VirtualDomDocument),
    Markup(String),
}

/// Manages the store → preview pipeline
#[derive(Default)]
pub struct Pipeline {
    cache: Option<CachedPreview>,
    markup_options: MarkupOptions,
}

struct CachedPreview {
    snapshot: Arc<Document>,
    request: PreviewRequest,
    preview: Preview,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markup_options(mut self, options: MarkupOptions) -> Self {
        self.markup_options = options;
        self
    }

    /// Render the store's present document
    ///
    /// Re-projects only when the store moved to another snapshot or the
    /// request changed.
    pub fn render(&mut self, store: &Store, request: &PreviewRequest) -> Preview {
        let snapshot = store.snapshot();

        if let Some(cached) = &self.cache {
            if Arc::ptr_eq(&cached.snapshot, &snapshot) && cached.request == *request {
                debug!("Preview cache hit");
                return cached.preview.clone();
            }
        }

        let page_id = request
            .page_id
            .clone()
            .unwrap_or_else(|| snapshot.active_page_id.clone());

        let preview = match request.mode {
            PreviewMode::Visual => Preview::Tree(project(
                &snapshot,
                &page_id,
                request.breakpoint,
                &request.selection,
            )),
            PreviewMode::Code => {
                Preview::Markup(compile_to_markup(&snapshot, &page_id, self.markup_options.clone()))
            }
        };

        self.cache = Some(CachedPreview {
            snapshot,
            request: request.clone(),
            preview: preview.clone(),
        });
        preview
    }

    /// Whether the last render is still valid for `store` and `request`
    pub fn is_cached(&self, store: &Store, request: &PreviewRequest) -> bool {
        self.cache.as_ref().is_some_and(|cached| {
            Arc::ptr_eq(&cached.snapshot, &store.snapshot()) && cached.request == *request
        })
    }

    /// Clear preview cache (force re-projection on next render)
    pub fn clear_cache(&mut self) {
        self.cache = None;
    }
}
