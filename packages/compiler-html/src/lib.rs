//! Developer "code view" for a document page.
//!
//! This is a skeleton, not a faithful export: the head carries the document
//! metadata and the body holds one comment placeholder per visible element.
//! The visual preview lives in `pagesmith-evaluator`.

mod compiler;


pub use compiler::{compile_to_markup, MarkupOptions};
