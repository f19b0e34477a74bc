//! # Pagesmith Model
//!
//! The serializable site document and everything needed to reason about it
//! without mutating it.
//!
//! ## Layout
//!
//! ```text
//! Document
//!  ├── metadata   (title, description, author, ...)
//!  ├── theme      (colors, fonts, spacing)
//!  ├── settings   (responsive, animations, darkMode, rtl)
//!  ├── activePageId
//!  └── pages[]
//!       └── elements[]   (typed blocks: hero, services, ...)
//! ```
//!
//! Element content and styles are ordered JSON maps. The key vocabulary for
//! each element type lives in the [`registry`].

pub mod document;
pub mod element;
pub mod invariants;
pub mod registry;
pub mod suggestion;
pub mod utils;

pub use document::{
    Colors, Document, Fonts, Metadata, Page, PageMeta, Settings, Theme, DEFAULT_PAGE_ID,
};
pub use element::{AttributeMap, Breakpoint, Element, ElementType, Responsive};
pub use invariants::InvariantViolation;
pub use registry::{
    describe, list_all, validate_content, ElementCategory, ElementDescriptor, RegistryError,
};
pub use suggestion::{Suggestion, SuggestionCategory};
