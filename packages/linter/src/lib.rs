//! # Pagesmith Suggestion Engine
//!
//! Read-only heuristics that propose improvements to a document. Each rule
//! belongs to one [`SuggestionCategory`] and inspects the active page plus
//! document-level metadata and theme. Output is deterministic for a given
//! document.

mod analyzer;
mod rules;

pub use analyzer::{analyze, analyze_all, analyze_with, AnalysisContext};
pub use pagesmith_model::{Suggestion, SuggestionCategory};
pub use rules::{AnalysisRule, RuleRegistry};
