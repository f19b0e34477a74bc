use pagesmith_model::{Document, Element, Page, Suggestion, SuggestionCategory};
use tracing::debug;

use crate::rules::RuleRegistry;

/// What a rule gets to look at
pub struct AnalysisContext<'a> {
    pub document: &'a Document,
    pub page: Option<&'a Page>,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            page: document.active_page(),
        }
    }

    /// Elements of the active page (empty when there is none)
    pub fn elements(&self) -> &'a [Element] {
        self.page.map(|p| p.elements.as_slice()).unwrap_or(&[])
    }
}

/// Run the built-in rules of `category` against the active page
pub fn analyze(document: &Document, category: SuggestionCategory) -> Vec<Suggestion> {
    analyze_with(document, category, &RuleRegistry::default())
}

/// Run every category in fixed order
pub fn analyze_all(document: &Document) -> Vec<Suggestion> {
    let registry = RuleRegistry::default();
    SuggestionCategory::ALL
        .iter()
        .flat_map(|category| analyze_with(document, *category, &registry))
        .collect()
}

/// Run the rules of `category` from a custom registry
///
/// Identical proposals from different rules are reported once.
pub fn analyze_with(
    document: &Document,
    category: SuggestionCategory,
    registry: &RuleRegistry,
) -> Vec<Suggestion> {
    let ctx = AnalysisContext::new(document);
    let mut suggestions: Vec<Suggestion> = Vec::new();

    for rule in registry.rules().iter().filter(|r| r.category() == category) {
        for suggestion in rule.check(&ctx) {
            let duplicate = suggestions.iter().any(|s| {
                s.suggestion_type == suggestion.suggestion_type
                    && s.element_id == suggestion.element_id
                    && s.data == suggestion.data
            });
            if !duplicate {
                suggestions.push(suggestion);
            }
        }
    }

    debug!("{} analysis produced {} suggestions", category, suggestions.len());
    suggestions
}
