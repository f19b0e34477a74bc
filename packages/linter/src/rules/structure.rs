use crate::analyzer::AnalysisContext;
use crate::rules::AnalysisRule;
use pagesmith_model::{describe, ElementType, Suggestion, SuggestionCategory};
use serde_json::json;

const MIN_SECTIONS: usize = 3;

/// Pages with fewer than three sections feel unfinished
pub struct MinimumSectionsRule;

impl AnalysisRule for MinimumSectionsRule {
    fn name(&self) -> &'static str {
        "minimum-sections"
    }

    fn category(&self) -> SuggestionCategory {
        SuggestionCategory::Structure
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<Suggestion> {
        let Some(page) = ctx.page else {
            return Vec::new();
        };
        if page.elements.len() >= MIN_SECTIONS || page.has_element_type(ElementType::Services) {
            return Vec::new();
        }

        vec![add_element(
            ElementType::Services,
            format!(
                "This page has only {} section(s). Add a {} section to give visitors more to explore.",
                page.elements.len(),
                describe(ElementType::Services).display_name
            ),
            0.8,
        )]
    }
}

/// Sections most landing pages are expected to have
pub struct MissingSectionRule;

impl AnalysisRule for MissingSectionRule {
    fn name(&self) -> &'static str {
        "missing-section"
    }

    fn category(&self) -> SuggestionCategory {
        SuggestionCategory::Structure
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<Suggestion> {
        let Some(page) = ctx.page else {
            return Vec::new();
        };

        let expected = [
            (ElementType::Hero, "A hero section makes a strong first impression.", 0.9),
            (ElementType::Testimonials, "Testimonials build trust with new visitors.", 0.7),
            (ElementType::Contact, "A contact section lets visitors reach you.", 0.75),
        ];

        expected
            .into_iter()
            .filter(|(ty, _, _)| !page.has_element_type(*ty))
            .map(|(ty, reason, confidence)| add_element(ty, reason, confidence))
            .collect()
    }
}

fn add_element(element_type: ElementType, description: impl Into<String>, confidence: f32) -> Suggestion {
    Suggestion::new("add-element", description, confidence)
        .with_data(json!({ "elementType": element_type.as_str() }))
}
