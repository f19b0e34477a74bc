use crate::analyzer::AnalysisContext;
use crate::rules::AnalysisRule;
use pagesmith_model::{Element, ElementType, Suggestion, SuggestionCategory};
use serde_json::json;

const MIN_HEADLINE_CHARS: usize = 10;
const MIN_ABOUT_CHARS: usize = 100;
const MIN_SERVICES: usize = 3;

fn elements_of<'a>(ctx: &AnalysisContext<'a>, element_type: ElementType) -> impl Iterator<Item = &'a Element> {
    ctx.elements().iter().filter(move |el| el.element_type == element_type)
}

/// Hero headline missing or too short to say anything
pub struct HeroHeadlineRule;

impl AnalysisRule for HeroHeadlineRule {
    fn name(&self) -> &'static str {
        "hero-headline"
    }

    fn category(&self) -> SuggestionCategory {
        SuggestionCategory::Content
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<Suggestion> {
        elements_of(ctx, ElementType::Hero)
            .filter_map(|hero| {
                let title = hero.text("title").unwrap_or_default().trim();
                let length = title.chars().count();
                (length < MIN_HEADLINE_CHARS).then(|| {
                    Suggestion::new(
                        "improve-headline",
                        "The hero headline is very short. State clearly what you offer.",
                        0.6,
                    )
                    .for_element(hero.id.clone())
                    .with_data(json!({
                        "field": "title",
                        "currentLength": length,
                        "recommendedLength": MIN_HEADLINE_CHARS,
                    }))
                })
            })
            .collect()
    }
}

/// About text too thin to introduce the business
pub struct AboutLengthRule;

impl AnalysisRule for AboutLengthRule {
    fn name(&self) -> &'static str {
        "about-length"
    }

    fn category(&self) -> SuggestionCategory {
        SuggestionCategory::Content
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<Suggestion> {
        elements_of(ctx, ElementType::About)
            .filter_map(|about| {
                let length = about.text("text").unwrap_or_default().chars().count();
                (length < MIN_ABOUT_CHARS).then(|| {
                    Suggestion::new(
                        "expand-content",
                        format!(
                            "The about text has {} characters. Aim for at least {} to tell your story.",
                            length, MIN_ABOUT_CHARS
                        ),
                        0.65,
                    )
                    .for_element(about.id.clone())
                    .with_data(json!({
                        "field": "text",
                        "currentLength": length,
                        "recommendedLength": MIN_ABOUT_CHARS,
                    }))
                })
            })
            .collect()
    }
}

/// Service grids look sparse below three cards
pub struct ServiceCountRule;

impl AnalysisRule for ServiceCountRule {
    fn name(&self) -> &'static str {
        "service-count"
    }

    fn category(&self) -> SuggestionCategory {
        SuggestionCategory::Content
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<Suggestion> {
        elements_of(ctx, ElementType::Services)
            .filter_map(|services| {
                let count = services.items("items").len();
                (count < MIN_SERVICES).then(|| {
                    Suggestion::new(
                        "add-items",
                        format!("Only {} service(s) listed. Three or more fill the grid.", count),
                        0.55,
                    )
                    .for_element(services.id.clone())
                    .with_data(json!({
                        "field": "items",
                        "count": count,
                        "recommended": MIN_SERVICES,
                    }))
                })
            })
            .collect()
    }
}

/// Gallery without images renders a placeholder
pub struct GalleryImagesRule;

impl AnalysisRule for GalleryImagesRule {
    fn name(&self) -> &'static str {
        "gallery-images"
    }

    fn category(&self) -> SuggestionCategory {
        SuggestionCategory::Content
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<Suggestion> {
        elements_of(ctx, ElementType::Gallery)
            .filter(|gallery| gallery.items("images").is_empty())
            .map(|gallery| {
                Suggestion::new("add-images", "The gallery has no images yet.", 0.7)
                    .for_element(gallery.id.clone())
                    .with_data(json!({ "field": "images" }))
            })
            .collect()
    }
}
