use crate::analyzer::AnalysisContext;
use crate::rules::AnalysisRule;
use pagesmith_model::{ElementType, Suggestion, SuggestionCategory};
use serde_json::json;

const MIN_DESCRIPTION_CHARS: usize = 100;
const MAX_TITLE_CHARS: usize = 60;

/// Search snippets need a description of reasonable length
pub struct DescriptionLengthRule;

impl AnalysisRule for DescriptionLengthRule {
    fn name(&self) -> &'static str {
        "description-length"
    }

    fn category(&self) -> SuggestionCategory {
        SuggestionCategory::Seo
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<Suggestion> {
        let length = ctx.document.metadata.description.chars().count();
        if length >= MIN_DESCRIPTION_CHARS {
            return Vec::new();
        }

        vec![Suggestion::new(
            "improve-description",
            format!(
                "The site description has {} characters. Search engines show up to ~160; aim for at least {}.",
                length, MIN_DESCRIPTION_CHARS
            ),
            0.75,
        )
        .with_data(json!({
            "field": "description",
            "currentLength": length,
            "recommendedLength": MIN_DESCRIPTION_CHARS,
        }))]
    }
}

/// Titles should exist and fit in a search result line
///
/// The proposal carries a ready metadata patch, so it can be applied as-is.
pub struct TitleLengthRule;

impl AnalysisRule for TitleLengthRule {
    fn name(&self) -> &'static str {
        "title-length"
    }

    fn category(&self) -> SuggestionCategory {
        SuggestionCategory::Seo
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<Suggestion> {
        let title = ctx.document.metadata.title.trim();

        if title.is_empty() {
            let fallback = ctx
                .elements()
                .iter()
                .find(|el| el.element_type == ElementType::Hero)
                .and_then(|hero| hero.text("title"))
                .filter(|t| !t.is_empty())
                .or_else(|| ctx.page.map(|p| p.name.as_str()))
                .unwrap_or("My Website");

            return vec![Suggestion::new("update-metadata", "The site has no title.", 0.95)
                .with_data(json!({ "title": fallback }))];
        }

        let length = title.chars().count();
        if length <= MAX_TITLE_CHARS {
            return Vec::new();
        }

        let truncated: String = title.chars().take(MAX_TITLE_CHARS).collect();
        vec![Suggestion::new(
            "update-metadata",
            format!(
                "The title has {} characters and will be cut off in search results.",
                length
            ),
            0.7,
        )
        .with_data(json!({ "title": truncated.trim_end() }))]
    }
}

pub struct KeywordsRule;

impl AnalysisRule for KeywordsRule {
    fn name(&self) -> &'static str {
        "keywords"
    }

    fn category(&self) -> SuggestionCategory {
        SuggestionCategory::Seo
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<Suggestion> {
        match ctx.page {
            Some(page) if page.meta.keywords.is_empty() => vec![Suggestion::new(
                "add-keywords",
                format!("The page \"{}\" has no keywords.", page.name),
                0.5,
            )
            .with_data(json!({ "pageId": page.id }))],
            _ => Vec::new(),
        }
    }
}

pub struct FaviconRule;

impl AnalysisRule for FaviconRule {
    fn name(&self) -> &'static str {
        "favicon"
    }

    fn category(&self) -> SuggestionCategory {
        SuggestionCategory::Seo
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<Suggestion> {
        if !ctx.document.metadata.favicon.is_empty() {
            return Vec::new();
        }

        vec![Suggestion::new(
            "add-favicon",
            "Add a favicon so the site is recognizable in browser tabs.",
            0.5,
        )]
    }
}
