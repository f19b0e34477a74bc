mod content;
mod design;
mod seo;
mod structure;

pub use content::{AboutLengthRule, GalleryImagesRule, HeroHeadlineRule, ServiceCountRule};
pub use design::{AnimationsRule, ContrastRule, FontPairingRule, PaletteRule};
pub use seo::{DescriptionLengthRule, FaviconRule, KeywordsRule, TitleLengthRule};
pub use structure::{MinimumSectionsRule, MissingSectionRule};

use crate::analyzer::AnalysisContext;
use pagesmith_model::{Suggestion, SuggestionCategory};

/// Trait for implementing suggestion heuristics
pub trait AnalysisRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    fn category(&self) -> SuggestionCategory;

    /// Inspect the document; must not depend on anything but `ctx`
    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<Suggestion>;
}

/// Registry of all available analysis rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn AnalysisRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(MinimumSectionsRule),
                Box::new(MissingSectionRule),
                Box::new(HeroHeadlineRule),
                Box::new(AboutLengthRule),
                Box::new(ServiceCountRule),
                Box::new(GalleryImagesRule),
                Box::new(PaletteRule),
                Box::new(ContrastRule),
                Box::new(FontPairingRule),
                Box::new(AnimationsRule),
                Box::new(DescriptionLengthRule),
                Box::new(TitleLengthRule),
                Box::new(KeywordsRule),
                Box::new(FaviconRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn AnalysisRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn AnalysisRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}
