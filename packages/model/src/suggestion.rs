use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Area a suggestion heuristic looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Structure,
    Content,
    Design,
    Seo,
}

impl SuggestionCategory {
    pub const ALL: [SuggestionCategory; 4] = [
        SuggestionCategory::Structure,
        SuggestionCategory::Content,
        SuggestionCategory::Design,
        SuggestionCategory::Seo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionCategory::Structure => "structure",
            SuggestionCategory::Content => "content",
            SuggestionCategory::Design => "design",
            SuggestionCategory::Seo => "seo",
        }
    }
}

impl fmt::Display for SuggestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuggestionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SuggestionCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Invalid category: {}. Use: structure, content, design, or seo", s))
    }
}

/// A proposed, scored edit produced by heuristic analysis
///
/// `data` is opaque to the model; its meaning depends on `suggestion_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub suggestion_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,

    #[serde(default)]
    pub data: serde_json::Value,

    pub description: String,

    /// Always within [0, 1]
    pub confidence: f32,
}

impl Suggestion {
    pub fn new(
        suggestion_type: impl Into<String>,
        description: impl Into<String>,
        confidence: f32,
    ) -> Self {
        Self {
            suggestion_type: suggestion_type.into(),
            element_id: None,
            data: serde_json::Value::Null,
            description: description.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    pub fn for_element(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }
}
