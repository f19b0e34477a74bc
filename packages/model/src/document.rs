//! # Site Document
//!
//! The complete, serializable project: metadata, theme, pages and settings.
//!
//! JSON field names are camelCase so a persisted or exported document has the
//! same shape the editor front-end reads. Every section except `metadata` and
//! `pages` has serde defaults, which keeps hand-written project files short.

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementType};
use crate::utils::{next_suffix, slugify};

/// Id of the page a blank document starts with
pub const DEFAULT_PAGE_ID: &str = "page_home";

/// Root document node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub metadata: Metadata,

    #[serde(default)]
    pub theme: Theme,

    pub pages: Vec<Page>,

    #[serde(default)]
    pub active_page_id: String,

    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub logo: String,
    pub favicon: String,
    pub author: String,
    pub language: String,

    /// Only set on export artifacts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,

    /// Only set on export artifacts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: Colors,
    pub fonts: Fonts,
    pub spacing: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: Colors::default(),
            fonts: Fonts::default(),
            spacing: "normal".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            primary: "#3b82f6".to_string(),
            secondary: "#64748b".to_string(),
            accent: "#f59e0b".to_string(),
            background: "#ffffff".to_string(),
            text: "#1f2937".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fonts {
    pub heading: String,
    pub body: String,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            heading: "Poppins".to_string(),
            body: "Inter".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub responsive: bool,
    pub animations: bool,
    pub dark_mode: bool,
    pub rtl: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            responsive: true,
            animations: true,
            dark_mode: false,
            rtl: false,
        }
    }
}

/// A named page holding an ordered list of elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub name: String,
    pub slug: String,

    #[serde(default)]
    pub elements: Vec<Element>,

    #[serde(default)]
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl Page {
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: Option<String>) -> Self {
        let name = name.into();
        let slug = slug.unwrap_or_else(|| slugify(&name));

        Self {
            id: id.into(),
            meta: PageMeta {
                title: name.clone(),
                ..PageMeta::default()
            },
            name,
            slug,
            elements: Vec::new(),
        }
    }

    pub fn find_element(&self, element_id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == element_id)
    }

    pub fn has_element_type(&self, element_type: ElementType) -> bool {
        self.elements.iter().any(|el| el.element_type == element_type)
    }

    /// Visible elements in ascending position order (stable for ties)
    pub fn visible_elements(&self) -> Vec<&Element> {
        let mut elements: Vec<&Element> = self.elements.iter().filter(|el| el.visible).collect();
        elements.sort_by_key(|el| el.position);
        elements
    }
}

impl Document {
    /// Blank document with a single active "Home" page
    pub fn new() -> Self {
        Self {
            metadata: Metadata {
                title: "Untitled Site".to_string(),
                language: "en".to_string(),
                ..Metadata::default()
            },
            theme: Theme::default(),
            pages: vec![Page::new(DEFAULT_PAGE_ID, "Home", None)],
            active_page_id: DEFAULT_PAGE_ID.to_string(),
            settings: Settings::default(),
        }
    }

    pub fn page(&self, page_id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == page_id)
    }

    pub fn page_mut(&mut self, page_id: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == page_id)
    }

    pub fn active_page(&self) -> Option<&Page> {
        self.page(&self.active_page_id)
    }

    /// Find an element on any page
    pub fn find_element(&self, element_id: &str) -> Option<&Element> {
        self.pages.iter().find_map(|p| p.find_element(element_id))
    }

    pub fn find_element_mut(&mut self, element_id: &str) -> Option<&mut Element> {
        self.pages
            .iter_mut()
            .flat_map(|p| p.elements.iter_mut())
            .find(|el| el.id == element_id)
    }

    /// All element ids across every page, in page order
    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|p| p.elements.iter())
            .map(|el| el.id.as_str())
    }

    pub fn element_count(&self) -> usize {
        self.pages.iter().map(|p| p.elements.len()).sum()
    }

    /// Id for a new element that is unique across the whole document
    ///
    /// The suffix is one past the largest numeric suffix of any existing
    /// element id, so it can never collide with an id of the same shape.
    pub fn fresh_element_id(&self, element_type: ElementType) -> String {
        format!("{}_{}", element_type, next_suffix(self.element_ids()))
    }

    /// Id for a new page that is unique among pages
    pub fn fresh_page_id(&self) -> String {
        format!("page_{}", next_suffix(self.pages.iter().map(|p| p.id.as_str())))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
