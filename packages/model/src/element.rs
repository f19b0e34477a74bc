use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::registry::{self, RegistryError};

/// Ordered key -> value map used for element content, styles and overrides
pub type AttributeMap = serde_json::Map<String, serde_json::Value>;

/// Closed set of block types an operator can place on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Header,
    Hero,
    About,
    Services,
    Gallery,
    Testimonials,
    Contact,
    Footer,
}

impl ElementType {
    pub const ALL: [ElementType; 8] = [
        ElementType::Header,
        ElementType::Hero,
        ElementType::About,
        ElementType::Services,
        ElementType::Gallery,
        ElementType::Testimonials,
        ElementType::Contact,
        ElementType::Footer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Header => "header",
            ElementType::Hero => "hero",
            ElementType::About => "about",
            ElementType::Services => "services",
            ElementType::Gallery => "gallery",
            ElementType::Testimonials => "testimonials",
            ElementType::Contact => "contact",
            ElementType::Footer => "footer",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownElementType(s.to_string()))
    }
}

/// Viewport class with its own style override layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Desktop, Breakpoint::Tablet, Breakpoint::Mobile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Desktop => "desktop",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Mobile => "mobile",
        }
    }

    /// Nominal viewport width in CSS pixels
    pub fn width(&self) -> u32 {
        match self {
            Breakpoint::Desktop => 1280,
            Breakpoint::Tablet => 768,
            Breakpoint::Mobile => 375,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(Breakpoint::Desktop),
            "tablet" => Ok(Breakpoint::Tablet),
            "mobile" => Ok(Breakpoint::Mobile),
            other => Err(format!(
                "Invalid breakpoint: {}. Use: desktop, tablet, or mobile",
                other
            )),
        }
    }
}

/// Per-breakpoint style overrides
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Responsive {
    pub desktop: AttributeMap,
    pub tablet: AttributeMap,
    pub mobile: AttributeMap,
}

impl Responsive {
    /// The same override layer on every breakpoint
    pub fn uniform(layer: AttributeMap) -> Self {
        Self {
            desktop: layer.clone(),
            tablet: layer.clone(),
            mobile: layer,
        }
    }

    pub fn get(&self, breakpoint: Breakpoint) -> &AttributeMap {
        match breakpoint {
            Breakpoint::Desktop => &self.desktop,
            Breakpoint::Tablet => &self.tablet,
            Breakpoint::Mobile => &self.mobile,
        }
    }
}

/// A typed content block placed on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,

    #[serde(rename = "type")]
    pub element_type: ElementType,

    #[serde(default)]
    pub content: AttributeMap,

    #[serde(default)]
    pub styles: AttributeMap,

    #[serde(default)]
    pub position: usize,

    #[serde(default = "default_visible")]
    pub visible: bool,

    #[serde(default)]
    pub responsive: Responsive,
}

fn default_visible() -> bool {
    true
}

impl Element {
    /// Build a fresh element of `element_type` from its registry defaults
    pub fn materialize(element_type: ElementType, id: impl Into<String>, position: usize) -> Self {
        let mut display = AttributeMap::new();
        display.insert("display".to_string(), "block".into());

        Self {
            id: id.into(),
            element_type,
            content: registry::describe(element_type).default_content(),
            styles: AttributeMap::new(),
            position,
            visible: true,
            responsive: Responsive::uniform(display),
        }
    }

    /// String content value, if present
    pub fn text(&self, key: &str) -> Option<&str> {
        self.content.get(key).and_then(|v| v.as_str())
    }

    /// Array content value (items, images, links), empty if absent
    pub fn items(&self, key: &str) -> &[serde_json::Value] {
        self.content
            .get(key)
            .and_then(|v| v.as_array())
            .map(|items| items.as_slice())
            .unwrap_or(&[])
    }
}
