//! # Element Registry
//!
//! Catalog of every [`ElementType`] with display metadata, default content and
//! the content keys that type understands. Pure lookup, no state.
//!
//! ## Content vocabulary
//!
//! | type         | keys                                                   |
//! |--------------|--------------------------------------------------------|
//! | header       | logo, navigation[{label, href}], ctaText               |
//! | hero         | title, subtitle, buttonText, buttonLink, backgroundImage |
//! | about        | title, text, image                                     |
//! | services     | title, subtitle, items[{title, description, icon}]     |
//! | gallery      | title, images[{src, alt, caption}]                     |
//! | testimonials | title, items[{name, role, quote, avatar}]              |
//! | contact      | title, email, phone, address, showForm                 |
//! | footer       | text, links[{label, href}], social[{network, url}]     |

use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::element::{AttributeMap, ElementType};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Unknown element type: {0}")]
    UnknownElementType(String),

    #[error("Element type '{element_type}' has no content key '{key}'")]
    UnknownContentKey {
        element_type: ElementType,
        key: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    Layout,
    Content,
    Media,
    Social,
    Forms,
}

impl ElementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementCategory::Layout => "layout",
            ElementCategory::Content => "content",
            ElementCategory::Media => "media",
            ElementCategory::Social => "social",
            ElementCategory::Forms => "forms",
        }
    }
}

/// Display metadata and content contract for one element type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDescriptor {
    pub element_type: ElementType,
    pub display_name: &'static str,
    pub category: ElementCategory,
    pub description: &'static str,
    pub content_keys: &'static [&'static str],
}

static DESCRIPTORS: [ElementDescriptor; 8] = [
    ElementDescriptor {
        element_type: ElementType::Header,
        display_name: "Header",
        category: ElementCategory::Layout,
        description: "Site logo, navigation links and a call to action",
        content_keys: &["logo", "navigation", "ctaText"],
    },
    ElementDescriptor {
        element_type: ElementType::Hero,
        display_name: "Hero Section",
        category: ElementCategory::Content,
        description: "Large banner with headline and primary button",
        content_keys: &["title", "subtitle", "buttonText", "buttonLink", "backgroundImage"],
    },
    ElementDescriptor {
        element_type: ElementType::About,
        display_name: "About",
        category: ElementCategory::Content,
        description: "Text block introducing the business",
        content_keys: &["title", "text", "image"],
    },
    ElementDescriptor {
        element_type: ElementType::Services,
        display_name: "Services",
        category: ElementCategory::Content,
        description: "Grid of offered services",
        content_keys: &["title", "subtitle", "items"],
    },
    ElementDescriptor {
        element_type: ElementType::Gallery,
        display_name: "Gallery",
        category: ElementCategory::Media,
        description: "Image grid with captions",
        content_keys: &["title", "images"],
    },
    ElementDescriptor {
        element_type: ElementType::Testimonials,
        display_name: "Testimonials",
        category: ElementCategory::Social,
        description: "Customer quotes",
        content_keys: &["title", "items"],
    },
    ElementDescriptor {
        element_type: ElementType::Contact,
        display_name: "Contact",
        category: ElementCategory::Forms,
        description: "Contact details and an optional form",
        content_keys: &["title", "email", "phone", "address", "showForm"],
    },
    ElementDescriptor {
        element_type: ElementType::Footer,
        display_name: "Footer",
        category: ElementCategory::Layout,
        description: "Copyright line, links and social profiles",
        content_keys: &["text", "links", "social"],
    },
];

/// Look up the descriptor for `element_type`
pub fn describe(element_type: ElementType) -> &'static ElementDescriptor {
    // DESCRIPTORS is declared in ElementType::ALL order
    let index = ElementType::ALL
        .iter()
        .position(|ty| *ty == element_type)
        .unwrap_or_default();
    &DESCRIPTORS[index]
}

/// Every registered element type
pub fn list_all() -> &'static [ElementDescriptor] {
    &DESCRIPTORS
}

/// Reject content keys outside the vocabulary of `element_type`
pub fn validate_content(element_type: ElementType, content: &AttributeMap) -> Result<(), RegistryError> {
    let descriptor = describe(element_type);

    match content.keys().find(|key| !descriptor.content_keys.contains(&key.as_str())) {
        Some(key) => Err(RegistryError::UnknownContentKey {
            element_type,
            key: key.clone(),
        }),
        None => Ok(()),
    }
}

impl ElementDescriptor {
    /// Fresh copy of the default content for this type
    pub fn default_content(&self) -> AttributeMap {
        let value = match self.element_type {
            ElementType::Header => json!({
                "logo": "My Site",
                "navigation": [
                    {"label": "Home", "href": "#"},
                    {"label": "About", "href": "#about"},
                    {"label": "Contact", "href": "#contact"}
                ],
                "ctaText": "Get Started"
            }),
            ElementType::Hero => json!({
                "title": "Welcome to Our Website",
                "subtitle": "We build experiences people remember",
                "buttonText": "Learn More",
                "buttonLink": "#",
                "backgroundImage": ""
            }),
            ElementType::About => json!({
                "title": "About Us",
                "text": "Tell your visitors who you are and what makes you different.",
                "image": ""
            }),
            ElementType::Services => json!({
                "title": "Our Services",
                "subtitle": "What we offer",
                "items": [
                    {"title": "Service 1", "description": "Describe this service", "icon": "star"},
                    {"title": "Service 2", "description": "Describe this service", "icon": "heart"},
                    {"title": "Service 3", "description": "Describe this service", "icon": "bolt"}
                ]
            }),
            ElementType::Gallery => json!({
                "title": "Gallery",
                "images": []
            }),
            ElementType::Testimonials => json!({
                "title": "What Our Clients Say",
                "items": [
                    {"name": "Jane Doe", "role": "Customer", "quote": "Outstanding service!", "avatar": ""}
                ]
            }),
            ElementType::Contact => json!({
                "title": "Contact Us",
                "email": "hello@example.com",
                "phone": "",
                "address": "",
                "showForm": true
            }),
            ElementType::Footer => json!({
                "text": "© All rights reserved.",
                "links": [],
                "social": []
            }),
        };

        match value {
            serde_json::Value::Object(map) => map,
            _ => AttributeMap::new(),
        }
    }
}
