//! Prebuilt starting documents.
//!
//! Templates are complete site documents embedded at compile time. Selecting
//! one only parses it; replacing the present document is the job of the
//! `LoadTemplate` action, which keeps the current author.

use pagesmith_model::Document;
use tracing::debug;

use crate::errors::TemplateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

static TEMPLATES: [TemplateInfo; 3] = [
    TemplateInfo {
        id: "business",
        name: "Business",
        description: "Consulting or agency site with services, testimonials and an about page",
    },
    TemplateInfo {
        id: "ecommerce",
        name: "Online Shop",
        description: "Product gallery, shop perks and order contact",
    },
    TemplateInfo {
        id: "portfolio",
        name: "Portfolio",
        description: "Image-led portfolio with a short bio and booking form",
    },
];

fn source(id: &str) -> Option<&'static str> {
    match id {
        "business" => Some(include_str!("../templates/business.json")),
        "ecommerce" => Some(include_str!("../templates/ecommerce.json")),
        "portfolio" => Some(include_str!("../templates/portfolio.json")),
        _ => None,
    }
}

/// Catalog in display order
pub fn list() -> &'static [TemplateInfo] {
    &TEMPLATES
}

/// Parse the template with `id`
pub fn select(id: &str) -> Result<Document, TemplateError> {
    let json = source(id).ok_or_else(|| TemplateError::UnknownTemplate(id.to_string()))?;

    let document = serde_json::from_str(json).map_err(|source| TemplateError::Malformed {
        id: id.to_string(),
        source,
    })?;
    debug!("Selected template {}", id);
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_model::validate_content;

    #[test]
    fn test_every_template_is_well_formed() {
        for info in list() {
            let doc = select(info.id).unwrap();

            assert!(doc.check_invariants().is_empty(), "{}: {:?}", info.id, doc.check_invariants());
            assert!(!doc.metadata.title.is_empty());
            for page in &doc.pages {
                for element in &page.elements {
                    validate_content(element.element_type, &element.content).unwrap();
                }
            }
        }
    }

    #[test]
    fn test_unknown_template() {
        assert!(matches!(
            select("blog"),
            Err(TemplateError::UnknownTemplate(id)) if id == "blog"
        ));
    }

    #[test]
    fn test_catalog_order() {
        let ids: Vec<_> = list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["business", "ecommerce", "portfolio"]);
    }
}
