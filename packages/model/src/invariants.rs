//! Structural checks over a [`Document`]. Read-only; nothing here repairs.

use std::collections::HashSet;
use thiserror::Error;

use crate::document::Document;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Element id '{id}' is used more than once")]
    DuplicateElementId { id: String },

    #[error("Page id '{id}' is used more than once")]
    DuplicatePageId { id: String },

    #[error("Positions on page '{page_id}' are not 0..{expected_len}: {positions:?}")]
    NonContiguousPositions {
        page_id: String,
        expected_len: usize,
        positions: Vec<usize>,
    },

    #[error("Active page '{active_page_id}' does not exist")]
    DanglingActivePage { active_page_id: String },

    #[error("Active page id must be set while pages exist")]
    MissingActivePage,
}

impl Document {
    /// Report every invariant the document currently breaks
    pub fn check_invariants(&self) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();

        let mut seen = HashSet::new();
        for id in self.element_ids() {
            if !seen.insert(id) {
                violations.push(InvariantViolation::DuplicateElementId { id: id.to_string() });
            }
        }

        let mut seen_pages = HashSet::new();
        for page in &self.pages {
            if !seen_pages.insert(page.id.as_str()) {
                violations.push(InvariantViolation::DuplicatePageId { id: page.id.clone() });
            }

            let mut positions: Vec<usize> = page.elements.iter().map(|el| el.position).collect();
            positions.sort_unstable();
            if positions.iter().enumerate().any(|(i, pos)| i != *pos) {
                violations.push(InvariantViolation::NonContiguousPositions {
                    page_id: page.id.clone(),
                    expected_len: page.elements.len(),
                    positions,
                });
            }
        }

        if self.active_page_id.is_empty() {
            if !self.pages.is_empty() {
                violations.push(InvariantViolation::MissingActivePage);
            }
        } else if self.active_page().is_none() {
            violations.push(InvariantViolation::DanglingActivePage {
                active_page_id: self.active_page_id.clone(),
            });
        }

        violations
    }
}
