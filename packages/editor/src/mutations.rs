//! # Document Mutations
//!
//! Every change to a site document is an [`Action`] reduced by
//! [`Dispatcher::reduce`]. The reducer is pure: it never touches the input
//! snapshot and returns either a new snapshot or, when nothing semantically
//! changed, the very same `Arc`.
//!
//! ## Action Semantics
//!
//! ### Elements
//! - `AddElement` materializes registry defaults with a fresh `{type}_{n}` id
//!   at the end of the target page. Invalid content or a missing page is a
//!   no-op.
//! - `UpdateElement` replaces the patched fields of one element, wherever it
//!   lives. Unknown ids are no-ops.
//! - `DeleteElement` removes the element without renumbering its siblings.
//! - `ReorderElements` rebuilds a page from an id list and rewrites
//!   positions as `0..n`.
//!
//! ### Pages
//! - Deleting the active page activates the first remaining page.
//! - Activating an unknown page is a no-op.
//!
//! ### Whole-document replacement
//! - `LoadProject` replaces everything.
//! - `LoadTemplate` replaces everything except `metadata.author`.
//!
//! ### Suggestions
//! - `ApplySuggestion` is translated by the first registered
//!   [`SuggestionRule`] that claims the suggestion type, and is otherwise a
//!   no-op.

use pagesmith_model::{
    validate_content, AttributeMap, Document, Element, ElementType, PageMeta, Responsive,
    Suggestion,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Semantic edits of a site document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Action {
    UpdateMetadata(MetadataPatch),

    UpdateTheme(ThemePatch),

    UpdateSettings(SettingsPatch),

    /// Add a registry-default element to `page_id` (or the active page)
    #[serde(rename_all = "camelCase")]
    AddElement {
        element_type: ElementType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        page_id: Option<String>,
        /// Merged over the default content after vocabulary validation
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<AttributeMap>,
    },

    #[serde(rename_all = "camelCase")]
    UpdateElement {
        element_id: String,
        patch: ElementPatch,
    },

    #[serde(rename_all = "camelCase")]
    DeleteElement { element_id: String },

    #[serde(rename_all = "camelCase")]
    ReorderElements {
        page_id: String,
        ordered_ids: Vec<String>,
    },

    AddPage {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        slug: Option<String>,
    },

    #[serde(rename_all = "camelCase")]
    UpdatePage { page_id: String, patch: PagePatch },

    #[serde(rename_all = "camelCase")]
    DeletePage { page_id: String },

    #[serde(rename_all = "camelCase")]
    SetActivePage { page_id: String },

    LoadProject(Document),

    LoadTemplate(Document),

    ApplySuggestion(Suggestion),
}

impl Action {
    /// Kebab-case label used in logs and history descriptions
    pub fn name(&self) -> &'static str {
        match self {
            Action::UpdateMetadata(_) => "update-metadata",
            Action::UpdateTheme(_) => "update-theme",
            Action::UpdateSettings(_) => "update-settings",
            Action::AddElement { .. } => "add-element",
            Action::UpdateElement { .. } => "update-element",
            Action::DeleteElement { .. } => "delete-element",
            Action::ReorderElements { .. } => "reorder-elements",
            Action::AddPage { .. } => "add-page",
            Action::UpdatePage { .. } => "update-page",
            Action::DeletePage { .. } => "delete-page",
            Action::SetActivePage { .. } => "set-active-page",
            Action::LoadProject(_) => "load-project",
            Action::LoadTemplate(_) => "load-template",
            Action::ApplySuggestion(_) => "apply-suggestion",
        }
    }

    /// Shorthand for adding an element with default content to the active page
    pub fn add_element(element_type: ElementType) -> Self {
        Action::AddElement {
            element_type,
            page_id: None,
            content: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetadataPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtl: Option<bool>,
}

/// Element fields to replace; each `Some` field overwrites the whole field
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<AttributeMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<AttributeMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive: Option<Responsive>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

/// Translates a suggestion of one type into a concrete action
pub trait SuggestionRule: std::fmt::Debug {
    /// The `Suggestion::suggestion_type` this rule claims
    fn suggestion_type(&self) -> &'static str;

    /// `None` when the suggestion payload is unusable against `doc`
    fn to_action(&self, suggestion: &Suggestion, doc: &Document) -> Option<Action>;
}

/// `add-element` with `data.elementType`
#[derive(Debug)]
pub struct AddElementRule;

impl SuggestionRule for AddElementRule {
    fn suggestion_type(&self) -> &'static str {
        "add-element"
    }

    fn to_action(&self, suggestion: &Suggestion, _doc: &Document) -> Option<Action> {
        let element_type = suggestion
            .data
            .get("elementType")
            .and_then(|v| v.as_str())?
            .parse::<ElementType>()
            .ok()?;
        Some(Action::add_element(element_type))
    }
}

/// `update-metadata` whose `data` is a metadata patch
#[derive(Debug)]
pub struct UpdateMetadataRule;

impl SuggestionRule for UpdateMetadataRule {
    fn suggestion_type(&self) -> &'static str {
        "update-metadata"
    }

    fn to_action(&self, suggestion: &Suggestion, _doc: &Document) -> Option<Action> {
        serde_json::from_value::<MetadataPatch>(suggestion.data.clone())
            .ok()
            .map(Action::UpdateMetadata)
    }
}

/// The reducer, plus the suggestion rules it consults
#[derive(Debug, Default)]
pub struct Dispatcher {
    rules: Vec<Box<dyn SuggestionRule>>,
}

impl Dispatcher {
    /// Dispatcher without suggestion rules; `ApplySuggestion` is always a no-op
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_default_rules() -> Self {
        Self {
            rules: vec![Box::new(AddElementRule), Box::new(UpdateMetadataRule)],
        }
    }

    pub fn add_rule(&mut self, rule: Box<dyn SuggestionRule>) {
        self.rules.push(rule);
    }

    /// Reduce `action` against `doc`
    ///
    /// Returns `doc` itself (same `Arc`) when the action changes nothing.
    pub fn reduce(&self, doc: &Arc<Document>, action: &Action) -> Arc<Document> {
        let mut next = (**doc).clone();
        self.apply(&mut next, action);

        if next == **doc {
            debug!("{} left the document unchanged", action.name());
            Arc::clone(doc)
        } else {
            debug!("Reduced {}", action.name());
            Arc::new(next)
        }
    }

    fn apply(&self, doc: &mut Document, action: &Action) {
        match action {
            Action::UpdateMetadata(patch) => apply_metadata(doc, patch),
            Action::UpdateTheme(patch) => apply_theme(doc, patch),
            Action::UpdateSettings(patch) => apply_settings(doc, patch),

            Action::AddElement {
                element_type,
                page_id,
                content,
            } => add_element(doc, *element_type, page_id.as_deref(), content.as_ref()),

            Action::UpdateElement { element_id, patch } => match doc.find_element_mut(element_id) {
                Some(element) => apply_element_patch(element, patch),
                None => debug!("update-element: no element {}", element_id),
            },

            Action::DeleteElement { element_id } => {
                for page in &mut doc.pages {
                    page.elements.retain(|el| el.id != *element_id);
                }
            }

            Action::ReorderElements { page_id, ordered_ids } => {
                reorder_elements(doc, page_id, ordered_ids)
            }

            Action::AddPage { name, slug } => {
                let page_id = doc.fresh_page_id();
                if doc.pages.is_empty() {
                    doc.active_page_id = page_id.clone();
                }
                doc.pages
                    .push(pagesmith_model::Page::new(page_id, name.clone(), slug.clone()));
            }

            Action::UpdatePage { page_id, patch } => match doc.page_mut(page_id) {
                Some(page) => {
                    if let Some(name) = &patch.name {
                        page.name = name.clone();
                    }
                    if let Some(slug) = &patch.slug {
                        page.slug = slug.clone();
                    }
                    if let Some(meta) = &patch.meta {
                        page.meta = meta.clone();
                    }
                }
                None => debug!("update-page: no page {}", page_id),
            },

            Action::DeletePage { page_id } => {
                doc.pages.retain(|p| p.id != *page_id);
                if doc.active_page_id == *page_id {
                    doc.active_page_id = doc.pages.first().map(|p| p.id.clone()).unwrap_or_default();
                }
            }

            Action::SetActivePage { page_id } => {
                if doc.page(page_id).is_some() {
                    doc.active_page_id = page_id.clone();
                } else {
                    debug!("set-active-page: no page {}", page_id);
                }
            }

            Action::LoadProject(project) => *doc = project.clone(),

            Action::LoadTemplate(template) => {
                let author = std::mem::take(&mut doc.metadata.author);
                *doc = template.clone();
                doc.metadata.author = author;
            }

            Action::ApplySuggestion(suggestion) => self.apply_suggestion(doc, suggestion),
        }
    }

    fn apply_suggestion(&self, doc: &mut Document, suggestion: &Suggestion) {
        let Some(rule) = self
            .rules
            .iter()
            .find(|r| r.suggestion_type() == suggestion.suggestion_type)
        else {
            debug!("No rule applies suggestions of type {}", suggestion.suggestion_type);
            return;
        };

        match rule.to_action(suggestion, doc) {
            // A rule must not loop back into suggestion handling
            Some(Action::ApplySuggestion(_)) | None => {
                debug!("Suggestion {} produced no action", suggestion.suggestion_type)
            }
            Some(action) => self.apply(doc, &action),
        }
    }
}

fn apply_metadata(doc: &mut Document, patch: &MetadataPatch) {
    let metadata = &mut doc.metadata;
    merge(&mut metadata.title, &patch.title);
    merge(&mut metadata.description, &patch.description);
    merge(&mut metadata.logo, &patch.logo);
    merge(&mut metadata.favicon, &patch.favicon);
    merge(&mut metadata.author, &patch.author);
    merge(&mut metadata.language, &patch.language);
}

fn apply_theme(doc: &mut Document, patch: &ThemePatch) {
    let theme = &mut doc.theme;
    if let Some(colors) = &patch.colors {
        merge(&mut theme.colors.primary, &colors.primary);
        merge(&mut theme.colors.secondary, &colors.secondary);
        merge(&mut theme.colors.accent, &colors.accent);
        merge(&mut theme.colors.background, &colors.background);
        merge(&mut theme.colors.text, &colors.text);
    }
    if let Some(fonts) = &patch.fonts {
        merge(&mut theme.fonts.heading, &fonts.heading);
        merge(&mut theme.fonts.body, &fonts.body);
    }
    merge(&mut theme.spacing, &patch.spacing);
}

fn apply_settings(doc: &mut Document, patch: &SettingsPatch) {
    let settings = &mut doc.settings;
    merge(&mut settings.responsive, &patch.responsive);
    merge(&mut settings.animations, &patch.animations);
    merge(&mut settings.dark_mode, &patch.dark_mode);
    merge(&mut settings.rtl, &patch.rtl);
}

fn apply_element_patch(element: &mut Element, patch: &ElementPatch) {
    merge(&mut element.content, &patch.content);
    merge(&mut element.styles, &patch.styles);
    merge(&mut element.visible, &patch.visible);
    merge(&mut element.position, &patch.position);
    merge(&mut element.responsive, &patch.responsive);
}

fn merge<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

fn add_element(
    doc: &mut Document,
    element_type: ElementType,
    page_id: Option<&str>,
    content: Option<&AttributeMap>,
) {
    if let Some(content) = content {
        if let Err(e) = validate_content(element_type, content) {
            warn!("add-element rejected: {}", e);
            return;
        }
    }

    let page_id = page_id.map(str::to_string).unwrap_or_else(|| doc.active_page_id.clone());
    let element_id = doc.fresh_element_id(element_type);

    let Some(page) = doc.page_mut(&page_id) else {
        warn!("add-element rejected: no page {:?}", page_id);
        return;
    };

    let mut element = Element::materialize(element_type, element_id, page.elements.len());
    if let Some(content) = content {
        for (key, value) in content {
            element.content.insert(key.clone(), value.clone());
        }
    }
    page.elements.push(element);
}

fn reorder_elements(doc: &mut Document, page_id: &str, ordered_ids: &[String]) {
    let Some(page) = doc.page_mut(page_id) else {
        debug!("reorder-elements: no page {}", page_id);
        return;
    };

    let mut remaining = std::mem::take(&mut page.elements);
    let mut ordered = Vec::with_capacity(ordered_ids.len().min(remaining.len()));

    for id in ordered_ids {
        // Taking matches out of `remaining` also drops repeated ids
        if let Some(index) = remaining.iter().position(|el| el.id == *id) {
            let mut element = remaining.remove(index);
            element.position = ordered.len();
            ordered.push(element);
        }
    }

    page.elements = ordered;
}

/// Reorder command for dragging `source_id` to `target_index` in visual order
///
/// `target_index` counts visible elements only, as rendered on the canvas.
/// Hidden elements keep their place relative to their visible neighbours.
/// `None` when the page or element is missing, the element is hidden, or the
/// move changes nothing.
pub fn move_element(
    doc: &Document,
    page_id: &str,
    source_id: &str,
    target_index: usize,
) -> Option<Action> {
    let page = doc.page(page_id)?;

    let mut elements: Vec<&Element> = page.elements.iter().collect();
    elements.sort_by_key(|el| el.position);
    let original: Vec<&str> = elements.iter().map(|el| el.id.as_str()).collect();

    let source = *elements.iter().find(|el| el.id == source_id)?;
    if !source.visible {
        return None;
    }

    let mut rest: Vec<&Element> = elements.iter().copied().filter(|el| el.id != source_id).collect();
    let visible_rest: Vec<&str> = rest.iter().filter(|el| el.visible).map(|el| el.id.as_str()).collect();

    let insert_at = match visible_rest.get(target_index) {
        Some(anchor) => rest.iter().position(|el| el.id == *anchor)?,
        None => match visible_rest.last() {
            Some(last) => rest.iter().position(|el| el.id == *last)? + 1,
            None => return None,
        },
    };
    rest.insert(insert_at, source);

    let ordered_ids: Vec<String> = rest.iter().map(|el| el.id.clone()).collect();
    if ordered_ids.iter().map(String::as_str).eq(original.iter().copied()) {
        return None;
    }

    Some(Action::ReorderElements {
        page_id: page_id.to_string(),
        ordered_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_model::DEFAULT_PAGE_ID;
    use serde_json::json;

    fn reduce(doc: &Arc<Document>, action: Action) -> Arc<Document> {
        Dispatcher::new().reduce(doc, &action)
    }

    fn ids(doc: &Document) -> Vec<(&str, usize)> {
        doc.page(DEFAULT_PAGE_ID)
            .unwrap()
            .elements
            .iter()
            .map(|el| (el.id.as_str(), el.position))
            .collect()
    }

    #[test]
    fn test_add_element_assigns_fresh_id_and_position() {
        let doc = Arc::new(Document::new());
        let doc = reduce(&doc, Action::add_element(ElementType::Hero));
        let doc = reduce(&doc, Action::add_element(ElementType::Services));

        assert_eq!(ids(&doc), vec![("hero_1", 0), ("services_2", 1)]);
        let hero = doc.find_element("hero_1").unwrap();
        assert!(hero.visible);
        assert_eq!(hero.text("title"), Some("Welcome to Our Website"));
    }

    #[test]
    fn test_add_element_content_override() {
        let doc = Arc::new(Document::new());
        let mut content = AttributeMap::new();
        content.insert("title".into(), json!("Launch day"));

        let next = reduce(
            &doc,
            Action::AddElement {
                element_type: ElementType::Hero,
                page_id: None,
                content: Some(content),
            },
        );
        let hero = next.find_element("hero_1").unwrap();
        assert_eq!(hero.text("title"), Some("Launch day"));
        assert_eq!(hero.text("buttonText"), Some("Learn More"));
    }

    #[test]
    fn test_add_element_rejects_unknown_content_key() {
        let doc = Arc::new(Document::new());
        let mut content = AttributeMap::new();
        content.insert("price".into(), json!(10));

        let next = reduce(
            &doc,
            Action::AddElement {
                element_type: ElementType::Hero,
                page_id: None,
                content: Some(content),
            },
        );
        assert!(Arc::ptr_eq(&doc, &next));
    }

    #[test]
    fn test_add_element_to_missing_page_is_noop() {
        let doc = Arc::new(Document::new());
        let next = reduce(
            &doc,
            Action::AddElement {
                element_type: ElementType::About,
                page_id: Some("page_404".into()),
                content: None,
            },
        );
        assert!(Arc::ptr_eq(&doc, &next));
    }

    #[test]
    fn test_update_element_replaces_patched_fields() {
        let doc = Arc::new(Document::new());
        let doc = reduce(&doc, Action::add_element(ElementType::About));

        let patch = ElementPatch {
            visible: Some(false),
            ..ElementPatch::default()
        };
        let next = reduce(
            &doc,
            Action::UpdateElement {
                element_id: "about_1".into(),
                patch,
            },
        );

        let about = next.find_element("about_1").unwrap();
        assert!(!about.visible);
        assert_eq!(about.content, doc.find_element("about_1").unwrap().content);
    }

    #[test]
    fn test_reorder_drops_unknown_and_duplicate_ids() {
        let mut doc = Arc::new(Document::new());
        for ty in [ElementType::Hero, ElementType::About, ElementType::Contact] {
            doc = reduce(&doc, Action::add_element(ty));
        }

        let next = reduce(
            &doc,
            Action::ReorderElements {
                page_id: DEFAULT_PAGE_ID.into(),
                ordered_ids: vec![
                    "contact_3".into(),
                    "ghost_9".into(),
                    "hero_1".into(),
                    "contact_3".into(),
                ],
            },
        );
        assert_eq!(ids(&next), vec![("contact_3", 0), ("hero_1", 1)]);
    }

    #[test]
    fn test_pages_lifecycle() {
        let doc = Arc::new(Document::new());
        let doc = reduce(
            &doc,
            Action::AddPage {
                name: "About Us".into(),
                slug: None,
            },
        );
        let page = doc.page("page_1").unwrap();
        assert_eq!(page.slug, "about-us");
        assert_eq!(page.meta.title, "About Us");
        assert_eq!(doc.active_page_id, DEFAULT_PAGE_ID);

        let doc = reduce(
            &doc,
            Action::SetActivePage {
                page_id: "page_1".into(),
            },
        );
        assert_eq!(doc.active_page_id, "page_1");

        let doc = reduce(
            &doc,
            Action::DeletePage {
                page_id: "page_1".into(),
            },
        );
        assert_eq!(doc.active_page_id, DEFAULT_PAGE_ID);

        let doc = reduce(
            &doc,
            Action::DeletePage {
                page_id: DEFAULT_PAGE_ID.into(),
            },
        );
        assert!(doc.pages.is_empty());
        assert_eq!(doc.active_page_id, "");

        let doc = reduce(
            &doc,
            Action::AddPage {
                name: "Landing".into(),
                slug: Some("start".into()),
            },
        );
        assert_eq!(doc.active_page_id, "page_1");
        assert_eq!(doc.pages[0].slug, "start");
        assert!(doc.check_invariants().is_empty());
    }

    #[test]
    fn test_set_active_page_unknown_is_noop() {
        let doc = Arc::new(Document::new());
        let next = reduce(
            &doc,
            Action::SetActivePage {
                page_id: "nope".into(),
            },
        );
        assert!(Arc::ptr_eq(&doc, &next));
    }

    #[test]
    fn test_theme_patch_merges_nested_fields() {
        let doc = Arc::new(Document::new());
        let next = reduce(
            &doc,
            Action::UpdateTheme(ThemePatch {
                colors: Some(ColorsPatch {
                    accent: Some("#10b981".into()),
                    ..ColorsPatch::default()
                }),
                ..ThemePatch::default()
            }),
        );

        assert_eq!(next.theme.colors.accent, "#10b981");
        assert_eq!(next.theme.colors.primary, doc.theme.colors.primary);
    }

    #[test]
    fn test_load_template_keeps_author() {
        let mut current = Document::new();
        current.metadata.author = "Ada".into();
        let current = Arc::new(current);

        let mut template = Document::new();
        template.metadata.title = "Template".into();
        template.metadata.author = "Someone else".into();

        let next = reduce(&current, Action::LoadTemplate(template));
        assert_eq!(next.metadata.title, "Template");
        assert_eq!(next.metadata.author, "Ada");
    }

    #[test]
    fn test_apply_suggestion_without_rules_is_noop() {
        let doc = Arc::new(Document::new());
        let suggestion = Suggestion::new("add-element", "Add a hero", 0.9)
            .with_data(json!({"elementType": "hero"}));

        let next = Dispatcher::new().reduce(&doc, &Action::ApplySuggestion(suggestion.clone()));
        assert!(Arc::ptr_eq(&doc, &next));

        let next = Dispatcher::with_default_rules().reduce(&doc, &Action::ApplySuggestion(suggestion));
        assert!(next.find_element("hero_1").is_some());
    }

    #[test]
    fn test_update_metadata_rule() {
        let doc = Arc::new(Document::new());
        let suggestion = Suggestion::new("update-metadata", "Set a title", 0.95)
            .with_data(json!({"title": "Bakery"}));

        let next =
            Dispatcher::with_default_rules().reduce(&doc, &Action::ApplySuggestion(suggestion));
        assert_eq!(next.metadata.title, "Bakery");
    }

    #[test]
    fn test_move_element() {
        let mut doc = Arc::new(Document::new());
        for ty in [ElementType::Hero, ElementType::About, ElementType::Contact] {
            doc = reduce(&doc, Action::add_element(ty));
        }

        let action = move_element(&doc, DEFAULT_PAGE_ID, "hero_1", 99).unwrap();
        assert_eq!(
            action,
            Action::ReorderElements {
                page_id: DEFAULT_PAGE_ID.into(),
                ordered_ids: vec!["about_2".into(), "contact_3".into(), "hero_1".into()],
            }
        );

        assert!(move_element(&doc, DEFAULT_PAGE_ID, "about_2", 1).is_none());
        assert!(move_element(&doc, DEFAULT_PAGE_ID, "ghost", 0).is_none());
        assert!(move_element(&doc, "page_404", "hero_1", 0).is_none());
    }

    #[test]
    fn test_move_element_counts_visible_slots() {
        let mut doc = Arc::new(Document::new());
        for ty in [ElementType::Hero, ElementType::Gallery, ElementType::About, ElementType::Contact] {
            doc = reduce(&doc, Action::add_element(ty));
        }
        doc = reduce(
            &doc,
            Action::UpdateElement {
                element_id: "gallery_2".into(),
                patch: ElementPatch {
                    visible: Some(false),
                    ..ElementPatch::default()
                },
            },
        );

        // canvas shows [hero, about, contact]; drop hero between about and contact
        let action = move_element(&doc, DEFAULT_PAGE_ID, "hero_1", 1).unwrap();
        assert_eq!(
            action,
            Action::ReorderElements {
                page_id: DEFAULT_PAGE_ID.into(),
                ordered_ids: vec![
                    "gallery_2".into(),
                    "about_3".into(),
                    "hero_1".into(),
                    "contact_4".into(),
                ],
            }
        );

        // contact to the top of the canvas
        let action = move_element(&doc, DEFAULT_PAGE_ID, "contact_4", 0).unwrap();
        assert_eq!(
            action,
            Action::ReorderElements {
                page_id: DEFAULT_PAGE_ID.into(),
                ordered_ids: vec![
                    "contact_4".into(),
                    "hero_1".into(),
                    "gallery_2".into(),
                    "about_3".into(),
                ],
            }
        );

        assert!(move_element(&doc, DEFAULT_PAGE_ID, "about_3", 1).is_none());
        assert!(move_element(&doc, DEFAULT_PAGE_ID, "gallery_2", 0).is_none());
    }

    #[test]
    fn test_action_json_shape() {
        let action: Action = serde_json::from_value(json!({
            "type": "add-element",
            "payload": {"elementType": "gallery", "pageId": "page_home"}
        }))
        .unwrap();
        assert_eq!(action.name(), "add-element");
        assert_eq!(
            action,
            Action::AddElement {
                element_type: ElementType::Gallery,
                page_id: Some("page_home".into()),
                content: None,
            }
        );

        let json = serde_json::to_value(Action::DeleteElement {
            element_id: "hero_1".into(),
        })
        .unwrap();
        assert_eq!(json, json!({"type": "delete-element", "payload": {"elementId": "hero_1"}}));
    }
}
