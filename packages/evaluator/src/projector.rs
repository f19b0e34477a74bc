//! # Render Projector
//!
//! Maps a document page to a virtual DOM tree for the preview canvas.
//!
//! ## Algorithm
//!
//! 1. Resolve the page by id. A missing page renders an empty-state
//!    placeholder instead of failing.
//! 2. Keep visible elements and stable-sort them by `position`.
//! 3. For each element compose the effective style: layout base styles,
//!    then `element.styles`, then `element.responsive[breakpoint]`.
//! 4. Dispatch to the per-type layout (see [`crate::layouts`]).
//!
//! Projection is read-only and deterministic: the same document, page,
//! breakpoint and selection always produce the same tree.

use pagesmith_model::{Breakpoint, Document, Element, Theme};
use std::collections::BTreeMap;
use tracing::debug;

use crate::layouts::layout_for;
use crate::styles::compose_styles;
use crate::vdom::{VNode, VirtualDomDocument};

/// Selection highlighting for the editing canvas
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionOptions {
    pub show_selection: bool,
    pub selected_id: Option<String>,
}

impl SelectionOptions {
    pub fn selected(element_id: impl Into<String>) -> Self {
        Self {
            show_selection: true,
            selected_id: Some(element_id.into()),
        }
    }

    fn is_selected(&self, element_id: &str) -> bool {
        self.show_selection && self.selected_id.as_deref() == Some(element_id)
    }
}

pub struct ProjectContext<'a> {
    pub document: &'a Document,
    pub breakpoint: Breakpoint,
    pub selection: &'a SelectionOptions,
}

impl<'a> ProjectContext<'a> {
    pub fn theme(&self) -> &'a Theme {
        &self.document.theme
    }
}

/// Project `page_id` of `document` at `breakpoint`
pub fn project(
    document: &Document,
    page_id: &str,
    breakpoint: Breakpoint,
    selection: &SelectionOptions,
) -> VirtualDomDocument {
    let ctx = ProjectContext {
        document,
        breakpoint,
        selection,
    };

    let mut vdoc = VirtualDomDocument::new();
    add_theme_rules(&mut vdoc, &document.theme);

    let body = match document.page(page_id) {
        Some(page) => {
            let elements = page.visible_elements();
            debug!(
                "Projecting page {} at {}: {} of {} elements visible",
                page_id,
                breakpoint,
                elements.len(),
                page.elements.len()
            );
            if elements.is_empty() {
                vec![empty_state("This page is empty. Add an element to get started.")]
            } else {
                elements.into_iter().map(|el| project_element(el, &ctx)).collect()
            }
        }
        None => {
            debug!("Page {} not found, rendering placeholder", page_id);
            vec![empty_state("Page not found.")]
        }
    };

    vdoc.add_node(site_root(&ctx, page_id).with_children(body));
    vdoc
}

fn site_root(ctx: &ProjectContext<'_>, page_id: &str) -> VNode {
    let theme = ctx.theme();
    let settings = &ctx.document.settings;

    let mut root = VNode::element("main")
        .with_class("site-root")
        .with_attr("data-page-id", page_id)
        .with_attr("data-breakpoint", ctx.breakpoint.as_str())
        .with_style("background-color", theme.colors.background.clone())
        .with_style("color", theme.colors.text.clone())
        .with_style("font-family", theme.fonts.body.clone())
        .with_style("max-width", format!("{}px", ctx.breakpoint.width()))
        .with_style("margin", "0 auto");

    if settings.rtl {
        root = root.with_attr("dir", "rtl");
    }
    if settings.dark_mode {
        root = root.with_attr("data-theme", "dark");
    }
    if !settings.animations {
        root = root.with_attr("data-animations", "off");
    }
    root
}

fn project_element(element: &Element, ctx: &ProjectContext<'_>) -> VNode {
    let layout = layout_for(element, ctx);

    let mut styles: BTreeMap<String, String> = layout.base_styles;
    styles.extend(compose_styles(element, ctx.breakpoint));

    let mut node = VNode::element(layout.tag)
        .with_key(element.id.clone())
        .with_class(format!("element element-{}", element.element_type))
        .with_attr("data-element-id", element.id.clone())
        .with_attr("data-element-type", element.element_type.as_str())
        .with_styles(styles)
        .with_children(layout.children);

    if ctx.selection.is_selected(&element.id) {
        node = node
            .with_attr("data-selected", "true")
            .with_style("outline", format!("2px solid {}", ctx.theme().colors.primary))
            .with_style("outline-offset", "-2px");
    }

    node
}

fn empty_state(message: &str) -> VNode {
    VNode::element("div")
        .with_class("empty-state")
        .with_style("padding", "80px 20px")
        .with_style("text-align", "center")
        .with_style("opacity", "0.6")
        .with_child(VNode::text_element("p", message))
}

fn add_theme_rules(vdoc: &mut VirtualDomDocument, theme: &Theme) {
    let colors = &theme.colors;
    let variables = [
        ("--color-primary", &colors.primary),
        ("--color-secondary", &colors.secondary),
        ("--color-accent", &colors.accent),
        ("--color-background", &colors.background),
        ("--color-text", &colors.text),
        ("--font-heading", &theme.fonts.heading),
        ("--font-body", &theme.fonts.body),
    ];
    vdoc.add_style(
        ".site-root",
        variables
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
    );

    let mut headings = BTreeMap::new();
    headings.insert("font-family".to_string(), theme.fonts.heading.clone());
    vdoc.add_style(".site-root h1, .site-root h2, .site-root h3", headings);
}
