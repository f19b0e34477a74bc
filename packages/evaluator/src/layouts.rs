//! Per-type visual compositions.
//!
//! Each layout receives the element and the projection context and returns
//! the block's root tag, base styles and children. The projector merges the
//! element's own (breakpoint-composed) styles over the base styles.

use pagesmith_model::{Breakpoint, Element, ElementType};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::projector::ProjectContext;
use crate::styles::{display_value, grid_columns, section_padding};
use crate::vdom::VNode;

pub struct Layout {
    pub tag: &'static str,
    pub base_styles: BTreeMap<String, String>,
    pub children: Vec<VNode>,
}

impl Layout {
    fn section(ctx: &ProjectContext<'_>, children: Vec<VNode>) -> Self {
        let mut base_styles = BTreeMap::new();
        base_styles.insert(
            "padding".to_string(),
            section_padding(&ctx.theme().spacing, ctx.breakpoint),
        );
        Self {
            tag: "section",
            base_styles,
            children,
        }
    }

    fn base(mut self, property: &str, value: impl Into<String>) -> Self {
        self.base_styles.insert(property.to_string(), value.into());
        self
    }
}

pub fn layout_for(element: &Element, ctx: &ProjectContext<'_>) -> Layout {
    match element.element_type {
        ElementType::Hero => hero(element, ctx),
        ElementType::Services => services(element, ctx),
        ElementType::About => about(element, ctx),
        ElementType::Gallery => gallery(element, ctx),
        ElementType::Testimonials => testimonials(element, ctx),
        ElementType::Contact => contact(element, ctx),
        ElementType::Header | ElementType::Footer => generic(element, ctx),
    }
}

fn heading(ctx: &ProjectContext<'_>, tag: &str, text: &str) -> VNode {
    VNode::text_element(tag, text).with_style("font-family", ctx.theme().fonts.heading.clone())
}

fn hero(element: &Element, ctx: &ProjectContext<'_>) -> Layout {
    let colors = &ctx.theme().colors;
    let title_size = match ctx.breakpoint {
        Breakpoint::Mobile => "32px",
        _ => "48px",
    };
    let mut inner = VNode::element("div").with_class("hero-inner").with_child(
        heading(ctx, "h1", element.text("title").unwrap_or_default()).with_style("font-size", title_size),
    );

    if let Some(subtitle) = element.text("subtitle").filter(|s| !s.is_empty()) {
        inner = inner.with_child(VNode::text_element("p", subtitle).with_class("hero-subtitle"));
    }

    if let Some(label) = element.text("buttonText").filter(|s| !s.is_empty()) {
        inner = inner.with_child(
            VNode::text_element("a", label)
                .with_class("button")
                .with_attr("href", element.text("buttonLink").unwrap_or("#"))
                .with_style("background-color", colors.accent.clone())
                .with_style("color", "#ffffff")
                .with_style("padding", "12px 24px")
                .with_style("border-radius", "6px"),
        );
    }

    let mut layout = Layout::section(ctx, vec![inner])
        .base("text-align", "center")
        .base("background-color", colors.primary.clone())
        .base("color", "#ffffff");

    if let Some(image) = element.text("backgroundImage").filter(|s| !s.is_empty()) {
        layout = layout
            .base("background-image", format!("url({})", image))
            .base("background-size", "cover");
    }

    layout
}

fn services(element: &Element, ctx: &ProjectContext<'_>) -> Layout {
    let cards = element
        .items("items")
        .iter()
        .map(|item| {
            let mut card = VNode::element("div").with_class("service-card");
            if let Some(icon) = field(item, "icon") {
                card = card.with_child(VNode::element("span").with_attr("data-icon", icon));
            }
            card.with_child(heading(ctx, "h3", field(item, "title").unwrap_or_default()))
                .with_child(VNode::text_element("p", field(item, "description").unwrap_or_default()))
        })
        .collect();

    let grid = VNode::element("div")
        .with_class("services-grid")
        .with_style("display", "grid")
        .with_style(
            "grid-template-columns",
            format!("repeat({}, 1fr)", grid_columns(ctx.breakpoint)),
        )
        .with_style("gap", "24px")
        .with_children(cards);

    let mut children = vec![heading(ctx, "h2", element.text("title").unwrap_or_default())];
    if let Some(subtitle) = element.text("subtitle").filter(|s| !s.is_empty()) {
        children.push(VNode::text_element("p", subtitle));
    }
    children.push(grid);

    Layout::section(ctx, children).base("text-align", "center")
}

fn about(element: &Element, ctx: &ProjectContext<'_>) -> Layout {
    let mut children = vec![
        heading(ctx, "h2", element.text("title").unwrap_or_default()),
        VNode::text_element("p", element.text("text").unwrap_or_default()),
    ];

    if let Some(image) = element.text("image").filter(|s| !s.is_empty()) {
        children.push(
            VNode::element("img")
                .with_attr("src", image)
                .with_attr("alt", element.text("title").unwrap_or_default())
                .with_style("max-width", "100%"),
        );
    }

    Layout::section(ctx, children)
}

fn gallery(element: &Element, ctx: &ProjectContext<'_>) -> Layout {
    let images = element.items("images");

    let body = if images.is_empty() {
        VNode::text_element("p", "No images yet").with_class("placeholder")
    } else {
        let figures = images
            .iter()
            .map(|image| {
                let mut figure = VNode::element("figure").with_child(
                    VNode::element("img")
                        .with_attr("src", field(image, "src").unwrap_or_default())
                        .with_attr("alt", field(image, "alt").unwrap_or_default())
                        .with_style("width", "100%"),
                );
                if let Some(caption) = field(image, "caption").filter(|c| !c.is_empty()) {
                    figure = figure.with_child(VNode::text_element("figcaption", caption));
                }
                figure
            })
            .collect();

        VNode::element("div")
            .with_class("gallery-grid")
            .with_style("display", "grid")
            .with_style(
                "grid-template-columns",
                format!("repeat({}, 1fr)", grid_columns(ctx.breakpoint)),
            )
            .with_style("gap", "12px")
            .with_children(figures)
    };

    Layout::section(
        ctx,
        vec![heading(ctx, "h2", element.text("title").unwrap_or_default()), body],
    )
}

fn testimonials(element: &Element, ctx: &ProjectContext<'_>) -> Layout {
    let quotes = element.items("items").iter().map(|item| {
        let author = match (field(item, "name"), field(item, "role")) {
            (Some(name), Some(role)) if !role.is_empty() => format!("{}, {}", name, role),
            (Some(name), _) => name.to_string(),
            (None, _) => String::new(),
        };
        VNode::element("blockquote")
            .with_class("testimonial")
            .with_style("border-left", format!("4px solid {}", ctx.theme().colors.accent))
            .with_child(VNode::text_element("p", field(item, "quote").unwrap_or_default()))
            .with_child(VNode::text_element("cite", author))
    });

    let mut children = vec![heading(ctx, "h2", element.text("title").unwrap_or_default())];
    children.extend(quotes);

    Layout::section(ctx, children).base("background-color", ctx.theme().colors.background.clone())
}

fn contact(element: &Element, ctx: &ProjectContext<'_>) -> Layout {
    let mut details = VNode::element("ul").with_class("contact-details");
    if let Some(email) = element.text("email").filter(|s| !s.is_empty()) {
        details = details.with_child(
            VNode::element("li")
                .with_child(VNode::text_element("a", email).with_attr("href", format!("mailto:{}", email))),
        );
    }
    for key in ["phone", "address"] {
        if let Some(value) = element.text(key).filter(|s| !s.is_empty()) {
            details = details.with_child(VNode::text_element("li", value));
        }
    }

    let mut children = vec![heading(ctx, "h2", element.text("title").unwrap_or_default()), details];

    let show_form = element
        .content
        .get("showForm")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if show_form {
        children.push(
            VNode::element("form")
                .with_class("contact-form")
                .with_child(VNode::element("input").with_attr("name", "name").with_attr("placeholder", "Name"))
                .with_child(
                    VNode::element("input")
                        .with_attr("name", "email")
                        .with_attr("type", "email")
                        .with_attr("placeholder", "Email"),
                )
                .with_child(VNode::element("textarea").with_attr("name", "message"))
                .with_child(
                    VNode::text_element("button", "Send")
                        .with_attr("type", "submit")
                        .with_style("background-color", ctx.theme().colors.primary.clone()),
                ),
        );
    }

    Layout::section(ctx, children)
}

/// Fallback for types without a dedicated composition: raw content rows
fn generic(element: &Element, ctx: &ProjectContext<'_>) -> Layout {
    let rows = element
        .content
        .iter()
        .map(|(key, value)| {
            VNode::element("div")
                .with_class("content-row")
                .with_child(VNode::text_element("strong", key.as_str()))
                .with_child(VNode::text_element("span", display_value(value)))
        })
        .collect();

    let tag = match element.element_type {
        ElementType::Header => "header",
        ElementType::Footer => "footer",
        _ => "div",
    };

    let mut layout = Layout::section(ctx, vec![VNode::element("div").with_class("generic-content").with_children(rows)]);
    layout.tag = tag;
    layout
}

fn field<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key).and_then(Value::as_str)
}
