//! Projection behavior across breakpoints and element types

use pagesmith_evaluator::{project, SelectionOptions, VNode};
use pagesmith_model::{Breakpoint, Document, Element, ElementType, DEFAULT_PAGE_ID};
use serde_json::json;

fn sample_document() -> Document {
    let mut doc = Document::new();
    let page = doc.page_mut(DEFAULT_PAGE_ID).unwrap();

    let mut gallery = Element::materialize(ElementType::Gallery, "gallery_4", 3);
    gallery.content.insert(
        "images".into(),
        json!([
            {"src": "/a.jpg", "alt": "A", "caption": "First"},
            {"src": "/b.jpg", "alt": "B", "caption": ""}
        ]),
    );

    page.elements = vec![
        Element::materialize(ElementType::Hero, "hero_1", 0),
        Element::materialize(ElementType::Services, "services_2", 1),
        Element::materialize(ElementType::Testimonials, "testimonials_3", 2),
        gallery,
        Element::materialize(ElementType::Contact, "contact_5", 4),
        Element::materialize(ElementType::Footer, "footer_6", 5),
    ];
    doc
}

fn count_tag(node: &VNode, tag: &str) -> usize {
    let own = usize::from(node.tag() == Some(tag));
    own + node.children().iter().map(|c| count_tag(c, tag)).sum::<usize>()
}

#[test]
fn test_every_visible_element_is_rendered_once() {
    let doc = sample_document();
    let vdoc = project(&doc, DEFAULT_PAGE_ID, Breakpoint::Desktop, &SelectionOptions::default());

    assert_eq!(
        vdoc.element_ids(),
        vec!["hero_1", "services_2", "testimonials_3", "gallery_4", "contact_5", "footer_6"]
    );
}

#[test]
fn test_invisible_elements_never_render() {
    let mut doc = sample_document();
    for el in &mut doc.pages[0].elements {
        el.visible = el.element_type != ElementType::Services;
    }

    for bp in Breakpoint::ALL {
        let vdoc = project(&doc, DEFAULT_PAGE_ID, bp, &SelectionOptions::selected("services_2"));
        assert!(!vdoc.element_ids().contains(&"services_2"));
    }
}

#[test]
fn test_services_grid_collapses_on_mobile() {
    let doc = sample_document();
    let grid_columns = |bp| {
        let vdoc = project(&doc, DEFAULT_PAGE_ID, bp, &SelectionOptions::default());
        let services = vdoc.find_element("services_2").unwrap();
        let grid = services
            .find(&|n| n.attr("class") == Some("services-grid"))
            .unwrap();
        grid.style("grid-template-columns").unwrap().to_string()
    };

    assert_eq!(grid_columns(Breakpoint::Desktop), "repeat(3, 1fr)");
    assert_eq!(grid_columns(Breakpoint::Tablet), "repeat(2, 1fr)");
    assert_eq!(grid_columns(Breakpoint::Mobile), "repeat(1, 1fr)");
}

#[test]
fn test_gallery_renders_figures_and_skips_empty_captions() {
    let doc = sample_document();
    let vdoc = project(&doc, DEFAULT_PAGE_ID, Breakpoint::Desktop, &SelectionOptions::default());
    let gallery = vdoc.find_element("gallery_4").unwrap();

    assert_eq!(count_tag(gallery, "figure"), 2);
    assert_eq!(count_tag(gallery, "figcaption"), 1);
}

#[test]
fn test_contact_form_follows_show_form_flag() {
    let mut doc = sample_document();
    let vdoc = project(&doc, DEFAULT_PAGE_ID, Breakpoint::Desktop, &SelectionOptions::default());
    assert_eq!(count_tag(vdoc.find_element("contact_5").unwrap(), "form"), 1);

    doc.pages[0].elements[4].content.insert("showForm".into(), json!(false));
    let vdoc = project(&doc, DEFAULT_PAGE_ID, Breakpoint::Desktop, &SelectionOptions::default());
    assert_eq!(count_tag(vdoc.find_element("contact_5").unwrap(), "form"), 0);
}

#[test]
fn test_responsive_override_wins_at_its_breakpoint_only() {
    let mut doc = sample_document();
    let hero = &mut doc.pages[0].elements[0];
    hero.responsive.tablet.insert("display".into(), json!("none"));

    let tablet = project(&doc, DEFAULT_PAGE_ID, Breakpoint::Tablet, &SelectionOptions::default());
    assert_eq!(tablet.find_element("hero_1").unwrap().style("display"), Some("none"));

    let desktop = project(&doc, DEFAULT_PAGE_ID, Breakpoint::Desktop, &SelectionOptions::default());
    assert_eq!(desktop.find_element("hero_1").unwrap().style("display"), Some("block"));
}

#[test]
fn test_projection_is_deterministic() {
    let doc = sample_document();
    let a = project(&doc, DEFAULT_PAGE_ID, Breakpoint::Tablet, &SelectionOptions::selected("hero_1"));
    let b = project(&doc, DEFAULT_PAGE_ID, Breakpoint::Tablet, &SelectionOptions::selected("hero_1"));

    assert_eq!(a, b);
    assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
}

#[test]
fn test_empty_page_shows_empty_state() {
    let doc = Document::new();
    let vdoc = project(&doc, DEFAULT_PAGE_ID, Breakpoint::Desktop, &SelectionOptions::default());

    let root = &vdoc.nodes[0];
    assert_eq!(root.children().len(), 1);
    assert_eq!(root.children()[0].attr("class"), Some("empty-state"));
}
