//! End-to-end editing behavior: store, reducer, templates and persistence together

use pagesmith_editor::{
    templates, Action, Dispatcher, EditSession, EditorError, ElementPatch, FilePersistence,
    Gateway, ImportError, MemoryPersistence, MetadataPatch, PersistencePort, Pipeline, Preview,
    PreviewRequest, SelectionOptions, SettingsPatch, Store, TemplateError, PROJECT_KEY,
};
use pagesmith_model::{Breakpoint, Document, Element, ElementType, Suggestion, DEFAULT_PAGE_ID};
use serde_json::json;
use std::sync::Arc;

fn retitle(title: &str) -> Action {
    Action::UpdateMetadata(MetadataPatch {
        title: Some(title.to_string()),
        ..MetadataPatch::default()
    })
}

fn positions(doc: &Document, page_id: &str) -> Vec<(String, usize)> {
    let mut pairs: Vec<_> = doc
        .page(page_id)
        .unwrap()
        .elements
        .iter()
        .map(|el| (el.id.clone(), el.position))
        .collect();
    pairs.sort_by_key(|(_, position)| *position);
    pairs
}

fn mixed_actions() -> Vec<Action> {
    vec![
        Action::add_element(ElementType::Hero),
        Action::add_element(ElementType::Gallery),
        retitle("Sunrise Yoga"),
        Action::UpdateSettings(SettingsPatch {
            dark_mode: Some(true),
            ..SettingsPatch::default()
        }),
        Action::UpdateElement {
            element_id: "hero_1".into(),
            patch: ElementPatch {
                visible: Some(false),
                ..ElementPatch::default()
            },
        },
        Action::AddPage {
            name: "Classes".into(),
            slug: None,
        },
        Action::ReorderElements {
            page_id: DEFAULT_PAGE_ID.into(),
            ordered_ids: vec!["gallery_2".into(), "hero_1".into()],
        },
        Action::DeleteElement {
            element_id: "gallery_2".into(),
        },
    ]
}

#[test]
fn test_n_actions_then_n_undos_restores_original() {
    let original = Document::new();
    let mut store = Store::new(original.clone());

    let actions = mixed_actions();
    for action in &actions {
        assert!(store.dispatch(action.clone()), "{} should change the document", action.name());
    }
    assert_eq!(store.undo_levels(), actions.len());

    for _ in &actions {
        assert!(store.undo());
    }
    assert_eq!(store.present(), &original);
    assert!(!store.can_undo());
    assert!(!store.undo());
}

#[test]
fn test_default_history_is_unbounded() {
    let original = Document::new();
    let mut store = Store::new(original.clone());
    assert_eq!(store.max_levels(), 0);

    let steps = 150;
    for i in 0..steps {
        assert!(store.dispatch(retitle(&format!("Draft {}", i))));
    }
    assert_eq!(store.undo_levels(), steps);

    let undone = (0..steps).filter(|_| store.undo()).count();
    assert_eq!(undone, steps);
    assert_eq!(store.present(), &original);
    assert!(!store.can_undo());
}

#[test]
fn test_redo_after_undo_restores_undone_document() {
    let mut store = Store::default();
    store.dispatch(Action::add_element(ElementType::About));
    let edited = store.snapshot();

    store.undo();
    store.redo();
    assert!(Arc::ptr_eq(&edited, &store.snapshot()));
}

#[test]
fn test_mutation_after_undo_makes_redo_noop() {
    let mut store = Store::default();
    store.dispatch(retitle("First"));
    store.undo();
    store.dispatch(retitle("Second"));

    let before = store.snapshot();
    assert!(!store.redo());
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn test_scenario_a_add_and_reorder() {
    let mut store = Store::default();
    store.dispatch(Action::add_element(ElementType::Hero));
    store.dispatch(Action::add_element(ElementType::Services));
    store.dispatch(Action::ReorderElements {
        page_id: DEFAULT_PAGE_ID.into(),
        ordered_ids: vec!["services_2".into(), "hero_1".into()],
    });

    assert_eq!(
        positions(store.present(), DEFAULT_PAGE_ID),
        vec![("services_2".to_string(), 0), ("hero_1".to_string(), 1)]
    );
    assert!(store.present().check_invariants().is_empty());
}

#[test]
fn test_scenario_b_metadata_round_trip_through_history() {
    let original = Document::new();
    let mut store = Store::new(original.clone());
    for title in ["One", "Two", "Three"] {
        store.dispatch(retitle(title));
    }

    for _ in 0..3 {
        store.undo();
    }
    assert_eq!(store.present(), &original);
    assert!(!store.can_undo());
    assert_eq!(store.redo_levels(), 3);
}

#[test]
fn test_scenario_c_import_of_empty_object_is_rejected() {
    let gateway = Gateway::new(MemoryPersistence::new());
    let mut store = Store::default();
    let before = store.snapshot();

    let err = gateway.import(&mut store, "{}").unwrap_err();
    assert!(matches!(err, ImportError::InvalidProject(_)));
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
    assert!(!store.can_undo());

    let wrapped: EditorError = err.into();
    assert!(wrapped.to_string().contains("Invalid project"));
}

#[test]
fn test_scenario_d_unknown_element_update_is_noop() {
    let mut store = Store::default();
    let before = store.snapshot();

    let next = Dispatcher::new().reduce(
        &before,
        &Action::UpdateElement {
            element_id: "nope_1".into(),
            patch: ElementPatch {
                visible: Some(false),
                ..ElementPatch::default()
            },
        },
    );
    assert!(Arc::ptr_eq(&before, &next));

    assert!(!store.dispatch(Action::UpdateElement {
        element_id: "nope_1".into(),
        patch: ElementPatch::default(),
    }));
    assert_eq!(store.undo_levels(), 0);
}

#[test]
fn test_reorder_keeps_intersection_of_ids() {
    let mut store = Store::default();
    for ty in [ElementType::Hero, ElementType::About, ElementType::Contact] {
        store.dispatch(Action::add_element(ty));
    }
    store.dispatch(Action::ReorderElements {
        page_id: DEFAULT_PAGE_ID.into(),
        ordered_ids: vec!["contact_3".into(), "missing_7".into(), "about_2".into()],
    });

    assert_eq!(
        positions(store.present(), DEFAULT_PAGE_ID),
        vec![("contact_3".to_string(), 0), ("about_2".to_string(), 1)]
    );
}

#[test]
fn test_delete_leaves_position_gap() {
    let mut store = Store::default();
    for ty in [ElementType::Hero, ElementType::About, ElementType::Contact] {
        store.dispatch(Action::add_element(ty));
    }
    store.dispatch(Action::DeleteElement {
        element_id: "about_2".into(),
    });

    assert_eq!(
        positions(store.present(), DEFAULT_PAGE_ID),
        vec![("hero_1".to_string(), 0), ("contact_3".to_string(), 2)]
    );
    assert!(!store.present().check_invariants().is_empty());

    // the next element still gets a fresh id and the count as its position
    store.dispatch(Action::add_element(ElementType::Footer));
    let footer = store.present().find_element("footer_4").unwrap();
    assert_eq!(footer.position, 2);
}

#[test]
fn test_ids_with_largest_suffix_do_not_block_new_ids() {
    let mut doc = Document::new();
    let huge = format!("hero_{}", u64::MAX);
    doc.page_mut(DEFAULT_PAGE_ID)
        .unwrap()
        .elements
        .push(Element::materialize(ElementType::Hero, huge.clone(), 0));
    doc.pages[0].id = format!("page_{}", u64::MAX);
    doc.active_page_id = doc.pages[0].id.clone();

    let mut store = Store::new(doc);
    assert!(store.dispatch(Action::add_element(ElementType::About)));
    assert!(store.dispatch(Action::AddPage {
        name: "More".into(),
        slug: None,
    }));

    let present = store.present();
    assert!(present.find_element("about_1").is_some());
    assert!(present.find_element(&huge).is_some());
    assert!(present.page("page_1").is_some());
    assert!(present.check_invariants().is_empty());
}

#[test]
fn test_export_then_import_round_trips() {
    let mut source = Store::new(templates::select("business").unwrap());
    source.dispatch(retitle("Exported Co"));
    let gateway = Gateway::new(MemoryPersistence::new());

    let artifact = gateway.export(&source);
    assert!(artifact.file_name.starts_with("exported-co-"));
    assert!(artifact.file_name.ends_with(".json"));
    let json = artifact.to_json().unwrap();

    let mut target = Store::default();
    gateway.import(&mut target, &json).unwrap();

    let mut expected = source.present().clone();
    expected.metadata.exported_at = None;
    expected.metadata.version = None;
    assert_eq!(target.present(), &expected);
    assert_eq!(target.undo_description(), Some("load-project"));
}

#[test]
fn test_load_template_preserves_author() {
    let mut store = Store::default();
    store.dispatch(Action::UpdateMetadata(MetadataPatch {
        author: Some("Grace".into()),
        ..MetadataPatch::default()
    }));

    for info in templates::list() {
        let template = templates::select(info.id).unwrap();
        store.dispatch(Action::LoadTemplate(template.clone()));

        assert_eq!(store.present().metadata.author, "Grace");
        assert_eq!(store.present().metadata.title, template.metadata.title);
        assert_eq!(store.present().pages, template.pages);
    }
}

#[test]
fn test_unknown_template_error() {
    let err: EditorError = templates::select("wedding").unwrap_err().into();
    assert!(matches!(err, EditorError::Template(TemplateError::UnknownTemplate(_))));
}

#[test]
fn test_file_persistence_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("storage");

    let mut store = Store::new(templates::select("portfolio").unwrap());
    store.dispatch(Action::add_element(ElementType::Testimonials));

    let mut gateway = Gateway::new(FilePersistence::new(&storage));
    gateway.save(&store).unwrap();
    assert!(storage.join(format!("{}.json", PROJECT_KEY)).exists());

    let mut restored = Store::default();
    assert!(Gateway::new(FilePersistence::new(&storage)).restore(&mut restored));
    assert_eq!(restored.present(), store.present());
}

#[test]
fn test_file_persistence_missing_and_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let mut port = FilePersistence::new(dir.path());
    assert_eq!(port.load(PROJECT_KEY).unwrap(), None);

    port.save(PROJECT_KEY, "{\"metadata\": ").unwrap();
    let gateway = Gateway::new(port);
    let mut store = Store::default();
    assert!(!gateway.restore(&mut store));
    assert_eq!(store.present(), &Document::new());
}

#[test]
fn test_applying_engine_suggestions() {
    let mut store = Store::with_dispatcher(Document::new(), Dispatcher::with_default_rules());

    let add = Suggestion::new("add-element", "Add a contact section", 0.75)
        .with_data(json!({"elementType": "contact"}));
    assert!(store.dispatch(Action::ApplySuggestion(add)));
    assert!(store.present().find_element("contact_1").is_some());
    assert_eq!(store.undo_description(), Some("apply-suggestion"));

    let unknown = Suggestion::new("add-favicon", "Add a favicon", 0.5);
    assert!(!store.dispatch(Action::ApplySuggestion(unknown)));

    let bad = Suggestion::new("add-element", "Broken", 0.5).with_data(json!({"elementType": "carousel"}));
    assert!(!store.dispatch(Action::ApplySuggestion(bad)));
}

#[test]
fn test_projection_never_contains_invisible_elements() {
    let mut session = EditSession::new(Store::new(templates::select("ecommerce").unwrap()));
    let hidden = session.store.present().pages[0].elements[1].id.clone();
    session.dispatch(Action::UpdateElement {
        element_id: hidden.clone(),
        patch: ElementPatch {
            visible: Some(false),
            ..ElementPatch::default()
        },
    });

    let mut pipeline = Pipeline::new();
    for breakpoint in Breakpoint::ALL {
        let request = PreviewRequest {
            breakpoint,
            selection: SelectionOptions::selected(hidden.clone()),
            ..PreviewRequest::default()
        };
        match pipeline.render(&session.store, &request) {
            Preview::Tree(vdom) => {
                assert!(!vdom.element_ids().contains(&hidden.as_str()));
                assert_eq!(vdom.element_ids().len(), session.store.present().pages[0].elements.len() - 1);
            }
            other => panic!("expected tree, got {:?}", other),
        }
    }
}

#[test]
fn test_actions_load_from_json_script() {
    let script = json!([
        {"type": "add-element", "payload": {"elementType": "hero", "content": {"title": "Hello there"}}},
        {"type": "update-theme", "payload": {"colors": {"primary": "#000000"}, "spacing": "compact"}},
        {"type": "set-active-page", "payload": {"pageId": "page_home"}},
        {"type": "update-page", "payload": {"pageId": "page_home", "patch": {"name": "Start"}}}
    ]);
    let actions: Vec<Action> = serde_json::from_value(script).unwrap();

    let mut store = Store::default();
    let changed: Vec<bool> = actions.into_iter().map(|a| store.dispatch(a)).collect();
    assert_eq!(changed, vec![true, true, false, true]);

    let doc = store.present();
    assert_eq!(doc.find_element("hero_1").unwrap().text("title"), Some("Hello there"));
    assert_eq!(doc.theme.colors.primary, "#000000");
    assert_eq!(doc.theme.spacing, "compact");
    assert_eq!(doc.pages[0].name, "Start");
}
