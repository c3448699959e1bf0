//! Integration tests for selection, derivation and customization.

use bookset::catalogue::{CatalogueProvider, StaticCatalogue};
use bookset::customize::{resolve_component, ValueSource};
use bookset::{
    AssessmentVariant, BookAction, BookKind, Component, CustomField, DerivationEngine, EngineConfig,
    SelectionStore,
};

/// Load the shared test catalogue.
fn catalogue() -> StaticCatalogue {
    StaticCatalogue::load(concat!(env!("CARGO_MANIFEST_DIR"), "/test_data/catalogue.json"))
        .expect("Failed to load test catalogue")
}

/// Select catalogue options for a class in the given order.
fn select(
    store: &mut SelectionStore,
    catalogue: &StaticCatalogue,
    class_name: &str,
    picks: &[(&str, &str)],
) {
    for (subject, type_id) in picks {
        let option = catalogue
            .find_option(class_name, subject, type_id)
            .expect("Option missing from test catalogue");
        store.select_option(class_name, subject, option);
    }
}

fn ukg_store(catalogue: &StaticCatalogue) -> SelectionStore {
    let mut store = SelectionStore::new();
    select(
        &mut store,
        catalogue,
        "UKG",
        &[
            ("English", "ukg-eng-1"),
            ("Maths", "ukg-mat-1"),
            ("EVS", "ukg-evs-1"),
            ("General Knowledge", "ukg-gk-1"),
        ],
    );
    store
}

// =============================================================================
// Naming Rule Tests
// =============================================================================

#[test]
fn test_ukg_english_is_skill_book() {
    let catalogue = catalogue();
    let mut store = SelectionStore::new();
    select(&mut store, &catalogue, "UKG", &[("English", "ukg-eng-1")]);

    let items = DerivationEngine::new(&catalogue).derive(&store, "UKG");
    assert_eq!(items[0].title, "Alphabet Safari (Skill Book)");
}

#[test]
fn test_nursery_evs_has_no_suffix() {
    let catalogue = catalogue();
    let mut store = SelectionStore::new();
    select(&mut store, &catalogue, "Nursery", &[("EVS", "nur-evs-1")]);

    let items = DerivationEngine::new(&catalogue).derive(&store, "Nursery");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Garden Facts");
}

#[test]
fn test_pg_is_exempt_from_skill_book_rule() {
    let catalogue = catalogue();
    let mut store = SelectionStore::new();
    select(&mut store, &catalogue, "PG", &[("English", "pg-eng-1"), ("Rhymes", "pg-rhy-1")]);

    let items = DerivationEngine::new(&catalogue).derive(&store, "PG");
    assert_eq!(items[0].title, "Alphabet Safari (Core)");
    assert_eq!(items[1].title, "Sing Along (Core)");
}

#[test]
fn test_art_subject_and_json_subject() {
    let catalogue = catalogue();
    let mut store = SelectionStore::new();
    select(
        &mut store,
        &catalogue,
        "UKG",
        &[("Art & Craft", "ukg-art-1"), ("General Knowledge", "ukg-gk-1")],
    );

    let items = DerivationEngine::new(&catalogue).derive(&store, "UKG");
    assert_eq!(items[0].title, "Colour Splash");
    // json_subject only matters for custom books
    assert_eq!(items[1].title, "World Around (Core)");
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_items_follow_insertion_order_with_assessment_last() {
    let catalogue = catalogue();
    let mut store = SelectionStore::new();
    select(
        &mut store,
        &catalogue,
        "UKG",
        &[("EVS", "ukg-evs-1"), ("Maths", "ukg-mat-1"), ("English", "ukg-eng-1")],
    );

    let items = DerivationEngine::new(&catalogue).derive(&store, "UKG");
    let summary: Vec<_> = items
        .iter()
        .map(|i| (i.subject_name.as_deref().unwrap_or("-"), i.kind))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("EVS", BookKind::Core),
            ("Maths", BookKind::Core),
            ("Maths", BookKind::Work),
            ("English", BookKind::Core),
            ("English", BookKind::Work),
            ("English", BookKind::Addon),
            ("-", BookKind::Assessment),
        ]
    );
}

#[test]
fn test_keys_are_unique() {
    let catalogue = catalogue();
    let items = DerivationEngine::new(&catalogue).derive(&ukg_store(&catalogue), "UKG");

    let mut keys: Vec<_> = items.iter().map(|i| i.key.clone()).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), items.len());
}

#[test]
fn test_classes_do_not_share_records() {
    let catalogue = catalogue();
    let mut store = ukg_store(&catalogue);
    select(&mut store, &catalogue, "Nursery", &[("English", "nur-eng-1")]);

    let engine = DerivationEngine::new(&catalogue);
    assert!(engine.derive(&store, "UKG").iter().all(|i| i.class_name == "UKG"));
    assert_eq!(engine.derive(&store, "Nursery").len(), 2);
}

// =============================================================================
// Drop / Restore Tests
// =============================================================================

#[test]
fn test_drop_restore_keeps_customizations() {
    let catalogue = catalogue();
    let config = EngineConfig::default();
    let mut store = ukg_store(&catalogue);
    store.set_custom_field(
        "UKG",
        "English",
        "ukg-eng-1",
        Component::Core,
        CustomField::Title,
        "Safari Reader",
    );
    let before = store.clone();

    store.drop_component(Component::Core, "UKG", "English", "ukg-eng-1");
    store.restore_component(Component::Core, "UKG", "English", "ukg-eng-1");

    assert_eq!(store, before);
    let record = store.record("UKG", "English", "ukg-eng-1").unwrap();
    let core = resolve_component(record, Component::Core, &config).unwrap();
    assert_eq!(core.title.value, "Safari Reader");
}

#[test]
fn test_dropped_item_offers_restore_only() {
    let catalogue = catalogue();
    let mut store = ukg_store(&catalogue);
    store.drop_component(Component::Addon, "UKG", "English", "ukg-eng-1");

    let items = DerivationEngine::new(&catalogue).derive(&store, "UKG");
    let addon = items.iter().find(|i| i.kind == BookKind::Addon).unwrap();

    assert!(addon.dropped);
    assert!(addon.can(BookAction::Restore));
    assert!(!addon.can(BookAction::Drop));
}

#[test]
fn test_stale_key_is_noop() {
    let catalogue = catalogue();
    let mut store = ukg_store(&catalogue);
    let before = store.clone();

    store.drop_component(Component::Core, "UKG", "English", "ukg-eng-2");
    store.set_custom_field("LKG", "English", "ukg-eng-1", Component::Core, CustomField::Id, "X");
    store.deselect_option("UKG", "Hindi", "hin-1");

    assert_eq!(store, before);
}

// =============================================================================
// Customization Tests
// =============================================================================

#[test]
fn test_empty_custom_title_is_not_default() {
    let catalogue = catalogue();
    let config = EngineConfig::default();
    let mut store = ukg_store(&catalogue);
    store.set_custom_field("UKG", "English", "ukg-eng-1", Component::Core, CustomField::Title, "");

    let record = store.record("UKG", "English", "ukg-eng-1").unwrap();
    let core = resolve_component(record, Component::Core, &config).unwrap();
    assert_eq!(core.title.value, "");
    assert_eq!(core.title.source, ValueSource::Override);
    assert_eq!(core.spine.value.as_deref(), Some("AS-C"));
}

#[test]
fn test_cover_title_is_default_title() {
    let catalogue = catalogue();
    let config = EngineConfig::default();
    let mut store = SelectionStore::new();
    select(&mut store, &catalogue, "Nursery", &[("EVS", "nur-evs-1")]);

    let record = store.record("Nursery", "EVS", "nur-evs-1").unwrap();
    let core = resolve_component(record, Component::Core, &config).unwrap();
    assert_eq!(core.title.value, "Garden Facts Nursery");
    assert_eq!(core.id.value, "3101");
}

// =============================================================================
// Manual Subject Tests
// =============================================================================

#[test]
fn test_manual_subject_yields_one_custom_core() {
    let catalogue = catalogue();
    let config = EngineConfig::default();
    let mut store = SelectionStore::new();
    store.add_manual_subject("UKG", "French", "999001", "C-FR1", "S-FR1", &config);

    let items = DerivationEngine::with_config(&catalogue, config).derive(&store, "UKG");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind, BookKind::Core);
    assert_eq!(items[0].title, "French (Custom Book)");
}

#[test]
fn test_manual_subject_with_empty_name_is_rejected() {
    let catalogue = catalogue();
    let config = EngineConfig::default();
    let mut store = ukg_store(&catalogue);
    let before = store.records.len();

    store.add_manual_subject("UKG", "  ", "999001", "C-FR1", "S-FR1", &config);
    assert_eq!(store.records.len(), before);
}

// =============================================================================
// Assessment Tests
// =============================================================================

#[test]
fn test_exclude_restore_assessment_round_trip() {
    let catalogue = catalogue();
    let engine = DerivationEngine::new(&catalogue);
    let mut store = ukg_store(&catalogue);
    let before = engine.derive(&store, "UKG");

    store.exclude_assessment("UKG");
    let excluded = engine.derive(&store, "UKG");
    assert!(excluded.last().unwrap().dropped);

    store.restore_assessment("UKG");
    assert_eq!(engine.derive(&store, "UKG"), before);
}

#[test]
fn test_assessment_follows_selection_and_variant() {
    let catalogue = catalogue();
    let engine = DerivationEngine::new(&catalogue);
    let mut store = ukg_store(&catalogue);

    let generic = engine.resolve_assessment(&store, "UKG").unwrap();
    assert_eq!(generic.definition.id, "AS-UKG-WM");

    // Swapping the English option selects the Letter Land row
    store.deselect_option("UKG", "English", "ukg-eng-1");
    select(&mut store, &catalogue, "UKG", &[("English", "ukg-eng-2")]);
    assert_eq!(engine.resolve_assessment(&store, "UKG").unwrap().definition.id, "AS-UKG-LL-WM");

    store.set_assessment_variant("UKG", AssessmentVariant::WithoutMarks);
    assert_eq!(engine.resolve_assessment(&store, "UKG").unwrap().definition.id, "AS-UKG-NM");
}

#[test]
fn test_no_assessment_without_maths() {
    let catalogue = catalogue();
    let mut store = SelectionStore::new();
    select(&mut store, &catalogue, "UKG", &[("English", "ukg-eng-1")]);

    let items = DerivationEngine::new(&catalogue).derive(&store, "UKG");
    assert!(items.iter().all(|i| i.kind != BookKind::Assessment));
}

#[test]
fn test_reset_class_clears_everything() {
    let catalogue = catalogue();
    let engine = DerivationEngine::new(&catalogue);
    let mut store = ukg_store(&catalogue);
    store.exclude_assessment("UKG");
    store.set_assessment_title("UKG", "Term Test");

    store.reset_class("UKG");

    assert!(engine.derive(&store, "UKG").is_empty());
    assert!(!store.assessment.is_excluded("UKG"));
    assert_eq!(store.assessment.custom_title("UKG"), None);
}

// =============================================================================
// Confirmed Order Tests
// =============================================================================

#[test]
fn test_confirmed_order_uses_effective_values() {
    let catalogue = catalogue();
    let engine = DerivationEngine::new(&catalogue);
    let mut store = ukg_store(&catalogue);
    let (class_name, subject, type_id) = ("UKG", "English", "ukg-eng-1");
    let core = Component::Core;
    store.set_custom_field(class_name, subject, type_id, core, CustomField::Title, "Safari Reader");
    store.set_custom_field(class_name, subject, type_id, core, CustomField::Id, "X-999");
    store.drop_component(Component::Addon, class_name, subject, type_id);

    let order = engine.confirmed_order(&store, "UKG");

    let core = order
        .iter()
        .find(|line| line.subject_name.as_deref() == Some("English") && line.kind == BookKind::Core)
        .expect("English core line");
    assert_eq!(core.title, "Safari Reader");
    assert_eq!(core.id, "X-999");
    assert_eq!(core.spine.as_deref(), Some("AS-C"));

    let work = order
        .iter()
        .find(|line| line.subject_name.as_deref() == Some("English") && line.kind == BookKind::Work)
        .expect("English workbook line");
    assert_eq!(work.id, "1202");
    assert_eq!(work.spine.as_deref(), Some("AS-W"));

    assert!(order.iter().all(|line| line.kind != BookKind::Addon));

    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json[0]["title"], "Safari Reader");
    assert_eq!(json[0]["id"], "X-999");
}

#[test]
fn test_confirmed_order_skips_excluded_assessment() {
    let catalogue = catalogue();
    let engine = DerivationEngine::new(&catalogue);
    let mut store = ukg_store(&catalogue);
    store.set_assessment_title("UKG", "Term Test");

    let last = engine.confirmed_order(&store, "UKG").pop().unwrap();
    assert_eq!(last.kind, BookKind::Assessment);
    assert_eq!(last.title, "Term Test");
    assert_eq!(last.id, "AS-UKG-WM");

    store.exclude_assessment("UKG");
    let order = engine.confirmed_order(&store, "UKG");
    assert!(order.iter().all(|line| line.kind != BookKind::Assessment));
}
