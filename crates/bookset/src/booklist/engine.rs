//! Derivation of the physical book list for one class.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalogue::{AssessmentDefinition, AssessmentVariant, CatalogueProvider, Component};
use crate::config::EngineConfig;
use crate::customize::{resolve_assessment_title, resolve_component};
use crate::selection::{SelectionRecord, SelectionStore};

use super::item::{BookKind, BookListSummary, OrderLine, PhysicalBookItem, ViewMode};
use super::naming::component_title;

/// Subject names the assessment eligibility depends on.
pub const ENGLISH_SUBJECT: &str = "English";
pub const MATHS_SUBJECT: &str = "Maths";

/// The assessment that applies to a class right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAssessment {
    pub definition: AssessmentDefinition,
    pub variant: AssessmentVariant,
    pub excluded: bool,
    /// Effective printed title.
    pub title: String,
}

/// Turns a selection store into ordered book rows.
///
/// Derivation is a pure function of the store, the catalogue and the
/// configuration, and is cheap enough to rerun after every mutation.
pub struct DerivationEngine<'a, C: CatalogueProvider + ?Sized> {
    catalogue: &'a C,
    config: EngineConfig,
}

impl<'a, C: CatalogueProvider + ?Sized> DerivationEngine<'a, C> {
    /// Create an engine with the default configuration.
    pub fn new(catalogue: &'a C) -> Self {
        Self::with_config(catalogue, EngineConfig::default())
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(catalogue: &'a C, config: EngineConfig) -> Self {
        Self { catalogue, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Derive the editable book list for a class.
    pub fn derive(&self, store: &SelectionStore, class_name: &str) -> Vec<PhysicalBookItem> {
        self.derive_with_mode(store, class_name, ViewMode::Editable)
    }

    /// Derive the book list for a class.
    ///
    /// Subject rows follow record insertion order, core before workbook
    /// before add-on within a record. The assessment row, if any, is last.
    /// A class the catalogue does not know yields an empty list.
    pub fn derive_with_mode(
        &self,
        store: &SelectionStore,
        class_name: &str,
        mode: ViewMode,
    ) -> Vec<PhysicalBookItem> {
        if !self.catalogue.has_class(class_name) {
            warn!(class_name, "class not in catalogue, book list is empty");
            return Vec::new();
        }

        let mut items: Vec<PhysicalBookItem> = store
            .records_for(class_name)
            .flat_map(|record| self.record_items(record, mode))
            .collect();

        if let Some(assessment) = self.resolve_assessment(store, class_name) {
            items.push(PhysicalBookItem {
                key: PhysicalBookItem::assessment_key(class_name, &assessment.definition.id),
                title: assessment.title,
                kind: BookKind::Assessment,
                preview_link: assessment.definition.link,
                class_name: class_name.to_string(),
                subject_name: None,
                type_id: None,
                dropped: assessment.excluded,
                actions: PhysicalBookItem::actions_for(assessment.excluded, mode),
            });
        }

        debug!(class_name, items = items.len(), "derived book list");
        items
    }

    fn record_items(&self, record: &SelectionRecord, mode: ViewMode) -> Vec<PhysicalBookItem> {
        let Some(option) = record.selected_option.as_ref() else {
            return Vec::new();
        };

        Component::ALL
            .into_iter()
            .filter(|component| option.has_component(*component))
            .map(|component| {
                let kind = BookKind::from(component);
                let dropped = record.is_skipped(component);
                PhysicalBookItem {
                    key: PhysicalBookItem::component_key(
                        &record.class_name,
                        &record.subject_name,
                        &option.type_id,
                        kind,
                    ),
                    title: component_title(
                        component,
                        &record.class_name,
                        &record.subject_name,
                        option,
                        &self.config,
                    ),
                    kind,
                    preview_link: option.preview_link(component).map(str::to_string),
                    class_name: record.class_name.clone(),
                    subject_name: Some(record.subject_name.clone()),
                    type_id: Some(option.type_id.clone()),
                    dropped,
                    actions: PhysicalBookItem::actions_for(dropped, mode),
                }
            })
            .collect()
    }

    /// Resolve which assessment applies to a class, if any.
    ///
    /// The first English and first Maths record of the class are handed to
    /// the catalogue with the class's current edition. A missing subject is
    /// passed as `None`.
    pub fn resolve_assessment(
        &self,
        store: &SelectionStore,
        class_name: &str,
    ) -> Option<ResolvedAssessment> {
        let english = store
            .first_for_subject(class_name, ENGLISH_SUBJECT)
            .and_then(|r| r.selected_option.as_ref());
        let maths = store
            .first_for_subject(class_name, MATHS_SUBJECT)
            .and_then(|r| r.selected_option.as_ref());
        let variant = store.assessment.variant(class_name);

        let definition = self
            .catalogue
            .assessment_for(class_name, english, maths, variant)?;
        let title = resolve_assessment_title(&store.assessment, class_name, &definition).value;

        Some(ResolvedAssessment {
            excluded: store.assessment.is_excluded(class_name),
            variant,
            title,
            definition,
        })
    }

    /// Count active and dropped rows for a class.
    pub fn summary(&self, store: &SelectionStore, class_name: &str) -> BookListSummary {
        BookListSummary::from_items(class_name, &self.derive(store, class_name))
    }

    /// The lines to order: active rows only, in derived order.
    ///
    /// Each line carries the effective title, catalogue id and spine, so
    /// operator overrides reach the order.
    pub fn confirmed_order(&self, store: &SelectionStore, class_name: &str) -> Vec<OrderLine> {
        if !self.catalogue.has_class(class_name) {
            warn!(class_name, "class not in catalogue, nothing to order");
            return Vec::new();
        }

        let mut lines: Vec<OrderLine> = store
            .records_for(class_name)
            .flat_map(|record| self.record_lines(record))
            .collect();

        let assessment = self
            .resolve_assessment(store, class_name)
            .filter(|assessment| !assessment.excluded);
        if let Some(assessment) = assessment {
            let definition = assessment.definition;
            lines.push(OrderLine {
                key: PhysicalBookItem::assessment_key(class_name, &definition.id),
                kind: BookKind::Assessment,
                class_name: class_name.to_string(),
                subject_name: None,
                type_id: None,
                title: assessment.title,
                id: definition.id,
                spine: definition.spine,
            });
        }

        debug!(class_name, lines = lines.len(), "confirmed order");
        lines
    }

    fn record_lines(&self, record: &SelectionRecord) -> Vec<OrderLine> {
        let Some(type_id) = record.type_id() else {
            return Vec::new();
        };

        Component::ALL
            .into_iter()
            .filter(|component| !record.is_skipped(*component))
            .filter_map(|component| resolve_component(record, component, &self.config))
            .map(|effective| {
                let kind = BookKind::from(effective.component);
                OrderLine {
                    key: PhysicalBookItem::component_key(
                        &record.class_name,
                        &record.subject_name,
                        type_id,
                        kind,
                    ),
                    kind,
                    class_name: record.class_name.clone(),
                    subject_name: Some(record.subject_name.clone()),
                    type_id: Some(type_id.to_string()),
                    title: effective.title.value,
                    id: effective.id.value,
                    spine: effective.spine.value,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booklist::BookAction;
    use crate::catalogue::{AssessmentRule, ClassCatalogue, StaticCatalogue, SubjectOption};
    use crate::selection::CustomField;

    fn catalogue() -> StaticCatalogue {
        StaticCatalogue::new()
            .with_class(
                "UKG",
                ClassCatalogue::new()
                    .with_option(
                        "English",
                        SubjectOption::new("eng-1", "Alphabet Safari")
                            .with_core("1001")
                            .with_work("1002")
                            .with_link(Component::Core, "https://cdn.example/eng-1.pdf"),
                    )
                    .with_option(
                        "Maths",
                        SubjectOption::new("mat-1", "Number Trail").with_core("2001"),
                    )
                    .with_option(
                        "EVS",
                        SubjectOption::new("evs-1", "Garden Facts")
                            .with_core("3001")
                            .with_addon("3003"),
                    )
                    .with_assessment(AssessmentRule::any(AssessmentDefinition::new(
                        "AS-UKG-WM",
                        "UKG Assessment (With Marks)",
                        AssessmentVariant::WithMarks,
                    )))
                    .with_assessment(AssessmentRule::any(AssessmentDefinition::new(
                        "AS-UKG-NM",
                        "UKG Assessment (Without Marks)",
                        AssessmentVariant::WithoutMarks,
                    ))),
            )
            .with_class("PG", ClassCatalogue::new())
    }

    fn store(catalogue: &StaticCatalogue) -> SelectionStore {
        let mut store = SelectionStore::new();
        for (subject, type_id) in [("EVS", "evs-1"), ("English", "eng-1"), ("Maths", "mat-1")] {
            let option = catalogue.find_option("UKG", subject, type_id).unwrap();
            store.select_option("UKG", subject, option);
        }
        store
    }

    #[test]
    fn test_derive_order_and_titles() {
        let catalogue = catalogue();
        let engine = DerivationEngine::new(&catalogue);
        let items = engine.derive(&store(&catalogue), "UKG");

        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Garden Facts",
                "Garden Facts (Add-on)",
                "Alphabet Safari (Skill Book)",
                "Alphabet Safari (Workbook)",
                "Number Trail (Skill Book)",
                "UKG Assessment (With Marks)",
            ]
        );
        assert_eq!(items.last().unwrap().kind, BookKind::Assessment);
        assert!(items[2].has_preview());
        assert!(!items[3].has_preview());
    }

    #[test]
    fn test_dropped_rows_offer_restore() {
        let catalogue = catalogue();
        let engine = DerivationEngine::new(&catalogue);
        let mut store = store(&catalogue);
        store.drop_component(Component::Work, "UKG", "English", "eng-1");

        let items = engine.derive(&store, "UKG");
        let work = items.iter().find(|i| i.kind == BookKind::Work).unwrap();
        assert!(work.dropped);
        assert_eq!(work.actions, vec![BookAction::Restore]);

        let core = items.iter().find(|i| i.title.starts_with("Alphabet")).unwrap();
        assert_eq!(core.actions, vec![BookAction::Drop]);
    }

    #[test]
    fn test_read_only_has_no_actions() {
        let catalogue = catalogue();
        let engine = DerivationEngine::new(&catalogue);
        let items = engine.derive_with_mode(&store(&catalogue), "UKG", ViewMode::ReadOnly);
        assert!(items.iter().all(|i| i.actions.is_empty()));
    }

    #[test]
    fn test_unselected_records_contribute_nothing() {
        let catalogue = catalogue();
        let engine = DerivationEngine::new(&catalogue);
        let store = SelectionStore::from_records(vec![SelectionRecord::unselected("UKG", "EVS")]);
        assert!(engine.derive(&store, "UKG").is_empty());
    }

    #[test]
    fn test_unknown_class_is_empty() {
        let catalogue = catalogue();
        let engine = DerivationEngine::new(&catalogue);
        let mut store = SelectionStore::new();
        store.add_manual_subject("Grade 9", "French", "999001", "", "", engine.config());
        assert!(engine.derive(&store, "Grade 9").is_empty());
    }

    #[test]
    fn test_assessment_needs_english_and_maths() {
        let catalogue = catalogue();
        let engine = DerivationEngine::new(&catalogue);
        let mut store = store(&catalogue);
        store.deselect_option("UKG", "Maths", "mat-1");

        assert!(engine.resolve_assessment(&store, "UKG").is_none());
        assert!(engine.derive(&store, "UKG").iter().all(|i| i.kind != BookKind::Assessment));
    }

    #[test]
    fn test_variant_switches_assessment_entry() {
        let catalogue = catalogue();
        let engine = DerivationEngine::new(&catalogue);
        let mut store = store(&catalogue);
        store.set_assessment_variant("UKG", AssessmentVariant::WithoutMarks);

        let assessment = engine.resolve_assessment(&store, "UKG").unwrap();
        assert_eq!(assessment.definition.id, "AS-UKG-NM");
        assert_eq!(assessment.variant, AssessmentVariant::WithoutMarks);
    }

    #[test]
    fn test_excluded_assessment_stays_listed_as_dropped() {
        let catalogue = catalogue();
        let engine = DerivationEngine::new(&catalogue);
        let mut store = store(&catalogue);
        store.exclude_assessment("UKG");

        let items = engine.derive(&store, "UKG");
        let assessment = items.last().unwrap();
        assert_eq!(assessment.kind, BookKind::Assessment);
        assert!(assessment.dropped);
        assert!(assessment.can(BookAction::Restore));
        let order = engine.confirmed_order(&store, "UKG");
        assert!(order.iter().all(|i| i.kind != BookKind::Assessment));
    }

    #[test]
    fn test_custom_assessment_title() {
        let catalogue = catalogue();
        let engine = DerivationEngine::new(&catalogue);
        let mut store = store(&catalogue);
        store.set_assessment_title("UKG", "Term Test");

        assert_eq!(engine.derive(&store, "UKG").last().unwrap().title, "Term Test");
    }

    #[test]
    fn test_summary_and_confirmed_order() {
        let catalogue = catalogue();
        let engine = DerivationEngine::new(&catalogue);
        let mut store = store(&catalogue);
        store.drop_component(Component::Addon, "UKG", "EVS", "evs-1");

        let summary = engine.summary(&store, "UKG");
        assert_eq!(summary.active.core, 3);
        assert_eq!(summary.dropped.addon, 1);
        assert_eq!(summary.active.assessment, 1);

        let order = engine.confirmed_order(&store, "UKG");
        let ids: Vec<_> = order.iter().map(|line| line.id.as_str()).collect();
        assert_eq!(ids, vec!["3001", "1001", "1002", "2001", "AS-UKG-WM"]);
        assert_eq!(order[0].title, "Garden Facts");
        assert_eq!(order[4].kind, BookKind::Assessment);
        assert_eq!(order[4].title, "UKG Assessment (With Marks)");
    }

    #[test]
    fn test_confirmed_order_carries_overrides() {
        let catalogue = catalogue();
        let engine = DerivationEngine::new(&catalogue);
        let mut store = store(&catalogue);
        let edits = [
            (Component::Core, CustomField::Title, "Safari Reader"),
            (Component::Core, CustomField::Id, "X-999"),
            (Component::Work, CustomField::Spine, "SR-W"),
        ];
        for (component, field, value) in edits {
            store.set_custom_field("UKG", "English", "eng-1", component, field, value);
        }
        store.set_assessment_title("UKG", "Term Test");

        let order = engine.confirmed_order(&store, "UKG");
        let core = order
            .iter()
            .find(|line| line.key == "UKG::English::eng-1::core")
            .unwrap();
        assert_eq!(core.title, "Safari Reader");
        assert_eq!(core.id, "X-999");

        let work = order
            .iter()
            .find(|line| line.key == "UKG::English::eng-1::work")
            .unwrap();
        assert_eq!(work.title, "Alphabet Safari (Workbook)");
        assert_eq!(work.id, "1002");
        assert_eq!(work.spine.as_deref(), Some("SR-W"));

        let assessment = order.last().unwrap();
        assert_eq!(assessment.title, "Term Test");
        assert_eq!(assessment.id, "AS-UKG-WM");

        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains(r#""title":"Safari Reader""#));
        assert!(json.contains(r#""id":"X-999""#));
    }
}
