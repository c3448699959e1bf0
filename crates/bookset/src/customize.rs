//! Effective titles and codes after operator overrides.
//!
//! An override wins whenever it is set, including an explicit empty string.
//! Only an unset override lets the catalogue default show through. Title, id
//! and spine resolve independently.

use serde::{Deserialize, Serialize};

use crate::booklist::naming::component_title;
use crate::catalogue::{AssessmentDefinition, Component};
use crate::config::EngineConfig;
use crate::selection::{AssessmentState, CustomField, SelectionRecord};

/// Where an effective value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Override,
    Default,
}

/// A resolved field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolved<T> {
    pub value: T,
    pub source: ValueSource,
}

impl<T> Resolved<T> {
    pub fn is_overridden(&self) -> bool {
        self.source == ValueSource::Override
    }
}

/// Override if present, else the default.
pub fn resolve_field(custom: Option<&str>, default: &str) -> Resolved<String> {
    match custom {
        Some(value) => Resolved {
            value: value.to_string(),
            source: ValueSource::Override,
        },
        None => Resolved {
            value: default.to_string(),
            source: ValueSource::Default,
        },
    }
}

/// Like [`resolve_field`], for fields whose default may be absent.
pub fn resolve_optional_field(
    custom: Option<&str>,
    default: Option<&str>,
) -> Resolved<Option<String>> {
    match custom {
        Some(value) => Resolved {
            value: Some(value.to_string()),
            source: ValueSource::Override,
        },
        None => Resolved {
            value: default.map(str::to_string),
            source: ValueSource::Default,
        },
    }
}

/// The values an operator sees and edits for one physical component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveComponent {
    pub component: Component,
    pub title: Resolved<String>,
    pub id: Resolved<String>,
    pub spine: Resolved<Option<String>>,
}

/// Resolve one component of a selection.
///
/// Returns `None` when nothing is selected or the option does not print the
/// component. The default title is the option's cover title, falling back to
/// the derived display title.
pub fn resolve_component(
    record: &SelectionRecord,
    component: Component,
    config: &EngineConfig,
) -> Option<EffectiveComponent> {
    let option = record.selected_option.as_ref()?;
    let default_id = option.component_id(component)?;

    let default_title = match option.cover(component) {
        Some(cover) => cover.to_string(),
        None => component_title(
            component,
            &record.class_name,
            &record.subject_name,
            option,
            config,
        ),
    };

    Some(EffectiveComponent {
        component,
        title: resolve_field(record.custom(component, CustomField::Title), &default_title),
        id: resolve_field(record.custom(component, CustomField::Id), default_id),
        spine: resolve_optional_field(
            record.custom(component, CustomField::Spine),
            option.spine(component),
        ),
    })
}

/// Resolve every printed component of a selection, in core/work/addon order.
pub fn resolve_all(record: &SelectionRecord, config: &EngineConfig) -> Vec<EffectiveComponent> {
    Component::ALL
        .into_iter()
        .filter_map(|component| resolve_component(record, component, config))
        .collect()
}

/// Effective printed title of a class's assessment.
pub fn resolve_assessment_title(
    state: &AssessmentState,
    class_name: &str,
    definition: &AssessmentDefinition,
) -> Resolved<String> {
    resolve_field(state.custom_title(class_name), &definition.title)
}
