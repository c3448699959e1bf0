//! Pure rewrites of the selection record list.
//!
//! Every function takes the full record list and returns the full new list.
//! A key that matches no record leaves the list unchanged.

use tracing::debug;

use crate::catalogue::{Component, SubjectOption};
use crate::config::EngineConfig;
use crate::error::{BooksetError, Result};

use super::record::{CustomField, SelectionRecord};

/// Label given to every manually authored option.
pub const MANUAL_LABEL: &str = "Custom";

/// A manual subject that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualSubject {
    pub subject: String,
    pub core_id: String,
    pub core_cover: Option<String>,
    pub core_spine: Option<String>,
}

impl ManualSubject {
    /// Build the synthetic catalogue option for this subject.
    pub fn to_option(&self, config: &EngineConfig) -> SubjectOption {
        SubjectOption {
            type_id: format!("{}{}", config.manual_prefix, self.core_id),
            label: MANUAL_LABEL.to_string(),
            core_id: Some(self.core_id.clone()),
            core_cover: self.core_cover.clone(),
            core_spine: self.core_spine.clone(),
            is_custom: true,
            ..SubjectOption::default()
        }
    }
}

/// Check manual subject input before it reaches the store.
pub fn validate_manual_subject(
    subject: &str,
    core_id: &str,
    core_cover: &str,
    core_spine: &str,
) -> Result<ManualSubject> {
    let subject = subject.trim();
    let core_id = core_id.trim();

    if subject.is_empty() {
        return Err(BooksetError::InvalidManualSubject(
            "subject name is empty".to_string(),
        ));
    }
    if core_id.is_empty() {
        return Err(BooksetError::InvalidManualSubject(format!(
            "core id for '{}' is empty",
            subject
        )));
    }

    Ok(ManualSubject {
        subject: subject.to_string(),
        core_id: core_id.to_string(),
        core_cover: non_empty(core_cover),
        core_spine: non_empty(core_spine),
    })
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Apply `edit` to the unique record addressed by the key.
fn update_matching(
    mut records: Vec<SelectionRecord>,
    class_name: &str,
    subject_name: &str,
    type_id: &str,
    edit: impl FnOnce(&mut SelectionRecord),
) -> Vec<SelectionRecord> {
    match records
        .iter_mut()
        .find(|r| r.matches(class_name, subject_name, type_id))
    {
        Some(record) => edit(record),
        None => debug!(class_name, subject_name, type_id, "no selection matches key"),
    }
    records
}

fn prints(record: &SelectionRecord, component: Component) -> bool {
    record
        .selected_option
        .as_ref()
        .is_some_and(|o| o.has_component(component))
}

/// Drop (`true`) or restore (`false`) one component of a selection.
pub fn set_skip(
    records: Vec<SelectionRecord>,
    component: Component,
    class_name: &str,
    subject_name: &str,
    type_id: &str,
    value: bool,
) -> Vec<SelectionRecord> {
    update_matching(records, class_name, subject_name, type_id, |record| {
        if prints(record, component) {
            *record.skip_flag_mut(component) = value;
        } else {
            debug!(component = component.slug(), type_id, "option has no such component");
        }
    })
}

/// Set one override. An empty string is kept as a deliberate blank.
///
/// Ignored for a component the selected option does not print.
pub fn set_custom_field(
    records: Vec<SelectionRecord>,
    class_name: &str,
    subject_name: &str,
    type_id: &str,
    component: Component,
    field: CustomField,
    value: impl Into<String>,
) -> Vec<SelectionRecord> {
    let value = value.into();
    update_matching(records, class_name, subject_name, type_id, |record| {
        if prints(record, component) {
            *record.custom_mut(component, field) = Some(value);
        } else {
            debug!(component = component.slug(), type_id, "option has no such component");
        }
    })
}

/// Remove one override so the catalogue default shows through again.
pub fn clear_custom_field(
    records: Vec<SelectionRecord>,
    class_name: &str,
    subject_name: &str,
    type_id: &str,
    component: Component,
    field: CustomField,
) -> Vec<SelectionRecord> {
    update_matching(records, class_name, subject_name, type_id, |record| {
        *record.custom_mut(component, field) = None;
    })
}

/// Record the operator's pick of an option for a subject.
///
/// An existing record for the same key is left untouched. An unselected
/// placeholder for the subject is filled in place; otherwise a record is
/// appended.
pub fn select_option(
    mut records: Vec<SelectionRecord>,
    class_name: &str,
    subject_name: &str,
    option: SubjectOption,
) -> Vec<SelectionRecord> {
    if records
        .iter()
        .any(|r| r.matches(class_name, subject_name, &option.type_id))
    {
        return records;
    }

    let placeholder = records.iter_mut().find(|r| {
        r.class_name == class_name && r.subject_name == subject_name && r.selected_option.is_none()
    });
    match placeholder {
        Some(record) => record.selected_option = Some(option),
        None => records.push(SelectionRecord::new(class_name, subject_name, option)),
    }
    records
}

/// Remove the record addressed by the key.
pub fn deselect_option(
    mut records: Vec<SelectionRecord>,
    class_name: &str,
    subject_name: &str,
    type_id: &str,
) -> Vec<SelectionRecord> {
    let before = records.len();
    records.retain(|r| !r.matches(class_name, subject_name, type_id));
    if records.len() == before {
        debug!(class_name, subject_name, type_id, "no selection matches key");
    }
    records
}

/// Append a manually authored subject with a core book only.
///
/// Invalid input is a no-op. Re-adding the same subject and core id replaces
/// the option in place and keeps existing overrides.
pub fn add_manual_subject(
    mut records: Vec<SelectionRecord>,
    class_name: &str,
    subject_name: &str,
    core_id: &str,
    core_cover: &str,
    core_spine: &str,
    config: &EngineConfig,
) -> Vec<SelectionRecord> {
    let manual = match validate_manual_subject(subject_name, core_id, core_cover, core_spine) {
        Ok(manual) => manual,
        Err(e) => {
            debug!(class_name, "manual subject rejected: {}", e);
            return records;
        }
    };

    let option = manual.to_option(config);
    match records
        .iter_mut()
        .find(|r| r.matches(class_name, &manual.subject, &option.type_id))
    {
        Some(record) => record.selected_option = Some(option),
        None => records.push(SelectionRecord::new(class_name, manual.subject, option)),
    }
    records
}

/// Remove every record of a class.
pub fn reset_class(mut records: Vec<SelectionRecord>, class_name: &str) -> Vec<SelectionRecord> {
    records.retain(|r| r.class_name != class_name);
    records
}
