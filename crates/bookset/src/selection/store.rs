//! The selection store: records plus assessment state.

use serde::{Deserialize, Serialize};

use crate::catalogue::{AssessmentVariant, Component, SubjectOption};
use crate::config::EngineConfig;

use super::assessment::AssessmentState;
use super::mutation;
use super::record::{CustomField, SelectionRecord};

/// The single source of truth for what the operator chose, dropped or renamed.
///
/// Methods delegate to the pure functions in [`mutation`] and replace the
/// record list wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStore {
    /// Records in insertion order; derivation preserves this order.
    #[serde(default)]
    pub records: Vec<SelectionRecord>,

    #[serde(default)]
    pub assessment: AssessmentState,
}

impl SelectionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from existing records.
    pub fn from_records(records: Vec<SelectionRecord>) -> Self {
        Self {
            records,
            assessment: AssessmentState::default(),
        }
    }

    /// Records of one class, in insertion order.
    pub fn records_for<'a, 'b>(
        &'a self,
        class_name: &'b str,
    ) -> impl Iterator<Item = &'a SelectionRecord> {
        self.records.iter().filter(move |r| r.class_name == class_name)
    }

    /// The record addressed by a key.
    pub fn record(
        &self,
        class_name: &str,
        subject_name: &str,
        type_id: &str,
    ) -> Option<&SelectionRecord> {
        self.records
            .iter()
            .find(|r| r.matches(class_name, subject_name, type_id))
    }

    /// First record of a subject in a class, subject compared case-insensitively.
    pub fn first_for_subject(
        &self,
        class_name: &str,
        subject_name: &str,
    ) -> Option<&SelectionRecord> {
        self.records_for(class_name)
            .find(|r| r.subject_name.eq_ignore_ascii_case(subject_name))
    }

    fn rewrite(&mut self, f: impl FnOnce(Vec<SelectionRecord>) -> Vec<SelectionRecord>) {
        let records = std::mem::take(&mut self.records);
        self.records = f(records);
    }

    pub fn select_option(&mut self, class_name: &str, subject_name: &str, option: SubjectOption) {
        self.rewrite(|r| mutation::select_option(r, class_name, subject_name, option));
    }

    pub fn deselect_option(&mut self, class_name: &str, subject_name: &str, type_id: &str) {
        self.rewrite(|r| mutation::deselect_option(r, class_name, subject_name, type_id));
    }

    /// Drop one component from the order.
    pub fn drop_component(
        &mut self,
        component: Component,
        class_name: &str,
        subject_name: &str,
        type_id: &str,
    ) {
        self.set_skip(component, class_name, subject_name, type_id, true);
    }

    /// Put a dropped component back.
    pub fn restore_component(
        &mut self,
        component: Component,
        class_name: &str,
        subject_name: &str,
        type_id: &str,
    ) {
        self.set_skip(component, class_name, subject_name, type_id, false);
    }

    pub fn set_skip(
        &mut self,
        component: Component,
        class_name: &str,
        subject_name: &str,
        type_id: &str,
        value: bool,
    ) {
        self.rewrite(|r| {
            mutation::set_skip(r, component, class_name, subject_name, type_id, value)
        });
    }

    pub fn set_custom_field(
        &mut self,
        class_name: &str,
        subject_name: &str,
        type_id: &str,
        component: Component,
        field: CustomField,
        value: impl Into<String>,
    ) {
        self.rewrite(|r| {
            mutation::set_custom_field(
                r,
                class_name,
                subject_name,
                type_id,
                component,
                field,
                value,
            )
        });
    }

    pub fn clear_custom_field(
        &mut self,
        class_name: &str,
        subject_name: &str,
        type_id: &str,
        component: Component,
        field: CustomField,
    ) {
        self.rewrite(|r| {
            mutation::clear_custom_field(r, class_name, subject_name, type_id, component, field)
        });
    }

    pub fn add_manual_subject(
        &mut self,
        class_name: &str,
        subject_name: &str,
        core_id: &str,
        core_cover: &str,
        core_spine: &str,
        config: &EngineConfig,
    ) {
        self.rewrite(|r| {
            mutation::add_manual_subject(
                r,
                class_name,
                subject_name,
                core_id,
                core_cover,
                core_spine,
                config,
            )
        });
    }

    pub fn exclude_assessment(&mut self, class_name: &str) {
        self.assessment.exclude(class_name);
    }

    pub fn restore_assessment(&mut self, class_name: &str) {
        self.assessment.restore(class_name);
    }

    pub fn set_assessment_variant(&mut self, class_name: &str, variant: AssessmentVariant) {
        self.assessment.set_variant(class_name, variant);
    }

    pub fn set_assessment_title(&mut self, class_name: &str, title: impl Into<String>) {
        self.assessment.set_custom_title(class_name, title);
    }

    pub fn clear_assessment_title(&mut self, class_name: &str) {
        self.assessment.clear_custom_title(class_name);
    }

    /// Remove all records and assessment state of a class.
    pub fn reset_class(&mut self, class_name: &str) {
        self.rewrite(|r| mutation::reset_class(r, class_name));
        self.assessment.reset_class(class_name);
    }
}
