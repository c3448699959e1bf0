//! Selection records: one operator choice per class, subject and option.

use serde::{Deserialize, Serialize};

use crate::catalogue::{Component, SubjectOption};

/// Which override of a component is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomField {
    /// Printed title.
    Title,
    /// Catalogue code.
    Id,
    /// Spine code.
    Spine,
}

impl CustomField {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CustomField::Title => "Title",
            CustomField::Id => "Code",
            CustomField::Spine => "Spine",
        }
    }
}

impl std::str::FromStr for CustomField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(CustomField::Title),
            "id" | "code" => Ok(CustomField::Id),
            "spine" => Ok(CustomField::Spine),
            _ => Err(format!("Unknown field: {}. Use title, id, or spine.", s)),
        }
    }
}

/// An operator's choice for one subject of one class.
///
/// Dropping a component only flips its `skip_*` flag, so overrides survive
/// any number of drop/restore cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub class_name: String,

    pub subject_name: String,

    /// The chosen option; `None` while the subject is left unselected.
    #[serde(default)]
    pub selected_option: Option<SubjectOption>,

    #[serde(default)]
    pub skip_core: bool,

    #[serde(default)]
    pub skip_work: bool,

    #[serde(default)]
    pub skip_addon: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_core_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_core_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_core_spine: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_work_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_work_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_work_spine: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_addon_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_addon_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_addon_spine: Option<String>,
}

impl SelectionRecord {
    /// Create a record for a chosen option.
    pub fn new(
        class_name: impl Into<String>,
        subject_name: impl Into<String>,
        option: SubjectOption,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            subject_name: subject_name.into(),
            selected_option: Some(option),
            ..Self::default()
        }
    }

    /// Create a placeholder record for a subject with nothing chosen yet.
    pub fn unselected(class_name: impl Into<String>, subject_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            subject_name: subject_name.into(),
            ..Self::default()
        }
    }

    /// Type id of the selected option.
    pub fn type_id(&self) -> Option<&str> {
        self.selected_option.as_ref().map(|o| o.type_id.as_str())
    }

    /// Whether this record is the one addressed by a (class, subject, option) key.
    pub fn matches(&self, class_name: &str, subject_name: &str, type_id: &str) -> bool {
        self.class_name == class_name
            && self.subject_name == subject_name
            && self.type_id() == Some(type_id)
    }

    /// Whether a component is currently dropped.
    ///
    /// Always false for a component the option does not print.
    pub fn is_skipped(&self, component: Component) -> bool {
        let printed = self
            .selected_option
            .as_ref()
            .is_some_and(|o| o.has_component(component));
        printed && self.skip_flag(component)
    }

    fn skip_flag(&self, component: Component) -> bool {
        match component {
            Component::Core => self.skip_core,
            Component::Work => self.skip_work,
            Component::Addon => self.skip_addon,
        }
    }

    pub(crate) fn skip_flag_mut(&mut self, component: Component) -> &mut bool {
        match component {
            Component::Core => &mut self.skip_core,
            Component::Work => &mut self.skip_work,
            Component::Addon => &mut self.skip_addon,
        }
    }

    /// The override for one field of one component, if set.
    pub fn custom(&self, component: Component, field: CustomField) -> Option<&str> {
        let value = match (component, field) {
            (Component::Core, CustomField::Title) => &self.custom_core_title,
            (Component::Core, CustomField::Id) => &self.custom_core_id,
            (Component::Core, CustomField::Spine) => &self.custom_core_spine,
            (Component::Work, CustomField::Title) => &self.custom_work_title,
            (Component::Work, CustomField::Id) => &self.custom_work_id,
            (Component::Work, CustomField::Spine) => &self.custom_work_spine,
            (Component::Addon, CustomField::Title) => &self.custom_addon_title,
            (Component::Addon, CustomField::Id) => &self.custom_addon_id,
            (Component::Addon, CustomField::Spine) => &self.custom_addon_spine,
        };
        value.as_deref()
    }

    pub(crate) fn custom_mut(
        &mut self,
        component: Component,
        field: CustomField,
    ) -> &mut Option<String> {
        match (component, field) {
            (Component::Core, CustomField::Title) => &mut self.custom_core_title,
            (Component::Core, CustomField::Id) => &mut self.custom_core_id,
            (Component::Core, CustomField::Spine) => &mut self.custom_core_spine,
            (Component::Work, CustomField::Title) => &mut self.custom_work_title,
            (Component::Work, CustomField::Id) => &mut self.custom_work_id,
            (Component::Work, CustomField::Spine) => &mut self.custom_work_spine,
            (Component::Addon, CustomField::Title) => &mut self.custom_addon_title,
            (Component::Addon, CustomField::Id) => &mut self.custom_addon_id,
            (Component::Addon, CustomField::Spine) => &mut self.custom_addon_spine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_requires_selected_option() {
        let option = SubjectOption::new("eng-1", "Alphabet Safari");
        let record = SelectionRecord::new("UKG", "English", option);
        assert!(record.matches("UKG", "English", "eng-1"));
        assert!(!record.matches("UKG", "English", "eng-2"));
        assert!(!record.matches("LKG", "English", "eng-1"));

        let empty = SelectionRecord::unselected("UKG", "English");
        assert!(!empty.matches("UKG", "English", ""));
    }

    #[test]
    fn test_skip_ignored_without_component() {
        let option = SubjectOption::new("evs-1", "Garden Facts").with_core("3001");
        let mut record = SelectionRecord::new("UKG", "EVS", option);
        record.skip_work = true;
        assert!(!record.is_skipped(Component::Work));

        record.skip_core = true;
        assert!(record.is_skipped(Component::Core));
    }

    #[test]
    fn test_custom_fields_are_independent() {
        let option = SubjectOption::new("eng-1", "Alphabet Safari");
        let mut record = SelectionRecord::new("UKG", "English", option);
        *record.custom_mut(Component::Core, CustomField::Title) = Some("My Title".to_string());

        assert_eq!(record.custom(Component::Core, CustomField::Title), Some("My Title"));
        assert_eq!(record.custom(Component::Core, CustomField::Id), None);
        assert_eq!(record.custom(Component::Work, CustomField::Title), None);
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("code".parse::<CustomField>(), Ok(CustomField::Id));
        assert_eq!("Spine".parse::<CustomField>(), Ok(CustomField::Spine));
        assert!("cover".parse::<CustomField>().is_err());
    }
}
