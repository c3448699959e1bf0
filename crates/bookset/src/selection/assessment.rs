//! Per-class assessment choices.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::catalogue::AssessmentVariant;

/// Assessment state for every class in a store.
///
/// All three parts are keyed by class name only and are cleared together
/// when a class is reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentState {
    /// Chosen edition per class. Absent means the default edition.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub variants: IndexMap<String, AssessmentVariant>,

    /// Classes whose assessment has been dropped.
    #[serde(default, skip_serializing_if = "IndexSet::is_empty")]
    pub excluded: IndexSet<String>,

    /// Printed title overrides per class.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub custom_titles: IndexMap<String, String>,
}

impl AssessmentState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current edition for a class.
    pub fn variant(&self, class_name: &str) -> AssessmentVariant {
        self.variants.get(class_name).copied().unwrap_or_default()
    }

    pub fn set_variant(&mut self, class_name: &str, variant: AssessmentVariant) {
        self.variants.insert(class_name.to_string(), variant);
    }

    pub fn is_excluded(&self, class_name: &str) -> bool {
        self.excluded.contains(class_name)
    }

    pub fn exclude(&mut self, class_name: &str) {
        self.excluded.insert(class_name.to_string());
    }

    pub fn restore(&mut self, class_name: &str) {
        self.excluded.shift_remove(class_name);
    }

    /// Title override for a class; `Some("")` is a deliberate blank.
    pub fn custom_title(&self, class_name: &str) -> Option<&str> {
        self.custom_titles.get(class_name).map(String::as_str)
    }

    pub fn set_custom_title(&mut self, class_name: &str, title: impl Into<String>) {
        self.custom_titles.insert(class_name.to_string(), title.into());
    }

    pub fn clear_custom_title(&mut self, class_name: &str) {
        self.custom_titles.shift_remove(class_name);
    }

    /// Forget everything about a class.
    pub fn reset_class(&mut self, class_name: &str) {
        self.variants.shift_remove(class_name);
        self.excluded.shift_remove(class_name);
        self.custom_titles.shift_remove(class_name);
    }
}
