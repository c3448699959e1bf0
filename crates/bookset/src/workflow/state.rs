//! Workflow state persisted per school and class.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::booklist::PhysicalBookItem;
use crate::selection::SelectionStore;

/// Identifies one persisted workflow: a school and a class/grade.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeKey {
    pub school_id: String,
    pub class_name: String,
}

impl ScopeKey {
    pub fn new(school_id: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            school_id: school_id.into(),
            class_name: class_name.into(),
        }
    }

    /// Filesystem-safe stem for this key.
    ///
    /// Each part is percent-encoded, `_` included, so the `__` separator
    /// never occurs inside a part and distinct keys get distinct stems.
    ///
    /// ```
    /// use bookset::workflow::ScopeKey;
    ///
    /// let key = ScopeKey::new("school-42", "Class 1/A");
    /// assert_eq!(key.file_stem(), "school-42__Class%201%2FA");
    /// ```
    pub fn file_stem(&self) -> String {
        format!("{}__{}", sanitize(&self.school_id), sanitize(&self.class_name))
    }
}

impl std::fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.school_id, self.class_name)
    }
}

fn sanitize(part: &str) -> String {
    let mut encoded = String::with_capacity(part.len());
    for byte in part.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'.' {
            encoded.push(char::from(byte));
        } else {
            // Writing to a String cannot fail
            let _ = write!(encoded, "%{:02X}", byte);
        }
    }
    encoded
}

/// Everything the review screen needs to resume where the operator left off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowState {
    /// Free-text search over book titles.
    #[serde(default)]
    pub search_term: String,

    /// Active filters: subject names or book kind slugs.
    #[serde(default)]
    pub active_filters: IndexSet<String>,

    #[serde(default)]
    pub selections: SelectionStore,

    /// When the state was last saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl WorkflowState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selections(mut self, selections: SelectionStore) -> Self {
        self.selections = selections;
        self
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Add a filter; returns false if it was already active.
    pub fn add_filter(&mut self, filter: impl Into<String>) -> bool {
        self.active_filters.insert(filter.into())
    }

    /// Remove a filter; returns false if it was not active.
    pub fn remove_filter(&mut self, filter: &str) -> bool {
        self.active_filters.shift_remove(filter)
    }

    pub fn clear_filters(&mut self) {
        self.active_filters.clear();
        self.search_term.clear();
    }

    /// Whether a row passes the search term and the active filters.
    ///
    /// The search matches titles case-insensitively. A row passes the filters
    /// when no filter is active or any filter names its subject or kind.
    pub fn matches(&self, item: &PhysicalBookItem) -> bool {
        let term = self.search_term.trim().to_lowercase();
        let search_ok = term.is_empty() || item.title.to_lowercase().contains(&term);

        let filter_ok = self.active_filters.is_empty()
            || self.active_filters.iter().any(|filter| {
                filter.eq_ignore_ascii_case(item.kind.slug())
                    || item
                        .subject_name
                        .as_deref()
                        .is_some_and(|s| s.eq_ignore_ascii_case(filter))
            });

        search_ok && filter_ok
    }

    /// Rows of a derived list that pass the search and filters.
    pub fn filter_items<'a>(&self, items: &'a [PhysicalBookItem]) -> Vec<&'a PhysicalBookItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
