//! Derived book rows.

use serde::{Deserialize, Serialize};

use crate::catalogue::Component;

/// What kind of physical book a row is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookKind {
    Core,
    Work,
    Addon,
    Assessment,
}

impl BookKind {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            BookKind::Core => "Core",
            BookKind::Work => "Workbook",
            BookKind::Addon => "Add-on",
            BookKind::Assessment => "Assessment",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            BookKind::Core => "core",
            BookKind::Work => "work",
            BookKind::Addon => "addon",
            BookKind::Assessment => "assessment",
        }
    }

    /// The selection component behind this kind, if any.
    pub fn component(&self) -> Option<Component> {
        match self {
            BookKind::Core => Some(Component::Core),
            BookKind::Work => Some(Component::Work),
            BookKind::Addon => Some(Component::Addon),
            BookKind::Assessment => None,
        }
    }
}

impl From<Component> for BookKind {
    fn from(component: Component) -> Self {
        match component {
            Component::Core => BookKind::Core,
            Component::Work => BookKind::Work,
            Component::Addon => BookKind::Addon,
        }
    }
}

/// Action the operator can take on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookAction {
    Drop,
    Restore,
}

/// Whether the caller may act on the derived rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Editable,
    /// No actions are attached to any row: dropped rows lose Restore as
    /// well as active rows losing Drop.
    ReadOnly,
}

/// One printable book as the operator sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalBookItem {
    /// Stable identity within a class.
    pub key: String,

    pub title: String,

    pub kind: BookKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_link: Option<String>,

    pub class_name: String,

    /// Owning subject; `None` for the assessment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,

    /// Type id of the owning option; `None` for the assessment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,

    pub dropped: bool,

    #[serde(default)]
    pub actions: Vec<BookAction>,
}

impl PhysicalBookItem {
    /// Actions available for a row in the given state.
    pub fn actions_for(dropped: bool, mode: ViewMode) -> Vec<BookAction> {
        match (mode, dropped) {
            (ViewMode::ReadOnly, _) => Vec::new(),
            (ViewMode::Editable, true) => vec![BookAction::Restore],
            (ViewMode::Editable, false) => vec![BookAction::Drop],
        }
    }

    /// Key of a subject component row.
    pub fn component_key(
        class_name: &str,
        subject_name: &str,
        type_id: &str,
        kind: BookKind,
    ) -> String {
        format!("{}::{}::{}::{}", class_name, subject_name, type_id, kind.slug())
    }

    /// Key of the assessment row.
    pub fn assessment_key(class_name: &str, assessment_id: &str) -> String {
        format!("{}::assessment::{}", class_name, assessment_id)
    }

    pub fn has_preview(&self) -> bool {
        self.preview_link.is_some()
    }

    pub fn can(&self, action: BookAction) -> bool {
        self.actions.contains(&action)
    }
}

/// One line of a confirmed order.
///
/// Title, id and spine are the printed values after operator overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Same key as the derived row.
    pub key: String,

    pub kind: BookKind,

    pub class_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,

    pub title: String,

    /// Catalogue code to order.
    pub id: String,

    #[serde(default)]
    pub spine: Option<String>,
}

/// Per-kind row counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCounts {
    pub core: usize,
    pub work: usize,
    pub addon: usize,
    pub assessment: usize,
}

impl BookCounts {
    pub fn total(&self) -> usize {
        self.core + self.work + self.addon + self.assessment
    }

    fn bump(&mut self, kind: BookKind) {
        match kind {
            BookKind::Core => self.core += 1,
            BookKind::Work => self.work += 1,
            BookKind::Addon => self.addon += 1,
            BookKind::Assessment => self.assessment += 1,
        }
    }
}

/// Summary of a derived book list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookListSummary {
    pub class_name: String,
    pub active: BookCounts,
    pub dropped: BookCounts,
}

impl BookListSummary {
    /// Count the rows of a derived list.
    pub fn from_items(class_name: impl Into<String>, items: &[PhysicalBookItem]) -> Self {
        let mut summary = Self {
            class_name: class_name.into(),
            ..Self::default()
        };
        for item in items {
            if item.dropped {
                summary.dropped.bump(item.kind);
            } else {
                summary.active.bump(item.kind);
            }
        }
        summary
    }

    pub fn total_items(&self) -> usize {
        self.active.total() + self.dropped.total()
    }

    /// Whether there is anything left to order.
    pub fn is_orderable(&self) -> bool {
        self.active.total() > 0
    }
}
