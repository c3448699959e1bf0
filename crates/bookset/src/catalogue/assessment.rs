//! Assessment editions offered per class.

use serde::{Deserialize, Serialize};

/// Edition of the assessment book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentVariant {
    /// Printed with a marks column.
    #[default]
    WithMarks,
    /// Printed without marks.
    WithoutMarks,
}

impl AssessmentVariant {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            AssessmentVariant::WithMarks => "With Marks",
            AssessmentVariant::WithoutMarks => "Without Marks",
        }
    }

    /// The other edition.
    pub fn toggled(&self) -> Self {
        match self {
            AssessmentVariant::WithMarks => AssessmentVariant::WithoutMarks,
            AssessmentVariant::WithoutMarks => AssessmentVariant::WithMarks,
        }
    }
}

impl std::str::FromStr for AssessmentVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "with_marks" | "with" | "marks" => Ok(AssessmentVariant::WithMarks),
            "without_marks" | "without" | "no_marks" => Ok(AssessmentVariant::WithoutMarks),
            _ => Err(format!(
                "Unknown assessment variant: {}. Use with-marks or without-marks.",
                s
            )),
        }
    }
}

impl std::fmt::Display for AssessmentVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentVariant::WithMarks => write!(f, "with-marks"),
            AssessmentVariant::WithoutMarks => write!(f, "without-marks"),
        }
    }
}

/// The assessment book the catalogue assigns to a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentDefinition {
    /// Catalogue code of the assessment book.
    pub id: String,

    /// Default printed title.
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spine: Option<String>,

    /// Preview document link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Edition this definition prints.
    #[serde(default)]
    pub variant: AssessmentVariant,
}

impl AssessmentDefinition {
    /// Create a definition with an id, title and edition.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        variant: AssessmentVariant,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            spine: None,
            link: None,
            variant,
        }
    }

    /// Set the preview link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the spine code.
    pub fn with_spine(mut self, spine: impl Into<String>) -> Self {
        self.spine = Some(spine.into());
        self
    }
}
