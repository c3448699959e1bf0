//! JSON-backed catalogue.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{BooksetError, Result};

use super::assessment::{AssessmentDefinition, AssessmentVariant};
use super::option::{SubjectOffering, SubjectOption};
use super::provider::CatalogueProvider;

/// One row of a class's assessment eligibility table.
///
/// A `None` type id matches any selected option for that subject, but the
/// subject must still have a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRule {
    /// English option type id this row applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,

    /// Maths option type id this row applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maths: Option<String>,

    /// The assessment book assigned by this row.
    pub assessment: AssessmentDefinition,
}

impl AssessmentRule {
    /// A row that matches any English and Maths selection.
    pub fn any(assessment: AssessmentDefinition) -> Self {
        Self {
            english: None,
            maths: None,
            assessment,
        }
    }

    /// Restrict the row to specific English and Maths options.
    pub fn for_options(mut self, english: impl Into<String>, maths: impl Into<String>) -> Self {
        self.english = Some(english.into());
        self.maths = Some(maths.into());
        self
    }

    fn matches(
        &self,
        english: &SubjectOption,
        maths: &SubjectOption,
        variant: AssessmentVariant,
    ) -> bool {
        self.assessment.variant == variant
            && self.english.as_deref().is_none_or(|id| id == english.type_id)
            && self.maths.as_deref().is_none_or(|id| id == maths.type_id)
    }
}

/// Catalogue data for one class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCatalogue {
    /// Options per subject, in catalogue order.
    #[serde(default)]
    pub subjects: IndexMap<String, Vec<SubjectOption>>,

    /// Eligibility table, first matching row wins.
    #[serde(default)]
    pub assessments: Vec<AssessmentRule>,
}

impl ClassCatalogue {
    /// Create an empty class catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option to a subject.
    pub fn with_option(mut self, subject: impl Into<String>, option: SubjectOption) -> Self {
        self.subjects.entry(subject.into()).or_default().push(option);
        self
    }

    /// Append an assessment eligibility row.
    pub fn with_assessment(mut self, rule: AssessmentRule) -> Self {
        self.assessments.push(rule);
        self
    }
}

/// A catalogue held entirely in memory, usually loaded from JSON.
///
/// ```
/// use bookset::catalogue::{CatalogueProvider, StaticCatalogue};
///
/// let json = r#"{"classes": {"UKG": {"subjects": {"English": [
///     {"type_id": "eng-1", "label": "Alphabet Safari", "core_id": "1001"}
/// ]}}}}"#;
/// let catalogue = StaticCatalogue::from_json(json).unwrap();
/// assert!(catalogue.has_class("UKG"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCatalogue {
    /// Classes in catalogue order.
    #[serde(default)]
    pub classes: IndexMap<String, ClassCatalogue>,
}

impl StaticCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a class.
    pub fn with_class(mut self, class_name: impl Into<String>, class: ClassCatalogue) -> Self {
        self.classes.insert(class_name.into(), class);
        self
    }

    /// Parse a catalogue document.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalogue: StaticCatalogue = serde_json::from_str(json)
            .map_err(|e| BooksetError::Catalogue(format!("Failed to parse catalogue: {}", e)))?;
        catalogue.validate()?;
        Ok(catalogue)
    }

    /// Load a catalogue document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| BooksetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let reader = BufReader::new(file);
        let catalogue: StaticCatalogue = serde_json::from_reader(reader).map_err(|e| {
            BooksetError::Catalogue(format!(
                "Failed to parse catalogue '{}': {}",
                path.display(),
                e
            ))
        })?;
        catalogue.validate()?;

        Ok(catalogue)
    }

    /// Class names in catalogue order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Check the per-subject type id uniqueness the selection key relies on.
    pub fn validate(&self) -> Result<()> {
        for (class_name, class) in &self.classes {
            for (subject, options) in &class.subjects {
                for (i, option) in options.iter().enumerate() {
                    if options[..i].iter().any(|o| o.type_id == option.type_id) {
                        return Err(BooksetError::Catalogue(format!(
                            "Duplicate type id '{}' in {} / {}",
                            option.type_id, class_name, subject
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

impl CatalogueProvider for StaticCatalogue {
    fn subjects_for(&self, class_name: &str) -> Option<Vec<SubjectOffering>> {
        let class = self.classes.get(class_name)?;
        Some(
            class
                .subjects
                .iter()
                .map(|(subject, options)| SubjectOffering {
                    subject: subject.clone(),
                    options: options.clone(),
                })
                .collect(),
        )
    }

    fn assessment_for(
        &self,
        class_name: &str,
        english: Option<&SubjectOption>,
        maths: Option<&SubjectOption>,
        variant: AssessmentVariant,
    ) -> Option<AssessmentDefinition> {
        // Both selections are required before any assessment applies.
        let (english, maths) = (english?, maths?);
        self.classes
            .get(class_name)?
            .assessments
            .iter()
            .find(|rule| rule.matches(english, maths, variant))
            .map(|rule| rule.assessment.clone())
    }
}
