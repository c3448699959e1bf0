//! Catalogue provider trait.

use super::assessment::{AssessmentDefinition, AssessmentVariant};
use super::option::{SubjectOffering, SubjectOption};

/// Source of subject options and assessment eligibility.
///
/// Both lookups must be pure: the same input always yields the same output.
pub trait CatalogueProvider {
    /// Ordered subject offerings for a class, or `None` for an unknown class.
    fn subjects_for(&self, class_name: &str) -> Option<Vec<SubjectOffering>>;

    /// The assessment a class gets for its English and Maths choices.
    ///
    /// `english` and `maths` are `None` when the class has no selection for
    /// that subject.
    fn assessment_for(
        &self,
        class_name: &str,
        english: Option<&SubjectOption>,
        maths: Option<&SubjectOption>,
        variant: AssessmentVariant,
    ) -> Option<AssessmentDefinition>;

    /// Whether the catalogue knows the class at all.
    fn has_class(&self, class_name: &str) -> bool {
        self.subjects_for(class_name).is_some()
    }

    /// Find one option of one subject.
    fn find_option(&self, class_name: &str, subject: &str, type_id: &str) -> Option<SubjectOption> {
        self.subjects_for(class_name)?
            .into_iter()
            .find(|s| s.subject.eq_ignore_ascii_case(subject))
            .and_then(|s| s.option(type_id).cloned())
    }
}
