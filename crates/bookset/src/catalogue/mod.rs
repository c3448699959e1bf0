//! Catalogue of subject options and assessment eligibility.
//!
//! The catalogue is read-only input to the engine. It is consumed through
//! [`CatalogueProvider`]; [`StaticCatalogue`] is the JSON-backed
//! implementation used by the CLI and the tests.

mod assessment;
mod option;
mod provider;
mod static_catalogue;

pub use assessment::{AssessmentDefinition, AssessmentVariant};
pub use option::{Component, SubjectOffering, SubjectOption};
pub use provider::CatalogueProvider;
pub use static_catalogue::{AssessmentRule, ClassCatalogue, StaticCatalogue};
