//! Selection store and mutation API.
//!
//! # Usage
//!
//! ```
//! use bookset::catalogue::{Component, SubjectOption};
//! use bookset::selection::SelectionStore;
//!
//! let mut store = SelectionStore::new();
//! let option = SubjectOption::new("eng-1", "Alphabet Safari").with_core("1001");
//! store.select_option("UKG", "English", option);
//! store.drop_component(Component::Core, "UKG", "English", "eng-1");
//!
//! assert!(store.record("UKG", "English", "eng-1").unwrap().skip_core);
//! ```

mod assessment;
pub mod mutation;
mod record;
mod store;

pub use assessment::AssessmentState;
pub use mutation::{validate_manual_subject, ManualSubject, MANUAL_LABEL};
pub use record::{CustomField, SelectionRecord};
pub use store::SelectionStore;
