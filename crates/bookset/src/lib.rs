//! Bookset: selection and derivation engine for per-class school book orders.
//!
//! An operator picks one catalogue option per subject, drops or restores
//! individual books, and renames titles and codes. Bookset turns those sparse
//! choices into a deterministic, orderable list of physical books.
//!
//! # Core Principles
//!
//! - **Deterministic**: The book list is a pure function of the selections
//! - **Reversible**: Dropping a book never discards its customizations
//! - **Tolerant**: Stale keys and unreadable saved state degrade to no-ops and defaults
//!
//! # Example
//!
//! ```
//! use bookset::{DerivationEngine, EngineConfig, SelectionStore};
//! use bookset::catalogue::{ClassCatalogue, StaticCatalogue};
//!
//! let catalogue = StaticCatalogue::new().with_class("UKG", ClassCatalogue::new());
//! let config = EngineConfig::default();
//!
//! let mut store = SelectionStore::new();
//! store.add_manual_subject("UKG", "French", "999001", "C-FR1", "S-FR1", &config);
//!
//! let items = DerivationEngine::with_config(&catalogue, config).derive(&store, "UKG");
//! assert_eq!(items[0].title, "French (Custom Book)");
//! ```

pub mod booklist;
pub mod catalogue;
pub mod config;
pub mod customize;
pub mod error;
pub mod selection;
pub mod workflow;

pub use booklist::{
    BookAction, BookKind, BookListSummary, DerivationEngine, OrderLine, PhysicalBookItem, ViewMode,
};
pub use catalogue::{
    AssessmentDefinition, AssessmentVariant, CatalogueProvider, Component, StaticCatalogue,
    SubjectOption,
};
pub use config::EngineConfig;
pub use customize::{resolve_component, EffectiveComponent};
pub use error::{BooksetError, Result};
pub use selection::{CustomField, SelectionRecord, SelectionStore};
pub use workflow::{load_workflow, save_workflow, ScopeKey, WorkflowState};
