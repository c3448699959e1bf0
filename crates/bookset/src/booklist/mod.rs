//! Book list derivation.
//!
//! Turns the selection store into the ordered rows an operator reviews
//! before confirming an order.
//!
//! # Usage
//!
//! ```
//! use bookset::booklist::DerivationEngine;
//! use bookset::catalogue::{CatalogueProvider, ClassCatalogue, StaticCatalogue, SubjectOption};
//! use bookset::selection::SelectionStore;
//!
//! let catalogue = StaticCatalogue::new().with_class(
//!     "UKG",
//!     ClassCatalogue::new().with_option(
//!         "English",
//!         SubjectOption::new("eng-1", "Alphabet Safari").with_core("1001"),
//!     ),
//! );
//! let mut store = SelectionStore::new();
//! let option = catalogue.find_option("UKG", "English", "eng-1").unwrap();
//! store.select_option("UKG", "English", option);
//!
//! let items = DerivationEngine::new(&catalogue).derive(&store, "UKG");
//! assert_eq!(items[0].title, "Alphabet Safari (Skill Book)");
//! ```

mod engine;
mod item;
pub mod naming;

pub use engine::{DerivationEngine, ResolvedAssessment, ENGLISH_SUBJECT, MATHS_SUBJECT};
pub use item::{
    BookAction, BookCounts, BookKind, BookListSummary, OrderLine, PhysicalBookItem, ViewMode,
};
