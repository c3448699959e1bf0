//! Workflow persistence.
//!
//! The search term, active filters and selection store of one school and
//! class travel together as a [`WorkflowState`]. Loading is tolerant: an
//! absent or unreadable blob yields an empty state instead of an error.
//!
//! # Usage
//!
//! ```
//! use bookset::workflow::{load_workflow, save_workflow, MemoryStorage, ScopeKey};
//!
//! let mut storage = MemoryStorage::new();
//! let key = ScopeKey::new("school-42", "UKG");
//!
//! let mut state = load_workflow(&storage, &key);
//! state.search_term = "safari".to_string();
//! save_workflow(&mut storage, &key, &mut state).unwrap();
//!
//! assert_eq!(load_workflow(&storage, &key).search_term, "safari");
//! ```

mod state;
mod storage;

pub use state::{ScopeKey, WorkflowState};
pub use storage::{FileStorage, MemoryStorage, WorkflowStorage};

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::Result;

/// Load the workflow for a key, falling back to an empty state.
pub fn load_workflow<S: WorkflowStorage + ?Sized>(storage: &S, key: &ScopeKey) -> WorkflowState {
    let blob = match storage.load(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!(%key, "no saved workflow");
            return WorkflowState::default();
        }
        Err(e) => {
            warn!(%key, "failed to load workflow, starting empty: {}", e);
            return WorkflowState::default();
        }
    };

    match serde_json::from_str(&blob) {
        Ok(state) => state,
        Err(e) => {
            warn!(%key, "malformed workflow, starting empty: {}", e);
            WorkflowState::default()
        }
    }
}

/// Save the workflow for a key.
///
/// `saved_at` on the caller's state is updated only once the write succeeds.
pub fn save_workflow<S: WorkflowStorage + ?Sized>(
    storage: &mut S,
    key: &ScopeKey,
    state: &mut WorkflowState,
) -> Result<()> {
    let saved_at = Some(Utc::now());
    let stamped = WorkflowState {
        saved_at,
        ..state.clone()
    };
    let blob = serde_json::to_string_pretty(&stamped)?;
    storage.save(key, &blob)?;

    state.saved_at = saved_at;
    debug!(%key, records = state.selections.records.len(), "saved workflow");
    Ok(())
}

/// Remove the saved workflow for a key.
pub fn clear_workflow<S: WorkflowStorage + ?Sized>(storage: &mut S, key: &ScopeKey) -> Result<()> {
    storage.clear(key)
}
