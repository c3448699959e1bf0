//! Fuzz target for loading persisted workflow state.
//!
//! Loading must never panic: any blob either parses or falls back to the
//! empty state, and whatever loads must derive without panicking.

#![no_main]

use bookset::catalogue::{ClassCatalogue, StaticCatalogue};
use bookset::workflow::{load_workflow, MemoryStorage, ScopeKey, WorkflowStorage};
use bookset::DerivationEngine;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(blob) = std::str::from_utf8(data) else {
        return;
    };

    let key = ScopeKey::new("fuzz", "UKG");
    let mut storage = MemoryStorage::new();
    if storage.save(&key, blob).is_err() {
        return;
    }

    let state = load_workflow(&storage, &key);
    let catalogue = StaticCatalogue::new().with_class("UKG", ClassCatalogue::new());
    let _ = DerivationEngine::new(&catalogue).derive(&state.selections, "UKG");
});
