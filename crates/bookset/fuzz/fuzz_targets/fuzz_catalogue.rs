//! Fuzz target for catalogue documents.

#![no_main]

use bookset::catalogue::{CatalogueProvider, StaticCatalogue};
use bookset::AssessmentVariant;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(catalogue) = StaticCatalogue::from_json(json) {
        for class_name in catalogue.class_names() {
            let subjects = catalogue.subjects_for(class_name).unwrap_or_default();
            let first = subjects.first().and_then(|s| s.options.first());
            let variant = AssessmentVariant::WithMarks;
            let _ = catalogue.assessment_for(class_name, first, first, variant);
        }
    }
});
