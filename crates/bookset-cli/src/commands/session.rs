//! Shared setup: catalogue, config and the saved workflow of one class.

use std::error::Error;

use bookset::workflow::FileStorage;
use bookset::{
    load_workflow, save_workflow, CatalogueProvider, DerivationEngine, EngineConfig, ScopeKey,
    SelectionRecord, StaticCatalogue, SubjectOption, WorkflowState,
};
use tracing::debug;

use crate::cli::SessionArgs;

pub struct Session {
    pub catalogue: StaticCatalogue,
    pub config: EngineConfig,
    pub storage: FileStorage,
    pub key: ScopeKey,
    pub state: WorkflowState,
}

impl Session {
    pub fn open(args: &SessionArgs) -> Result<Self, Box<dyn Error>> {
        let class_name = args
            .class
            .clone()
            .ok_or("No class given. Pass --class <NAME>.")?;

        if !args.catalogue.exists() {
            return Err(format!("Catalogue not found: {}", args.catalogue.display()).into());
        }
        let catalogue = StaticCatalogue::load(&args.catalogue)?;

        let config = match &args.config {
            Some(path) => EngineConfig::load(path)?,
            None => EngineConfig::default(),
        };

        let mut storage = FileStorage::new(args.store.clone());
        if args.history {
            storage = storage.with_history();
        }

        let key = ScopeKey::new(args.school.clone(), class_name);
        let state = load_workflow(&storage, &key);
        debug!(%key, records = state.selections.records.len(), "opened session");

        Ok(Self {
            catalogue,
            config,
            storage,
            key,
            state,
        })
    }

    pub fn class_name(&self) -> &str {
        &self.key.class_name
    }

    pub fn engine(&self) -> DerivationEngine<'_, StaticCatalogue> {
        DerivationEngine::with_config(&self.catalogue, self.config.clone())
    }

    /// Fail early when the catalogue has no such class.
    pub fn require_class(&self) -> Result<(), Box<dyn Error>> {
        if self.catalogue.has_class(self.class_name()) {
            return Ok(());
        }
        let known: Vec<&str> = self.catalogue.class_names().collect();
        Err(format!(
            "Class '{}' is not in the catalogue (known: {})",
            self.class_name(),
            known.join(", ")
        )
        .into())
    }

    /// Resolve a catalogue option, returning the catalogue's spelling of the subject.
    pub fn catalogue_option(
        &self,
        subject: &str,
        type_id: &str,
    ) -> Result<(String, SubjectOption), Box<dyn Error>> {
        self.require_class()?;
        let offerings = self.catalogue.subjects_for(self.class_name()).unwrap_or_default();
        let offering = offerings
            .iter()
            .find(|o| o.subject.eq_ignore_ascii_case(subject))
            .ok_or_else(|| format!("No subject '{}' in {}", subject, self.class_name()))?;
        let option = offering
            .option(type_id)
            .cloned()
            .ok_or_else(|| format!("No option '{}' for {}", type_id, offering.subject))?;
        Ok((offering.subject.clone(), option))
    }

    /// Find a saved selection, matching the subject case-insensitively.
    pub fn selection(
        &self,
        subject: &str,
        type_id: &str,
    ) -> Result<&SelectionRecord, Box<dyn Error>> {
        self.state
            .selections
            .records_for(self.class_name())
            .find(|r| r.subject_name.eq_ignore_ascii_case(subject) && r.type_id() == Some(type_id))
            .ok_or_else(|| {
                format!(
                    "No selection '{}' for {} in {}. Run 'bookset select' first.",
                    type_id,
                    subject,
                    self.class_name()
                )
                .into()
            })
    }

    pub fn save(&mut self) -> Result<(), Box<dyn Error>> {
        save_workflow(&mut self.storage, &self.key, &mut self.state)?;
        Ok(())
    }
}
