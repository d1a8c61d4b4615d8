//! Currently published challenge store.
//!
//! A reload reads and parses the new source completely before publishing it.
//! Readers holding an earlier snapshot keep using it undisturbed; every new
//! lookup goes through the latest snapshot.

use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::domain::{AppError, ChallengeStore, EmailRequest, PromptText};
use crate::services::{prompt_builder, record_reader};

/// Outcome of replacing the published store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadOutcome {
    pub challenges: usize,
    /// False when the new source has the same fingerprint as the old one.
    pub changed: bool,
}

/// Holder of the current [`ChallengeStore`].
#[derive(Debug)]
pub struct ChallengeCatalog {
    current: RwLock<Arc<ChallengeStore>>,
}

impl ChallengeCatalog {
    pub fn new(store: ChallengeStore) -> Self {
        Self { current: RwLock::new(Arc::new(store)) }
    }

    /// Load the initial store from a file.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        Ok(Self::new(record_reader::load(path)?))
    }

    /// The store as of now.
    pub fn snapshot(&self) -> Arc<ChallengeStore> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Publish a fully built store in place of the current one.
    pub fn replace(&self, store: ChallengeStore) -> ReloadOutcome {
        let store = Arc::new(store);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let outcome = ReloadOutcome {
            challenges: store.len(),
            changed: guard.fingerprint() != store.fingerprint(),
        };
        *guard = store;
        outcome
    }

    /// Load a new source file and publish it. On failure the current store stays.
    pub fn reload(&self, path: &Path) -> Result<ReloadOutcome, AppError> {
        let store = record_reader::load(path)?;
        let outcome = self.replace(store);
        log::info!(
            "reloaded {} challenges from {} ({})",
            outcome.challenges,
            path.display(),
            if outcome.changed { "changed" } else { "unchanged" }
        );
        Ok(outcome)
    }

    /// Build the prompt for a challenge resolved from the current store.
    pub fn prompt_for(&self, challenge: &str, company_name: &str) -> Result<PromptText, AppError> {
        let store = self.snapshot();
        let record = store.get(challenge).ok_or_else(|| {
            let name = challenge.trim();
            AppError::validation(format!("No exact match found for challenge '{}'", name))
        })?;
        prompt_builder::render(&EmailRequest::new(Some(record), company_name)?)
    }
}
