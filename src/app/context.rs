use std::path::{Path, PathBuf};

use crate::domain::{AppError, EmailDraft, PromptText};
use crate::ports::CompletionClient;
use crate::services::{ChallengeCatalog, DraftGenerator, ReloadOutcome};

/// Application context holding the loaded challenges and the draft generator.
pub struct AppContext<C: CompletionClient> {
    source: PathBuf,
    catalog: ChallengeCatalog,
    generator: DraftGenerator<C>,
}

impl<C: CompletionClient> AppContext<C> {
    pub fn new(source: &Path, catalog: ChallengeCatalog, client: C) -> Self {
        Self { source: source.to_path_buf(), catalog, generator: DraftGenerator::new(client) }
    }

    /// Load the source file and wire up the generator.
    pub fn open(source: &Path, client: C) -> Result<Self, AppError> {
        Ok(Self::new(source, ChallengeCatalog::open(source)?, client))
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn catalog(&self) -> &ChallengeCatalog {
        &self.catalog
    }

    /// Re-read the source file and publish the result.
    pub fn reload(&self) -> Result<ReloadOutcome, AppError> {
        self.catalog.reload(&self.source)
    }

    pub fn prompt(&self, challenge: &str, company_name: &str) -> Result<PromptText, AppError> {
        self.catalog.prompt_for(challenge, company_name)
    }

    /// Build the prompt against the current store and request one draft.
    pub fn draft(&self, challenge: &str, company_name: &str) -> Result<EmailDraft, AppError> {
        let prompt = self.prompt(challenge, company_name)?;
        self.generator.generate(&prompt)
    }
}
