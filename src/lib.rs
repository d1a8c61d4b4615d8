//! pitchmail: draft SME outreach emails for innovation challenges.
//!
//! The pipeline is linear: load a challenge table, build a prompt for one
//! challenge and company, send it to a text-generation service, show the draft.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

pub use domain::{
    AppConfig, AppError, ChallengeRecord, ChallengeStore, EmailDraft, EmailRequest,
    GeneratorConfig, PromptText, Selection, TARGET_LANGUAGE, parse_selection,
};
pub use ports::{CompletionClient, CompletionRequest};
pub use services::{
    ChallengeCatalog, DraftGenerator, HttpCompletionClient, ReloadOutcome, load_config,
};

/// Load a challenge store from a CSV file or spreadsheet workbook.
pub fn load_store(source: &Path) -> Result<ChallengeStore, AppError> {
    services::record_reader::load(source)
}

/// Build the prompt for a selected challenge and company name.
///
/// Never contacts the generation service.
pub fn build_prompt(
    record: Option<&ChallengeRecord>,
    company_name: &str,
) -> Result<PromptText, AppError> {
    services::prompt_builder::build(record, company_name)
}

/// Request one email draft for a prompt.
pub fn generate_draft<C: CompletionClient>(
    client: C,
    prompt: &PromptText,
) -> Result<EmailDraft, AppError> {
    DraftGenerator::new(client).generate(prompt)
}
