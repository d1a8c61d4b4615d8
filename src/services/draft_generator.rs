//! Draft generator.
//!
//! Sends a rendered prompt through a [`CompletionClient`] and turns the
//! completion into an [`EmailDraft`]. One attempt per call: asking again is
//! how a caller gets an alternative draft.

use crate::domain::{AppError, EmailDraft, PromptText, TARGET_LANGUAGE};
use crate::ports::{CompletionClient, CompletionRequest};

/// Generates email drafts using an injected completion client.
#[derive(Debug, Clone)]
pub struct DraftGenerator<C> {
    client: C,
}

impl<C: CompletionClient> DraftGenerator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Request one draft for the prompt.
    pub fn generate(&self, prompt: &PromptText) -> Result<EmailDraft, AppError> {
        let request = CompletionRequest { system: system_instruction(), prompt: prompt.to_string() };

        log::info!("requesting draft ({} prompt chars)", request.prompt.len());
        let completion = self.client.complete(&request)?;

        EmailDraft::from_completion(&completion)
            .ok_or_else(|| AppError::generation("the service returned an empty completion"))
    }
}

fn system_instruction() -> String {
    format!(
        "You write persuasive, personalised marketing emails. Always answer in {}.",
        TARGET_LANGUAGE
    )
}
