//! Text-generation service port definition.

use crate::domain::AppError;

/// Request sent to the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Standing instruction, including the output-language directive.
    pub system: String,
    /// The rendered prompt.
    pub prompt: String,
}

/// Port for text-generation operations.
pub trait CompletionClient {
    /// Send one request and return the raw completion text.
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError>;
}

impl<C: CompletionClient + ?Sized> CompletionClient for &C {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        (**self).complete(request)
    }
}

impl<C: CompletionClient + ?Sized> CompletionClient for Box<C> {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        (**self).complete(request)
    }
}
