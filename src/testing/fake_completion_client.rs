use crate::domain::AppError;
use crate::ports::{CompletionClient, CompletionRequest};
use std::sync::{Arc, Mutex};

/// Deterministic completion client that records every request.
#[derive(Clone)]
pub struct FakeCompletionClient {
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
    pub reply: Result<String, String>,
}

impl FakeCompletionClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), reply: Ok(text.into()) }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), reply: Err(message.into()) }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl CompletionClient for FakeCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().map_err(AppError::Generation)
    }
}
