//! Azure OpenAI chat-completions client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GeneratorConfig};
use crate::ports::{CompletionClient, CompletionRequest};

const API_KEY_HEADER: &str = "api-key";
const API_KEY_ENV: &str = "PITCHMAIL_API_KEY";

/// HTTP client for an Azure OpenAI chat deployment.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    url: Url,
    temperature: Option<f32>,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("url", &self.url)
            .field("temperature", &self.temperature)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeneratorConfig) -> Result<Self, AppError> {
        let endpoint = config.endpoint.as_ref().ok_or_else(|| {
            AppError::config_error(
                "No generator endpoint configured. Set PITCHMAIL_ENDPOINT or [generator].endpoint",
            )
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            url: completions_url(endpoint, &config.deployment, &config.api_version)?,
            temperature: config.temperature,
            client,
        })
    }

    /// Create from the API key environment variable.
    pub fn from_env_with_config(config: &GeneratorConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::config_error(format!("{} environment variable not set", API_KEY_ENV))
            })?;

        Self::new(api_key, config)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Build `{endpoint}/openai/deployments/{deployment}/chat/completions?api-version={v}`.
fn completions_url(endpoint: &Url, deployment: &str, api_version: &str) -> Result<Url, AppError> {
    let mut url = endpoint.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::config_error(format!("Invalid generator endpoint: {}", endpoint)))?
        .pop_if_empty()
        .extend(["openai", "deployments", deployment, "chat", "completions"]);
    url.query_pairs_mut().clear().append_pair("api-version", api_version);
    Ok(url)
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    messages: Vec<ApiMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ApiResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        let api_request = ApiRequest {
            messages: vec![
                ApiMessage { role: "system", content: &request.system },
                ApiMessage { role: "user", content: &request.prompt },
            ],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(self.url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&api_request)
            .send()
            .map_err(|e| AppError::generation(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        log::debug!("completion service responded with {}", status);

        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::generation(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| AppError::generation(format!("Failed to parse response: {}", e)))?;

        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(AppError::generation("the service returned an empty completion"));
        }

        Ok(content)
    }
}
