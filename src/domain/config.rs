//! Application configuration domain models.

use serde::Deserialize;
use url::Url;

/// Configuration loaded from `pitchmail.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Text-generation service settings.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Azure OpenAI chat-completions settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`.
    #[serde(default)]
    pub endpoint: Option<Url>,
    /// Model deployment name.
    #[serde(default = "default_deployment")]
    pub deployment: String,
    /// API version query parameter.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Sampling temperature; the service default applies when unset.
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            deployment: default_deployment(),
            api_version: default_api_version(),
            timeout_secs: default_timeout(),
            temperature: None,
        }
    }
}

fn default_deployment() -> String {
    "gpt-4".to_string()
}

fn default_api_version() -> String {
    "2023-05-15".to_string()
}

fn default_timeout() -> u64 {
    60
}
