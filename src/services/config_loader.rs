//! Configuration loading: optional TOML file, then environment overrides.

use std::fs;
use std::path::Path;

use url::Url;

use crate::domain::{AppConfig, AppError};

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pitchmail.toml";

const ENDPOINT_ENV: &str = "PITCHMAIL_ENDPOINT";
const DEPLOYMENT_ENV: &str = "PITCHMAIL_DEPLOYMENT";
const API_VERSION_ENV: &str = "PITCHMAIL_API_VERSION";

/// Load configuration.
///
/// An explicit path must exist. Without one, `pitchmail.toml` in the working
/// directory is used when present, otherwise defaults apply. Environment
/// variables override file values.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    let mut config = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            read_config_file(path)?
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() { read_config_file(path)? } else { AppConfig::default() }
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<AppConfig, AppError> {
    log::debug!("reading config from {}", path.display());
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn apply_env_overrides(config: &mut AppConfig) -> Result<(), AppError> {
    if let Some(endpoint) = env_value(ENDPOINT_ENV) {
        let url = Url::parse(&endpoint).map_err(|e| {
            AppError::config_error(format!("Invalid {} '{}': {}", ENDPOINT_ENV, endpoint, e))
        })?;
        config.generator.endpoint = Some(url);
    }
    if let Some(deployment) = env_value(DEPLOYMENT_ENV) {
        config.generator.deployment = deployment;
    }
    if let Some(api_version) = env_value(API_VERSION_ENV) {
        config.generator.api_version = api_version;
    }
    Ok(())
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}
