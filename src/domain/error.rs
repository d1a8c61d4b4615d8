use std::io;

use thiserror::Error;

/// Library-wide error type for pitchmail operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Source table is malformed or lacks a required column.
    #[error("Invalid challenge data: {0}")]
    DataFormat(String),

    /// Missing company name or unresolved challenge selection.
    #[error("{0}")]
    Validation(String),

    /// The text-generation service failed or returned nothing usable.
    #[error("Email generation failed: {0}")]
    Generation(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn data_format<S: Into<String>>(message: S) -> Self {
        AppError::DataFormat(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    pub fn generation<S: Into<String>>(message: S) -> Self {
        AppError::Generation(message.into())
    }
}
