//! Domain types: challenge records, email values, configuration, errors.

mod challenge;
mod config;
mod email;
mod error;
mod selection;

pub use challenge::{ChallengeRecord, ChallengeStore};
pub use config::{AppConfig, GeneratorConfig};
pub use email::{EmailDraft, EmailRequest, PromptText, TARGET_LANGUAGE};
pub use error::AppError;
pub use selection::{Selection, parse_selection};
