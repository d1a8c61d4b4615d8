pub mod catalog;
pub mod completion_client_http;
pub mod config_loader;
pub mod draft_generator;
pub mod prompt_builder;
pub mod record_reader;

pub use catalog::{ChallengeCatalog, ReloadOutcome};
pub use completion_client_http::HttpCompletionClient;
pub use config_loader::load_config;
pub use draft_generator::DraftGenerator;
