//! Shared testing utilities for pitchmail tests.

use assert_cmd::Command;
use pitchmail::{AppError, CompletionClient, CompletionRequest};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub const SLIMME_RECYCLING_CSV: &str = "Challenge Name,Description,URL\n\
Slimme Recycling,Plastic recycling project for SMEs,https://example.org/recycling\n\
Zonnedaken,Solar panels on industrial roofs,https://example.org/solar\n";

const ENV_VARS: &[&str] = &[
    "PITCHMAIL_API_KEY",
    "PITCHMAIL_ENDPOINT",
    "PITCHMAIL_DEPLOYMENT",
    "PITCHMAIL_API_VERSION",
    "RUST_LOG",
];

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write a file into the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Build a command for invoking the compiled `pitchmail` binary with a clean environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("pitchmail").expect("Failed to locate pitchmail binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path());
        for key in ENV_VARS {
            cmd.env_remove(key);
        }
        cmd
    }

    /// Build a command with generator settings pointing at `endpoint`.
    pub fn cli_with_endpoint(&self, endpoint: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("PITCHMAIL_API_KEY", "test-key").env("PITCHMAIL_ENDPOINT", endpoint);
        cmd
    }
}

/// Completion client returning a fixed reply and recording prompts.
#[derive(Clone)]
#[allow(dead_code)]
pub struct StubClient {
    pub reply: Result<String, String>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl StubClient {
    pub fn replying(text: &str) -> Self {
        Self { reply: Ok(text.to_string()), prompts: Arc::new(Mutex::new(Vec::new())) }
    }

    pub fn failing(message: &str) -> Self {
        Self { reply: Err(message.to_string()), prompts: Arc::new(Mutex::new(Vec::new())) }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl CompletionClient for StubClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(request.prompt.clone());
        self.reply.clone().map_err(AppError::Generation)
    }
}
