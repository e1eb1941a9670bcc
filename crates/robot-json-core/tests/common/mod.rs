//! Shared test doubles for the exporter capabilities

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::PathBuf;

use robot_json_core::{Logger, SaveRequest, UserPrompt};

/// Collects every log line
#[derive(Default)]
pub struct RecordingLogger {
    pub infos: RefCell<Vec<String>>,
    pub warnings: RefCell<Vec<String>>,
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}

/// Answers the save prompt with a fixed path (or cancels) and records dialogs
#[derive(Default)]
pub struct ScriptedPrompt {
    pub save_path: Option<PathBuf>,
    pub requests: Vec<SaveRequest>,
    pub errors: Vec<(String, String)>,
    pub messages: Vec<(String, String)>,
}

impl ScriptedPrompt {
    pub fn saving_to(path: PathBuf) -> Self {
        Self {
            save_path: Some(path),
            ..Self::default()
        }
    }

    pub fn cancelling() -> Self {
        Self::default()
    }
}

impl UserPrompt for ScriptedPrompt {
    fn show_error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }

    fn show_message(&mut self, title: &str, message: &str) {
        self.messages.push((title.to_string(), message.to_string()));
    }

    fn ask_save_path(&mut self, request: &SaveRequest) -> Option<PathBuf> {
        self.requests.push(request.clone());
        self.save_path.clone()
    }
}

/// Output file in its own temp directory, removed on drop
pub struct TempOutput {
    dir: PathBuf,
    path: PathBuf,
}

impl TempOutput {
    pub fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "robot-json-tests-{}-{}",
            std::process::id(),
            name.replace('.', "-")
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        Self { dir, path }
    }

    pub fn path(&self) -> PathBuf {
        self.path.clone()
    }
}

impl Drop for TempOutput {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
