//! User prompt implementations
//!
//! - [`NativePrompt`]: blocking native dialogs through `rfd`
//! - [`ConsolePrompt`]: headless; the save answer comes from the command line

use std::path::PathBuf;

use robot_json_core::{SaveRequest, UserPrompt};

/// Native message boxes and save dialog
#[derive(Debug, Default)]
pub struct NativePrompt;

impl UserPrompt for NativePrompt {
    fn show_error(&mut self, title: &str, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    fn show_message(&mut self, title: &str, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    fn ask_save_path(&mut self, request: &SaveRequest) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(&request.title)
            .add_filter(&request.filter_name, request.extensions.as_slice())
            .set_file_name(&request.file_name)
            .save_file()
    }
}

/// Prompt for non-interactive runs
#[derive(Debug, Default)]
pub struct ConsolePrompt {
    output: Option<PathBuf>,
}

impl ConsolePrompt {
    /// `output` answers the save prompt; `None` cancels it
    pub fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }
}

impl UserPrompt for ConsolePrompt {
    fn show_error(&mut self, title: &str, message: &str) {
        tracing::error!("{}: {}", title, message);
    }

    fn show_message(&mut self, title: &str, message: &str) {
        tracing::info!("{}: {}", title, message);
    }

    fn ask_save_path(&mut self, request: &SaveRequest) -> Option<PathBuf> {
        if self.output.is_none() {
            tracing::warn!("{}: no --output given, nothing saved", request.title);
        }
        self.output.clone()
    }
}
