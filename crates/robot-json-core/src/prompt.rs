//! User interaction capability used by the exporter

use std::path::PathBuf;

/// Parameters of a save-file prompt
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub title: String,
    /// Filter label, e.g. `"JSON files (*.json)"`
    pub filter_name: String,
    /// Accepted extensions without the dot
    pub extensions: Vec<String>,
    /// Suggested file name
    pub file_name: String,
}

/// Blocking dialogs shown to the user
pub trait UserPrompt {
    /// Show a blocking error message
    fn show_error(&mut self, title: &str, message: &str);

    /// Show a blocking informational message
    fn show_message(&mut self, title: &str, message: &str);

    /// Ask for a save path. `None` means the user cancelled.
    fn ask_save_path(&mut self, request: &SaveRequest) -> Option<PathBuf>;
}

impl<P: UserPrompt + ?Sized> UserPrompt for &mut P {
    fn show_error(&mut self, title: &str, message: &str) {
        (**self).show_error(title, message);
    }

    fn show_message(&mut self, title: &str, message: &str) {
        (**self).show_message(title, message);
    }

    fn ask_save_path(&mut self, request: &SaveRequest) -> Option<PathBuf> {
        (**self).ask_save_path(request)
    }
}
