//! Exporter configuration module
//!
//! Handles the settings file read at startup: export settings and
//! front-end preferences.

mod manager;

pub use manager::ConfigManager;

use robot_json_core::ExportSettings;
use serde::{Deserialize, Serialize};

/// Front-end preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FrontendConfig {
    /// Use the console instead of native dialogs
    #[serde(default)]
    pub headless: bool,
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default)]
    pub version: u32,
    /// Descriptor export settings
    #[serde(default)]
    pub export: ExportSettings,
    /// Front-end settings
    #[serde(default)]
    pub frontend: FrontendConfig,
}

impl AppConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }
}
