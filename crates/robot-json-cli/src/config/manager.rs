//! Configuration manager for loading and saving the exporter configuration

use std::path::{Path, PathBuf};

use super::AppConfig;

/// Failure to read or write the configuration file
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot access {path:?}: {message}")]
    Io { path: PathBuf, message: String },
    #[error("cannot render configuration: {0}")]
    Serialize(String),
    #[error("invalid configuration in {path:?}: {message}")]
    Deserialize { path: PathBuf, message: String },
}

impl ConfigError {
    fn io(path: &Path, err: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Loads and saves the configuration file
pub struct ConfigManager {
    config: AppConfig,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Load from the OS-standard location, falling back to defaults
    pub fn new() -> Self {
        Self::with_path(Self::default_config_path())
    }

    /// Load from a specific path, falling back to defaults
    pub fn with_path(config_path: PathBuf) -> Self {
        let config = match Self::load_from_path(&config_path) {
            Ok(Some(config)) => {
                tracing::info!("Loaded config from {:?}", config_path);
                config
            }
            Ok(None) => {
                tracing::info!("No config file at {:?}, using defaults", config_path);
                AppConfig::new()
            }
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                AppConfig::new()
            }
        };

        Self {
            config,
            config_path,
        }
    }

    fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("robot-json")
    }

    /// Default configuration file path
    pub fn default_config_path() -> PathBuf {
        Self::config_dir().join("config.ron")
    }

    /// Read a configuration file. A missing file is `Ok(None)`.
    fn load_from_path(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ConfigError::io(path, e)),
        };

        ron::from_str(&content)
            .map(Some)
            .map_err(|e| ConfigError::Deserialize {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Write the current configuration, creating its directory if needed
    pub fn save(&self) -> Result<(), ConfigError> {
        let text = ron::ser::to_string_pretty(&self.config, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        let path = self.config_path.as_path();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| ConfigError::io(dir, e))?;
        }
        std::fs::write(path, text).map_err(|e| ConfigError::io(path, e))?;

        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn reset_to_defaults(&mut self) {
        self.config = AppConfig::new();
    }

    pub fn config_file_path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scratch directory removed when dropped
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(test: &str) -> Self {
            let dir = std::env::temp_dir()
                .join(format!("robot-json-config-{}-{}", std::process::id(), test));
            let _ = std::fs::remove_dir_all(&dir);
            std::fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn file(&self, name: &str) -> PathBuf {
            self.0.join(name)
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let scratch = ScratchDir::new("missing");
        let path = scratch.file("absent.ron");
        assert!(matches!(ConfigManager::load_from_path(&path), Ok(None)));

        let manager = ConfigManager::with_path(path);
        assert_eq!(manager.config(), &AppConfig::new());
        assert_eq!(manager.config().export.root_component, "base_link");
    }

    #[test]
    fn test_save_then_load() {
        let scratch = ScratchDir::new("save");
        let path = scratch.file("nested").join("saved.ron");
        let mut manager = ConfigManager::with_path(path.clone());
        manager.reset_to_defaults();
        manager.save().unwrap();

        let reloaded = ConfigManager::with_path(path);
        assert_eq!(reloaded.config(), manager.config());
    }

    #[test]
    fn test_invalid_file_is_deserialize_error() {
        let scratch = ScratchDir::new("invalid");
        let path = scratch.file("broken.ron");
        std::fs::write(&path, "(export: (indent: \"four\"))").unwrap();

        let result = ConfigManager::load_from_path(&path);
        assert!(matches!(
            result,
            Err(ConfigError::Deserialize { path: ref p, .. }) if p == &path
        ));

        let manager = ConfigManager::with_path(path);
        assert_eq!(manager.config().export.indent, 4);
    }

    #[test]
    fn test_directory_path_is_io_error() {
        let scratch = ScratchDir::new("directory");
        let result = ConfigManager::load_from_path(&scratch.0);
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let scratch = ScratchDir::new("partial");
        let path = scratch.file("partial.ron");
        std::fs::write(&path, "(version: 1, export: (root_component: \"chassis\"))").unwrap();

        let manager = ConfigManager::with_path(path);
        assert_eq!(manager.config().export.root_component, "chassis");
        assert_eq!(manager.config().export.default_author, "Unknown");
        assert!(!manager.config().frontend.headless);
    }
}
