use crate::utils::error::{Result, UiError};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Service for managing configuration persistence
pub struct ConfigService {
    config_dir: PathBuf,
}

impl ConfigService {
    /// Create a new config service with default directory
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
            tracing::info!("Created config directory: {:?}", config_dir);
        }

        Ok(Self { config_dir })
    }

    /// Create a config service with custom directory
    pub fn with_dir(config_dir: PathBuf) -> Result<Self> {
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }
        Ok(Self { config_dir })
    }

    /// Get default config directory
    fn get_config_dir() -> Result<PathBuf> {
        ProjectDirs::from("com", "lightninglabs", "swap-ui-store")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| UiError::ConfigError("Failed to get config directory".to_string()))
    }

    /// Get path to UI settings file
    fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.toml")
    }

    /// Load UI settings, falling back to defaults when no file exists
    pub fn load_settings(&self) -> Result<UiSettings> {
        let path = self.settings_file();

        if !path.exists() {
            tracing::info!("No settings file found, using defaults");
            return Ok(UiSettings::default());
        }

        let content = fs::read_to_string(&path)?;
        let settings: UiSettings = toml::from_str(&content)?;

        tracing::info!("Loaded settings: language={:?}", settings.language);
        Ok(settings)
    }

    /// Save UI settings
    pub fn save_settings(&self, settings: &UiSettings) -> Result<()> {
        let content = toml::to_string_pretty(settings)?;

        let path = self.settings_file();
        fs::write(&path, content)?;

        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

/// Persisted UI preferences
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UiSettings {
    /// UI language (e.g., "en", "zh-CN"); unset follows the system locale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Number of log records kept in memory
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,

    /// Start with the Processing Swaps section expanded
    #[serde(default)]
    pub show_processing_swaps: bool,
}

fn default_log_capacity() -> usize {
    500
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            language: None,
            log_capacity: default_log_capacity(),
            show_processing_swaps: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::i18n::resolve_language;
    use tempfile::TempDir;

    fn create_test_service() -> (ConfigService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_dir(temp_dir.path().to_path_buf()).unwrap();
        (service, temp_dir)
    }

    #[test]
    fn test_settings() {
        let (service, _temp) = create_test_service();

        let settings = UiSettings {
            language: Some("zh-CN".to_string()),
            log_capacity: 50,
            show_processing_swaps: true,
        };

        service.save_settings(&settings).unwrap();
        let loaded = service.load_settings().unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_settings_default() {
        let (service, _temp) = create_test_service();
        let settings = service.load_settings().unwrap();

        assert!(settings.language.is_none());
        assert_eq!(settings.log_capacity, 500);
        assert!(!settings.show_processing_swaps);
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let (service, temp) = create_test_service();
        fs::write(temp.path().join("settings.toml"), "language = \"zh-CN\"\n").unwrap();

        let settings = service.load_settings().unwrap();
        assert_eq!(settings.language.as_deref(), Some("zh-CN"));
        assert_eq!(settings.log_capacity, 500);
    }

    #[test]
    fn test_missing_language_follows_system_locale() {
        let (service, temp) = create_test_service();
        fs::write(temp.path().join("settings.toml"), "log_capacity = 50\n").unwrap();

        let settings = service.load_settings().unwrap();
        assert!(settings.language.is_none());
        assert_eq!(
            resolve_language(settings.language.as_deref(), Some("zh_CN.UTF-8")),
            "zh-CN"
        );
    }

    #[test]
    fn test_invalid_settings_file() {
        let (service, temp) = create_test_service();
        fs::write(temp.path().join("settings.toml"), "log_capacity = \"many\"\n").unwrap();

        let err = service.load_settings().unwrap_err();
        assert!(matches!(err, UiError::ParseError(_)));
    }

    #[test]
    fn test_config_dir() {
        let (service, temp) = create_test_service();
        assert_eq!(service.config_dir(), temp.path());
    }
}
