//! User settings for Moka
//!
//! Persisted as `config.json` in the base directory. Every field has a
//! default so older or hand-edited files keep loading.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::logging::LoggingSettings;
use super::paths::MokaPaths;
use crate::error::MokaError;

/// User settings for Moka
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Whether `moka init` has been run
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            logging: LoggingSettings::default(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &MokaPaths) -> Result<Self, MokaError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| MokaError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| MokaError::Config(format!("Failed to parse settings file: {}", e)))?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject values that would fail later at render time
    pub fn validate(&self) -> Result<(), MokaError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(MokaError::Config(format!(
                "invalid date_format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MokaPaths) -> Result<(), MokaError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| MokaError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| MokaError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::logging::LogFormat;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.logging.level, "warn");
        assert!(!settings.setup_completed);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MokaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.date_format = "%d/%m/%Y".into();
        settings.logging.format = LogFormat::Json;
        settings.setup_completed = true;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.date_format, "%d/%m/%Y");
        assert_eq!(loaded.logging.format, LogFormat::Json);
        assert!(loaded.setup_completed);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"setup_completed": true}"#).unwrap();
        assert_eq!(loaded.schema_version, 1);
        assert_eq!(loaded.date_format, "%Y-%m-%d");
        assert!(loaded.setup_completed);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MokaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, MokaError::Config(_)));
    }

    #[test]
    fn test_unknown_date_specifier_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MokaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format":"%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, MokaError::Config(_)));
        assert!(err.to_string().contains("%Q"));
    }

    #[test]
    fn test_save_rejects_bad_date_format() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MokaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            date_format: "%d/%m/%".into(),
            ..Settings::default()
        };
        assert!(settings.save(&paths).is_err());
        assert!(!paths.settings_file().exists());
    }
}
