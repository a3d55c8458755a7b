//! Path management for Moka
//!
//! ## Path Resolution Order
//!
//! 1. `MOKA_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/moka` or `~/.config/moka`
//! 3. Windows: `%APPDATA%\moka`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::MokaError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "MOKA_DATA_DIR";

/// Manages all paths used by Moka
#[derive(Debug, Clone)]
pub struct MokaPaths {
    base_dir: PathBuf,
}

impl MokaPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, MokaError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create MokaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    pub fn fixed_charges_file(&self) -> PathBuf {
        self.data_dir().join("fixed_charges.json")
    }

    pub fn loans_file(&self) -> PathBuf {
        self.data_dir().join("loans.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), MokaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MokaError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MokaError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Moka has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory for the platform
fn resolve_default_path() -> Result<PathBuf, MokaError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| MokaError::Config("Could not determine home directory".into()))?;

    // XDG_CONFIG_HOME or ~/.config on Unix, %APPDATA% on Windows
    Ok(dirs.config_dir().join("moka"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MokaPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MokaPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MokaPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.loans_file(),
            temp_dir.path().join("data").join("loans.json")
        );
        assert_eq!(
            paths.fixed_charges_file(),
            temp_dir.path().join("data").join("fixed_charges.json")
        );
    }
}
