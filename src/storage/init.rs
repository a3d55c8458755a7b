//! Storage initialization
//!
//! Handles first-run setup: directories, empty data documents and the
//! settings file.

use std::path::PathBuf;

use serde_json::json;
use tracing::info;

use crate::config::paths::MokaPaths;
use crate::config::settings::Settings;
use crate::error::MokaError;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Existing data files are left untouched, so running this twice is safe.
pub fn initialize_storage(paths: &MokaPaths) -> Result<Settings, MokaError> {
    paths.ensure_directories()?;

    for (file, key) in data_documents(paths) {
        if !file.exists() {
            write_json_atomic(&file, &json!({ key: [] }))?;
            info!(path = %file.display(), "created data file");
        }
    }

    let mut settings = Settings::load_or_create(paths)?;
    settings.setup_completed = true;
    settings.save(paths)?;

    Ok(settings)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &MokaPaths) -> bool {
    !paths.is_initialized() || data_documents(paths).iter().any(|(file, _)| !file.exists())
}

fn data_documents(paths: &MokaPaths) -> [(PathBuf, &'static str); 4] {
    [
        (paths.transactions_file(), "transactions"),
        (paths.budgets_file(), "budgets"),
        (paths.fixed_charges_file(), "fixed_charges"),
        (paths.loans_file(), "loans"),
    ]
}
