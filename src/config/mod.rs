//! Configuration module for Moka
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use logging::{LogFormat, LoggingSettings};
pub use paths::MokaPaths;
pub use settings::Settings;
