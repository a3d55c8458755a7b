//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable that overrides the configured filter
pub const LOG_ENV: &str = "MOKA_LOG";

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".into()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingSettings {
    /// Build the filter: `MOKA_LOG` wins over the configured level.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Initialize the tracing subscriber. Logs go to stderr so command
    /// output on stdout stays clean.
    ///
    /// Safe to call more than once; later calls are ignored.
    pub fn init(&self) {
        let builder = fmt()
            .with_env_filter(self.filter())
            .with_writer(std::io::stderr);

        let _ = match self.format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Pretty => builder.try_init(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = LoggingSettings::default();
        assert_eq!(settings.level, "warn");
        assert_eq!(settings.format, LogFormat::Pretty);
    }

    #[test]
    fn test_format_serialization() {
        let json = serde_json::to_string(&LoggingSettings {
            level: "debug".into(),
            format: LogFormat::Json,
        })
        .unwrap();
        assert_eq!(json, r#"{"level":"debug","format":"json"}"#);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        let settings = LoggingSettings::default();
        settings.init();
        settings.init();
    }
}
