//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive scoped to this workspace's crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "starfield=trace",
            LogLevel::Debug => "starfield=debug",
            LogLevel::Info => "starfield=info",
            LogLevel::Warning => "starfield=warn",
            LogLevel::Error => "starfield=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_info() {
        assert_eq!(LoggingConfig::default().level, LogLevel::Info);
        assert_eq!(LogLevel::default().directive(), "starfield=info");
    }

    #[test]
    fn level_uppercase_serialization() {
        let json = serde_json::to_string(&LogLevel::Warning).unwrap();
        assert_eq!(json, "\"WARNING\"");
        let config: LoggingConfig = toml::from_str("level = \"DEBUG\"").unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.level.directive(), "starfield=debug");
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(toml::from_str::<LoggingConfig>("level = \"LOUD\"").is_err());
    }
}
