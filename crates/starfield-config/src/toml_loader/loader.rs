//! Core TOML config loading: read from a path, or from the platform
//! default location, writing the commented template on first run.

use crate::schema::StarfieldConfig;
use starfield_common::ConfigError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// Directory under the platform config dir holding `config.toml`.
const APP_DIR: &str = "starfield";
const FILE_NAME: &str = "config.toml";

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Validation is left to the caller so an invalid file can be reported
/// separately from an unreadable one.
pub fn load_from_path(path: &Path) -> Result<StarfieldConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: StarfieldConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/starfield/config.toml`
/// On Linux: `~/.config/starfield/config.toml`
pub fn load_default() -> Result<StarfieldConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}

/// Load `path`, or write the commented template there and return the
/// defaults if it does not exist yet.
pub fn load_or_create(path: &Path) -> Result<StarfieldConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            write_template(path)?;
            info!("no config found, wrote template to {}", path.display());
            Ok(StarfieldConfig::default())
        }
        other => other,
    }
}

/// `<platform config dir>/starfield/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

fn write_template(path: &Path) -> Result<(), ConfigError> {
    let io_error = |what: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", path.display()))
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_error("create directory for", e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_error("write", e))
}
