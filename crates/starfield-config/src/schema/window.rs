//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window appearance settings.
///
/// The background is drawn behind the particles; with `transparent`
/// enabled the window is created with an alpha channel and the
/// background color is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 320-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 240-4320).
    pub height: u32,
    /// Create a transparent window so the field floats over the desktop.
    pub transparent: bool,
    /// Clear color as hex string.
    pub background: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Starfield".into(),
            width: 1280,
            height: 720,
            transparent: false,
            background: "#000000".into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Starfield");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 720);
        assert!(!config.transparent);
        assert_eq!(config.background, "#000000");
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r##"
title = "Backdrop"
transparent = true
background = "#101820"
"##;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "Backdrop");
        assert!(config.transparent);
        assert_eq!(config.background, "#101820");
        // Defaults preserved
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 720);
    }
}
