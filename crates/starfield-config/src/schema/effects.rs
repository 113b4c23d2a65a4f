//! Post-processing effects configuration types.

use serde::{Deserialize, Serialize};

/// Bloom (light bleed) effect settings.
///
/// Bright regions of the scene are extracted, blurred and added back on
/// top of the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    pub enabled: bool,
    /// Bloom brightness multiplier (valid range: 0.0-3.0).
    pub strength: f32,
    /// Blur spread (valid range: 0.0-1.0).
    pub radius: f32,
    /// Luminance below which pixels do not bloom (valid range: 0.0-1.0).
    pub threshold: f32,
    /// Number of blur passes (valid range: 1-5). More passes = smoother bloom.
    pub passes: u32,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            strength: 1.2,
            radius: 0.5,
            threshold: 0.0,
            passes: 1,
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
    fn bloom_defaults() {
        let config = BloomConfig::default();
        assert!(config.enabled);
        assert!((config.strength - 1.2).abs() < f32::EPSILON);
        assert!((config.radius - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.threshold, 0.0);
        assert_eq!(config.passes, 1);
    }

    #[test]
    fn bloom_partial_toml() {
        let config: BloomConfig = toml::from_str("enabled = false\npasses = 3").unwrap();
        assert!(!config.enabled);
        assert_eq!(config.passes, 3);
        assert!((config.strength - 1.2).abs() < f32::EPSILON);
    }
}
