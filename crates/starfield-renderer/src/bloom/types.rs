//! Bloom pipeline types.

use starfield_config::schema::BloomConfig;

/// Per-pass uniforms for the bloom shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BloomUniforms {
    /// 1.0 / texture_width, 1.0 / texture_height.
    pub texel_size: [f32; 2],
    /// Luminance cutoff for the bright pass.
    pub threshold: f32,
    /// Blur tap distance in texels.
    pub spread: f32,
}

/// Bloom configuration derived from app config at pipeline creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomSettings {
    /// Whether bloom is enabled.
    pub enabled: bool,
    /// Bloom brightness multiplier applied in the composite pass.
    pub strength: f32,
    /// Blur spread, 0.0-1.0.
    pub radius: f32,
    pub threshold: f32,
    /// Number of blur passes (1-5).
    pub passes: u32,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self::from_config(&BloomConfig::default())
    }
}

impl BloomSettings {
    /// Create bloom settings from the application config.
    pub fn from_config(config: &BloomConfig) -> Self {
        Self {
            enabled: config.enabled,
            strength: config.strength.max(0.0),
            radius: config.radius.clamp(0.0, 1.0),
            threshold: config.threshold.clamp(0.0, 1.0),
            passes: config.passes.clamp(1, 5),
        }
    }

    /// Tap distance in texels for the blur kernel.
    pub fn spread(&self) -> f32 {
        1.0 + self.radius * 3.0
    }

    pub fn uniforms(&self, width: u32, height: u32) -> BloomUniforms {
        BloomUniforms {
            texel_size: [1.0 / width.max(1) as f32, 1.0 / height.max(1) as f32],
            threshold: self.threshold,
            spread: self.spread(),
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
    fn bloom_uniforms_size_is_16_bytes() {
        assert_eq!(std::mem::size_of::<BloomUniforms>(), 16);
    }

    #[test]
    fn bloom_settings_default() {
        let s = BloomSettings::default();
        assert!(s.enabled);
        assert!((s.strength - 1.2).abs() < f32::EPSILON);
        assert!((s.radius - 0.5).abs() < f32::EPSILON);
        assert_eq!(s.threshold, 0.0);
        assert_eq!(s.passes, 1);
        assert!((s.spread() - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn bloom_settings_from_config_disabled() {
        let config = BloomConfig {
            enabled: false,
            ..BloomConfig::default()
        };
        assert!(!BloomSettings::from_config(&config).enabled);
    }

    #[test]
    fn bloom_settings_clamps_passes() {
        let mut config = BloomConfig {
            passes: 99,
            ..BloomConfig::default()
        };
        assert_eq!(BloomSettings::from_config(&config).passes, 5);

        config.passes = 0;
        assert_eq!(BloomSettings::from_config(&config).passes, 1);
    }

    #[test]
    fn uniforms_guard_zero_size() {
        let u = BloomSettings::default().uniforms(0, 200);
        assert_eq!(u.texel_size, [1.0, 1.0 / 200.0]);
        assert!((u.spread - 2.5).abs() < f32::EPSILON);
    }
}
