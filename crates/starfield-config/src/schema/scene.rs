//! Scene configuration types: camera, particle appearance, logo material
//! and lights.
//!
//! None of these affect the particle simulation itself; they only change
//! how the field and the logo are drawn.

use serde::{Deserialize, Serialize};

/// Perspective camera looking down -Z at the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (valid range: 10-150).
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Distance from the origin along +Z (valid range: 1-100).
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 10.0,
        }
    }
}

/// Particle sprite appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    /// Sprite edge length in world units (valid range: 0.01-5.0).
    pub size: f32,
    /// Sprite opacity (valid range: 0.0-1.0).
    pub opacity: f32,
    /// Tint as hex string.
    pub color: String,
    /// Optional PNG sprite. A bold "$" glyph is drawn when unset or
    /// unreadable.
    pub sprite: Option<String>,
    /// Fixed seed for the spawn layout. Random when unset.
    pub seed: Option<u64>,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            size: 0.5,
            opacity: 0.4,
            color: "#ffffff".into(),
            sprite: None,
            seed: None,
        }
    }
}

/// Logo surface material.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Base color as hex string.
    pub color: String,
    /// Self-illumination added regardless of lighting.
    pub emissive: String,
    /// Valid range: 0.0-1.0.
    pub metalness: f32,
    /// Valid range: 0.0-1.0.
    pub roughness: f32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            color: "#eeeeee".into(),
            emissive: "#222222".into(),
            metalness: 0.9,
            roughness: 0.1,
        }
    }
}

/// White lights illuminating the logo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient: f32,
    pub directional: f32,
    /// Position the directional light shines from, toward the origin.
    pub directional_position: [f32; 3],
    pub point: f32,
    pub point_position: [f32; 3],
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient: 0.3,
            directional: 1.5,
            directional_position: [5.0, 10.0, 7.5],
            point: 0.5,
            point_position: [-5.0, -5.0, 5.0],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
