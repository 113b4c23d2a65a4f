//! Configuration schema types for Starfield.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields fall back to the stock scene.

mod effects;
mod scene;
mod system;
mod window;

pub use effects::*;
pub use scene::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Starfield.
///
/// All options have sensible defaults. Only override what you want to
/// change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct StarfieldConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub particles: ParticlesConfig,
    pub logo: LogoConfig,
    pub lighting: LightingConfig,
    pub bloom: BloomConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
