//! Simulation constants.
//!
//! These are compile-time values; the runtime config only covers
//! presentation. `ForceParams` and `LogoParams` group them so tests can
//! build an animator with the exact constants the binary uses.

/// Number of particles in the pool.
pub const PARTICLE_COUNT: usize = 1200;
/// Particles spawn uniformly in `[-HALF_EXTENT, HALF_EXTENT]^3`.
pub const HALF_EXTENT: f32 = 15.0;

pub const REPEL_RADIUS: f32 = 7.0;
pub const REPEL_STRENGTH: f32 = 0.8;
pub const RETURN_STRENGTH: f32 = 0.010;
pub const DAMPING: f32 = 0.5;

/// World-space extent of the repel point for a pointer at the window edge.
pub const POINTER_WORLD_SCALE: [f32; 2] = [10.0, 5.0];

pub const LOGO_EASING: f32 = 0.05;
/// Logo rotation target (radians) for a pointer at the window edge.
pub const LOGO_TARGET_SCALE: f32 = 1.5;
pub const BOB_AMPLITUDE: f32 = 0.2;
pub const BOB_FREQUENCY: f32 = 0.5;

/// Per-particle force constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceParams {
    pub repel_radius: f32,
    pub repel_strength: f32,
    pub return_strength: f32,
    pub damping: f32,
    pub pointer_world_scale: [f32; 2],
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            repel_radius: REPEL_RADIUS,
            repel_strength: REPEL_STRENGTH,
            return_strength: RETURN_STRENGTH,
            damping: DAMPING,
            pointer_world_scale: POINTER_WORLD_SCALE,
        }
    }
}

/// Logo easing and bob constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoParams {
    pub easing: f32,
    pub target_scale: f32,
    pub bob_amplitude: f32,
    pub bob_frequency: f32,
}

impl Default for LogoParams {
    fn default() -> Self {
        Self {
            easing: LOGO_EASING,
            target_scale: LOGO_TARGET_SCALE,
            bob_amplitude: BOB_AMPLITUDE,
            bob_frequency: BOB_FREQUENCY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damping_is_contracting() {
        assert!(DAMPING > 0.0 && DAMPING < 1.0);
        assert!(RETURN_STRENGTH > 0.0 && RETURN_STRENGTH < 1.0);
    }

    #[test]
    fn defaults_mirror_constants() {
        let f = ForceParams::default();
        assert_eq!(f.repel_radius, 7.0);
        assert_eq!(f.repel_strength, 0.8);
        assert_eq!(f.return_strength, 0.010);
        assert_eq!(f.damping, 0.5);
        assert_eq!(f.pointer_world_scale, [10.0, 5.0]);

        let l = LogoParams::default();
        assert_eq!(l.easing, 0.05);
        assert_eq!(l.target_scale, 1.5);
        assert_eq!(l.bob_amplitude, 0.2);
        assert_eq!(l.bob_frequency, 0.5);
    }
}
