//! Logo group transform and its easing toward the pointer.

use serde::{Deserialize, Serialize};

use crate::params::LogoParams;
use crate::pointer::PointerState;

/// Rotation (radians) and vertical offset applied to the whole logo group.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LogoTransform {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub vertical_offset: f32,
}

impl LogoTransform {
    /// Ease the rotation toward the pointer target and set the bob offset.
    ///
    /// The easing factor is applied per tick with no timestep correction,
    /// so the settle time depends on the refresh rate. The bob is a pure
    /// function of `elapsed`.
    pub fn advance(&mut self, pointer: PointerState, elapsed: f32, params: &LogoParams) {
        let target_y = pointer.x * params.target_scale;
        let target_x = pointer.y * params.target_scale;

        self.rotation_y += params.easing * (target_y - self.rotation_y);
        self.rotation_x += params.easing * (target_x - self.rotation_x);
        self.vertical_offset = (elapsed * params.bob_frequency).sin() * params.bob_amplitude;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_moves_five_percent() {
        let mut logo = LogoTransform::default();
        logo.advance(PointerState::new(1.0, -1.0), 0.0, &LogoParams::default());
        assert!((logo.rotation_y - 0.075).abs() < 1e-6);
        assert!((logo.rotation_x + 0.075).abs() < 1e-6);
        assert_eq!(logo.vertical_offset, 0.0);
    }

    #[test]
    fn easing_converges_without_overshoot() {
        let params = LogoParams::default();
        let mut logo = LogoTransform::default();
        let mut prev = logo;
        for _ in 0..1000 {
            logo.advance(PointerState::new(1.0, 1.0), 0.0, &params);
            assert!(logo.rotation_y <= 1.5 && logo.rotation_x <= 1.5);
            assert!(logo.rotation_y >= prev.rotation_y);
            assert!(logo.rotation_x >= prev.rotation_x);
            prev = logo;
        }
        assert!((logo.rotation_y - 1.5).abs() < 1e-4);
        assert!((logo.rotation_x - 1.5).abs() < 1e-4);
    }

    #[test]
    fn centered_pointer_relaxes_rotation_to_zero() {
        let params = LogoParams::default();
        let mut logo = LogoTransform {
            rotation_x: -0.8,
            rotation_y: 1.2,
            vertical_offset: 0.0,
        };
        for _ in 0..1000 {
            logo.advance(PointerState::CENTER, 0.0, &params);
        }
        assert!(logo.rotation_x.abs() < 1e-4);
        assert!(logo.rotation_y.abs() < 1e-4);
    }

    #[test]
    fn bob_is_pure_function_of_time() {
        let params = LogoParams::default();
        let mut a = LogoTransform::default();
        let mut b = LogoTransform::default();

        a.advance(PointerState::CENTER, std::f32::consts::PI, &params);
        for t in [0.0, 5.0, 1.0, std::f32::consts::PI] {
            b.advance(PointerState::CENTER, t, &params);
        }
        // sin(PI * 0.5) * 0.2
        assert!((a.vertical_offset - 0.2).abs() < 1e-6);
        assert_eq!(a.vertical_offset, b.vertical_offset);
    }

    #[test]
    fn bob_stays_within_amplitude() {
        let params = LogoParams::default();
        let mut logo = LogoTransform::default();
        for i in 0..2000 {
            logo.advance(PointerState::CENTER, i as f32 / 60.0, &params);
            assert!(logo.vertical_offset.abs() <= 0.2 + 1e-6);
        }
    }

    #[test]
    fn transform_serializes_for_summaries() {
        let logo = LogoTransform {
            rotation_x: 0.5,
            rotation_y: -0.25,
            vertical_offset: 0.125,
        };
        let json = serde_json::to_value(logo).unwrap();
        assert_eq!(json["rotation_x"], 0.5);
        assert_eq!(json["rotation_y"], -0.25);
        assert_eq!(json["vertical_offset"], 0.125);
    }
}
