//! The particle field animator: one `tick` per display refresh.

use crate::logo::LogoTransform;
use crate::params::{ForceParams, LogoParams, HALF_EXTENT, PARTICLE_COUNT};
use crate::particle::ParticleField;
use crate::pointer::PointerState;
use crate::vector::Vec3;

/// Owns the particle field and the logo transform and advances both.
#[derive(Debug, Clone)]
pub struct Animator {
    field: ParticleField,
    logo: LogoTransform,
    forces: ForceParams,
    logo_params: LogoParams,
}

impl Animator {
    /// Animator over an existing field with the default constants.
    pub fn new(field: ParticleField) -> Self {
        Self::with_params(field, ForceParams::default(), LogoParams::default())
    }

    pub fn with_params(field: ParticleField, forces: ForceParams, logo_params: LogoParams) -> Self {
        tracing::debug!(particles = field.len(), "animator created");
        Self {
            field,
            logo: LogoTransform::default(),
            forces,
            logo_params,
        }
    }

    /// Default pool (1200 particles in the 30-unit cube). A seed makes the
    /// layout reproducible.
    pub fn spawn(seed: Option<u64>) -> Self {
        let field = match seed {
            Some(seed) => ParticleField::seeded(PARTICLE_COUNT, HALF_EXTENT, seed),
            None => ParticleField::from_entropy(PARTICLE_COUNT, HALF_EXTENT),
        };
        Self::new(field)
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn logo(&self) -> LogoTransform {
        self.logo
    }

    /// World-space point the pointer repels from.
    pub fn repel_point(&self, pointer: PointerState) -> Vec3 {
        let [sx, sy] = self.forces.pointer_world_scale;
        [pointer.x * sx, pointer.y * sy, 0.0]
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self, elapsed: f32, pointer: PointerState) {
        let repel_point = self.repel_point(pointer);
        self.field.update(repel_point, &self.forces);
        self.logo.advance(pointer, elapsed, &self.logo_params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{self as v};

    #[test]
    fn repel_point_maps_pointer_to_world() {
        let animator = Animator::new(ParticleField::from_origins(&[]));
        assert_eq!(animator.repel_point(PointerState::new(1.0, 1.0)), [10.0, 5.0, 0.0]);
        assert_eq!(animator.repel_point(PointerState::new(-0.5, 0.2)), [-5.0, 1.0, 0.0]);
    }

    #[test]
    fn scenario_three_particles_at_home_stay_put() {
        let origins = [[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [-10.0, 0.0, 0.0]];
        let mut animator = Animator::new(ParticleField::from_origins(&origins));
        animator.tick(0.0, PointerState::CENTER);

        for (p, origin) in animator.field().particles().iter().zip(origins) {
            assert_eq!(p.position, origin);
            assert_eq!(p.velocity, v::ZERO);
        }
        assert_eq!(
            animator.field().positions(),
            &[0.0, 0.0, 0.0, 10.0, 0.0, 0.0, -10.0, 0.0, 0.0]
        );
    }

    #[test]
    fn zero_distance_does_not_produce_nan() {
        // pointer (0.5, -0.5) maps to repel point (5, -2.5, 0)
        let mut animator = Animator::new(ParticleField::from_origins(&[[5.0, -2.5, 0.0]]));
        for _ in 0..10 {
            animator.tick(0.0, PointerState::new(0.5, -0.5));
        }
        let p = animator.field().particles()[0];
        assert_eq!(p.velocity, v::ZERO);
        assert_eq!(p.position, [5.0, -2.5, 0.0]);
    }

    #[test]
    fn pointer_on_displaced_particle_still_springs_home() {
        // pointer (0.5, 0.5) maps to repel point (5, 2.5, 0)
        let mut animator = Animator::new(ParticleField::from_origins(&[[6.0, 0.0, 0.0]]));
        animator.field_mut().particles_mut()[0].position = [5.0, 2.5, 0.0];
        animator.tick(0.0, PointerState::new(0.5, 0.5));

        let p = animator.field().particles()[0];
        let expected = [0.005, -0.0125, 0.0];
        for axis in 0..3 {
            assert!((p.velocity[axis] - expected[axis]).abs() < 1e-6, "{:?}", p.velocity);
        }
        let positions = animator.field().positions();
        assert!((positions[0] - 5.005).abs() < 1e-5);
        assert!((positions[1] - 2.4875).abs() < 1e-5);
        assert_eq!(positions[2], 0.0);
    }

    #[test]
    fn displaced_particle_converges_to_origin() {
        let origin = [1.0, -2.0, 0.5];
        let mut animator = Animator::new(ParticleField::from_origins(&[origin]));
        animator.field_mut().particles_mut()[0].position = [4.0, -2.0, 0.5];

        // repel point (10, 5, 0) stays more than 7 units away the whole time
        let pointer = PointerState::new(1.0, 1.0);
        let mut speeds = Vec::new();
        let mut settled_at = None;
        for tick in 0..3000 {
            animator.tick(0.0, pointer);
            let p = animator.field().particles()[0];
            assert!(v::is_finite(p.position) && v::is_finite(p.velocity));
            speeds.push(v::length(p.velocity));
            if settled_at.is_none() && v::distance(p.position, origin) < 1e-3 {
                settled_at = Some(tick);
            }
        }

        let settled_at = settled_at.expect("particle never settled");
        assert!(settled_at < 1500, "settled only after {settled_at} ticks");

        // After the first few ticks the spring impulse has peaked and the
        // speed only decays.
        for window in speeds[10..800].windows(2) {
            assert!(window[1] <= window[0] + 1e-8, "{} -> {}", window[0], window[1]);
        }
        assert!(speeds[2999] < 1e-5);
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let run = || {
            let mut animator = Animator::spawn(Some(42));
            for i in 0..240 {
                let t = i as f32 / 60.0;
                let pointer = PointerState::new((t * 1.3).sin(), (t * 0.7).cos());
                animator.tick(t, pointer);
            }
            (animator.field().positions().to_vec(), animator.logo())
        };

        let (a_pos, a_logo) = run();
        let (b_pos, b_logo) = run();
        assert_eq!(a_pos.len(), 3600);
        assert!(a_pos.iter().zip(&b_pos).all(|(a, b)| a.to_bits() == b.to_bits()));
        assert_eq!(a_logo, b_logo);
    }

    #[test]
    fn sweeping_pointer_keeps_field_finite_and_bounded() {
        let mut animator = Animator::spawn(Some(3));
        for i in 0..2000 {
            let t = i as f32 / 60.0;
            animator.tick(t, PointerState::new((t * 2.0).sin(), (t * 3.0).sin()));
        }
        for p in animator.field().particles() {
            assert!(v::is_finite(p.position) && v::is_finite(p.velocity));
            // a plowed particle stays near the repel point, which never
            // leaves the [-10, 10] x [-5, 5] rectangle
            assert!(v::distance(p.position, p.origin()) < 50.0);
        }
    }

    #[test]
    fn logo_follows_pointer() {
        let mut animator = Animator::new(ParticleField::from_origins(&[]));
        for _ in 0..2000 {
            animator.tick(0.0, PointerState::new(1.0, 1.0));
        }
        let logo = animator.logo();
        assert!((logo.rotation_x - 1.5).abs() < 1e-4);
        assert!((logo.rotation_y - 1.5).abs() < 1e-4);
    }
}
