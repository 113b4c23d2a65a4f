//! Particle pool and the per-particle update rule.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::params::ForceParams;
use crate::vector::{self as v, Vec3};

/// One star in the field.
///
/// The spawn position is fixed for the particle's lifetime; position and
/// velocity change every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    origin: Vec3,
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Particle {
    /// A particle sitting at its spawn point with zero velocity.
    pub fn at_rest(origin: Vec3) -> Self {
        Self {
            origin,
            position: origin,
            velocity: v::ZERO,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Advance one tick: repel, spring back, damp, integrate.
    ///
    /// Damping is applied after both forces are added, so the impulses of
    /// this tick are damped too. A particle exactly on the repel point gets
    /// no repel impulse (the direction is undefined).
    pub fn step(&mut self, repel_point: Vec3, forces: &ForceParams) {
        let offset = v::sub(self.position, repel_point);
        if v::length(offset) < forces.repel_radius {
            if let Some(dir) = v::normalize(offset) {
                self.velocity = v::add(self.velocity, v::scale(dir, forces.repel_strength));
            }
        }

        let spring = v::sub(self.origin, self.position);
        self.velocity = v::add(self.velocity, v::scale(spring, forces.return_strength));
        self.velocity = v::scale(self.velocity, forces.damping);
        self.position = v::add(self.position, self.velocity);
    }
}

/// Fixed-size particle pool plus the flat `xyz` buffer uploaded to the GPU.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    positions: Vec<f32>,
}

impl ParticleField {
    /// Spawn `count` particles uniformly inside `[-half_extent, half_extent]^3`.
    pub fn random<R: Rng + ?Sized>(count: usize, half_extent: f32, rng: &mut R) -> Self {
        let side = half_extent * 2.0;
        let mut spawn = || (rng.gen::<f32>() - 0.5) * side;
        let origins: Vec<Vec3> = (0..count).map(|_| [spawn(), spawn(), spawn()]).collect();
        Self::from_origins(&origins)
    }

    /// Reproducible layout for a given seed.
    pub fn seeded(count: usize, half_extent: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(count, half_extent, &mut rng)
    }

    /// Layout from OS entropy.
    pub fn from_entropy(count: usize, half_extent: f32) -> Self {
        let mut rng = StdRng::from_entropy();
        Self::random(count, half_extent, &mut rng)
    }

    /// One particle at rest on each of the given spawn points.
    pub fn from_origins(origins: &[Vec3]) -> Self {
        let particles: Vec<Particle> = origins.iter().copied().map(Particle::at_rest).collect();
        let mut field = Self {
            positions: vec![0.0; particles.len() * 3],
            particles,
        };
        field.sync_positions();
        field
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Flat `[x0, y0, z0, x1, ...]` buffer as of the last update.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Step every particle against one repel point, then refresh the buffer.
    pub fn update(&mut self, repel_point: Vec3, forces: &ForceParams) {
        for p in &mut self.particles {
            p.step(repel_point, forces);
        }
        self.sync_positions();
    }

    pub(crate) fn sync_positions(&mut self) {
        for (slot, p) in self.positions.chunks_exact_mut(3).zip(&self.particles) {
            slot.copy_from_slice(&p.position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{HALF_EXTENT, PARTICLE_COUNT};

    #[test]
    fn at_rest_particle_starts_on_origin() {
        let p = Particle::at_rest([1.0, 2.0, 3.0]);
        assert_eq!(p.origin(), [1.0, 2.0, 3.0]);
        assert_eq!(p.position, [1.0, 2.0, 3.0]);
        assert_eq!(p.velocity, v::ZERO);
    }

    #[test]
    fn repel_pushes_particle_away_from_point() {
        let forces = ForceParams::default();
        let mut p = Particle::at_rest([2.0, 0.0, 0.0]);
        p.step(v::ZERO, &forces);
        // repel 0.8 along +x, spring zero, then damped by 0.5
        assert!((p.velocity[0] - 0.4).abs() < 1e-6);
        assert!((p.position[0] - 2.4).abs() < 1e-6);
        assert_eq!(p.velocity[1], 0.0);
        assert_eq!(p.velocity[2], 0.0);
    }

    #[test]
    fn repel_ignored_outside_radius() {
        let forces = ForceParams::default();
        let mut p = Particle::at_rest([7.0, 0.0, 0.0]);
        // distance == radius is not "< radius"
        p.step(v::ZERO, &forces);
        assert_eq!(p.velocity, v::ZERO);
        assert_eq!(p.position, [7.0, 0.0, 0.0]);
    }

    #[test]
    fn spring_and_damping_order() {
        let forces = ForceParams::default();
        let mut p = Particle::at_rest([20.0, 0.0, 0.0]);
        p.position = [21.0, 0.0, 0.0];
        p.velocity = [0.2, 0.0, 0.0];
        p.step([-100.0, 0.0, 0.0], &forces);
        // (0.2 + (20 - 21) * 0.01) * 0.5 = 0.095
        assert!((p.velocity[0] - 0.095).abs() < 1e-6);
        assert!((p.position[0] - 21.095).abs() < 1e-5);
    }

    #[test]
    fn zero_distance_repel_is_noop() {
        let forces = ForceParams::default();
        let mut p = Particle::at_rest([0.0, 0.0, 0.0]);
        p.step([0.0, 0.0, 0.0], &forces);
        assert_eq!(p.velocity, v::ZERO);
        assert_eq!(p.position, v::ZERO);
        assert!(v::is_finite(p.position));
    }

    #[test]
    fn zero_distance_skips_only_the_repel_term() {
        let forces = ForceParams::default();
        let mut p = Particle::at_rest([6.0, 0.0, 0.0]);
        p.position = [5.0, 2.5, 0.0];
        p.step([5.0, 2.5, 0.0], &forces);
        // spring (1, -2.5, 0) * 0.01, then damped by 0.5
        let expected_velocity = [0.005, -0.0125, 0.0];
        let expected_position = [5.005, 2.4875, 0.0];
        for axis in 0..3 {
            assert!((p.velocity[axis] - expected_velocity[axis]).abs() < 1e-6);
            assert!((p.position[axis] - expected_position[axis]).abs() < 1e-5);
        }
    }

    #[test]
    fn random_field_stays_in_cube() {
        let field = ParticleField::seeded(PARTICLE_COUNT, HALF_EXTENT, 7);
        assert_eq!(field.len(), 1200);
        for p in field.particles() {
            for c in p.position {
                assert!((-15.0..=15.0).contains(&c), "component {c} out of bounds");
            }
            assert_eq!(p.position, p.origin());
            assert_eq!(p.velocity, v::ZERO);
        }
    }

    #[test]
    fn random_field_is_centered() {
        let field = ParticleField::seeded(PARTICLE_COUNT, HALF_EXTENT, 1234);
        let n = field.len() as f32;
        for axis in 0..3 {
            let mean: f32 = field.particles().iter().map(|p| p.position[axis]).sum::<f32>() / n;
            // standard error of the mean is ~0.25 for 1200 samples
            assert!(mean.abs() < 1.5, "axis {axis} mean {mean}");
        }
        // uniform spread: variance of U(-15, 15) is 75
        let var: f32 = field
            .particles()
            .iter()
            .map(|p| p.position[0] * p.position[0])
            .sum::<f32>()
            / n;
        assert!((var - 75.0).abs() < 15.0, "variance {var}");
    }

    #[test]
    fn same_seed_same_layout() {
        let a = ParticleField::seeded(64, HALF_EXTENT, 99);
        let b = ParticleField::seeded(64, HALF_EXTENT, 99);
        let c = ParticleField::seeded(64, HALF_EXTENT, 100);
        assert_eq!(a.positions(), b.positions());
        assert_ne!(a.positions(), c.positions());
    }

    #[test]
    fn position_buffer_mirrors_particles() {
        let mut field = ParticleField::from_origins(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(field.positions(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        field.update([1.0, 2.0, 2.0], &ForceParams::default());
        let first = field.particles()[0].position;
        assert_eq!(&field.positions()[0..3], &first);
        assert!(first[2] > 3.0, "first particle should be pushed along +z");
    }

    #[test]
    fn empty_field() {
        let mut field = ParticleField::from_origins(&[]);
        assert!(field.is_empty());
        field.update(v::ZERO, &ForceParams::default());
        assert!(field.positions().is_empty());
    }
}
