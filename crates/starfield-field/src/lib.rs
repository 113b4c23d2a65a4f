//! Interactive particle field simulation.
//!
//! A fixed pool of particles rests at random spawn points. Each tick the
//! pointer pushes nearby particles away, a spring pulls every particle
//! back home, and velocities are damped. A logo group eases its rotation
//! toward the pointer and bobs with time. Rendering is behind the
//! `RenderSurface` trait so the simulation runs with or without a GPU.

pub mod animator;
pub mod clock;
pub mod frame_loop;
pub mod logo;
pub mod params;
pub mod particle;
pub mod pointer;
pub mod scheduler;
pub mod surface;
pub mod vector;

pub use animator::Animator;
pub use clock::ElapsedClock;
pub use frame_loop::AnimationLoop;
pub use logo::LogoTransform;
pub use params::{ForceParams, LogoParams};
pub use particle::{Particle, ParticleField};
pub use pointer::{normalize_pointer, PointerCell, PointerState};
pub use scheduler::{CountingScheduler, Scheduler};
pub use surface::{HeadlessSurface, RenderSurface};
pub use vector::Vec3;
