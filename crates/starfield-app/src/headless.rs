//! Windowless simulation run for `--headless`.
//!
//! Drives the same frame loop as the window against a `HeadlessSurface`,
//! stepping the clock at a fixed 60 Hz and sweeping a synthetic pointer
//! around a circle so the repel force is exercised.

use serde::Serialize;

use starfield_field::{
    vector as v, AnimationLoop, Animator, CountingScheduler, HeadlessSurface, LogoTransform,
    PointerCell, PointerState, RenderSurface,
};

/// Fixed clock step per tick.
pub const STEP_SECONDS: f32 = 1.0 / 60.0;

/// Radius of the synthetic pointer circle in normalized coordinates.
const POINTER_RADIUS: f32 = 0.6;
/// Angular speed of the synthetic pointer in radians per second.
const POINTER_SPEED: f32 = 0.8;

/// What a headless run ended with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlessSummary {
    pub ticks: u64,
    pub frames: u64,
    pub scheduled: u64,
    pub particles: usize,
    pub elapsed_seconds: f32,
    pub pointer: [f32; 2],
    pub logo: LogoTransform,
    /// Mean distance of particles from their spawn points.
    pub mean_displacement: f32,
    pub max_displacement: f32,
    pub max_speed: f32,
}

/// Pointer position at `elapsed` seconds.
pub fn synthetic_pointer(elapsed: f32) -> PointerState {
    let (sin, cos) = (elapsed * POINTER_SPEED).sin_cos();
    PointerState::new(cos * POINTER_RADIUS, sin * POINTER_RADIUS)
}

/// Run `ticks` frames and summarize the final state.
pub fn run(seed: Option<u64>, ticks: u64) -> HeadlessSummary {
    let pointer = PointerCell::default();
    let mut surface = HeadlessSurface::new(pointer.clone());
    surface.resize(1280, 720);
    let scheduler = CountingScheduler::new();
    let mut frame_loop = AnimationLoop::new(Animator::spawn(seed));

    for _ in 0..ticks {
        pointer.store(synthetic_pointer(surface.elapsed_time()));
        match frame_loop.frame(&mut surface, &scheduler) {
            Ok(()) => {}
            Err(never) => match never {},
        }
        surface.advance(STEP_SECONDS);
    }
    frame_loop.stop();

    let particles = frame_loop.animator().field().particles();
    let mut total = 0.0;
    let mut max_displacement: f32 = 0.0;
    let mut max_speed: f32 = 0.0;
    for p in particles {
        let d = v::distance(p.position, p.origin());
        total += d;
        max_displacement = max_displacement.max(d);
        max_speed = max_speed.max(v::length(p.velocity));
    }
    let last_pointer = pointer.load();

    HeadlessSummary {
        ticks: frame_loop.ticks(),
        frames: surface.frames(),
        scheduled: scheduler.requests(),
        particles: particles.len(),
        elapsed_seconds: surface.elapsed_time(),
        pointer: [last_pointer.x, last_pointer.y],
        logo: frame_loop.animator().logo(),
        mean_displacement: if particles.is_empty() {
            0.0
        } else {
            total / particles.len() as f32
        },
        max_displacement,
        max_speed,
    }
}
