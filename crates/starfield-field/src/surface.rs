//! The seam between the animator and whatever draws the frame.

use std::convert::Infallible;

use crate::logo::LogoTransform;
use crate::pointer::{PointerCell, PointerState};

/// Everything the frame loop needs from a renderer.
///
/// A windowed implementation wraps the GPU state; `HeadlessSurface`
/// records what it was given so the loop can run without a display.
pub trait RenderSurface {
    type Error;

    /// Seconds since the surface was created.
    fn elapsed_time(&self) -> f32;

    /// Latest pointer position in normalized coordinates.
    fn pointer(&self) -> PointerState;

    /// Flat `xyz` triples, one per particle.
    fn set_particle_positions(&mut self, positions: &[f32]);

    fn set_logo_transform(&mut self, transform: LogoTransform);

    /// Draw one frame with the state set since the last call.
    fn render_frame(&mut self) -> Result<(), Self::Error>;

    /// Drawable size changed. Zero dimensions must be tolerated.
    fn resize(&mut self, width: u32, height: u32);
}

/// A surface with no display, driven by an explicit clock.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    elapsed: f32,
    pointer: PointerCell,
    positions: Vec<f32>,
    logo: LogoTransform,
    frames: u64,
    size: (u32, u32),
}

impl HeadlessSurface {
    pub fn new(pointer: PointerCell) -> Self {
        Self {
            pointer,
            ..Self::default()
        }
    }

    /// Move the clock forward by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn set_elapsed(&mut self, elapsed: f32) {
        self.elapsed = elapsed;
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn logo(&self) -> LogoTransform {
        self.logo
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

impl RenderSurface for HeadlessSurface {
    type Error = Infallible;

    fn elapsed_time(&self) -> f32 {
        self.elapsed
    }

    fn pointer(&self) -> PointerState {
        self.pointer.load()
    }

    fn set_particle_positions(&mut self, positions: &[f32]) {
        self.positions.clear();
        self.positions.extend_from_slice(positions);
    }

    fn set_logo_transform(&mut self, transform: LogoTransform) {
        self.logo = transform;
    }

    fn render_frame(&mut self) -> Result<(), Infallible> {
        self.frames += 1;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_records_state() {
        let mut surface = HeadlessSurface::default();
        surface.set_particle_positions(&[1.0, 2.0, 3.0]);
        surface.set_particle_positions(&[4.0, 5.0, 6.0]);
        assert_eq!(surface.positions(), &[4.0, 5.0, 6.0]);

        surface.render_frame().unwrap();
        surface.render_frame().unwrap();
        assert_eq!(surface.frames(), 2);

        surface.resize(0, 0);
        assert_eq!(surface.size(), (0, 0));
    }

    #[test]
    fn headless_clock_and_pointer() {
        let cell = PointerCell::default();
        let mut surface = HeadlessSurface::new(cell.clone());
        surface.advance(0.5);
        surface.advance(0.25);
        assert_eq!(surface.elapsed_time(), 0.75);
        surface.set_elapsed(3.0);
        assert_eq!(surface.elapsed_time(), 3.0);

        cell.store(PointerState::new(0.5, -0.5));
        assert_eq!(surface.pointer(), PointerState::new(0.5, -0.5));
    }
}
