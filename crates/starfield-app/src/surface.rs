//! The windowed `RenderSurface` and the redraw-based scheduler.

use std::sync::Arc;

use winit::window::Window;

use starfield_field::{
    ElapsedClock, LogoTransform, PointerCell, PointerState, RenderSurface, Scheduler,
};
use starfield_renderer::{RenderState, RendererError};

/// GPU renderer plus the clock and pointer the frame loop reads.
pub struct WindowSurface {
    render_state: RenderState,
    clock: ElapsedClock,
    pointer: PointerCell,
}

impl WindowSurface {
    pub fn new(render_state: RenderState, pointer: PointerCell) -> Self {
        Self {
            render_state,
            clock: ElapsedClock::new(),
            pointer,
        }
    }
}

impl RenderSurface for WindowSurface {
    type Error = RendererError;

    fn elapsed_time(&self) -> f32 {
        self.clock.elapsed_time()
    }

    fn pointer(&self) -> PointerState {
        self.pointer.load()
    }

    fn set_particle_positions(&mut self, positions: &[f32]) {
        self.render_state.set_particle_positions(positions);
    }

    fn set_logo_transform(&mut self, transform: LogoTransform) {
        self.render_state.set_logo_transform(transform);
    }

    fn render_frame(&mut self) -> Result<(), RendererError> {
        self.render_state.render_frame()
    }

    fn resize(&mut self, width: u32, height: u32) {
        tracing::debug!("surface resize to {width}x{height}");
        self.render_state.resize(width, height);
    }
}

/// Schedules the next tick by asking winit for another redraw, which
/// arrives paced by the display's refresh.
pub struct WindowScheduler {
    window: Arc<Window>,
}

impl WindowScheduler {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl Scheduler for WindowScheduler {
    fn request_tick(&self) {
        self.window.request_redraw();
    }
}
