//! Per-refresh driver: tick the animator, hand the result to a surface,
//! and ask for the next tick.

use crate::animator::Animator;
use crate::scheduler::Scheduler;
use crate::surface::RenderSurface;

/// Runs the animator once per scheduled tick until stopped.
#[derive(Debug)]
pub struct AnimationLoop {
    animator: Animator,
    running: bool,
    ticks: u64,
}

impl AnimationLoop {
    pub fn new(animator: Animator) -> Self {
        Self {
            animator,
            running: true,
            ticks: 0,
        }
    }

    /// One frame.
    ///
    /// Reads the clock and pointer from the surface, advances the
    /// simulation, pushes the new state, renders and schedules the next
    /// tick. The next tick is requested even when rendering fails so a
    /// transient surface error does not freeze the animation; the render
    /// error is still returned. After `stop` this does nothing.
    pub fn frame<S, R>(&mut self, surface: &mut S, scheduler: &R) -> Result<(), S::Error>
    where
        S: RenderSurface + ?Sized,
        R: Scheduler + ?Sized,
    {
        if !self.running {
            return Ok(());
        }

        let elapsed = surface.elapsed_time();
        let pointer = surface.pointer();
        self.animator.tick(elapsed, pointer);
        self.ticks += 1;

        surface.set_particle_positions(self.animator.field().positions());
        surface.set_logo_transform(self.animator.logo());
        let rendered = surface.render_frame();

        scheduler.request_tick();
        rendered
    }

    /// Halt the loop. Idempotent; later `frame` calls are no-ops.
    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!(ticks = self.ticks, "animation loop stopped");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }
}
