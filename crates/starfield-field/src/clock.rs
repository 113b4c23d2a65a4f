use std::time::Instant;

/// Seconds elapsed since construction, as fed to `Animator::tick`.
#[derive(Debug, Clone, Copy)]
pub struct ElapsedClock {
    start: Instant,
}

impl ElapsedClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Monotonic; starts at 0.
    pub fn elapsed_time(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

impl Default for ElapsedClock {
    fn default() -> Self {
        Self::new()
    }
}
