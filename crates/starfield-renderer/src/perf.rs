//! Frame timing for the periodic performance log.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Rolling frame statistics handed out once per report interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub fps: f64,
    pub frame_time_ms: f64,
    pub frames: u64,
}

/// Tracks recent frame durations over a fixed-size window.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    last_report: Instant,
    max_samples: usize,
    total_frames: u64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Timer whose first frame delta is measured from `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            frame_times: VecDeque::new(),
            last_frame: start,
            last_report: start,
            max_samples: 120,
            total_frames: 0,
        }
    }

    /// Record a frame. Call once per redraw.
    pub fn begin_frame(&mut self) {
        self.begin_frame_at(Instant::now());
    }

    pub fn begin_frame_at(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.total_frames += 1;
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total = self.window_secs();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.window_secs() / self.frame_times.len() as f64 * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    /// Returns a report when at least `every` has passed since the last
    /// one, so callers can log at a fixed cadence.
    pub fn take_report(&mut self, now: Instant, every: Duration) -> Option<FrameReport> {
        if now.saturating_duration_since(self.last_report) < every || self.frame_times.is_empty() {
            return None;
        }
        self.last_report = now;
        Some(FrameReport {
            fps: self.fps(),
            frame_time_ms: self.frame_time_ms(),
            frames: self.total_frames,
        })
    }

    fn window_secs(&self) -> f64 {
        self.frame_times.iter().map(|d| d.as_secs_f64()).sum()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn initial_fps_is_zero() {
        let timer = FrameTimer::new();
        assert_eq!(timer.fps(), 0.0);
        assert_eq!(timer.frame_time_ms(), 0.0);
    }

    #[test]
    fn steady_frames_average_out() {
        let start = Instant::now();
        let mut timer = FrameTimer::starting_at(start);
        for i in 1..=10 {
            timer.begin_frame_at(start + FRAME * i);
        }
        assert_eq!(timer.sample_count(), 10);
        assert!((timer.frame_time_ms() - 16.0).abs() < 1e-6);
        assert!((timer.fps() - 62.5).abs() < 1e-6);
    }

    #[test]
    fn max_samples_respected() {
        let start = Instant::now();
        let mut timer = FrameTimer::starting_at(start);
        for i in 1..=200 {
            timer.begin_frame_at(start + FRAME * i);
        }
        assert_eq!(timer.sample_count(), 120);
    }

    #[test]
    fn reports_at_most_once_per_interval() {
        let start = Instant::now();
        let every = Duration::from_secs(5);
        let mut timer = FrameTimer::starting_at(start);

        assert!(timer.take_report(start + every, every).is_none(), "no frames yet");

        timer.begin_frame_at(start + FRAME);
        assert!(timer.take_report(start + FRAME, every).is_none());

        let report = timer.take_report(start + every, every).unwrap();
        assert_eq!(report.frames, 1);
        assert!(timer.take_report(start + every + FRAME, every).is_none());
        assert!(timer.take_report(start + every * 2, every).is_some());
    }
}
