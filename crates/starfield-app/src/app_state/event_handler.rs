//! `ApplicationHandler` implementation for the winit event loop.

use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use starfield_field::{normalize_pointer, RenderSurface, Scheduler};

use super::core::StarfieldApp;

/// How often frame timing is logged at debug level.
const PERF_REPORT_INTERVAL: Duration = Duration::from_secs(5);

impl ApplicationHandler for StarfieldApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        // First tick; every frame after this schedules its successor.
        if let Some(ref scheduler) = self.scheduler {
            scheduler.request_tick();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.frame_loop.stop();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(ref mut surface) = self.surface {
                    surface.resize(size.width, size.height);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_moved(position.x, position.y);
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
            }

            _ => {}
        }
    }
}

impl StarfieldApp {
    fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        let Some(ref window) = self.window else {
            return;
        };
        let size = window.inner_size();
        self.pointer
            .store(normalize_pointer(x, y, size.width, size.height));
    }

    fn redraw(&mut self) {
        let (Some(surface), Some(scheduler)) = (self.surface.as_mut(), self.scheduler.as_ref())
        else {
            return;
        };

        let now = Instant::now();
        self.frame_timer.begin_frame_at(now);
        if let Some(report) = self.frame_timer.take_report(now, PERF_REPORT_INTERVAL) {
            tracing::debug!(
                "{:.1} fps ({:.2} ms/frame, {} frames)",
                report.fps,
                report.frame_time_ms,
                report.frames,
            );
        }

        if let Err(e) = self.frame_loop.frame(surface, scheduler) {
            tracing::error!("Render error: {e}");
        }
    }
}
