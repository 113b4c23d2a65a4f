//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use starfield_common::StarfieldError;
use starfield_renderer::RenderState;

use super::core::StarfieldApp;
use crate::surface::{WindowScheduler, WindowSurface};

impl StarfieldApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should
    /// exit; the cause is kept in `init_error`.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_transparent(window_config.transparent)
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.init_error = Some(StarfieldError::Other(format!(
                    "failed to create window: {e}"
                )));
                return false;
            }
        };

        let render_state = match pollster::block_on(RenderState::new(window.clone(), &self.config))
        {
            Ok(rs) => rs,
            Err(e) => {
                self.init_error = Some(StarfieldError::Renderer(e.to_string()));
                return false;
            }
        };

        self.surface = Some(WindowSurface::new(render_state, self.pointer.clone()));
        self.scheduler = Some(WindowScheduler::new(window.clone()));
        self.window = Some(window);
        true
    }
}
