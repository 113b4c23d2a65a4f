//! StarfieldApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use starfield_common::StarfieldError;
use starfield_config::StarfieldConfig;
use starfield_field::{AnimationLoop, Animator, PointerCell};
use starfield_renderer::FrameTimer;

use crate::surface::{WindowScheduler, WindowSurface};

/// Top-level application state.
pub struct StarfieldApp {
    pub(super) config: StarfieldConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) surface: Option<WindowSurface>,
    pub(super) scheduler: Option<WindowScheduler>,

    // Simulation
    pub(super) frame_loop: AnimationLoop,
    pub(super) pointer: PointerCell,

    // Performance
    pub(super) frame_timer: FrameTimer,

    // Why the window never came up, reported after the loop exits
    pub(super) init_error: Option<StarfieldError>,
}

impl StarfieldApp {
    pub fn new(config: StarfieldConfig) -> Self {
        let animator = Animator::spawn(config.particles.seed);
        Self {
            config,
            window: None,
            surface: None,
            scheduler: None,
            frame_loop: AnimationLoop::new(animator),
            pointer: PointerCell::default(),
            frame_timer: FrameTimer::starting_at(Instant::now()),
            init_error: None,
        }
    }

    pub fn take_init_error(&mut self) -> Option<StarfieldError> {
        self.init_error.take()
    }
}
