//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Wires the window, the renderer, pointer input and the
//! animation loop together.

mod core;
mod event_handler;
mod init;

pub use core::StarfieldApp;
