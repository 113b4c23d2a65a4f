//! wgpu renderer for the particle field and logo.
//!
//! Particles are camera-facing sprites drawn additively into an HDR scene
//! target together with the lit logo mesh. A bloom pass blurs the bright
//! parts and a composite pass writes the result to the window surface.

pub mod bloom;
pub mod camera;
pub mod gpu;
pub mod logo;
pub mod matrix;
pub mod perf;
pub mod points;
pub mod render_state;

pub use bloom::{BloomPipeline, BloomSettings};
pub use camera::Camera;
pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use logo::{LogoMaterial, LogoPipeline};
pub use perf::{FrameReport, FrameTimer};
pub use points::{PointStyle, PointsPipeline, SpriteImage};
pub use render_state::RenderState;
