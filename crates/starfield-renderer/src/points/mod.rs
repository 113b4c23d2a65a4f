//! Particle rendering: sprite image, billboard uniforms, and the
//! instanced wgpu pipeline.

mod pipeline;
mod sprite;
mod types;

pub use pipeline::*;
pub use sprite::*;
pub use types::*;
