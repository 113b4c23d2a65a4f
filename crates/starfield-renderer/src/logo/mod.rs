//! The "ET" logo: six boxes lit by ambient, directional and point lights.
//!
//! The mesh is static. Only the group transform (rotation toward the
//! pointer plus a vertical bob) changes per frame.

mod mesh;
mod pipeline;
mod types;

pub use mesh::*;
pub use pipeline::*;
pub use types::*;
