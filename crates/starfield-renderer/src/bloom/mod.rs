//! Bloom post-processing pipeline.
//!
//! A bright pass extracts light from the scene target, then one or more
//! horizontal/vertical Gaussian blur pairs soften it. The result is added
//! back over the scene by the composite pass. Skipped entirely when
//! `bloom.enabled = false`.

mod pipeline;
mod types;

pub use pipeline::*;
pub use types::*;
