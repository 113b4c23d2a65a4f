pub mod color;
pub mod errors;

pub use color::{srgb_to_linear, Color};
pub use errors::{ConfigError, StarfieldError};

pub type Result<T> = std::result::Result<T, StarfieldError>;
