//! Full configuration validation.
//!
//! Validates all numeric ranges and color formats. Each domain has its
//! own submodule; this orchestrator calls them all and collects errors
//! into a single `ConfigError`.

mod effects;
mod helpers;
mod scene;
mod window;


use crate::schema::StarfieldConfig;
use starfield_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &StarfieldConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, config);
    scene::validate_camera(&mut errors, config);
    scene::validate_particles(&mut errors, config);
    scene::validate_logo(&mut errors, config);
    scene::validate_lighting(&mut errors, config);
    effects::validate_bloom(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
