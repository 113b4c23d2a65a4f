//! Window configuration validation.

use crate::schema::StarfieldConfig;

use super::helpers::{validate_color, validate_range};

/// Validate window size and background color.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &StarfieldConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 7680);
    validate_range(errors, "window.height", config.window.height, 240, 4320);
    validate_color(errors, "window.background", &config.window.background);
}
