//! Bloom validation.

use crate::schema::StarfieldConfig;

use super::helpers::{validate_range, validate_range_f32};

/// Validate bloom constraints. Checked even when bloom is disabled so a
/// bad value does not surface only after toggling it on.
pub(crate) fn validate_bloom(errors: &mut Vec<String>, config: &StarfieldConfig) {
    let bloom = &config.bloom;
    validate_range_f32(errors, "bloom.strength", bloom.strength, 0.0, 3.0);
    validate_range_f32(errors, "bloom.radius", bloom.radius, 0.0, 1.0);
    validate_range_f32(errors, "bloom.threshold", bloom.threshold, 0.0, 1.0);
    validate_range(errors, "bloom.passes", bloom.passes, 1, 5);
}
