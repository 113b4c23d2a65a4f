//! Camera, particle, logo and lighting validation.

use crate::schema::StarfieldConfig;

use super::helpers::{validate_color, validate_finite3, validate_range_f32};

/// Validate the camera frustum.
pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &StarfieldConfig) {
    let camera = &config.camera;
    validate_range_f32(errors, "camera.fov_degrees", camera.fov_degrees, 10.0, 150.0);
    validate_range_f32(errors, "camera.near", camera.near, 0.001, 100.0);
    validate_range_f32(errors, "camera.far", camera.far, 1.0, 100_000.0);
    validate_range_f32(errors, "camera.distance", camera.distance, 1.0, 100.0);
    if camera.far <= camera.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            camera.far, camera.near
        ));
    }
}

/// Validate particle sprite appearance.
pub(crate) fn validate_particles(errors: &mut Vec<String>, config: &StarfieldConfig) {
    let particles = &config.particles;
    validate_range_f32(errors, "particles.size", particles.size, 0.01, 5.0);
    validate_range_f32(errors, "particles.opacity", particles.opacity, 0.0, 1.0);
    validate_color(errors, "particles.color", &particles.color);
    if particles.sprite.as_deref().is_some_and(|s| s.trim().is_empty()) {
        errors.push("particles.sprite must not be empty".into());
    }
}

/// Validate the logo material.
pub(crate) fn validate_logo(errors: &mut Vec<String>, config: &StarfieldConfig) {
    let logo = &config.logo;
    validate_color(errors, "logo.color", &logo.color);
    validate_color(errors, "logo.emissive", &logo.emissive);
    validate_range_f32(errors, "logo.metalness", logo.metalness, 0.0, 1.0);
    validate_range_f32(errors, "logo.roughness", logo.roughness, 0.0, 1.0);
}

/// Validate light intensities and positions.
pub(crate) fn validate_lighting(errors: &mut Vec<String>, config: &StarfieldConfig) {
    let lighting = &config.lighting;
    validate_range_f32(errors, "lighting.ambient", lighting.ambient, 0.0, 10.0);
    validate_range_f32(errors, "lighting.directional", lighting.directional, 0.0, 10.0);
    validate_range_f32(errors, "lighting.point", lighting.point, 0.0, 10.0);
    validate_finite3(
        errors,
        "lighting.directional_position",
        lighting.directional_position,
    );
    validate_finite3(errors, "lighting.point_position", lighting.point_position);
    if lighting.directional_position == [0.0; 3] {
        errors.push("lighting.directional_position must not be the origin".into());
    }
}
