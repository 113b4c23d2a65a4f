//! Shared range-validation helpers used by all domain validators.

use starfield_common::Color;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` or not a number (float).
pub(crate) fn validate_range_f32(
    errors: &mut Vec<String>,
    name: &str,
    value: f32,
    min: f32,
    max: f32,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not a `#rrggbb` or `#rrggbbaa` color.
pub(crate) fn validate_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if Color::from_hex(value).is_none() {
        errors.push(format!("{name} = {value:?} is not a hex color"));
    }
}

/// Push an error if any component is NaN or infinite.
pub(crate) fn validate_finite3(errors: &mut Vec<String>, name: &str, value: [f32; 3]) {
    if value.iter().any(|c| !c.is_finite()) {
        errors.push(format!("{name} = {value:?} must be finite"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds_are_inclusive() {
        let mut errors = Vec::new();
        validate_range(&mut errors, "n", 1, 1, 5);
        validate_range(&mut errors, "n", 5, 1, 5);
        validate_range_f32(&mut errors, "f", 0.0, 0.0, 1.0);
        validate_range_f32(&mut errors, "f", 1.0, 0.0, 1.0);
        assert!(errors.is_empty());
    }

    #[test]
    fn nan_is_out_of_range() {
        let mut errors = Vec::new();
        validate_range_f32(&mut errors, "bloom.strength", f32::NAN, 0.0, 3.0);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("bloom.strength = NaN"));
    }

    #[test]
    fn color_message_names_field() {
        let mut errors = Vec::new();
        validate_color(&mut errors, "logo.color", "#ee");
        validate_color(&mut errors, "logo.emissive", "#222222");
        assert_eq!(errors, vec!["logo.color = \"#ee\" is not a hex color".to_string()]);
    }
}
