//! Minimal 3-component vector math for the particle simulation.
//!
//! Plain `[f32; 3]` plus free functions, in the same spirit as the
//! column-major `Mat4` helpers in the renderer. Nothing here allocates.

/// A point or direction in world space.
pub type Vec3 = [f32; 3];

pub const ZERO: Vec3 = [0.0, 0.0, 0.0];

pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale(v: Vec3, s: f32) -> Vec3 {
    [v[0] * s, v[1] * s, v[2] * s]
}

pub fn length(v: Vec3) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

pub fn distance(a: Vec3, b: Vec3) -> f32 {
    length(sub(a, b))
}

/// Unit vector in the direction of `v`.
///
/// Returns `None` for a zero-length (or non-finite) input instead of
/// producing NaN components.
pub fn normalize(v: Vec3) -> Option<Vec3> {
    let len = length(v);
    if len > 0.0 && len.is_finite() {
        Some(scale(v, 1.0 / len))
    } else {
        None
    }
}

pub fn is_finite(v: Vec3) -> bool {
    v.iter().all(|c| c.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-6)
    }

    #[test]
    fn add_and_sub_are_componentwise() {
        let a = [1.0, 2.0, 3.0];
        let b = [0.5, -1.0, 4.0];
        assert_eq!(add(a, b), [1.5, 1.0, 7.0]);
        assert_eq!(sub(a, b), [0.5, 3.0, -1.0]);
        assert_eq!(sub(a, a), ZERO);
    }

    #[test]
    fn scale_multiplies_every_component() {
        assert_eq!(scale([1.0, -2.0, 0.5], 2.0), [2.0, -4.0, 1.0]);
        assert_eq!(scale([1.0, 2.0, 3.0], 0.0), ZERO);
    }

    #[test]
    fn length_and_distance() {
        assert!((length([3.0, 4.0, 0.0]) - 5.0).abs() < 1e-6);
        assert!((distance([10.0, 0.0, 0.0], ZERO) - 10.0).abs() < 1e-6);
        assert!((distance([1.0, 1.0, 1.0], [1.0, 1.0, 1.0])).abs() < 1e-6);
    }

    #[test]
    fn normalize_returns_unit_vector() {
        let n = normalize([0.0, 0.0, -4.0]).unwrap();
        assert!(approx(n, [0.0, 0.0, -1.0]));

        let n = normalize([1.0, 1.0, 1.0]).unwrap();
        assert!((length(n) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_is_none() {
        assert!(normalize(ZERO).is_none());
        assert!(normalize([f32::NAN, 0.0, 0.0]).is_none());
        assert!(normalize([f32::INFINITY, 0.0, 0.0]).is_none());
    }

    #[test]
    fn finiteness_check() {
        assert!(is_finite([1.0, -2.0, 1e30]));
        assert!(!is_finite([1.0, f32::NAN, 0.0]));
        assert!(!is_finite([f32::NEG_INFINITY, 0.0, 0.0]));
    }
}
