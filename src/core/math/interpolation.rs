use nalgebra::{Point3, Vector3};

const EPSILON: f32 = 1e-5;

/// Linearly interpolates between two positions: a + t * (b - a).
#[inline]
pub fn lerp_point(a: &Point3<f32>, b: &Point3<f32>, t: f32) -> Point3<f32> {
    Point3::from(a.coords + (b.coords - a.coords) * t)
}

/// Linearly interpolates between two directions.
///
/// The result is NOT re-normalized; callers that need a unit vector run it
/// through `normalize_or_default` afterwards.
#[inline]
pub fn lerp_vector(a: &Vector3<f32>, b: &Vector3<f32>, t: f32) -> Vector3<f32> {
    a + (b - a) * t
}

/// Scalar lerp, used for screen-x and depth along edges and spans.
#[inline]
pub fn lerp_scalar(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Normalizes a vector, substituting +Z when the length is degenerate.
///
/// This is the fallback every shading path relies on: an interpolated or
/// caller-supplied normal of zero length shades as if it pointed at the
/// viewer-facing axis instead of producing NaNs.
#[inline]
pub fn normalize_or_default(v: &Vector3<f32>) -> Vector3<f32> {
    let len = v.norm();
    if len > EPSILON {
        v / len
    } else {
        Vector3::new(0.0, 0.0, 1.0)
    }
}

/// Normalizes a vector, substituting zero when the length is degenerate.
///
/// Used for light and view directions: a degenerate direction contributes
/// nothing to the lighting sum rather than being remapped to an axis.
#[inline]
pub fn normalize_or_zero(v: &Vector3<f32>) -> Vector3<f32> {
    let len = v.norm();
    if len > EPSILON {
        v / len
    } else {
        Vector3::zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_point_endpoints() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(5.0, -2.0, 7.0);
        assert!((lerp_point(&a, &b, 0.0) - a).norm() < 1e-6);
        assert!((lerp_point(&a, &b, 1.0) - b).norm() < 1e-6);
        let mid = lerp_point(&a, &b, 0.5);
        assert!((mid - Point3::new(3.0, 0.0, 5.0)).norm() < 1e-6);
    }

    #[test]
    fn test_lerp_vector_midpoint() {
        let a = Vector3::new(0.0, 0.0, 1.0);
        let b = Vector3::new(0.0, 1.0, 0.0);
        let mid = lerp_vector(&a, &b, 0.5);
        assert!((mid - Vector3::new(0.0, 0.5, 0.5)).norm() < 1e-6);
    }

    #[test]
    fn test_normalize_or_default_unit_length() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        let n = normalize_or_default(&v);
        assert!((n.norm() - 1.0).abs() < 1e-6);
        assert!((n - Vector3::new(0.6, 0.8, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_normalize_or_default_degenerate_falls_back_to_z() {
        let n = normalize_or_default(&Vector3::zeros());
        assert!((n - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_normalize_or_zero_degenerate_stays_zero() {
        let n = normalize_or_zero(&Vector3::zeros());
        assert!(n.norm() < 1e-6);
    }
}
