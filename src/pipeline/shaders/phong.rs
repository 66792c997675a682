use crate::core::math::interpolation::{normalize_or_default, normalize_or_zero};
use crate::core::pipeline::PointShader;
use crate::scene::light::PointLight;
use nalgebra::{Point3, Vector3};

/// Ambient reflection coefficient.
const KA: f32 = 0.2;
/// Diffuse (Lambertian) reflection coefficient.
const KD: f32 = 0.7;
/// Specular reflection coefficient.
const KS: f32 = 0.8;
/// Specular exponent.
const SHININESS: f32 = 32.0;

/// The full Phong reflection model evaluated at a single surface point:
///
/// I = ka + kd * max(0, N.L) + ks * max(0, R.V)^shininess
///
/// The coefficients are fixed policy rather than material parameters, and
/// the clamped intensity scales the caller's base color per channel. This
/// is the hottest function in the crate (once per covered pixel) and is
/// intentionally recomputed every call; nothing is cached.
pub struct PhongShader {
    pub light: PointLight,
    pub viewer: Point3<f32>,
}

impl PhongShader {
    pub fn new(light: PointLight, viewer: Point3<f32>) -> Self {
        Self { light, viewer }
    }
}

impl PointShader for PhongShader {
    fn shade(
        &self,
        position: &Point3<f32>,
        normal: &Vector3<f32>,
        base_color: &Vector3<f32>,
    ) -> Vector3<f32> {
        // A degenerate light or view direction contributes nothing; a
        // degenerate normal shades as +Z.
        let light_dir = normalize_or_zero(&self.light.direction_from(position));
        let n = normalize_or_default(normal);
        let view_dir = normalize_or_zero(&(self.viewer - position));

        let mut intensity = KA;

        let n_dot_l = n.dot(&light_dir).max(0.0);
        intensity += KD * n_dot_l;

        // Specular only where the surface actually faces the light.
        if n_dot_l > 0.0 {
            let reflect_dir = n * (2.0 * n_dot_l) - light_dir;
            let r_dot_v = reflect_dir.dot(&view_dir).max(0.0);
            intensity += KS * r_dot_v.powf(SHININESS);
        }

        intensity = intensity.clamp(0.0, 1.0);
        base_color * intensity
    }
}
