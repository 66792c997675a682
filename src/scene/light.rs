use nalgebra::{Point3, Vector3};

/// A positional point light with a fixed ambient/diffuse/specular split.
///
/// The position moves between frames under caller control (the classic
/// IJKL-style light nudging); the intensity coefficients mirror a
/// fixed-function light setup and are read-only to the render core.
#[derive(Debug, Clone)]
pub struct PointLight {
    pub position: Point3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
}

impl PointLight {
    /// Creates a light at `position` with the standard intensity split.
    pub fn new(position: Point3<f32>) -> Self {
        Self {
            position,
            ambient: Vector3::new(0.2, 0.2, 0.2),
            diffuse: Vector3::new(0.7, 0.7, 0.7),
            specular: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Unnormalized direction from a surface point toward the light.
    pub fn direction_from(&self, surface_point: &Point3<f32>) -> Vector3<f32> {
        self.position - surface_point
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(Point3::new(5.0, 5.0, 5.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_points_at_light() {
        let light = PointLight::new(Point3::new(5.0, 0.0, 0.0));
        let dir = light.direction_from(&Point3::new(1.0, 0.0, 0.0));
        assert!((dir - Vector3::new(4.0, 0.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_default_intensity_split() {
        let light = PointLight::default();
        assert!((light.ambient.x - 0.2).abs() < 1e-6);
        assert!((light.diffuse.x - 0.7).abs() < 1e-6);
        assert!((light.specular.x - 1.0).abs() < 1e-6);
    }
}
