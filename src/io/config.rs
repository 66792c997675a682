use crate::core::geometry::Triangle;
use crate::core::math::transform::TransformFactory;
use crate::scene::camera::Camera;
use crate::scene::context::ShadingMode;
use crate::scene::extrude::{Profile, extrude};
use crate::scene::light::PointLight;
use crate::scene::primitives::cube;
use log::warn;
use nalgebra::{Matrix4, Point2, Point3, Vector3};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub light: LightConfig,
    #[serde(default)]
    pub object: ObjectConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            )
        })?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config: {}", e))
    }
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_background")]
    pub background: [f32; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            output: default_output(),
            background: default_background(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_camera_position")]
    pub position: [f32; 3],
    #[serde(default = "default_camera_target")]
    pub target: [f32; 3],
    #[serde(default = "default_camera_up")]
    pub up: [f32; 3],
    /// "perspective" or "orthographic".
    #[serde(default = "default_projection")]
    pub projection: String,
    #[serde(default = "default_fov")]
    pub fov_y_degrees: f32,
    #[serde(default = "default_ortho_height")]
    pub ortho_height: f32,
    #[serde(default = "default_near")]
    pub near: f32,
    #[serde(default = "default_far")]
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: default_camera_position(),
            target: default_camera_target(),
            up: default_camera_up(),
            projection: default_projection(),
            fov_y_degrees: default_fov(),
            ortho_height: default_ortho_height(),
            near: default_near(),
            far: default_far(),
        }
    }
}

impl CameraConfig {
    pub fn build(&self, aspect_ratio: f32) -> Camera {
        let position = Point3::from(Vector3::from(self.position));
        let target = Point3::from(Vector3::from(self.target));
        let up = Vector3::from(self.up);

        match self.projection.as_str() {
            "orthographic" => Camera::new_orthographic(
                position,
                target,
                up,
                self.ortho_height,
                aspect_ratio,
                self.near,
                self.far,
            ),
            "perspective" => Camera::new_perspective(
                position,
                target,
                up,
                self.fov_y_degrees.to_radians(),
                aspect_ratio,
                self.near,
                self.far,
            ),
            other => {
                warn!("Unknown projection '{}', using perspective", other);
                Camera::new_perspective(
                    position,
                    target,
                    up,
                    self.fov_y_degrees.to_radians(),
                    aspect_ratio,
                    self.near,
                    self.far,
                )
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LightConfig {
    #[serde(default = "default_light_position")]
    pub position: [f32; 3],
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: default_light_position(),
        }
    }
}

impl LightConfig {
    pub fn build(&self) -> PointLight {
        PointLight::new(Point3::from(Vector3::from(self.position)))
    }
}

#[derive(Debug, Deserialize)]
pub struct ObjectConfig {
    /// "cube" or "extrusion".
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_base_color")]
    pub base_color: [f32; 3],
    /// "flat", "gouraud" or "phong".
    #[serde(default = "default_shading")]
    pub shading: String,
    #[serde(default)]
    pub position: [f32; 3],
    /// Euler angles in degrees, applied X then Y then Z.
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default = "default_scale")]
    pub scale: f32,

    // Extrusion parameters, ignored for the cube.
    #[serde(default = "default_profile")]
    pub profile: Vec<[f32; 2]>,
    #[serde(default = "default_extrusion_height")]
    pub height: f32,
    #[serde(default = "default_segments")]
    pub segments: usize,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            base_color: default_base_color(),
            shading: default_shading(),
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: default_scale(),
            profile: default_profile(),
            height: default_extrusion_height(),
            segments: default_segments(),
        }
    }
}

impl ObjectConfig {
    /// Model matrix composed as translate * rotate_x * rotate_y * rotate_z
    /// * uniform scale.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        TransformFactory::translation(&Vector3::from(self.position))
            * TransformFactory::rotation_x(self.rotation[0].to_radians())
            * TransformFactory::rotation_y(self.rotation[1].to_radians())
            * TransformFactory::rotation_z(self.rotation[2].to_radians())
            * TransformFactory::scaling(self.scale)
    }

    pub fn shading_mode(&self) -> ShadingMode {
        match self.shading.as_str() {
            "flat" => ShadingMode::Flat,
            "gouraud" => ShadingMode::Gouraud,
            "phong" => ShadingMode::Phong,
            other => {
                warn!("Unknown shading mode '{}', using phong", other);
                ShadingMode::Phong
            }
        }
    }

    /// Generates the configured object's triangle list.
    pub fn triangles(&self) -> Vec<Triangle> {
        match self.kind.as_str() {
            "cube" => cube(1.0),
            "extrusion" => {
                let points = self
                    .profile
                    .iter()
                    .map(|p| Point2::new(p[0], p[1]))
                    .collect();
                extrude(&Profile::from_points(points), self.height, self.segments)
            }
            other => {
                warn!("Unknown object kind '{}', using cube", other);
                cube(1.0)
            }
        }
    }
}

fn default_width() -> usize {
    800
}
fn default_height() -> usize {
    600
}
fn default_output() -> String {
    "output.png".to_string()
}
fn default_background() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}
fn default_camera_position() -> [f32; 3] {
    [0.0, 0.0, 10.0]
}
fn default_camera_target() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}
fn default_camera_up() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}
fn default_projection() -> String {
    "perspective".to_string()
}
fn default_fov() -> f32 {
    45.0
}
fn default_ortho_height() -> f32 {
    20.0
}
fn default_near() -> f32 {
    0.1
}
fn default_far() -> f32 {
    100.0
}
fn default_light_position() -> [f32; 3] {
    [5.0, 5.0, 5.0]
}
fn default_kind() -> String {
    "cube".to_string()
}
fn default_base_color() -> [f32; 3] {
    [0.0, 0.5, 1.0]
}
fn default_shading() -> String {
    "phong".to_string()
}
fn default_scale() -> f32 {
    1.0
}
fn default_profile() -> Vec<[f32; 2]> {
    vec![[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]]
}
fn default_extrusion_height() -> f32 {
    2.0
}
fn default_segments() -> usize {
    20
}
