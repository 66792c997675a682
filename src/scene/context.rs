use crate::core::projector::{Projector, Viewport};
use crate::pipeline::shaders::phong::PhongShader;
use crate::scene::camera::Camera;
use crate::scene::light::PointLight;
use nalgebra::Matrix4;

/// Pixel-shading strategy selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingMode {
    /// One lighting computation per face.
    Flat,
    /// Lighting per vertex, color interpolated across the face.
    Gouraud,
    /// Normal interpolated across the face, lighting per pixel. This is
    /// the mode the scanline rasterizer implements.
    Phong,
}

impl ShadingMode {
    /// Cycling order used by mode-toggle keys: Flat -> Gouraud -> Phong.
    pub fn next(self) -> Self {
        match self {
            ShadingMode::Flat => ShadingMode::Gouraud,
            ShadingMode::Gouraud => ShadingMode::Phong,
            ShadingMode::Phong => ShadingMode::Flat,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShadingMode::Flat => "flat",
            ShadingMode::Gouraud => "gouraud",
            ShadingMode::Phong => "phong",
        }
    }
}

/// Everything the projector, shader, and rasterizer need for one frame.
///
/// Replaces ambient process-wide render state: the caller builds one per
/// frame (mutating the light position, model transform, or shading mode
/// between frames) and hands it down explicitly, which keeps the core
/// testable in isolation.
pub struct RenderContext {
    pub camera: Camera,
    pub model_matrix: Matrix4<f32>,
    pub viewport: Viewport,
    pub light: PointLight,
    pub shading_mode: ShadingMode,
}

impl RenderContext {
    pub fn new(camera: Camera, viewport: Viewport, light: PointLight) -> Self {
        Self {
            camera,
            model_matrix: Matrix4::identity(),
            viewport,
            light,
            shading_mode: ShadingMode::Phong,
        }
    }

    /// Projector for the current camera/model/viewport state.
    pub fn projector(&self) -> Projector {
        Projector::new(
            self.camera.view_matrix() * self.model_matrix,
            self.camera.projection_matrix(),
            self.viewport,
        )
    }

    /// Point shader bound to the current light and viewer positions.
    pub fn phong_shader(&self) -> PhongShader {
        PhongShader::new(self.light.clone(), self.camera.position)
    }
}
