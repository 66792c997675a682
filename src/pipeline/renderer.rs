use crate::core::framebuffer::FrameBuffer;
use crate::core::geometry::Triangle;
use crate::core::rasterizer::ScanlineRasterizer;
use crate::scene::context::RenderContext;
use log::debug;
use nalgebra::Vector3;

/// The high-level renderer that owns the rasterizer and its target buffer.
pub struct Renderer {
    pub rasterizer: ScanlineRasterizer,
    pub framebuffer: FrameBuffer,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            rasterizer: ScanlineRasterizer::new(),
            framebuffer: FrameBuffer::new(width, height),
        }
    }

    /// Clears the framebuffer color and depth.
    pub fn clear(&mut self, color: Vector3<f32>) {
        self.framebuffer.clear(color);
    }

    /// Scanline-rasterizes a triangle list with per-pixel Phong shading.
    ///
    /// The projector and shader are derived from the context once and
    /// shared across the whole list.
    pub fn draw_triangles(
        &mut self,
        ctx: &RenderContext,
        triangles: &[Triangle],
        base_color: &Vector3<f32>,
    ) {
        let projector = ctx.projector();
        let shader = ctx.phong_shader();

        for triangle in triangles {
            self.rasterizer.rasterize_triangle(
                &projector,
                &shader,
                triangle,
                base_color,
                &mut self.framebuffer,
            );
        }
        debug!("rasterized {} triangles", triangles.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::projector::Viewport;
    use crate::scene::camera::Camera;
    use crate::scene::light::PointLight;
    use crate::scene::primitives::cube;
    use nalgebra::Point3;

    #[test]
    fn test_cube_render_touches_the_buffer() {
        let camera = Camera::new_perspective(
            Point3::new(0.0, 0.0, 10.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            45.0_f32.to_radians(),
            1.0,
            0.1,
            100.0,
        );
        let ctx = RenderContext::new(
            camera,
            Viewport::with_size(64, 64),
            PointLight::default(),
        );

        let mut renderer = Renderer::new(64, 64);
        renderer.clear(Vector3::zeros());
        renderer.draw_triangles(&ctx, &cube(1.0), &Vector3::new(0.0, 0.5, 1.0));

        // The front face straddles the view center and must be shaded.
        let center = renderer.framebuffer.get_pixel(32, 32).unwrap();
        assert!(center.norm() > 0.0);
        // Shading scales the base color, it never invents new hue.
        assert!(center.x < 1e-6);
        assert!(center.z > center.y);
    }
}
