use nalgebra::{Matrix4, Point3};

/// Window rectangle the NDC cube is mapped onto, in pixels.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Full-window viewport anchored at the origin.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }
}

/// Projected window coordinates of a world-space point.
///
/// `y` grows downward (top-left origin, matching the pixel grid); `depth`
/// is the NDC z remapped to [0, 1]. Transient: computed fresh per
/// rasterization call, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

/// Maps world-space points into window coordinates.
pub struct Projector {
    pub modelview: Matrix4<f32>,
    pub projection: Matrix4<f32>,
    pub viewport: Viewport,
}

impl Projector {
    pub fn new(modelview: Matrix4<f32>, projection: Matrix4<f32>, viewport: Viewport) -> Self {
        Self {
            modelview,
            projection,
            viewport,
        }
    }

    /// Applies modelview -> projection -> perspective division -> viewport,
    /// then flips the vertical axis so +y walks down the pixel grid.
    ///
    /// Pure and total for finite inputs: a point behind the camera still
    /// yields a formally valid (if visually meaningless) coordinate; the
    /// rasterizer does not clip.
    pub fn project(&self, point: &Point3<f32>) -> ScreenPoint {
        let clip = self.projection * self.modelview * point.to_homogeneous();

        // Perspective division guarded against |w| near zero.
        let ndc = if clip.w.abs() > 1e-6 {
            Point3::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w)
        } else {
            Point3::origin()
        };

        let win_x = self.viewport.x + (ndc.x + 1.0) * 0.5 * self.viewport.width;
        let win_y = self.viewport.y + (ndc.y + 1.0) * 0.5 * self.viewport.height;

        ScreenPoint {
            x: win_x,
            // The transform math is y-up; the pixel grid is y-down.
            y: self.viewport.height - win_y,
            depth: (ndc.z + 1.0) * 0.5,
        }
    }
}
