use crate::core::pipeline::PixelSink;
use nalgebra::Vector3;

/// A 2D buffer containing color and depth information.
///
/// One render thread drives it; writes are depth-tested so later triangles
/// only overwrite pixels they are closer on.
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    color_buffer: Vec<Vector3<f32>>,
    depth_buffer: Vec<f32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            color_buffer: vec![Vector3::zeros(); size],
            depth_buffer: vec![f32::INFINITY; size],
        }
    }

    #[inline(always)]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Resets every pixel to `color` and every depth to infinity.
    pub fn clear(&mut self, color: Vector3<f32>) {
        self.color_buffer.fill(color);
        self.depth_buffer.fill(f32::INFINITY);
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Vector3<f32>> {
        if self.in_bounds(x, y) {
            Some(self.color_buffer[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_depth(&self, x: usize, y: usize) -> Option<f32> {
        if self.in_bounds(x, y) {
            Some(self.depth_buffer[self.index(x, y)])
        } else {
            None
        }
    }
}

impl PixelSink for FrameBuffer {
    fn set_pixel(&mut self, x: i32, y: i32, depth: f32, color: Vector3<f32>) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if !self.in_bounds(x, y) {
            return;
        }

        let idx = self.index(x, y);
        if depth < self.depth_buffer[idx] {
            self.depth_buffer[idx] = depth;
            self.color_buffer[idx] = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_tested_write() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.set_pixel(1, 1, 0.5, Vector3::new(1.0, 0.0, 0.0));
        // A farther write must not replace the pixel.
        fb.set_pixel(1, 1, 0.9, Vector3::new(0.0, 1.0, 0.0));
        let c = fb.get_pixel(1, 1).unwrap();
        assert!((c - Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-6);

        // A closer write must.
        fb.set_pixel(1, 1, 0.1, Vector3::new(0.0, 0.0, 1.0));
        let c = fb.get_pixel(1, 1).unwrap();
        assert!((c - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
        assert!((fb.get_depth(1, 1).unwrap() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_bounds_writes_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel(-1, 0, 0.0, Vector3::new(1.0, 1.0, 1.0));
        fb.set_pixel(0, -3, 0.0, Vector3::new(1.0, 1.0, 1.0));
        fb.set_pixel(2, 0, 0.0, Vector3::new(1.0, 1.0, 1.0));
        fb.set_pixel(0, 2, 0.0, Vector3::new(1.0, 1.0, 1.0));
        for y in 0..2 {
            for x in 0..2 {
                assert!(fb.get_pixel(x, y).unwrap().norm() < 1e-6);
            }
        }
    }

    #[test]
    fn test_clear_resets_color_and_depth() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel(0, 0, 0.2, Vector3::new(1.0, 1.0, 1.0));
        fb.clear(Vector3::new(0.1, 0.1, 0.1));
        assert!((fb.get_pixel(0, 0).unwrap() - Vector3::new(0.1, 0.1, 0.1)).norm() < 1e-6);
        assert!(fb.get_depth(0, 0).unwrap().is_infinite());
    }
}
