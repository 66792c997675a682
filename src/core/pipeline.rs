use nalgebra::{Point3, Vector3};

/// Per-point shading stage invoked by the rasterizer for every covered pixel.
///
/// Implementations must be total over their numeric domain: any combination
/// of position, normal, and base color yields a color, never an error.
pub trait PointShader {
    /// Computes the lit color for one surface point.
    ///
    /// `normal` is not required to be unit length; implementations
    /// re-normalize and fall back to +Z when it is degenerate.
    fn shade(
        &self,
        position: &Point3<f32>,
        normal: &Vector3<f32>,
        base_color: &Vector3<f32>,
    ) -> Vector3<f32>;
}

/// Destination for rasterized pixels.
///
/// The crate's own `FrameBuffer` implements this; callers embedding the
/// rasterizer in another pipeline (a windowing layer, a GPU upload path)
/// provide their own sink.
pub trait PixelSink {
    /// Writes one shaded pixel. `depth` is the projector's [0, 1] depth;
    /// visibility resolution is the sink's responsibility.
    fn set_pixel(&mut self, x: i32, y: i32, depth: f32, color: Vector3<f32>);

    /// Called before manually shaded pixels are written, so any
    /// fixed-function lighting the sink drives does not also tint them.
    fn suspend_fixed_lighting(&mut self) {}

    /// Restores whatever `suspend_fixed_lighting` disabled. The rasterizer
    /// guarantees this runs on every exit path, degenerate inputs included.
    fn restore_fixed_lighting(&mut self) {}
}
