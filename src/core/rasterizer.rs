use crate::core::geometry::Triangle;
use crate::core::math::interpolation::{
    lerp_point, lerp_scalar, lerp_vector, normalize_or_default,
};
use crate::core::pipeline::{PixelSink, PointShader};
use crate::core::projector::{Projector, ScreenPoint};
use nalgebra::{Point3, Vector3};
use std::cmp::Ordering;

/// Guard added to span denominators so a near-zero width divides to a
/// well-defined (if imprecise) parameter instead of infinity.
const SPAN_EPSILON: f32 = 1e-9;

/// One projected vertex paired with the attributes interpolated across
/// the face.
#[derive(Clone, Copy)]
struct ScanVertex {
    screen: ScreenPoint,
    world: Point3<f32>,
    normal: Vector3<f32>,
}

/// An edge/scanline intersection carrying the attributes interpolated to
/// that row.
#[derive(Clone, Copy)]
struct SpanEnd {
    x: f32,
    depth: f32,
    world: Point3<f32>,
    normal: Vector3<f32>,
}

/// Suspends the sink's fixed-function lighting for the duration of a
/// software-shaded fill and restores it on drop, so every exit path
/// (the degenerate early-outs included) leaves the sink as it found it.
struct SoftwareShadingScope<'a, K: PixelSink> {
    sink: &'a mut K,
}

impl<'a, K: PixelSink> SoftwareShadingScope<'a, K> {
    fn begin(sink: &'a mut K) -> Self {
        sink.suspend_fixed_lighting();
        Self { sink }
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, depth: f32, color: Vector3<f32>) {
        self.sink.set_pixel(x, y, depth, color);
    }
}

impl<K: PixelSink> Drop for SoftwareShadingScope<'_, K> {
    fn drop(&mut self) {
        self.sink.restore_fixed_lighting();
    }
}

/// Scanline rasterizer evaluating the point shader at every covered pixel.
///
/// Coverage is computed one horizontal row at a time from edge
/// intersections; world position and normal are linearly interpolated
/// along the active edges and again across each span, so the shader sees
/// per-pixel attributes rather than vertex colors.
#[derive(Debug, Default)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Fills one triangle, shading each covered pixel individually.
    ///
    /// Runs in O(covered pixels) with no clipping and no early-out.
    /// Degenerate geometry never errors: rows with fewer than two edge
    /// intersections and zero-width spans are skipped, so a zero-area
    /// triangle draws nothing.
    pub fn rasterize_triangle<S: PointShader, K: PixelSink>(
        &self,
        projector: &Projector,
        shader: &S,
        triangle: &Triangle,
        base_color: &Vector3<f32>,
        sink: &mut K,
    ) {
        let mut scope = SoftwareShadingScope::begin(sink);

        let mut verts = [
            Self::project_vertex(projector, triangle, 0),
            Self::project_vertex(projector, triangle, 1),
            Self::project_vertex(projector, triangle, 2),
        ];
        // Stable sort: vertices sharing a row keep their input order, which
        // fixes the top/middle/bottom roles for the tie cases.
        verts.sort_by(|a, b| {
            a.screen
                .y
                .partial_cmp(&b.screen.y)
                .unwrap_or(Ordering::Equal)
        });

        let y_min = verts[0].screen.y.floor() as i32;
        let y_max = verts[2].screen.y.ceil() as i32;

        // top-middle, middle-bottom, bottom-top
        let edges = [(0usize, 1usize), (1, 2), (2, 0)];
        let mut ends: Vec<SpanEnd> = Vec::with_capacity(3);

        for y in y_min..=y_max {
            let row = y as f32;

            ends.clear();
            for &(a, b) in &edges {
                if let Some(end) = Self::edge_intersection(&verts[a], &verts[b], row) {
                    ends.push(end);
                }
            }

            // The row at the middle vertex can leave a single active edge;
            // such rows are skipped rather than guessed at.
            if ends.len() < 2 {
                continue;
            }

            ends.sort_by(|l, r| l.x.partial_cmp(&r.x).unwrap_or(Ordering::Equal));
            let left = ends[0];
            let right = ends[1];

            if left.x == right.x {
                continue;
            }

            let x_start = left.x.floor() as i32;
            let x_end = right.x.ceil() as i32;
            let inv_width = 1.0 / (right.x - left.x + SPAN_EPSILON);

            for x in x_start..=x_end {
                let t = (x as f32 - left.x) * inv_width;

                let world = lerp_point(&left.world, &right.world, t);
                let normal = normalize_or_default(&lerp_vector(&left.normal, &right.normal, t));
                let depth = lerp_scalar(left.depth, right.depth, t);

                let color = shader.shade(&world, &normal, base_color);
                scope.set_pixel(x, y, depth, color);
            }
        }
    }

    #[inline]
    fn project_vertex(projector: &Projector, triangle: &Triangle, index: usize) -> ScanVertex {
        let v = &triangle.vertices[index];
        ScanVertex {
            screen: projector.project(&v.position),
            world: v.position,
            normal: v.normal,
        }
    }

    /// Intersects one triangle edge with the scanline at `row`.
    ///
    /// The edge's vertical interval is half-open, [min(yA,yB), max(yA,yB)),
    /// and horizontal edges never intersect; together the two rules keep a
    /// vertex shared by two edges from producing duplicate span ends.
    fn edge_intersection(a: &ScanVertex, b: &ScanVertex, row: f32) -> Option<SpanEnd> {
        let (ya, yb) = (a.screen.y, b.screen.y);
        if ya == yb {
            return None;
        }
        if row < ya.min(yb) || row >= ya.max(yb) {
            return None;
        }

        let t = (row - ya) / (yb - ya);
        Some(SpanEnd {
            x: lerp_scalar(a.screen.x, b.screen.x, t),
            depth: lerp_scalar(a.screen.depth, b.screen.depth, t),
            world: lerp_point(&a.world, &b.world, t),
            normal: lerp_vector(&a.normal, &b.normal, t),
        })
    }
}
