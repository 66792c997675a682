use crate::core::math::interpolation::normalize_or_default;
use nalgebra::{Point3, Vector3};

/// Represents a single vertex in 3D space.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    /// Position in world space.
    pub position: Point3<f32>,
    /// Normal vector for lighting calculations. Not required to be
    /// pre-normalized; shading paths re-normalize defensively.
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self { position, normal }
    }
}

/// Three ordered vertices forming one renderable face.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Builds a triangle whose three vertices share the face normal of the
    /// given positions.
    pub fn with_face_normal(p0: Point3<f32>, p1: Point3<f32>, p2: Point3<f32>) -> Self {
        let normal = face_normal(&p0, &p1, &p2);
        Self::new(
            Vertex::new(p0, normal),
            Vertex::new(p1, normal),
            Vertex::new(p2, normal),
        )
    }
}

/// Computes the unit outward normal of a triangular face:
/// normalize((p1 - p0) x (p2 - p0)).
///
/// Returns +Z when the face is degenerate (collinear or coincident points).
/// Deterministic and total.
pub fn face_normal(p0: &Point3<f32>, p1: &Point3<f32>, p2: &Point3<f32>) -> Vector3<f32> {
    let edge1 = p1 - p0;
    let edge2 = p2 - p0;
    normalize_or_default(&edge1.cross(&edge2))
}
