use crate::core::geometry::{Triangle, Vertex};
use nalgebra::{Point3, Vector3};

/// Axis-aligned cube centered at the origin, two triangles per face, every
/// vertex of a face sharing its outward axis normal.
///
/// This is the canonical test subject for per-pixel shading: large flat
/// faces make the specular highlight's shape depend entirely on where the
/// lighting equation is evaluated.
pub fn cube(half_extent: f32) -> Vec<Triangle> {
    let h = half_extent;
    let mut triangles = Vec::with_capacity(12);

    let mut face = |p0: Point3<f32>,
                    p1: Point3<f32>,
                    p2: Point3<f32>,
                    p3: Point3<f32>,
                    normal: Vector3<f32>| {
        triangles.push(Triangle::new(
            Vertex::new(p0, normal),
            Vertex::new(p1, normal),
            Vertex::new(p2, normal),
        ));
        triangles.push(Triangle::new(
            Vertex::new(p0, normal),
            Vertex::new(p2, normal),
            Vertex::new(p3, normal),
        ));
    };

    // Front (z = +h)
    face(
        Point3::new(-h, -h, h),
        Point3::new(h, -h, h),
        Point3::new(h, h, h),
        Point3::new(-h, h, h),
        Vector3::new(0.0, 0.0, 1.0),
    );
    // Back (z = -h)
    face(
        Point3::new(h, -h, -h),
        Point3::new(-h, -h, -h),
        Point3::new(-h, h, -h),
        Point3::new(h, h, -h),
        Vector3::new(0.0, 0.0, -1.0),
    );
    // Right (x = +h)
    face(
        Point3::new(h, -h, h),
        Point3::new(h, -h, -h),
        Point3::new(h, h, -h),
        Point3::new(h, h, h),
        Vector3::new(1.0, 0.0, 0.0),
    );
    // Left (x = -h)
    face(
        Point3::new(-h, -h, -h),
        Point3::new(-h, -h, h),
        Point3::new(-h, h, h),
        Point3::new(-h, h, -h),
        Vector3::new(-1.0, 0.0, 0.0),
    );
    // Top (y = +h)
    face(
        Point3::new(-h, h, h),
        Point3::new(h, h, h),
        Point3::new(h, h, -h),
        Point3::new(-h, h, -h),
        Vector3::new(0.0, 1.0, 0.0),
    );
    // Bottom (y = -h)
    face(
        Point3::new(-h, -h, -h),
        Point3::new(h, -h, -h),
        Point3::new(h, -h, h),
        Point3::new(-h, -h, h),
        Vector3::new(0.0, -1.0, 0.0),
    );

    triangles
}
