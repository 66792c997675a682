use crate::core::geometry::{Triangle, Vertex, face_normal};
use log::debug;
use nalgebra::{Point2, Point3};

/// An ordered 2D cross-section in the z = 0 plane.
///
/// The caller owns the lifecycle: points are appended one at a time as the
/// user places them, and the whole profile is cleared on reset. The
/// generator treats the sequence as closed, wrapping the last point back
/// to the first when they differ.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    points: Vec<Point2<f32>>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point2<f32>>) -> Self {
        Self { points }
    }

    /// Appends one point.
    pub fn push(&mut self, x: f32, y: f32) {
        self.points.push(Point2::new(x, y));
        debug!(
            "profile point added: ({:.2}, {:.2}), total {}",
            x,
            y,
            self.points.len()
        );
    }

    pub fn clear(&mut self) {
        self.points.clear();
        debug!("profile cleared");
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point2<f32>] {
        &self.points
    }
}

/// Generates the lateral skin and caps of a straight extrusion along +Z.
///
/// For `segments` evenly spaced bands between z = 0 and z = `height`, each
/// profile edge yields one quad split into two triangles; the z = 0 and
/// z = `height` caps are fan-triangulated from profile point 0. Every
/// triangle carries its one face normal on all three vertices in every
/// shading mode; adjacent faces are not smoothed.
///
/// The cap fan is only correct for convex, non-self-intersecting profiles;
/// concave input produces overlapping (not erroring) geometry. Fewer than
/// 3 profile points, or zero segments, yields no triangles and callers
/// fall back to drawing the raw outline.
pub fn extrude(profile: &Profile, height: f32, segments: usize) -> Vec<Triangle> {
    if profile.len() < 3 || segments == 0 {
        return Vec::new();
    }

    // Closed copy; the lateral skin needs the wrap-around edge.
    let mut ring: Vec<Point2<f32>> = profile.points().to_vec();
    if ring.first() != ring.last() {
        let first = ring[0];
        ring.push(first);
    }
    // Distinct corners; the duplicated closing point takes no part in the
    // cap fans (it would only add a zero-area triangle per cap).
    let unique = ring.len() - 1;

    let mut triangles = Vec::with_capacity(2 * unique * segments + 2 * unique.saturating_sub(2));

    // Lateral skin: one quad (two triangles) per profile edge per band.
    for i in 0..segments {
        let z1 = (i as f32 / segments as f32) * height;
        let z2 = ((i + 1) as f32 / segments as f32) * height;

        for j in 0..ring.len() - 1 {
            let p1 = Point3::new(ring[j].x, ring[j].y, z1);
            let p2 = Point3::new(ring[j + 1].x, ring[j + 1].y, z1);
            let p3 = Point3::new(ring[j].x, ring[j].y, z2);
            let p4 = Point3::new(ring[j + 1].x, ring[j + 1].y, z2);

            triangles.push(Triangle::with_face_normal(p1, p2, p3));
            triangles.push(Triangle::with_face_normal(p2, p4, p3));
        }
    }

    // Caps, fanned from corner 0. The bottom normal comes from reversed
    // winding so both caps point out of the solid.
    for j in 1..unique - 1 {
        let a = ring[0];
        let b = ring[j];
        let c = ring[j + 1];

        let b0 = Point3::new(a.x, a.y, 0.0);
        let b1 = Point3::new(b.x, b.y, 0.0);
        let b2 = Point3::new(c.x, c.y, 0.0);
        let bottom_normal = face_normal(&b0, &b2, &b1);
        triangles.push(Triangle::new(
            Vertex::new(b0, bottom_normal),
            Vertex::new(b1, bottom_normal),
            Vertex::new(b2, bottom_normal),
        ));

        triangles.push(Triangle::with_face_normal(
            Point3::new(a.x, a.y, height),
            Point3::new(b.x, b.y, height),
            Point3::new(c.x, c.y, height),
        ));
    }

    debug!(
        "extrusion: {} profile points, {} segments -> {} triangles",
        profile.len(),
        segments,
        triangles.len()
    );
    triangles
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn square() -> Profile {
        Profile::from_points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_square_single_segment_counts() {
        // 4 lateral quads x 2 + 2 bottom + 2 top.
        let triangles = extrude(&square(), 2.0, 1);
        assert_eq!(triangles.len(), 12);
    }

    #[test]
    fn test_segment_count_scales_lateral_bands() {
        let triangles = extrude(&square(), 2.0, 3);
        // 3 bands x 8 lateral triangles + 4 cap triangles.
        assert_eq!(triangles.len(), 28);
    }

    #[test]
    fn test_too_few_points_yields_nothing() {
        let mut profile = Profile::new();
        assert!(extrude(&profile, 2.0, 4).is_empty());
        profile.push(0.0, 0.0);
        profile.push(1.0, 0.0);
        assert!(extrude(&profile, 2.0, 4).is_empty());
    }

    #[test]
    fn test_preclosed_profile_matches_open() {
        let open = extrude(&square(), 2.0, 2);

        let mut closed_points = square().points().to_vec();
        closed_points.push(closed_points[0]);
        let closed = extrude(&Profile::from_points(closed_points), 2.0, 2);

        assert_eq!(open.len(), closed.len());
        for (a, b) in open.iter().zip(closed.iter()) {
            for i in 0..3 {
                let pa = a.vertices[i].position;
                let pb = b.vertices[i].position;
                assert!((pa - pb).norm() < 1e-6);
            }
        }
    }

    #[test]
    fn test_lateral_normals_point_outward() {
        // First edge of the CCW square runs along +X at y = 0; its skin
        // must face -Y.
        let triangles = extrude(&square(), 2.0, 1);
        let normal = triangles[0].vertices[0].normal;
        assert!((normal - Vector3::new(0.0, -1.0, 0.0)).norm() < 1e-5);
    }

    #[test]
    fn test_cap_normals_point_out_of_the_solid() {
        let triangles = extrude(&square(), 2.0, 1);
        // Caps trail the lateral skin: bottom/top pairs alternate.
        let bottom = &triangles[8];
        let top = &triangles[9];
        assert!((bottom.vertices[0].normal - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-5);
        assert!((top.vertices[0].normal - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-5);
        assert!(bottom.vertices.iter().all(|v| v.position.z.abs() < 1e-6));
        assert!(top.vertices.iter().all(|v| (v.position.z - 2.0).abs() < 1e-6));
    }

    #[test]
    fn test_heights_span_zero_to_height() {
        let triangles = extrude(&square(), 3.0, 5);
        let mut z_min = f32::INFINITY;
        let mut z_max = f32::NEG_INFINITY;
        for tri in &triangles {
            for v in &tri.vertices {
                z_min = z_min.min(v.position.z);
                z_max = z_max.max(v.position.z);
            }
        }
        assert!(z_min.abs() < 1e-6);
        assert!((z_max - 3.0).abs() < 1e-6);
    }
}
