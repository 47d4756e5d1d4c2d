//! Point queries against line segments and polygon boundaries.

use crate::math::Vec2;

use itertools::Itertools;

/// Find the point on the segment `a -> b` closest to `p`.
///
/// If the segment has zero length the shared endpoint is returned,
/// so this never divides by zero.
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.mag_sq();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + t * ab
}

/// Check whether a point is inside the polygon defined by the given vertex loop.
///
/// This is a crossing-number test with half-open edge handling:
/// a crossing is counted when the point is strictly to the left of the edge
/// and exactly one endpoint lies strictly below it.
/// Points exactly on the boundary therefore test inside on the polygon's
/// low-x side and outside on its high-x side and on horizontal edges.
/// The same rule applies regardless of winding direction.
pub fn point_in_polygon(p: Vec2, verts: &[Vec2]) -> bool {
    let mut inside = false;
    for (a, b) in verts.iter().circular_tuple_windows() {
        if (a.y > p.y) != (b.y > p.y) {
            let cross_x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < cross_x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Find the point on the polygon's boundary closest to `p`.
///
/// Iterates every edge of the vertex loop and keeps the candidate with
/// the smallest squared distance. Ties go to the earlier edge.
pub fn closest_boundary_point(p: Vec2, verts: &[Vec2]) -> Vec2 {
    let mut best = verts[0];
    let mut best_dist_sq = f64::MAX;
    for (a, b) in verts.iter().circular_tuple_windows() {
        let candidate = closest_point_on_segment(p, *a, *b);
        let dist_sq = (candidate - p).mag_sq();
        if dist_sq < best_dist_sq {
            best = candidate;
            best_dist_sq = dist_sq;
        }
    }
    best
}
