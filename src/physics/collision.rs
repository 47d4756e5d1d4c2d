use crate::math as m;

use itertools::izip;

mod collider;
pub use collider::{Collider, Spin};

pub mod query;

/// The ordered set of colliders in a simulation,
/// plus their world-space polygons for the current frame.
///
/// Iteration order is fixed at setup time. When a particle's tentative
/// position ends up inside more than one polygon on the same frame,
/// the first collider in this order wins and the rest aren't checked.
#[derive(Clone, Debug, Default)]
pub struct ColliderSet {
    colliders: Vec<Collider>,
    // world-space vertices per collider, recomputed by `update`.
    // allocations are reused from frame to frame
    world_verts: Vec<Vec<m::Vec2>>,
}

impl ColliderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collider at the end of the iteration order.
    pub fn push(&mut self, coll: Collider) {
        self.colliders.push(coll);
        self.world_verts.push(Vec::new());
    }

    /// Recompute every collider's world-space polygon for the given
    /// simulation time. Call once per frame, before resolving particles;
    /// the buffers must not change while the particle pass reads them.
    pub fn update(&mut self, time: f64) {
        for (coll, verts) in izip!(&self.colliders, &mut self.world_verts) {
            coll.world_vertices(time, verts);
        }
    }

    /// The world-space vertex loops computed by the latest `update`,
    /// in collider order. Also the shape to hand to outline rendering.
    pub fn polygons(&self) -> &[Vec<m::Vec2>] {
        &self.world_verts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&Collider> {
        self.colliders.get(idx)
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl FromIterator<Collider> for ColliderSet {
    fn from_iter<I: IntoIterator<Item = Collider>>(iter: I) -> Self {
        let mut set = Self::new();
        for coll in iter {
            set.push(coll);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Angle, Vec2};

    fn signed_area(verts: &[Vec2]) -> f64 {
        use itertools::Itertools;
        verts
            .iter()
            .circular_tuple_windows()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f64>()
            / 2.0
    }

    #[test]
    fn vertex_count_and_winding_stay_constant() {
        let mut set = ColliderSet::new();
        set.push(
            Collider::new_rect(4.0, 1.0)
                .with_anchor(Vec2::new(10.0, 5.0))
                .with_spin(Spin::Oscillating {
                    center: Angle::default(),
                    amplitude: Angle::Deg(40.0),
                    frequency: 0.25,
                    phase: 1.0,
                }),
        );
        set.update(0.0);
        let count = set.polygons()[0].len();
        let area = signed_area(&set.polygons()[0]);
        for i in 1..100 {
            set.update(i as f64 * 0.3);
            let poly = &set.polygons()[0];
            assert_eq!(poly.len(), count);
            let a = signed_area(poly);
            // rotation and translation preserve signed area exactly
            // up to float error, so the winding can't flip
            assert_eq!(a.signum(), area.signum());
            assert!((a - area).abs() < 1e-9);
        }
    }

    #[test]
    fn polygons_follow_collider_order() {
        let mut set = ColliderSet::new();
        set.push(Collider::new_rect(1.0, 1.0).with_anchor(Vec2::new(-5.0, 0.0)));
        set.push(Collider::new_rect(1.0, 1.0).with_anchor(Vec2::new(5.0, 0.0)));
        set.update(0.0);
        assert!(set.polygons()[0].iter().all(|v| v.x < 0.0));
        assert!(set.polygons()[1].iter().all(|v| v.x > 0.0));
    }
}
