use crate::math::{self as m, Angle};
use crate::physics::Color;

use std::f64::consts::TAU;

/// A convex polygon obstacle that particles bounce off.
///
/// Colliders are created once at scene setup and never destroyed during
/// a run. The local-space vertex loop and its winding never change;
/// only the animated rotation angle (and possibly the anchor) vary.
#[derive(Clone, Debug)]
pub struct Collider {
    local_verts: Vec<m::Vec2>,
    /// World-space position the local origin is pinned to.
    pub anchor: m::Vec2,
    /// Rotation of the polygon as a function of simulation time.
    pub spin: Spin,
    /// Outline color, only read by external rendering.
    pub color: Color,
}

impl Collider {
    /// Create a collider from a local-space vertex loop.
    ///
    /// The loop must be a simple polygon with at least 3 vertices in a
    /// consistent winding; this is a setup-time precondition and is not
    /// checked here (`scene` validates the vertex count when instantiating
    /// from a recipe).
    pub fn new_polygon(local_verts: Vec<m::Vec2>) -> Self {
        Collider {
            local_verts,
            anchor: m::Vec2::zero(),
            spin: Spin::default(),
            color: [1.0; 4],
        }
    }

    /// Create a rectangle collider centered on its anchor.
    pub fn new_rect(width: f64, height: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self::new_polygon(vec![
            m::Vec2::new(-hw, -hh),
            m::Vec2::new(hw, -hh),
            m::Vec2::new(hw, hh),
            m::Vec2::new(-hw, hh),
        ])
    }

    pub fn with_anchor(mut self, anchor: m::Vec2) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_spin(mut self, spin: Spin) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The untransformed vertex loop.
    pub fn local_vertices(&self) -> &[m::Vec2] {
        &self.local_verts
    }

    /// Compute the world-space vertex loop at the given simulation time
    /// into `out`: every local vertex is rotated by the current angle
    /// about the local origin, then translated to the anchor.
    ///
    /// This is derived, ephemeral data; it is recomputed every frame
    /// and never stored on the collider itself.
    pub fn world_vertices(&self, time: f64, out: &mut Vec<m::Vec2>) {
        let pose = m::Pose::new(self.anchor, self.spin.angle_at(time).into());
        out.clear();
        out.extend(self.local_verts.iter().map(|v| pose * *v));
    }
}

/// Rotation of a collider as a deterministic pure function of time.
///
/// This is a configuration detail, not part of the contact algorithm;
/// any bounded function of time slots in the same way.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub enum Spin {
    /// A constant angle for static colliders.
    Fixed(Angle),
    /// Sinusoidal oscillation around a center angle.
    Oscillating {
        center: Angle,
        amplitude: Angle,
        /// Oscillation cycles per second of simulation time.
        frequency: f64,
        /// Phase offset in radians, so colliders sharing a frequency
        /// don't all swing in unison.
        phase: f64,
    },
}

impl Spin {
    pub fn angle_at(&self, time: f64) -> Angle {
        match *self {
            Spin::Fixed(angle) => angle,
            Spin::Oscillating {
                center,
                amplitude,
                frequency,
                phase,
            } => Angle::Rad(
                center.rad() + amplitude.rad() * (TAU * frequency * time + phase).sin(),
            ),
        }
    }
}

impl Default for Spin {
    fn default() -> Self {
        Spin::Fixed(Angle::default())
    }
}
