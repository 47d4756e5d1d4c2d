//! Types, aliases and helper operations for doing math with `ultraviolet`.
use std::f64::consts::PI;
pub use ultraviolet as uv;

/// A Pose has a rotation and a translation, no scaling.
///
/// This is the transformation applied to a collider's local-space vertices
/// to produce its world-space polygon.
pub type Pose = uv::DIsometry2;
pub type Vec2 = uv::DVec2;
pub type Rotor2 = uv::DRotor2;

/// An angle in either degrees or radians.
///
/// All trigonometry in the crate goes through this type,
/// so degrees and radians can't be accidentally mixed.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub enum Angle {
    Rad(f64),
    Deg(f64),
}
impl Angle {
    /// Get the angle as degrees.
    #[inline]
    pub fn deg(&self) -> f64 {
        match self {
            Angle::Rad(rad) => rad * 180.0 / PI,
            Angle::Deg(deg) => *deg,
        }
    }

    /// Get the angle as radians.
    #[inline]
    pub fn rad(&self) -> f64 {
        match self {
            Angle::Rad(rad) => *rad,
            Angle::Deg(deg) => deg * PI / 180.0,
        }
    }
}
impl Default for Angle {
    fn default() -> Self {
        Angle::Rad(0.0)
    }
}
impl From<Angle> for Rotor2 {
    #[inline]
    fn from(ang: Angle) -> Rotor2 {
        Rotor2::from_angle(ang.rad())
    }
}

/// A wrapper type to indicate a vector should always be normalized.
#[derive(Clone, Copy, Debug)]
pub struct Unit<T>(T);

impl Unit<Vec2> {
    pub fn new_normalize(v: Vec2) -> Self {
        Unit(v.normalized())
    }

    pub const fn new_unchecked(v: Vec2) -> Self {
        Unit(v)
    }

    pub fn unit_x() -> Self {
        Unit(Vec2::unit_x())
    }

    pub fn unit_y() -> Self {
        Unit(Vec2::unit_y())
    }
}

impl std::ops::Mul<Unit<Vec2>> for Rotor2 {
    type Output = Unit<Vec2>;

    fn mul(self, rhs: Unit<Vec2>) -> Self::Output {
        Unit(self * rhs.0)
    }
}

impl<T> std::ops::Deref for Unit<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::Neg for Unit<T>
where
    T: std::ops::Neg,
{
    type Output = Unit<<T as std::ops::Neg>::Output>;

    fn neg(self) -> Self::Output {
        Unit(-self.0)
    }
}

// Vec2 utils

#[inline]
pub fn left_normal(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}
#[inline]
pub fn right_normal(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// Reflect a vector off a plane with the given normal.
///
/// The normal doesn't need to point towards the incoming vector;
/// reflecting off either side of the plane gives the same result.
#[inline]
pub fn reflect(v: Vec2, normal: Unit<Vec2>) -> Vec2 {
    v - 2.0 * v.dot(*normal) * *normal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_unit_conversions() {
        assert!((Angle::Deg(90.0).rad() - PI / 2.0).abs() < 1e-12);
        assert!((Angle::Rad(PI).deg() - 180.0).abs() < 1e-12);
        // a rotor built from either unit representation rotates the same way
        let from_deg = Rotor2::from(Angle::Deg(30.0)) * Vec2::unit_x();
        let from_rad = Rotor2::from(Angle::Rad(PI / 6.0)) * Vec2::unit_x();
        assert!((from_deg - from_rad).mag() < 1e-12);
    }

    #[test]
    fn reflect_preserves_magnitude() {
        let v = Vec2::new(3.0, -4.0);
        let normals = [
            Unit::unit_y(),
            Unit::new_normalize(Vec2::new(1.0, 1.0)),
            Unit::new_normalize(Vec2::new(-0.2, 5.0)),
        ];
        for n in normals {
            let r = reflect(v, n);
            assert!((r.mag() - v.mag()).abs() < 1e-12);
        }
    }

    #[test]
    fn reflect_flips_normal_component() {
        // straight into a horizontal plane: only the y component flips
        let v = Vec2::new(2.0, 5.0);
        let r = reflect(v, -Unit::unit_y());
        assert!((r - Vec2::new(2.0, -5.0)).mag() < 1e-12);
    }
}
