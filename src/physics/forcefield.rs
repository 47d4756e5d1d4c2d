use crate::math::Vec2;

/// A (possibly) position-dependent acceleration applied to every
/// live particle each frame.
///
/// `Sync` because the particle pass may run in parallel
/// (see the `parallel` cargo feature).
pub trait ForceField: Sync {
    fn value_at(&self, position: Vec2) -> Vec2;
}

pub struct NoneField;
impl ForceField for NoneField {
    fn value_at(&self, _: Vec2) -> Vec2 {
        Vec2::zero()
    }
}

/// A combination of two different force fields.
pub struct Sum<F1: ForceField, F2: ForceField>(pub F1, pub F2);
impl<F1: ForceField, F2: ForceField> ForceField for Sum<F1, F2> {
    fn value_at(&self, pos: Vec2) -> Vec2 {
        self.0.value_at(pos) + self.1.value_at(pos)
    }
}

/// Constant gravity field over all of space.
///
/// The usual screen-space configuration is `Gravity(Vec2::new(0.0, g))`
/// with a positive `g`, since y grows downward.
pub struct Gravity(pub Vec2);
impl ForceField for Gravity {
    fn value_at(&self, _pos: Vec2) -> Vec2 {
        self.0
    }
}
