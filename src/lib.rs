pub mod math;
pub use math::{reflect, uv, Angle, Unit, Vec2};

pub mod physics;
pub use physics::{
    collision::{self, query, Collider, ColliderSet, Spin},
    emitter::{Emitter, RandomSource},
    forcefield,
    particle::{Particle, ParticleSet, ParticleVisual},
    Color, SimParams, Simulation,
};

pub mod scene;
pub use scene::{Scene, SceneError};
