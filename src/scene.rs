//! Data-only scene descriptions that validate and instantiate
//! into a running [`Simulation`][crate::Simulation].
//!
//! Recipes are plain structs; with the `serde-types` feature they
//! deserialize from scene files (RON in the tests and drivers).

use crate::math::Vec2;
use crate::physics::{Collider, ColliderSet, Color, Emitter, SimParams, Simulation, Spin};

/// Description of one collider.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub enum ColliderRecipe {
    Polygon {
        /// Local-space vertex loop, at least 3 points.
        points: Vec<[f64; 2]>,
        position: [f64; 2],
        #[cfg_attr(feature = "serde-types", serde(default))]
        spin: Spin,
        #[cfg_attr(feature = "serde-types", serde(default = "white"))]
        color: Color,
    },
    Rect {
        width: f64,
        height: f64,
        position: [f64; 2],
        #[cfg_attr(feature = "serde-types", serde(default))]
        spin: Spin,
        #[cfg_attr(feature = "serde-types", serde(default = "white"))]
        color: Color,
    },
}

fn white() -> Color {
    [1.0; 4]
}

/// Simulation constants as configured in a scene file.
/// The contact fallback normal keeps its built-in default.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-types", serde(default))]
pub struct SceneParams {
    pub damping: f64,
    pub max_bounces: u32,
    pub prune_depth: f64,
}

impl Default for SceneParams {
    fn default() -> Self {
        let defaults = SimParams::default();
        SceneParams {
            damping: defaults.damping,
            max_bounces: defaults.max_bounces,
            prune_depth: defaults.prune_depth,
        }
    }
}

/// A complete scene: colliders, an optional emitter,
/// and the simulation constants.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-types", serde(default))]
pub struct Scene {
    pub colliders: Vec<ColliderRecipe>,
    pub emitter: Option<Emitter>,
    pub params: SceneParams,
}

/// Ways a scene description can fail validation.
///
/// These are configuration-time errors; once a [`Simulation`] exists
/// its step has no error paths.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    #[error("collider {index} has {count} vertices, a polygon needs at least 3")]
    DegeneratePolygon { index: usize, count: usize },
    #[error("damping must be in (0, 1], got {0}")]
    InvalidDamping(f64),
    #[error("emitter interval must be at least 1 frame")]
    ZeroInterval,
    #[error("emitter palette must have at least one color")]
    EmptyPalette,
}

impl Scene {
    /// Validate the description and build a fresh simulation from it.
    pub fn instantiate(&self) -> Result<Simulation, SceneError> {
        if !(self.params.damping > 0.0 && self.params.damping <= 1.0) {
            return Err(SceneError::InvalidDamping(self.params.damping));
        }

        let mut colliders = ColliderSet::new();
        for (index, recipe) in self.colliders.iter().enumerate() {
            let coll = match recipe {
                ColliderRecipe::Polygon {
                    points,
                    position,
                    spin,
                    color,
                } => {
                    if points.len() < 3 {
                        return Err(SceneError::DegeneratePolygon {
                            index,
                            count: points.len(),
                        });
                    }
                    Collider::new_polygon(
                        points.iter().map(|p| Vec2::new(p[0], p[1])).collect(),
                    )
                    .with_anchor(Vec2::new(position[0], position[1]))
                    .with_spin(*spin)
                    .with_color(*color)
                }
                ColliderRecipe::Rect {
                    width,
                    height,
                    position,
                    spin,
                    color,
                } => Collider::new_rect(*width, *height)
                    .with_anchor(Vec2::new(position[0], position[1]))
                    .with_spin(*spin)
                    .with_color(*color),
            };
            colliders.push(coll);
        }

        let params = SimParams {
            damping: self.params.damping,
            max_bounces: self.params.max_bounces,
            prune_depth: self.params.prune_depth,
            ..SimParams::default()
        };
        let mut sim = Simulation::new(params, colliders);
        if let Some(emitter) = &self.emitter {
            if emitter.interval == 0 {
                return Err(SceneError::ZeroInterval);
            }
            if emitter.palette.is_empty() {
                return Err(SceneError::EmptyPalette);
            }
            sim = sim.with_emitter(emitter.clone());
        }
        Ok(sim)
    }
}
