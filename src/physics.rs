use crate::math::{self as m, reflect, Unit};

//

pub mod collision;
pub use collision::{Collider, ColliderSet, Spin};

pub mod emitter;
pub use emitter::{Emitter, RandomSource};

pub mod forcefield;
pub use forcefield::ForceField;

pub mod particle;
pub use particle::{Particle, ParticleSet, ParticleVisual};

//

/// An RGBA color with channels in [0, 1].
/// Carried through the simulation but only read by external rendering.
pub type Color = [f32; 4];

/// Tuning constants for the per-frame step.
#[derive(Clone, Copy, Debug)]
pub struct SimParams {
    /// Fraction of speed kept after a bounce, in (0, 1].
    pub damping: f64,
    /// A particle is removed on the frame its bounce count
    /// first exceeds this.
    pub max_bounces: u32,
    /// A particle is removed once its y coordinate exceeds this
    /// (y grows downward; fold the view bottom plus a margin into it).
    pub prune_depth: f64,
    /// Normal used when a particle sits exactly on its contact point
    /// and the real normal is undefined.
    pub fallback_normal: Unit<m::Vec2>,
}

impl Default for SimParams {
    fn default() -> Self {
        SimParams {
            damping: 0.7,
            max_bounces: 5,
            prune_depth: 1000.0,
            // screen-space "up"
            fallback_normal: Unit::new_unchecked(m::Vec2::new(0.0, -1.0)),
        }
    }
}

/// All state of one running simulation: colliders, live particles,
/// the emitter feeding them, and elapsed simulation time.
///
/// Nothing here is global; create one, drive it with [`step`][Self::step]
/// once per frame, and read the particle and polygon views back
/// for rendering.
pub struct Simulation {
    pub params: SimParams,
    pub colliders: ColliderSet,
    pub particles: ParticleSet,
    pub emitter: Option<Emitter>,
    time: f64,
}

impl Simulation {
    pub fn new(params: SimParams, colliders: ColliderSet) -> Self {
        Simulation {
            params,
            colliders,
            particles: ParticleSet::new(),
            emitter: None,
            time: 0.0,
        }
    }

    pub fn with_emitter(mut self, emitter: Emitter) -> Self {
        self.emitter = Some(emitter);
        self
    }

    /// Elapsed simulation time in seconds. Monotonically increasing,
    /// drives collider rotation.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Advance the simulation by one frame of length `dt` seconds.
    ///
    /// Emits new particles, recomputes every collider's world polygon once,
    /// then integrates and collision-resolves every live particle against
    /// that fixed snapshot and prunes the expired ones. Particle updates
    /// only depend on the snapshot and the particle's own prior state,
    /// so their order doesn't matter; with the `parallel` feature the
    /// resolve pass runs on rayon.
    pub fn step(
        &mut self,
        dt: f64,
        forcefield: &impl ForceField,
        random: &mut dyn RandomSource,
    ) {
        #[cfg(feature = "tracy")]
        let _span = tracy_client::span!("simulation step");

        self.time += dt;

        if let Some(emitter) = &mut self.emitter {
            emitter.tick(&mut self.particles, random);
        }

        self.colliders.update(self.time);
        let polys = self.colliders.polygons();
        let params = &self.params;

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.particles
                .particles_mut()
                .par_iter_mut()
                .for_each(|p| step_particle(p, polys, params, forcefield, dt));
        }
        #[cfg(not(feature = "parallel"))]
        for p in self.particles.particles_mut() {
            step_particle(p, polys, params, forcefield, dt);
        }

        // prune pass. swap-remove pulls the last element into the hole,
        // so the cursor only advances past elements that stay
        let mut i = 0;
        while i < self.particles.len() {
            let p = &self.particles.particles()[i];
            if p.bounces > params.max_bounces || p.pos.y > params.prune_depth {
                self.particles.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }
}

/// Integrate and collision-resolve a single particle against this frame's
/// world polygons.
fn step_particle(
    p: &mut Particle,
    polys: &[Vec<m::Vec2>],
    params: &SimParams,
    forcefield: &impl ForceField,
    dt: f64,
) {
    p.vel += forcefield.value_at(p.pos) * dt;
    // testing the *next* position keeps fast particles from sailing
    // through a polygon face between frames
    let next = p.pos + p.vel * dt;

    for poly in polys {
        if !collision::query::point_in_polygon(next, poly) {
            continue;
        }
        p.bounces += 1;
        // contact is measured from the pre-step position, which is still
        // outside (or at worst on) the polygon
        let contact = collision::query::closest_boundary_point(p.pos, poly);
        let away = p.pos - contact;
        let normal = if away.mag_sq() > 0.0 {
            Unit::new_normalize(away)
        } else {
            params.fallback_normal
        };
        p.vel = reflect(p.vel, normal) * params.damping;
        // snap to the surface so the particle doesn't stay inside
        // the polygon and tunnel further next frame
        p.pos = contact;
        // first hit wins; later colliders aren't checked this frame
        return;
    }
    p.pos = next;
}
