use crate::math as m;
use crate::physics::Color;

use itertools::izip;

/// Physics state of one particle. Particles are point masses:
/// the contact math never reads a radius.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: m::Vec2,
    pub vel: m::Vec2,
    /// How many collisions this particle has resolved so far.
    /// Monotonically non-decreasing until the particle is removed.
    pub bounces: u32,
}

impl Particle {
    pub fn new(pos: m::Vec2, vel: m::Vec2) -> Self {
        Particle {
            pos,
            vel,
            bounces: 0,
        }
    }
}

/// Presentation-only state of one particle, kept out of the physics
/// structs so the core algorithm can be tested without any rendering.
#[derive(Clone, Copy, Debug)]
pub struct ParticleVisual {
    pub color: Color,
    pub radius: f64,
}

/// The set of live particles: a flat arena with O(1) append
/// and O(1) removal by swapping in the last element.
///
/// Relative order is not preserved by removal and nothing here
/// depends on it.
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    particles: Vec<Particle>,
    visuals: Vec<ParticleVisual>,
}

impl ParticleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a particle. O(1).
    pub fn spawn(&mut self, particle: Particle, visual: ParticleVisual) {
        self.particles.push(particle);
        self.visuals.push(visual);
    }

    /// Remove the particle at `idx` by overwriting it with the last live
    /// particle and shrinking by one. O(1). An iteration that removes must
    /// not advance its cursor past the swapped-in element on the same pass.
    pub fn swap_remove(&mut self, idx: usize) {
        self.particles.swap_remove(idx);
        self.visuals.swap_remove(idx);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<(&Particle, &ParticleVisual)> {
        Some((self.particles.get(idx)?, self.visuals.get(idx)?))
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Iterate over live particles together with their visuals.
    pub fn iter(&self) -> impl Iterator<Item = (&Particle, &ParticleVisual)> {
        izip!(&self.particles, &self.visuals)
    }
}
