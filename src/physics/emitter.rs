use crate::math as m;
use crate::physics::{
    particle::{Particle, ParticleSet, ParticleVisual},
    Color,
};

/// A source of uniformly distributed random floats,
/// provided by the external driver of the simulation.
///
/// Tests and drivers typically implement this over the `rand` crate.
pub trait RandomSource {
    /// A uniformly distributed value in `[min, max)`
    /// (or exactly `min` when the range is empty).
    fn uniform(&mut self, min: f64, max: f64) -> f64;
}

/// Periodically injects new particles into a [`ParticleSet`][ParticleSet]
/// with randomized initial velocity.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct Emitter {
    /// Emission point for every spawned particle.
    pub position: m::Vec2,
    /// Number of frames between emissions. The first emission happens
    /// on the first frame after setup.
    pub interval: u32,
    /// Range the horizontal launch velocity is sampled from.
    pub vel_x: [f64; 2],
    /// Range the vertical launch velocity is sampled from,
    /// typically smaller than the horizontal one.
    pub vel_y: [f64; 2],
    /// Display radius given to every spawned particle.
    pub radius: f64,
    /// Colors to pick from, render-only.
    pub palette: Vec<Color>,
    #[cfg_attr(feature = "serde-types", serde(skip, default = "countdown_start"))]
    countdown: u32,
}

fn countdown_start() -> u32 {
    1
}

impl Emitter {
    pub fn new(position: m::Vec2) -> Self {
        Emitter {
            position,
            interval: 6,
            vel_x: [-80.0, 80.0],
            vel_y: [-20.0, 0.0],
            radius: 3.0,
            palette: vec![[1.0; 4]],
            countdown: countdown_start(),
        }
    }

    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_velocity_ranges(mut self, vel_x: [f64; 2], vel_y: [f64; 2]) -> Self {
        self.vel_x = vel_x;
        self.vel_y = vel_y;
        self
    }

    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    /// Advance the emitter by one frame, spawning a particle
    /// if enough frames have passed since the previous one.
    pub fn tick(&mut self, particles: &mut ParticleSet, random: &mut dyn RandomSource) {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return;
        }
        self.countdown = self.interval.max(1);

        let vel = m::Vec2::new(
            random.uniform(self.vel_x[0], self.vel_x[1]),
            random.uniform(self.vel_y[0], self.vel_y[1]),
        );
        let color = if self.palette.is_empty() {
            [1.0; 4]
        } else {
            let idx = random.uniform(0.0, self.palette.len() as f64) as usize;
            self.palette[idx.min(self.palette.len() - 1)]
        };
        particles.spawn(
            Particle::new(self.position, vel),
            ParticleVisual {
                color,
                radius: self.radius,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // fixed sequence, cycled; enough to pin down emitter behavior
    struct ScriptedRandom {
        values: Vec<f64>,
        at: usize,
    }
    impl RandomSource for ScriptedRandom {
        fn uniform(&mut self, min: f64, max: f64) -> f64 {
            let t = self.values[self.at % self.values.len()];
            self.at += 1;
            min + t * (max - min)
        }
    }

    #[test]
    fn emits_every_interval_frames() {
        let mut emitter = Emitter::new(m::Vec2::zero()).with_interval(4);
        let mut particles = ParticleSet::new();
        let mut random = ScriptedRandom {
            values: vec![0.5],
            at: 0,
        };
        // first emission on the first tick, then every 4th frame
        for frame in 1usize..=12 {
            emitter.tick(&mut particles, &mut random);
            assert_eq!(particles.len(), 1 + (frame - 1) / 4, "frame {}", frame);
        }
    }

    #[test]
    fn spawned_velocities_stay_in_range() {
        let mut emitter = Emitter::new(m::Vec2::new(100.0, 50.0))
            .with_interval(1)
            .with_velocity_ranges([-80.0, 80.0], [-20.0, 0.0]);
        let mut particles = ParticleSet::new();
        let mut random = ScriptedRandom {
            values: vec![0.0, 0.17, 0.5, 0.99, 1.0],
            at: 0,
        };
        for _ in 0..50 {
            emitter.tick(&mut particles, &mut random);
        }
        for (p, v) in particles.iter() {
            assert_eq!(p.pos.x, 100.0);
            assert_eq!(p.pos.y, 50.0);
            assert_eq!(p.bounces, 0);
            assert!(p.vel.x >= -80.0 && p.vel.x <= 80.0);
            assert!(p.vel.y >= -20.0 && p.vel.y <= 0.0);
            assert_eq!(v.radius, emitter.radius);
        }
    }

    #[test]
    fn palette_sampling_covers_all_entries() {
        let palette: Vec<Color> = vec![
            [1.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 1.0],
        ];
        let mut emitter = Emitter::new(m::Vec2::zero())
            .with_interval(1)
            .with_palette(palette.clone());
        let mut particles = ParticleSet::new();
        // four values against three draws per tick, so the color draw
        // cycles through the whole script over consecutive ticks
        let mut random = ScriptedRandom {
            values: vec![0.05, 0.4, 0.95, 0.6],
            at: 0,
        };
        for _ in 0..30 {
            emitter.tick(&mut particles, &mut random);
        }
        for target in &palette {
            assert!(particles.iter().any(|(_, v)| v.color == *target));
        }
    }
}
