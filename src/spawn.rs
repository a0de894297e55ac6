//! Spawn context for randomized particle configuration.
//!
//! Provides helper methods to reduce boilerplate when building spawn configs.
//!
//! Instead of manually setting up RNG and computing random offsets, use the
//! helper methods on `SpawnContext`:
//!
//! ```ignore
//! // Before: verbose manual setup
//! let mut rng = rand::thread_rng();
//! for _ in 0..count {
//!     let config = ParticleConfig::new()
//!         .velocity(Vec2::new(rng.gen_range(0.0..2.0), rng.gen_range(-0.25..0.25)))
//!         .lifespan(rng.gen_range(0.0..8000.0));
//!     system.spawn_particle(gun, config);
//! }
//!
//! // After: clean and simple
//! for i in 0..count {
//!     let mut ctx = SpawnContext::new(i, count);
//!     let config = ParticleConfig::new()
//!         .velocity(ctx.random_velocity(0.0..2.0, -0.25..0.25))
//!         .lifespan(ctx.random_range(0.0, 8000.0));
//!     system.spawn_particle(gun, config);
//! }
//! ```

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use std::ops::Range;

/// Context for one spawn in a batch, with helpers for common random patterns.
pub struct SpawnContext {
    /// Index of the particle being spawned (0 to count-1).
    pub index: u32,
    /// Total number of particles being spawned.
    pub count: u32,
    /// Internal RNG - use helper methods instead of accessing directly.
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a new spawn context for a particle.
    pub fn new(index: u32, count: u32) -> Self {
        // Seed RNG based on index for reproducibility within a run,
        // but different each program execution
        let seed = index as u64
            ^ (std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42));

        Self::seeded(index, count, seed)
    }

    /// Create a spawn context with an explicit seed.
    ///
    /// Two contexts with the same seed produce the same sequence of values,
    /// which is what deterministic tests and replays want.
    pub fn seeded(index: u32, count: u32, seed: u64) -> Self {
        Self {
            index,
            count,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Normalized progress through the spawn batch (0.0 to 1.0).
    ///
    /// Useful for distributing particles evenly:
    /// ```ignore
    /// let angle = ctx.progress() * 360.0;  // Particles around a circle
    /// ```
    #[inline]
    pub fn progress(&self) -> f32 {
        self.index as f32 / self.count.max(1) as f32
    }

    // ========== Random primitives ==========

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Random angle in degrees (0 to 360).
    #[inline]
    pub fn random_angle(&mut self) -> f32 {
        self.rng.gen_range(0.0..360.0)
    }

    // ========== Position helpers ==========

    /// Random point inside a circle of given radius, centered at origin.
    ///
    /// Distribution is uniform over the area.
    pub fn random_in_circle(&mut self, radius: f32) -> Vec2 {
        let theta = self.rng.gen_range(0.0..TAU);
        // Square root for uniform area distribution
        let r = radius * self.rng.gen::<f32>().sqrt();
        Vec2::new(r * theta.cos(), r * theta.sin())
    }

    /// Random point on the edge of a circle of given radius.
    pub fn random_on_circle(&mut self, radius: f32) -> Vec2 {
        let theta = self.rng.gen_range(0.0..TAU);
        Vec2::new(radius * theta.cos(), radius * theta.sin())
    }

    /// Random point inside a rectangle of the given half-extents, centered at
    /// origin.
    pub fn random_in_rect(&mut self, half_extents: Vec2) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(-half_extents.x..half_extents.x),
            self.rng.gen_range(-half_extents.y..half_extents.y),
        )
    }

    // ========== Direction/velocity helpers ==========

    /// Random unit vector (uniformly distributed around the circle).
    pub fn random_direction(&mut self) -> Vec2 {
        self.random_on_circle(1.0)
    }

    /// Random velocity with independently ranged x and y components.
    pub fn random_velocity(&mut self, x: Range<f32>, y: Range<f32>) -> Vec2 {
        Vec2::new(self.rng.gen_range(x), self.rng.gen_range(y))
    }

    // ========== Structured layouts ==========

    /// Position along a line from `start` to `end`.
    ///
    /// Particles are distributed evenly along the line.
    pub fn line_position(&self, start: Vec2, end: Vec2) -> Vec2 {
        start + (end - start) * self.progress()
    }

    /// Position on a circle of the given radius.
    ///
    /// Particles are distributed evenly around the circle.
    pub fn circle_position(&self, radius: f32) -> Vec2 {
        let angle = self.progress() * TAU;
        Vec2::new(radius * angle.cos(), radius * angle.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_context_progress() {
        let ctx = SpawnContext::seeded(50, 100, 7);
        assert!((ctx.progress() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = SpawnContext::seeded(0, 1, 1234);
        let mut b = SpawnContext::seeded(0, 1, 1234);
        for _ in 0..16 {
            assert_eq!(a.random(), b.random());
        }
    }

    #[test]
    fn test_random_in_circle_bounds() {
        let mut ctx = SpawnContext::seeded(0, 1, 42);
        for _ in 0..100 {
            let pos = ctx.random_in_circle(0.5);
            assert!(pos.length() <= 0.5 + 0.001);
        }
    }

    #[test]
    fn test_random_in_rect_bounds() {
        let mut ctx = SpawnContext::seeded(0, 1, 42);
        for _ in 0..100 {
            let pos = ctx.random_in_rect(Vec2::new(2.0, 0.5));
            assert!(pos.x.abs() <= 2.0 && pos.y.abs() <= 0.5);
        }
    }

    #[test]
    fn test_random_direction_is_unit_length() {
        let mut ctx = SpawnContext::seeded(0, 1, 42);
        for _ in 0..20 {
            assert!((ctx.random_direction().length() - 1.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_circle_position_even_spread() {
        let first = SpawnContext::seeded(0, 4, 0).circle_position(1.0);
        let third = SpawnContext::seeded(2, 4, 0).circle_position(1.0);
        // Opposite points on the circle.
        assert!((first + third).length() < 0.001);
    }
}
