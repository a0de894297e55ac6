//! The particle system: authoritative owner of emitters, particles, and pool.
//!
//! A [`ParticleSystem`] holds the ordered emitter list, the ordered active
//! particle list, and the bounded reuse pool. All spawning and retirement
//! routes through it, which is what keeps ownership single-homed: emitters and
//! particles refer to each other only by id.
//!
//! # Update Pass
//!
//! An external driver calls [`update`](ParticleSystem::update) once per frame:
//!
//! 1. Frame telemetry records the wall-clock stamp (observability only).
//! 2. Every emitter, in insertion order, integrates its transform and spawns
//!    whatever its emission schedule says is due.
//! 3. Every active particle, in insertion order, integrates position, angle,
//!    and lifespan. Particles reporting expiry are retired into the pool
//!    before the pass returns.
//!
//! Insertion order matters only for presentation consistency; particles do not
//! interact, so physics is order-independent.
//!
//! # Example
//!
//! ```
//! use fizz::{EmitterConfig, ParticleConfig, ParticleSystem, SystemConfig, Vec2};
//!
//! let mut system = ParticleSystem::new(
//!     SystemConfig::new(Vec2::new(100.0, 150.0), Vec2::new(100.0, 100.0)).pool_capacity(300),
//! );
//! let gun = system.create_emitter(EmitterConfig::new(Vec2::new(10.0, 48.0), Vec2::splat(16.0)));
//!
//! let config = ParticleConfig::new().lifespan(100.0);
//! if let Some(particle) = system.spawn_particle(gun, config) {
//!     particle.set_velocity(1.5, -0.25);
//! }
//!
//! system.update(60.0, 0.0);
//! assert_eq!(system.particle_count(), 1);
//! system.update(60.0, 16.7); // lifespan runs out, particle moves to the pool
//! assert_eq!(system.particle_count(), 0);
//! assert_eq!(system.pool_size(), 1);
//! ```

use crate::emitter::{EmitterConfig, EmitterId, ParticleEmitter};
use crate::particle::{Particle, ParticleConfig, ParticleId};
use crate::pool::ParticlePool;
use crate::time::FrameStats;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Construction-time configuration for a particle system.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Position in world space.
    pub position: Vec2,
    /// Width and height.
    pub size: Vec2,
    /// Maximum number of retired particles cached for reuse.
    pub pool_capacity: usize,
}

impl SystemConfig {
    /// Create a config for a system at `position` with the given size and the
    /// default pool capacity of 256.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            pool_capacity: 256,
        }
    }

    /// Set the pool capacity. Zero disables reuse entirely.
    pub fn pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = capacity;
        self
    }
}

/// Top-level container driving the per-frame simulation.
#[derive(Debug)]
pub struct ParticleSystem {
    /// Position in world space.
    pub position: Vec2,
    /// Width and height.
    pub size: Vec2,
    emitters: Vec<ParticleEmitter>,
    particles: Vec<Particle>,
    pool: ParticlePool,
    next_emitter_id: u64,
    next_particle_id: u64,
    total_allocated: u64,
    total_reused: u64,
    stats: FrameStats,
    /// Scratch buffer for ids expiring this frame; reused across updates.
    expired: Vec<ParticleId>,
}

impl ParticleSystem {
    /// Create a system from a config. Pool capacity is fixed from here on.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            position: config.position,
            size: config.size,
            emitters: Vec::new(),
            particles: Vec::new(),
            pool: ParticlePool::new(config.pool_capacity),
            next_emitter_id: 0,
            next_particle_id: 0,
            total_allocated: 0,
            total_reused: 0,
            stats: FrameStats::new(),
            expired: Vec::new(),
        }
    }

    // ========== Emitters ==========

    /// Construct and append a new emitter; returns its id for further
    /// configuration via [`emitter_mut`](Self::emitter_mut).
    pub fn create_emitter(&mut self, config: EmitterConfig) -> EmitterId {
        let id = EmitterId(self.next_emitter_id);
        self.next_emitter_id += 1;
        self.emitters.push(ParticleEmitter::new(id, config));
        debug!(emitter = id.value(), "created emitter");
        id
    }

    /// Remove the emitter with the given id, if present.
    ///
    /// Returns `false` (a no-op, not an error) when the id is unknown; ids may
    /// legitimately race against a prior removal. Particles already spawned by
    /// the emitter are system-owned and keep simulating until their own
    /// lifespan expires.
    pub fn destroy_emitter(&mut self, id: EmitterId) -> bool {
        let Some(index) = self.emitters.iter().position(|e| e.id() == id) else {
            return false;
        };
        self.emitters.remove(index);
        debug!(emitter = id.value(), "destroyed emitter");
        true
    }

    /// The emitter with the given id, if it still exists.
    pub fn emitter(&self, id: EmitterId) -> Option<&ParticleEmitter> {
        self.emitters.iter().find(|e| e.id() == id)
    }

    /// Mutable access to the emitter with the given id.
    pub fn emitter_mut(&mut self, id: EmitterId) -> Option<&mut ParticleEmitter> {
        self.emitters.iter_mut().find(|e| e.id() == id)
    }

    /// All emitters, in insertion order.
    #[inline]
    pub fn emitters(&self) -> &[ParticleEmitter] {
        &self.emitters
    }

    // ========== Particles ==========

    /// Spawn one particle from the given emitter.
    ///
    /// Reuses a pooled particle when the pool is non-empty, otherwise
    /// constructs a fresh one. Either way the particle starts at the emitter's
    /// current spawn origin with the config applied verbatim, and is appended
    /// to the active list. The returned reference is usable immediately, e.g.
    /// to randomize the velocity. Returns `None` when the emitter id is
    /// unknown.
    pub fn spawn_particle(
        &mut self,
        emitter: EmitterId,
        config: ParticleConfig,
    ) -> Option<&mut Particle> {
        let origin = self.emitter(emitter)?.spawn_origin();
        let id = ParticleId(self.next_particle_id);
        self.next_particle_id += 1;

        let reused = !self.pool.is_empty();
        let particle = match self.pool.withdraw(id, emitter, origin, &config) {
            Some(recycled) => {
                self.total_reused += 1;
                recycled
            }
            None => {
                self.total_allocated += 1;
                Particle::new(id, emitter, origin, &config)
            }
        };
        trace!(
            particle = id.value(),
            emitter = emitter.value(),
            reused,
            "spawned particle"
        );

        self.particles.push(particle);
        self.particles.last_mut()
    }

    /// Retire the particle with the given id into the pool.
    ///
    /// Removes it from the active list (preserving the order of the rest) and
    /// deposits it; the pool kills it on the way in. Returns `false` (a no-op,
    /// not an error) when the id is not in the active list, which guards
    /// against already-retired lookups.
    pub fn retire_particle(&mut self, id: ParticleId) -> bool {
        let Some(index) = self.particles.iter().position(|p| p.id() == id) else {
            return false;
        };
        let particle = self.particles.remove(index);
        trace!(particle = id.value(), "retired particle");
        self.pool.deposit(particle);
        true
    }

    /// The active particle with the given id, if any.
    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id() == id)
    }

    /// Mutable access to the active particle with the given id.
    pub fn particle_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.particles.iter_mut().find(|p| p.id() == id)
    }

    /// All active particles, in insertion order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    // ========== Update pass ==========

    /// Advance the whole system by `delta_time`.
    ///
    /// `now` is the driver's wall-clock stamp in milliseconds; it feeds frame
    /// telemetry only and has no effect on simulation state. Emitters update
    /// first (transform integration plus scheduled emission), then every
    /// active particle; particles whose lifespan ran out this frame are
    /// retired into the pool before the call returns.
    pub fn update(&mut self, delta_time: f32, now: f32) {
        self.stats.record(now);

        for i in 0..self.emitters.len() {
            let emitter = &mut self.emitters[i];
            emitter.update(delta_time);

            let id = emitter.id();
            let scheduled = emitter.emission.as_mut().and_then(|emission| {
                let due = emission.due(delta_time);
                (due > 0).then(|| (due, emission.prototype.clone()))
            });
            if let Some((due, prototype)) = scheduled {
                for _ in 0..due {
                    let _ = self.spawn_particle(id, prototype.clone());
                }
            }
        }

        let mut expired = std::mem::take(&mut self.expired);
        expired.clear();
        for particle in &mut self.particles {
            if particle.update(delta_time) {
                expired.push(particle.id());
            }
        }
        for id in expired.drain(..) {
            self.retire_particle(id);
        }
        self.expired = expired;
    }

    // ========== Observability ==========

    /// Number of active particles.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Number of retired particles currently pooled.
    #[inline]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Maximum number of retired particles the pool will hold.
    #[inline]
    pub fn pool_capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Total particles discarded because the pool was full.
    #[inline]
    pub fn pool_dropped(&self) -> u64 {
        self.pool.dropped()
    }

    /// Total particles ever freshly constructed (pool reuses excluded).
    ///
    /// `particle_count() + pool_size() + pool_dropped()` always equals this,
    /// which is the conservation property bounding memory.
    #[inline]
    pub fn total_allocated(&self) -> u64 {
        self.total_allocated
    }

    /// Total spawns served from the pool instead of a fresh allocation.
    #[inline]
    pub fn total_reused(&self) -> u64 {
        self.total_reused
    }

    /// Read-only view of the reuse pool.
    #[inline]
    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    /// Frame telemetry accumulated from `update` calls.
    #[inline]
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Half the size; presentation layers use it as the transform origin.
    #[inline]
    pub fn center_point(&self) -> Vec2 {
        self.size * 0.5
    }
}
