//! # Fizz - Pooled Particle Engine
//!
//! Lightweight 2D particle simulations with a simple, allocation-friendly API.
//!
//! Fizz handles the simulation bookkeeping (lifecycles, object pooling, the
//! per-frame update pass) so a presentation layer can focus on drawing: it
//! reads the system's public state each frame and renders it however it likes
//! (DOM nodes, sprites, a terminal). Fizz itself never renders, loads assets,
//! or runs a frame loop; an external driver calls `update` once per tick.
//!
//! ## Quick Start
//!
//! ```
//! use fizz::{EmitterConfig, ParticleConfig, ParticleSystem, SystemConfig, Vec2, Visual};
//!
//! // A 100x100 system caching up to 300 retired particles for reuse.
//! let mut system = ParticleSystem::new(
//!     SystemConfig::new(Vec2::new(100.0, 150.0), Vec2::new(100.0, 100.0)).pool_capacity(300),
//! );
//!
//! let gun = system.create_emitter(
//!     EmitterConfig::new(Vec2::new(10.0, 48.0), Vec2::new(16.0, 16.0))
//!         .origin_offset(Vec2::new(10.0, -0.25))
//!         .visual(Visual::image("bubblegun.png")),
//! );
//!
//! // Spawn one bubble and nudge it on its way.
//! let config = ParticleConfig::new()
//!     .size(Vec2::new(4.0, 4.0))
//!     .lifespan(4000.0)
//!     .visual(Visual::image("bubble.png"));
//! if let Some(bubble) = system.spawn_particle(gun, config) {
//!     bubble.set_velocity(1.2, -0.1);
//! }
//!
//! // Once per frame, from your engine loop:
//! system.update(16.7, 0.0);
//! assert_eq!(system.particle_count(), 1);
//! ```
//!
//! ## Core Concepts
//!
//! ### Systems
//!
//! [`ParticleSystem`] is the authoritative owner: the ordered emitter list,
//! the ordered active-particle list, and the bounded reuse pool all live here,
//! and every spawn or retirement routes through it.
//!
//! ### Emitters
//!
//! [`ParticleEmitter`]s are positioned sources. They own no particles; spawned
//! particles carry the originating [`EmitterId`] as a plain tag, so destroying
//! an emitter orphans its live particles rather than killing them. Attach an
//! [`Emission`] for scheduled spawning ("2 particles every 50 time units"),
//! driven deterministically by the update pass rather than a wall-clock timer.
//!
//! ### Particles
//!
//! A [`Particle`] integrates position, angle, and lifespan each frame and dies
//! exactly once when its lifespan runs out. The system retires dead particles
//! into the pool on the same pass.
//!
//! ### The Pool
//!
//! [`ParticlePool`] is a bounded stack of retired particles. Spawns withdraw
//! from it before allocating fresh; retirements deposit back into it, and
//! deposits beyond capacity drop the particle rather than grow the pool. In
//! steady state a busy system allocates nothing per frame.
//!
//! | Operation | Pool non-empty | Pool empty / full |
//! |-----------|----------------|-------------------|
//! | spawn | withdraw + full reset | fresh allocation |
//! | retire | deposit (pool grows) | deposit drops the particle |
//!
//! ## Time Convention
//!
//! Every rate is per time unit and scaled by `delta_time`: position by
//! `velocity * delta_time`, angle by `rotational_velocity * delta_time`,
//! lifespan by `-delta_time`. The `now` stamp passed to `update` is telemetry
//! only (see [`FrameStats`]) and never affects simulation state.

mod emitter;
mod particle;
mod pool;
pub mod spawn;
mod system;
pub mod time;
pub mod visuals;

pub use emitter::{Emission, EmitterConfig, EmitterId, ParticleEmitter};
pub use glam::Vec2;
pub use particle::{Particle, ParticleConfig, ParticleId, ParticleStatus};
pub use pool::ParticlePool;
pub use spawn::SpawnContext;
pub use system::{ParticleSystem, SystemConfig};
pub use time::FrameStats;
pub use visuals::Visual;
