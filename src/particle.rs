//! Particle state and lifecycle.
//!
//! A particle carries its own transform, motion, and remaining lifespan, and
//! advances all three in [`Particle::update`]. Every particle automatically
//! tracks these lifecycle fields:
//!
//! | Field | Type | Description |
//! |-------|------|-------------|
//! | `lifespan` | `f32` | Remaining time-to-live, decremented each update |
//! | `status` | [`ParticleStatus`] | `Alive` until lifespan runs out, then `Dead` |
//!
//! A particle transitions to `Dead` exactly once; further `update` calls are
//! no-ops. The owning [`ParticleSystem`](crate::ParticleSystem) watches for
//! that transition and moves the particle from its active list into the pool.
//!
//! # Time Convention
//!
//! All motion is expressed per time unit and scaled by `delta_time`:
//! position by `velocity * delta_time`, angle by
//! `rotational_velocity * delta_time`, lifespan by `-delta_time`. Pick one
//! timebase for the driver (the demos use milliseconds) and every quantity
//! stays consistent with it.

use crate::emitter::EmitterId;
use crate::visuals::Visual;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque unique particle identity, assigned by the owning system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub(crate) u64);

impl ParticleId {
    /// Raw id value, for logging and external bookkeeping.
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Lifecycle status of a particle.
///
/// `Dead` particles are never advanced or rendered; the system reclaims them
/// into the pool on the same update pass that saw them expire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ParticleStatus {
    /// Simulating normally.
    #[default]
    Alive,
    /// Expired; waiting to be reclaimed (or already pooled).
    Dead,
}

/// Spawn-time configuration for a single particle.
///
/// This is a plain value: construct one (or start from `Default`), adjust it
/// with the chaining methods, and hand it to
/// [`ParticleSystem::spawn_particle`](crate::ParticleSystem::spawn_particle).
/// Sharing a prototype between spawns is just cloning a value, so two systems
/// can never alias each other's defaults.
///
/// # Example
///
/// ```
/// use fizz::{ParticleConfig, Vec2};
///
/// let config = ParticleConfig::new()
///     .size(Vec2::new(4.0, 4.0))
///     .velocity(Vec2::new(1.2, -0.1))
///     .lifespan(5000.0);
/// assert_eq!(config.lifespan, 5000.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleConfig {
    /// Width and height.
    pub size: Vec2,
    /// Initial angle in degrees.
    pub angle: f32,
    /// Initial velocity in units per time unit.
    pub velocity: Vec2,
    /// Angular velocity in degrees per time unit.
    pub rotational_velocity: f32,
    /// Time-to-live in time units.
    pub lifespan: f32,
    /// Visual size multiplier (1.0 = normal).
    pub scale: f32,
    /// Whether the presentation layer should draw this particle.
    pub visible: bool,
    /// Opaque visual tag.
    pub visual: Visual,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            size: Vec2::ONE,
            angle: 0.0,
            velocity: Vec2::ZERO,
            rotational_velocity: 0.0,
            lifespan: 1.0,
            scale: 1.0,
            visible: true,
            visual: Visual::default(),
        }
    }
}

impl ParticleConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the particle size.
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Set the initial angle in degrees.
    pub fn angle(mut self, degrees: f32) -> Self {
        self.angle = degrees;
        self
    }

    /// Set the initial velocity in units per time unit.
    pub fn velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the angular velocity in degrees per time unit.
    pub fn spin(mut self, degrees_per_unit: f32) -> Self {
        self.rotational_velocity = degrees_per_unit;
        self
    }

    /// Set the time-to-live in time units.
    pub fn lifespan(mut self, lifespan: f32) -> Self {
        self.lifespan = lifespan;
        self
    }

    /// Set the visual scale multiplier.
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the visual tag.
    pub fn visual(mut self, visual: Visual) -> Self {
        self.visual = visual;
        self
    }

    /// Spawn the particle hidden from the presentation layer.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// A single simulated particle.
///
/// Particles are owned by their [`ParticleSystem`](crate::ParticleSystem)'s
/// active list (or by the pool once retired) and carry only a non-owning
/// [`EmitterId`] tag naming the emitter that spawned them.
#[derive(Clone, Debug)]
pub struct Particle {
    id: ParticleId,
    emitter: EmitterId,
    /// Position in system space.
    pub position: Vec2,
    /// Velocity in units per time unit.
    pub velocity: Vec2,
    /// Orientation in degrees.
    pub angle: f32,
    /// Angular velocity in degrees per time unit.
    pub rotational_velocity: f32,
    /// Width and height.
    pub size: Vec2,
    /// Visual size multiplier.
    pub scale: f32,
    /// Whether the presentation layer should draw this particle.
    pub visible: bool,
    /// Opaque visual tag, passed through to presentation.
    pub visual: Visual,
    lifespan: f32,
    status: ParticleStatus,
}

impl Particle {
    /// Construct a fresh particle at `origin` from a spawn config.
    pub(crate) fn new(
        id: ParticleId,
        emitter: EmitterId,
        origin: Vec2,
        config: &ParticleConfig,
    ) -> Self {
        Self {
            id,
            emitter,
            position: origin,
            velocity: config.velocity,
            angle: config.angle,
            rotational_velocity: config.rotational_velocity,
            size: config.size,
            scale: config.scale,
            visible: config.visible,
            visual: config.visual.clone(),
            lifespan: config.lifespan,
            status: ParticleStatus::Alive,
        }
    }

    /// Reactivate a pooled particle for a new life.
    ///
    /// Every field is overwritten from the new spawn parameters; nothing from
    /// the prior life survives.
    pub(crate) fn respawn(
        &mut self,
        id: ParticleId,
        emitter: EmitterId,
        origin: Vec2,
        config: &ParticleConfig,
    ) {
        *self = Self::new(id, emitter, origin, config);
    }

    /// Advance the particle by `delta_time`.
    ///
    /// Integrates position and angle, then decays the lifespan. Returns `true`
    /// only on the call that transitions the particle from `Alive` to `Dead`,
    /// so the owning system retires it exactly once. Calling this on an
    /// already dead particle does nothing and returns `false`.
    pub fn update(&mut self, delta_time: f32) -> bool {
        if self.status == ParticleStatus::Dead {
            return false;
        }

        self.position += self.velocity * delta_time;
        self.angle += self.rotational_velocity * delta_time;
        self.lifespan -= delta_time;

        if self.lifespan <= 0.0 {
            self.status = ParticleStatus::Dead;
            return true;
        }
        false
    }

    /// Set the velocity directly. Zero and negative components are valid.
    #[inline]
    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        self.velocity = Vec2::new(vx, vy);
    }

    /// Set the angular velocity in degrees per time unit.
    #[inline]
    pub fn set_rotational_velocity(&mut self, degrees_per_unit: f32) {
        self.rotational_velocity = degrees_per_unit;
    }

    /// Kill the particle immediately, regardless of remaining lifespan.
    ///
    /// The next system update pass will not advance it; retirement happens
    /// when the system or caller moves it into the pool.
    #[inline]
    pub fn kill(&mut self) {
        self.status = ParticleStatus::Dead;
    }

    /// This particle's identity.
    #[inline]
    pub fn id(&self) -> ParticleId {
        self.id
    }

    /// The emitter this particle was spawned from.
    ///
    /// Purely an origin tag; the emitter may have been destroyed since.
    #[inline]
    pub fn emitter(&self) -> EmitterId {
        self.emitter
    }

    /// Remaining time-to-live in time units.
    #[inline]
    pub fn lifespan(&self) -> f32 {
        self.lifespan
    }

    /// Current lifecycle status.
    #[inline]
    pub fn status(&self) -> ParticleStatus {
        self.status
    }

    /// Whether the particle is still simulating.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status == ParticleStatus::Alive
    }

    /// Orientation in radians.
    #[inline]
    pub fn angle_radians(&self) -> f32 {
        self.angle.to_radians()
    }

    /// Half the size; presentation layers use it as the transform origin.
    #[inline]
    pub fn center_point(&self) -> Vec2 {
        self.size * 0.5
    }
}
