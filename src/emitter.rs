//! Particle emitters and scheduled emission.
//!
//! An emitter is a positioned source that spawns particles with a given
//! initial transform and velocity. Emitters own no particles: spawned
//! particles live in the system's active list, tagged with the originating
//! [`EmitterId`] so presentation layers can group them by source. Emitters
//! themselves never expire; they integrate their own transform each frame and
//! are removed only by an explicit
//! [`destroy_emitter`](crate::ParticleSystem::destroy_emitter).
//!
//! # Scheduled Emission
//!
//! Continuous spawning ("N particles every T time units") is driven by an
//! [`Emission`] attached to the emitter. Cadence is tracked by an accumulator
//! advanced inside the system's update pass, so emission is a pure function of
//! simulated time: the same sequence of `update(delta_time)` calls always
//! spawns the same particles, regardless of wall-clock jitter.
//!
//! # Example
//!
//! ```ignore
//! let emitter = system.create_emitter(
//!     EmitterConfig::new(Vec2::new(10.0, 48.0), Vec2::new(16.0, 16.0))
//!         .origin_offset(Vec2::new(10.0, -0.25))
//!         .visual(Visual::image("bubblegun.png"))
//!         .emission(Emission::new(50.0, 2, ParticleConfig::new().lifespan(4000.0))),
//! );
//! ```

use crate::particle::ParticleConfig;
use crate::visuals::Visual;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque unique emitter identity, assigned by the owning system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmitterId(pub(crate) u64);

impl EmitterId {
    /// Raw id value, for logging and external bookkeeping.
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Periodic emission schedule: `count` particles every `interval` time units.
///
/// The accumulator carries fractional remainders across frames, and a frame
/// long enough to cover several intervals emits several bursts, so total
/// output tracks simulated time exactly. A non-positive `interval` emits one
/// burst per update call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Emission {
    /// Time units between bursts.
    pub interval: f32,
    /// Particles spawned per burst.
    pub count: u32,
    /// Spawn config applied to every scheduled particle.
    pub prototype: ParticleConfig,
    #[serde(skip)]
    accumulator: f32,
}

impl Emission {
    /// Emit `count` particles from `prototype` every `interval` time units.
    pub fn new(interval: f32, count: u32, prototype: ParticleConfig) -> Self {
        Self {
            interval,
            count,
            prototype,
            accumulator: 0.0,
        }
    }

    /// Advance the schedule by `delta_time`; returns how many particles are
    /// due this frame.
    pub(crate) fn due(&mut self, delta_time: f32) -> u32 {
        if self.interval <= 0.0 {
            return self.count;
        }
        self.accumulator += delta_time;
        let bursts = (self.accumulator / self.interval) as u32;
        self.accumulator -= bursts as f32 * self.interval;
        bursts * self.count
    }
}

/// Spawn-time configuration for an emitter.
///
/// # Example
///
/// ```
/// use fizz::{EmitterConfig, Vec2};
///
/// let config = EmitterConfig::new(Vec2::new(10.0, 48.0), Vec2::new(16.0, 16.0))
///     .origin_offset(Vec2::new(10.0, -0.25))
///     .angle(0.0);
/// assert_eq!(config.position.y, 48.0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmitterConfig {
    /// Position in system space.
    pub position: Vec2,
    /// Width and height.
    pub size: Vec2,
    /// Offset from the emitter position at which particles appear.
    pub origin_offset: Vec2,
    /// Orientation in degrees.
    pub angle: f32,
    /// Velocity in units per time unit.
    pub velocity: Vec2,
    /// Angular velocity in degrees per time unit.
    pub rotational_velocity: f32,
    /// Whether the presentation layer should draw this emitter.
    pub visible: bool,
    /// Opaque visual tag (image source).
    pub visual: Visual,
    /// Optional periodic emission schedule.
    pub emission: Option<Emission>,
}

impl EmitterConfig {
    /// Create a config for an emitter at `position` with the given size.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            origin_offset: Vec2::ZERO,
            angle: 0.0,
            velocity: Vec2::ZERO,
            rotational_velocity: 0.0,
            visible: true,
            visual: Visual::default(),
            emission: None,
        }
    }

    /// Set the spawn origin offset from the emitter position.
    pub fn origin_offset(mut self, offset: Vec2) -> Self {
        self.origin_offset = offset;
        self
    }

    /// Set the orientation in degrees.
    pub fn angle(mut self, degrees: f32) -> Self {
        self.angle = degrees;
        self
    }

    /// Set the emitter's own velocity in units per time unit.
    pub fn velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the emitter's angular velocity in degrees per time unit.
    pub fn spin(mut self, degrees_per_unit: f32) -> Self {
        self.rotational_velocity = degrees_per_unit;
        self
    }

    /// Set the visual tag.
    pub fn visual(mut self, visual: Visual) -> Self {
        self.visual = visual;
        self
    }

    /// Attach a periodic emission schedule.
    pub fn emission(mut self, emission: Emission) -> Self {
        self.emission = Some(emission);
        self
    }

    /// Create the emitter hidden from the presentation layer.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// A positioned particle source.
#[derive(Clone, Debug)]
pub struct ParticleEmitter {
    id: EmitterId,
    /// Position in system space.
    pub position: Vec2,
    /// Width and height.
    pub size: Vec2,
    /// Offset from `position` at which particles appear.
    pub origin_offset: Vec2,
    /// Orientation in degrees.
    pub angle: f32,
    /// Velocity in units per time unit.
    pub velocity: Vec2,
    /// Angular velocity in degrees per time unit.
    pub rotational_velocity: f32,
    /// Whether the presentation layer should draw this emitter.
    pub visible: bool,
    /// Opaque visual tag (image source).
    pub visual: Visual,
    pub(crate) emission: Option<Emission>,
}

impl ParticleEmitter {
    pub(crate) fn new(id: EmitterId, config: EmitterConfig) -> Self {
        Self {
            id,
            position: config.position,
            size: config.size,
            origin_offset: config.origin_offset,
            angle: config.angle,
            velocity: config.velocity,
            rotational_velocity: config.rotational_velocity,
            visible: config.visible,
            visual: config.visual,
            emission: config.emission,
        }
    }

    /// Advance the emitter's own transform by `delta_time`.
    pub fn update(&mut self, delta_time: f32) {
        self.position += self.velocity * delta_time;
        self.angle += self.rotational_velocity * delta_time;
    }

    /// Where particles from this emitter appear right now.
    #[inline]
    pub fn spawn_origin(&self) -> Vec2 {
        self.position + self.origin_offset
    }

    /// Replace the emission schedule (or clear it with `None`).
    pub fn set_emission(&mut self, emission: Option<Emission>) {
        self.emission = emission;
    }

    /// The current emission schedule, if any.
    #[inline]
    pub fn emission(&self) -> Option<&Emission> {
        self.emission.as_ref()
    }

    /// This emitter's identity.
    #[inline]
    pub fn id(&self) -> EmitterId {
        self.id
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

#[cfg(test)]
mod tests {
    use super::*;

    fn emitter(config: EmitterConfig) -> ParticleEmitter {
        ParticleEmitter::new(EmitterId(1), config)
    }

    #[test]
    fn test_update_integrates_transform() {
        let mut em = emitter(
            EmitterConfig::new(Vec2::ZERO, Vec2::new(16.0, 16.0))
                .velocity(Vec2::new(4.0, 2.0))
                .spin(180.0),
        );
        em.update(0.5);
        assert!((em.position.x - 2.0).abs() < 1e-6);
        assert!((em.position.y - 1.0).abs() < 1e-6);
        assert!((em.angle - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_spawn_origin_tracks_position() {
        let mut em = emitter(
            EmitterConfig::new(Vec2::new(10.0, 48.0), Vec2::new(16.0, 16.0))
                .origin_offset(Vec2::new(10.0, -0.25))
                .velocity(Vec2::new(1.0, 0.0)),
        );
        assert_eq!(em.spawn_origin(), Vec2::new(20.0, 47.75));

        em.update(5.0);
        assert_eq!(em.spawn_origin(), Vec2::new(25.0, 47.75));
    }

    #[test]
    fn test_emission_accumulates_across_frames() {
        let mut emission = Emission::new(50.0, 2, ParticleConfig::default());

        // Three 20-unit frames cross the 50-unit boundary on the third.
        assert_eq!(emission.due(20.0), 0);
        assert_eq!(emission.due(20.0), 0);
        assert_eq!(emission.due(20.0), 2);
        // 10 units of remainder carry over.
        assert_eq!(emission.due(40.0), 2);
    }

    #[test]
    fn test_emission_long_frame_emits_multiple_bursts() {
        let mut emission = Emission::new(50.0, 2, ParticleConfig::default());
        assert_eq!(emission.due(175.0), 6);
        // 25 units remain in the accumulator.
        assert_eq!(emission.due(25.0), 2);
    }

    #[test]
    fn test_emission_zero_interval_fires_every_update() {
        let mut emission = Emission::new(0.0, 3, ParticleConfig::default());
        assert_eq!(emission.due(0.001), 3);
        assert_eq!(emission.due(1000.0), 3);
    }

    #[test]
    fn test_center_point() {
        let em = emitter(EmitterConfig::new(Vec2::ZERO, Vec2::new(16.0, 8.0)));
        assert_eq!(em.center_point(), Vec2::new(8.0, 4.0));
    }
}
