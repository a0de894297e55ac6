//! Integration tests for the simulation and pooling engine.
//!
//! These exercise the public API end to end: spawn/retire sequences, the
//! per-frame update pass, and the pool's bound and conservation guarantees.

use fizz::{
    Emission, EmitterConfig, ParticleConfig, ParticleSystem, SpawnContext, SystemConfig, Vec2,
    Visual,
};

fn system_with_pool(pool_capacity: usize) -> (ParticleSystem, fizz::EmitterId) {
    let mut system = ParticleSystem::new(
        SystemConfig::new(Vec2::new(100.0, 150.0), Vec2::new(100.0, 100.0))
            .pool_capacity(pool_capacity),
    );
    let gun = system.create_emitter(
        EmitterConfig::new(Vec2::new(10.0, 48.0), Vec2::new(16.0, 16.0))
            .origin_offset(Vec2::new(10.0, -0.25)),
    );
    (system, gun)
}

// ============================================================================
// Spawn and Pool Scenarios
// ============================================================================

#[test]
fn test_spawning_past_pool_capacity_allocates_fresh() {
    // Pool capacity 2, spawn 3 with no prior retirements: all fresh, no reuse.
    let (mut system, gun) = system_with_pool(2);
    for _ in 0..3 {
        let _ = system.spawn_particle(gun, ParticleConfig::new().lifespan(1000.0));
    }

    assert_eq!(system.particle_count(), 3);
    assert_eq!(system.pool_size(), 0);
    assert_eq!(system.total_allocated(), 3);
    assert_eq!(system.total_reused(), 0);
}

#[test]
fn test_expiry_moves_particle_into_pool() {
    // Lifespan 100, two updates of 60: alive at 40, then dead at -20.
    let (mut system, gun) = system_with_pool(4);
    let id = system
        .spawn_particle(gun, ParticleConfig::new().lifespan(100.0))
        .unwrap()
        .id();

    system.update(60.0, 0.0);
    let particle = system.particle(id).expect("still active after first tick");
    assert!((particle.lifespan() - 40.0).abs() < 1e-6);
    assert!(particle.is_alive());

    system.update(60.0, 16.7);
    assert!(system.particle(id).is_none());
    assert_eq!(system.particle_count(), 0);
    assert_eq!(system.pool_size(), 1);
}

#[test]
fn test_pool_overflow_drops_second_retirement() {
    // Pool capacity 1, retire 2 in sequence: first pools, second is dropped.
    let (mut system, gun) = system_with_pool(1);
    let first = system
        .spawn_particle(gun, ParticleConfig::new().lifespan(1000.0))
        .unwrap()
        .id();
    let second = system
        .spawn_particle(gun, ParticleConfig::new().lifespan(1000.0))
        .unwrap()
        .id();

    assert!(system.retire_particle(first));
    assert!(system.retire_particle(second));
    assert_eq!(system.pool_size(), 1);
    assert_eq!(system.pool_dropped(), 1);
}

#[test]
fn test_empty_pool_falls_back_to_fresh_construction() {
    // Withdrawal from an empty pool is the normal path: the spawn succeeds
    // with the requested config applied verbatim.
    let (mut system, gun) = system_with_pool(4);
    assert_eq!(system.pool_size(), 0);

    let config = ParticleConfig::new()
        .size(Vec2::new(4.0, 4.0))
        .velocity(Vec2::new(1.5, -0.25))
        .spin(45.0)
        .lifespan(777.0)
        .scale(2.0)
        .visual(Visual::styled("bubble.png", "border-radius: 50%;"));
    let particle = system.spawn_particle(gun, config.clone()).unwrap();

    assert_eq!(particle.size, config.size);
    assert_eq!(particle.velocity, config.velocity);
    assert_eq!(particle.rotational_velocity, config.rotational_velocity);
    assert!((particle.lifespan() - config.lifespan).abs() < 1e-6);
    assert_eq!(particle.scale, config.scale);
    assert_eq!(particle.visual, config.visual);
    assert_eq!(system.total_allocated(), 1);
    assert_eq!(system.total_reused(), 0);
}

#[test]
fn test_destroyed_emitter_leaves_particles_simulating() {
    // Destroying an emitter with 3 live particles orphans them; they keep
    // integrating until their own lifespans expire.
    let (mut system, gun) = system_with_pool(4);
    for _ in 0..3 {
        let particle = system
            .spawn_particle(gun, ParticleConfig::new().lifespan(250.0))
            .unwrap();
        particle.set_velocity(2.0, 0.0);
    }

    assert!(system.destroy_emitter(gun));
    assert!(system.emitters().is_empty());
    assert_eq!(system.particle_count(), 3);

    let before: Vec<f32> = system.particles().iter().map(|p| p.position.x).collect();
    system.update(100.0, 0.0);
    assert_eq!(system.particle_count(), 3);
    for (particle, x0) in system.particles().iter().zip(before) {
        assert!((particle.position.x - x0 - 200.0).abs() < 1e-4);
    }

    // Their lifespans still run out on schedule.
    system.update(100.0, 0.0);
    system.update(100.0, 0.0);
    assert_eq!(system.particle_count(), 0);
    assert_eq!(system.pool_size(), 3);
}

// ============================================================================
// Invariant Sweeps
// ============================================================================

#[test]
fn test_pool_bound_holds_under_random_churn() {
    let (mut system, gun) = system_with_pool(5);
    let mut ctx = SpawnContext::seeded(0, 1, 0xF122);

    for step in 0..500 {
        if ctx.random() < 0.6 {
            let lifespan = ctx.random_range(1.0, 50.0);
            let _ = system.spawn_particle(gun, ParticleConfig::new().lifespan(lifespan));
        }
        system.update(ctx.random_range(1.0, 30.0), step as f32 * 16.7);

        assert!(system.pool_size() <= system.pool_capacity());
        assert_eq!(
            system.particle_count() as u64 + system.pool_size() as u64 + system.pool_dropped(),
            system.total_allocated(),
        );
        for particle in system.particles() {
            assert!(particle.is_alive());
        }
    }
}

#[test]
fn test_reuse_leaves_no_stale_state() {
    let (mut system, gun) = system_with_pool(4);
    let stale = ParticleConfig::new()
        .velocity(Vec2::new(9.0, 9.0))
        .spin(360.0)
        .angle(270.0)
        .lifespan(10.0)
        .scale(5.0)
        .visual(Visual::image("old.png"));
    let _ = system.spawn_particle(gun, stale);
    system.update(500.0, 0.0); // lives, drifts, dies into the pool
    assert_eq!(system.pool_size(), 1);

    let fresh = ParticleConfig::new().lifespan(100.0);
    let particle = system.spawn_particle(gun, fresh.clone()).unwrap();

    assert_eq!(particle.position, Vec2::new(20.0, 47.75)); // emitter origin, not the drifted spot
    assert_eq!(particle.velocity, Vec2::ZERO);
    assert_eq!(particle.angle, 0.0);
    assert_eq!(particle.rotational_velocity, 0.0);
    assert!((particle.lifespan() - 100.0).abs() < 1e-6);
    assert_eq!(particle.scale, 1.0);
    assert!(particle.visual.image.is_none());
    assert!(particle.is_alive());
    assert_eq!(system.total_reused(), 1);
}

#[test]
fn test_steady_state_allocates_nothing_new() {
    // One particle's worth of churn against a capacity-8 pool: after the
    // first allocation every spawn is a reuse.
    let (mut system, gun) = system_with_pool(8);
    for _ in 0..50 {
        let _ = system.spawn_particle(gun, ParticleConfig::new().lifespan(5.0));
        system.update(10.0, 0.0);
    }
    assert_eq!(system.total_allocated(), 1);
    assert_eq!(system.total_reused(), 49);
    assert_eq!(system.pool_dropped(), 0);
}

// ============================================================================
// Scheduled Emission
// ============================================================================

#[test]
fn test_scheduled_emission_cadence_is_deterministic() {
    // 2 particles every 50 units, driven at a 25-unit tick: one burst per
    // two ticks, independent of the wall-clock stamps.
    let mut system =
        ParticleSystem::new(SystemConfig::new(Vec2::ZERO, Vec2::new(100.0, 100.0)));
    system.create_emitter(EmitterConfig::new(Vec2::ZERO, Vec2::ONE).emission(Emission::new(
        50.0,
        2,
        ParticleConfig::new().lifespan(100_000.0),
    )));

    for tick in 0..10 {
        system.update(25.0, tick as f32 * 999.0);
    }
    assert_eq!(system.particle_count(), 10);
}

#[test]
fn test_scheduled_emission_reuses_pool_after_warmup() {
    // Short-lived particles on a steady cadence settle into pure reuse.
    let mut system = ParticleSystem::new(
        SystemConfig::new(Vec2::ZERO, Vec2::new(100.0, 100.0)).pool_capacity(64),
    );
    system.create_emitter(EmitterConfig::new(Vec2::ZERO, Vec2::ONE).emission(Emission::new(
        10.0,
        1,
        ParticleConfig::new().lifespan(35.0),
    )));

    for _ in 0..20 {
        system.update(10.0, 0.0);
    }
    let allocated_after_warmup = system.total_allocated();
    for _ in 0..100 {
        system.update(10.0, 0.0);
    }
    assert_eq!(system.total_allocated(), allocated_after_warmup);
    assert!(system.total_reused() > 0);
}

// ============================================================================
// Config Serialization
// ============================================================================

#[test]
fn test_emitter_config_round_trips_through_json() {
    let config = EmitterConfig::new(Vec2::new(10.0, 48.0), Vec2::new(16.0, 16.0))
        .origin_offset(Vec2::new(10.0, -0.25))
        .velocity(Vec2::new(0.5, 0.0))
        .visual(Visual::image("bubblegun.png"))
        .emission(Emission::new(50.0, 2, ParticleConfig::new().lifespan(8000.0)));

    let json = serde_json::to_string(&config).unwrap();
    let back: EmitterConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back.position, config.position);
    assert_eq!(back.origin_offset, config.origin_offset);
    assert_eq!(back.visual, config.visual);
    let emission = back.emission.expect("emission survives the round trip");
    assert_eq!(emission.interval, 50.0);
    assert_eq!(emission.count, 2);
    assert!((emission.prototype.lifespan - 8000.0).abs() < 1e-6);
}
