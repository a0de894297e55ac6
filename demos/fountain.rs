//! # Fountain
//!
//! Scheduled emission: the emitter carries its own cadence and prototype, so
//! the driver only ever calls `update`. Confetti squares arc up, spin, die,
//! and are recycled through the pool.
//!
//! Run with: `cargo run --example fountain`

use fizz::{
    Emission, EmitterConfig, ParticleConfig, ParticleSystem, SystemConfig, Vec2, Visual,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Fizz Fountain ===");
    println!();

    let mut system = ParticleSystem::new(
        SystemConfig::new(Vec2::new(320.0, 400.0), Vec2::new(640.0, 480.0)).pool_capacity(128),
    );
    system.create_emitter(
        EmitterConfig::new(Vec2::new(320.0, 460.0), Vec2::new(8.0, 8.0))
            .visual(Visual::image("nozzle.png"))
            .emission(Emission::new(
                25.0,
                3,
                ParticleConfig::new()
                    .size(Vec2::new(3.0, 3.0))
                    .velocity(Vec2::new(0.0, -0.2))
                    .spin(0.36)
                    .lifespan(1500.0)
                    .visual(Visual::styled("confetti.png", "filter: hue-rotate(90deg);")),
            )),
    );

    let delta_time = 16.7_f32;
    let mut now = 0.0_f32;
    for frame in 0..600u32 {
        system.update(delta_time, now);
        now += delta_time;

        if frame % 120 == 119 {
            println!(
                "frame {:>4} | active {:>3} | pooled {:>3} | allocated {:>3} | reused {:>5}",
                system.stats().frame(),
                system.particle_count(),
                system.pool_size(),
                system.total_allocated(),
                system.total_reused(),
            );
        }
    }

    println!();
    println!(
        "steady state: {} live allocations cover {} spawns ({} pooled reuses, {} dropped)",
        system.total_allocated(),
        system.total_allocated() + system.total_reused(),
        system.total_reused(),
        system.pool_dropped(),
    );
}
