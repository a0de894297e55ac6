//! # Bubble Gun
//!
//! A bubble emitter spitting out particles at a fixed cadence, each with a
//! random velocity and lifespan. The "renderer" here is a text dump of the
//! system's read-only state; swap it for DOM nodes or sprites and nothing in
//! the simulation changes.
//!
//! Run with: `cargo run --example bubbles [frames]`

use fizz::{
    EmitterConfig, ParticleConfig, ParticleSystem, SpawnContext, SystemConfig, Vec2, Visual,
};

const BUBBLE_STYLE: &str =
    "box-shadow: 0px 0px 1px 1px rgba(45,255,196,0.9); border-radius: 50%;";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let frames: u32 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(600);

    println!("=== Fizz Bubble Gun ===");
    println!("Frames: {} at ~60fps (16.7ms ticks)", frames);
    println!();

    let mut system = ParticleSystem::new(
        SystemConfig::new(Vec2::new(100.0, 150.0), Vec2::new(100.0, 100.0)).pool_capacity(300),
    );
    let gun = system.create_emitter(
        EmitterConfig::new(Vec2::new(10.0, 48.0), Vec2::new(16.0, 16.0))
            .origin_offset(Vec2::new(10.0, -0.25))
            .visual(Visual::image("bubblegun.png")),
    );

    let delta_time = 16.7_f32;
    let mut now = 0.0_f32;
    let mut since_last_burst = 0.0_f32;
    let mut spawned: u32 = 0;

    for frame in 0..frames {
        // Caller-side spawn policy: two bubbles every 50ms, randomized per
        // bubble the way the pool will later have to scrub away.
        since_last_burst += delta_time;
        while since_last_burst >= 50.0 {
            since_last_burst -= 50.0;
            for _ in 0..2 {
                let mut ctx = SpawnContext::new(spawned, u32::MAX);
                let config = ParticleConfig::new()
                    .size(Vec2::new(4.0, 4.0))
                    .lifespan(ctx.random_range(500.0, 8000.0))
                    .visual(Visual::styled("bubble.png", BUBBLE_STYLE));
                if let Some(bubble) = system.spawn_particle(gun, config) {
                    let velocity = ctx.random_velocity(0.0..0.12, -0.015..0.015);
                    bubble.set_velocity(velocity.x, velocity.y);
                }
                spawned += 1;
            }
        }

        system.update(delta_time, now);
        now += delta_time;

        if frame % 60 == 59 {
            render(&system);
        }
    }

    println!();
    println!("Spawned {} bubbles total:", spawned);
    println!("  fresh allocations: {}", system.total_allocated());
    println!("  pool reuses:       {}", system.total_reused());
    println!("  overflow drops:    {}", system.pool_dropped());
}

/// The presentation adapter: reads public state, draws nothing fancier than
/// stdout.
fn render(system: &ParticleSystem) {
    println!(
        "frame {:>4} | fps {:>5.1} | active {:>3} | pooled {:>3}/{}",
        system.stats().frame(),
        system.stats().fps(),
        system.particle_count(),
        system.pool_size(),
        system.pool_capacity(),
    );
    for particle in system.particles().iter().take(3) {
        println!(
            "    bubble {:>4} at ({:>6.1}, {:>6.1}) ttl {:>6.0}",
            particle.id().value(),
            particle.position.x,
            particle.position.y,
            particle.lifespan(),
        );
    }
}
