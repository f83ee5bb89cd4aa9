//! Fixed-step run that prints the kangaroo's jump arc as a text plot.
//!
//! Run with: cargo run --example 01_fixed_step_jump

use outback::config::AppConfig;
use outback::scene::SceneBuilder;
use outback::systems::SimulationSystem;

fn main() {
    env_logger::init();

    let config = AppConfig::default();
    let mut world = SceneBuilder::with_seed(Some(7))
        .add_kangaroo(None, &config.jump)
        .build();

    // Launch immediately instead of waiting for the first interval
    world
        .motion_mut()
        .hopper_mut()
        .expect("kangaroo installs the hopper")
        .sim
        .trigger();

    let mut sim = SimulationSystem::new();
    let dt = 1.0 / 30.0;

    println!("Jump arc (gravity {}, force {}):", config.jump.gravity, config.jump.force);
    for tick in 0..40 {
        sim.update_fixed(&mut world, dt);
        let y = world
            .get_by_name("kangaroo")
            .map(|(_, e)| e.transform.position.y)
            .unwrap_or(0.0);
        let bar = "#".repeat((y * 20.0).max(0.0) as usize);
        println!("t={:>5.2}s  y={:>5.2}  {}", tick as f32 * dt, y, bar);
    }
}
