//! Outback - looping parallax landscape demo
//!
//! Builds the scene from config, then runs a paced frame loop that steps
//! the world and composes a frame description each tick.

use std::time::{Duration, Instant};

use outback::assets::BuiltinModels;
use outback::config::AppConfig;
use outback::scene::{build_environment, SceneBuilder};
use outback::systems::SimulationSystem;
use outback_core::ModelSource;
use outback_render::compose;

fn main() {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Initialize logging at the configured level (RUST_LOG still wins)
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.debug.log_level),
    )
    .init();
    log::info!("Starting outback demo");

    // Load the character model; the scene degrades rather than aborts
    let kangaroo = match BuiltinModels.load_model("kangaroo") {
        Ok(model) => Some(model),
        Err(e) => {
            log::warn!("Failed to load kangaroo model: {}", e);
            None
        }
    };

    // Assemble the scene
    let mut world = SceneBuilder::with_seed(config.demo.seed)
        .add_sky(&config.sky)
        .add_sun(&config.sky)
        .add_ground(&config.ground)
        .add_hills(&config.hills)
        .add_clouds(&config.clouds)
        .add_kangaroo(kangaroo, &config.jump)
        .build();

    let environment = build_environment(&config);
    let mut sim = SimulationSystem::new();

    let frame_budget = Duration::from_secs_f32(1.0 / config.demo.target_fps.max(1) as f32);
    let run_forever = config.demo.duration_secs <= 0.0;
    let deadline = Instant::now() + Duration::from_secs_f32(config.demo.duration_secs.max(0.0));
    let log_every = config.debug.log_interval_secs;
    let mut last_log = Instant::now();

    log::info!(
        "Running at {} fps for {}",
        config.demo.target_fps,
        if run_forever {
            "ever".to_string()
        } else {
            format!("{}s", config.demo.duration_secs)
        }
    );

    while run_forever || Instant::now() < deadline {
        let frame_start = Instant::now();

        let result = sim.update(&mut world);
        let frame = compose(&world, &environment);

        if log_every > 0.0 && last_log.elapsed().as_secs_f32() >= log_every {
            let roo_y = world
                .get_by_name("kangaroo")
                .map(|(_, e)| e.transform.position.y)
                .unwrap_or(0.0);
            log::info!(
                "Frame {}: dt={:.4}s, {} draws ({} transparent), kangaroo y={:.2}",
                result.frame,
                result.dt,
                frame.draw_count(),
                frame.transparent_count(),
                roo_y
            );
            last_log = Instant::now();
        }

        // Pace to the target frame rate
        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }

    log::info!("Demo finished after {} frames", sim.frame_count());
}
