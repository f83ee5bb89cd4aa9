//! Builds the full scene from a fixed seed and dumps the first frame.
//!
//! Run with: cargo run --example 02_seeded_scene

use outback::assets::BuiltinModels;
use outback::config::AppConfig;
use outback::scene::{build_environment, SceneBuilder};
use outback_core::ModelSource;
use outback_render::compose;

fn main() {
    env_logger::init();

    let config = AppConfig::default();
    let kangaroo = BuiltinModels.load_model("kangaroo").ok();

    let world = SceneBuilder::with_seed(Some(42))
        .add_sky(&config.sky)
        .add_sun(&config.sky)
        .add_ground(&config.ground)
        .add_hills(&config.hills)
        .add_clouds(&config.clouds)
        .add_kangaroo(kangaroo, &config.jump)
        .build();

    let frame = compose(&world, &build_environment(&config));

    println!(
        "Frame: {} draws ({} transparent)",
        frame.draw_count(),
        frame.transparent_count()
    );
    for (i, draw) in frame.draws.iter().enumerate() {
        println!(
            "  [{:>3}] {:<6} at ({:.1}, {:.1}, {:.1}){}",
            i,
            mesh_name(&draw.mesh),
            draw.transform.position.x,
            draw.transform.position.y,
            draw.transform.position.z,
            if draw.material.transparent { "  (transparent)" } else { "" }
        );
    }
}

fn mesh_name(mesh: &outback_core::Mesh) -> &'static str {
    match mesh {
        outback_core::Mesh::Plane { .. } => "plane",
        outback_core::Mesh::Sphere { .. } => "sphere",
        outback_core::Mesh::Box { .. } => "box",
        outback_core::Mesh::Dome { .. } => "dome",
        outback_core::Mesh::Model(_) => "model",
        outback_core::Mesh::Empty => "empty",
    }
}
