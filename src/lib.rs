//! Outback - looping parallax landscape demo
//!
//! Drives an endlessly scrolling desert scene with a hopping kangaroo
//! and emits a self-contained frame description every tick.

pub mod assets;
pub mod config;
pub mod scene;
pub mod systems;
