//! Scene construction utilities
//!
//! This module provides a declarative API for building the landscape.

mod scene_builder;

pub use scene_builder::{build_environment, SceneBuilder};
