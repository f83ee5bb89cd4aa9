//! Core scene types for the outback demo
//!
//! This crate provides the scene data model, including:
//! - Entities with transforms, mesh references, and materials
//! - Loaded models shared read-only behind an `Arc`
//! - Randomized feature generation for hills and clouds
//! - A World container that steps motion and syncs entity transforms

pub mod entity;
pub mod generate;
pub mod mesh;
pub mod transform;
pub mod world;

// Re-export commonly used types
pub use entity::{Entity, Material};
pub use generate::{generate_features, JitterRanges, TerrainFeature};
pub use mesh::{AssetError, Mesh, Model, ModelPart, ModelSource};
pub use transform::Transform;
pub use world::{EntityKey, World};

// Re-export math and physics types for convenience
pub use outback_math::Vec3;
pub use outback_physics::{
    Hopper, JumpConfig, JumpSimulator, JumpTimer, MotionWorld, ParallaxScroller, ScrollerKey,
};
