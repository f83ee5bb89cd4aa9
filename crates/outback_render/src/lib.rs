//! Frame descriptions for the outback demo
//!
//! This crate turns world state into the data the external renderer
//! consumes, including:
//! - Environment descriptors (camera, lighting, fog)
//! - Per-frame draw lists with opaque/transparent ordering

pub mod environment;
pub mod frame;

// Re-export commonly used types
pub use environment::{CameraDesc, Environment, FogDesc, LightingDesc};
pub use frame::{compose, DrawCall, RenderFrame};
