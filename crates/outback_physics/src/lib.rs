//! Per-tick motion simulation for the outback demo
//!
//! This crate provides the animated state behind the scene, including:
//! - Parallax scrolling with seamless wrap-around
//! - Jump physics for the hopping character (gravity, ground clamp)
//! - The periodic auto-jump trigger
//! - A motion world that steps everything once per frame

pub mod jump;
pub mod scroller;
pub mod timer;
pub mod world;

// Re-export commonly used types
pub use jump::{JumpConfig, JumpSimulator, DEFAULT_GRAVITY, DEFAULT_JUMP_FORCE};
pub use scroller::{ParallaxScroller, ScrollerKey};
pub use timer::{JumpTimer, DEFAULT_JUMP_INTERVAL};
pub use world::{Hopper, MotionWorld};
