//! Math primitives for the outback demo
//!
//! Deliberately small: the demo only needs a [`Vec3`] with the handful of
//! operations the scene layer uses (offsets, lerp, axis rotations).

mod vec3;

pub use vec3::Vec3;
