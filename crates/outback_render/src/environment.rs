//! Environment descriptors - camera, lighting, and fog
//!
//! These are plain data the external renderer consumes verbatim. The
//! engine fixes them at scene construction and re-emits them with every
//! frame; nothing in the simulation mutates them.

use outback_math::Vec3;
use serde::{Deserialize, Serialize};

/// Fixed viewpoint for the scene
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CameraDesc {
    /// Camera position in world space
    pub position: Vec3,
    /// Point the camera looks at
    pub look_at: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 3.0, 12.0),
            look_at: Vec3::new(0.0, 2.0, 0.0),
            fov: 60.0,
        }
    }
}

/// Lighting setup: ambient fill plus one shadow-casting directional sun
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LightingDesc {
    /// Ambient fill intensity
    pub ambient_intensity: f32,
    /// World-space position the directional light shines from
    pub sun_position: Vec3,
    /// Directional light intensity
    pub sun_intensity: f32,
    /// Shadow map resolution (texels per side)
    pub shadow_map_size: u32,
    /// Half-extent of the area the shadow camera covers
    pub shadow_extent: f32,
}

impl Default for LightingDesc {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.5,
            sun_position: Vec3::new(-30.0, 40.0, 20.0),
            sun_intensity: 1.1,
            shadow_map_size: 2048,
            shadow_extent: 60.0,
        }
    }
}

/// Distance fog blending scenery into the horizon
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FogDesc {
    /// Fog color as RGB, normally matched to the sky
    pub color: [f32; 3],
    /// Distance where fog starts
    pub near: f32,
    /// Distance of full fog
    pub far: f32,
}

impl Default for FogDesc {
    fn default() -> Self {
        Self {
            color: [0.95, 0.76, 0.58],
            near: 30.0,
            far: 90.0,
        }
    }
}

/// The complete fixed environment for a scene
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Environment {
    pub camera: CameraDesc,
    pub lighting: LightingDesc,
    pub fog: FogDesc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let env = Environment::default();
        assert!(env.camera.fov > 0.0 && env.camera.fov < 180.0);
        assert!(env.lighting.shadow_map_size.is_power_of_two());
        assert!(env.fog.near < env.fog.far);
    }
}
