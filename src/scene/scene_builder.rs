//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for assembling the landscape: sky dome, sun
//! disc, scrolling ground and feature bands, and the hopping kangaroo.
//! All randomness flows through one seeded rng, so the same seed always
//! produces the same layout.

use outback_core::{
    generate_features, Entity, Hopper, JitterRanges, JumpConfig, JumpSimulator, JumpTimer,
    Material, Mesh, Model, ParallaxScroller, Transform, World,
};
use outback_math::Vec3;
use outback_render::{CameraDesc, Environment, FogDesc, LightingDesc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{AppConfig, BandConfig, GroundConfig, SkyConfig};

// Demo palette
const SKY_COLOR: [f32; 3] = [0.95, 0.76, 0.58];
const SUN_COLOR: [f32; 3] = [1.0, 0.85, 0.55];
const GROUND_COLOR: [f32; 3] = [0.78, 0.42, 0.22];
const HILL_COLOR: [f32; 3] = [0.65, 0.36, 0.25];
const CLOUD_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const CLOUD_OPACITY: f32 = 0.65;

/// Builder for assembling the landscape world
///
/// # Example
/// ```ignore
/// let world = SceneBuilder::with_seed(Some(7))
///     .add_sky(&config.sky)
///     .add_sun(&config.sky)
///     .add_ground(&config.ground)
///     .add_hills(&config.hills)
///     .add_clouds(&config.clouds)
///     .add_kangaroo(model, &config.jump)
///     .build();
/// ```
pub struct SceneBuilder {
    world: World,
    rng: StdRng,
}

impl SceneBuilder {
    /// Create a builder with an explicit or entropy-drawn seed
    ///
    /// `None` draws a fresh seed from the OS, so every run lays the
    /// hills and clouds out differently.
    pub fn with_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => {
                log::info!("Scene layout seed: {}", s);
                StdRng::seed_from_u64(s)
            }
            None => StdRng::from_entropy(),
        };
        Self {
            world: World::new(),
            rng,
        }
    }

    /// Add the sky dome (static, fog-colored)
    pub fn add_sky(mut self, sky: &SkyConfig) -> Self {
        self.world.add_entity(
            Entity::with_material(
                Mesh::Dome { radius: sky.dome_radius },
                Material::matte(SKY_COLOR[0], SKY_COLOR[1], SKY_COLOR[2]),
            )
            .with_name("sky")
            .with_tag("static"),
        );
        self
    }

    /// Add the sun disc (static, never scrolls)
    pub fn add_sun(mut self, sky: &SkyConfig) -> Self {
        self.world.add_entity(
            Entity::with_material(
                Mesh::Sphere { radius: sky.sun_radius },
                Material::matte(SUN_COLOR[0], SUN_COLOR[1], SUN_COLOR[2]),
            )
            .with_transform(Transform::from_position(Vec3::from_array(sky.sun_position)))
            .with_name("sun")
            .with_tag("static"),
        );
        self
    }

    /// Add the scrolling ground plane, wrapping every tile span
    pub fn add_ground(mut self, ground: &GroundConfig) -> Self {
        let key = self
            .world
            .motion_mut()
            .add_scroller(ParallaxScroller::new(ground.speed, ground.tile));

        self.world.add_entity(
            Entity::with_material(
                Mesh::Plane { width: ground.width, depth: ground.depth },
                Material::matte(GROUND_COLOR[0], GROUND_COLOR[1], GROUND_COLOR[2]),
            )
            .with_name("ground")
            .with_tag("ground")
            .with_scroller(key),
        );
        self
    }

    /// Add the hill band: one scroller, `band.count` squashed spheres
    ///
    /// The scroller wraps at exactly one feature spacing, so the wrap
    /// re-aligns every hill onto its neighbor's grid slot.
    pub fn add_hills(mut self, band: &BandConfig) -> Self {
        let key = self
            .world
            .motion_mut()
            .add_scroller(ParallaxScroller::new(band.speed, band.spacing));

        let features = generate_features(
            band.count,
            band.spacing,
            band.start_x,
            &jitter_from(band),
            &mut self.rng,
        );

        for (i, f) in features.iter().enumerate() {
            self.world.add_entity(
                Entity::with_material(
                    Mesh::Sphere { radius: 1.0 },
                    Material::matte(HILL_COLOR[0], HILL_COLOR[1], HILL_COLOR[2]),
                )
                .with_transform(
                    // Hills sit half-buried: scale to size, sink to ground
                    Transform::from_position(Vec3::new(f.x, 0.0, f.z))
                        .with_scale(Vec3::new(f.width, f.height, f.width * 0.8)),
                )
                .with_name(format!("hill_{}", i))
                .with_tag("hills")
                .with_scroller(key),
            );
        }
        self
    }

    /// Add the cloud band: translucent stretched spheres on a slow scroller
    ///
    /// Wraps at one feature spacing, like the hills.
    pub fn add_clouds(mut self, band: &BandConfig) -> Self {
        let key = self
            .world
            .motion_mut()
            .add_scroller(ParallaxScroller::new(band.speed, band.spacing));

        let features = generate_features(
            band.count,
            band.spacing,
            band.start_x,
            &jitter_from(band),
            &mut self.rng,
        );

        for (i, f) in features.iter().enumerate() {
            // For clouds the jittered height is altitude, not size
            let puff_height = self.rng.gen_range(0.8..=1.6);
            self.world.add_entity(
                Entity::with_material(
                    Mesh::Sphere { radius: 1.0 },
                    Material::translucent(
                        CLOUD_COLOR[0],
                        CLOUD_COLOR[1],
                        CLOUD_COLOR[2],
                        CLOUD_OPACITY,
                    ),
                )
                .with_transform(
                    Transform::from_position(Vec3::new(f.x, f.height, f.z))
                        .with_scale(Vec3::new(f.width, puff_height, f.width * 0.6)),
                )
                .with_name(format!("cloud_{}", i))
                .with_tag("clouds")
                .with_scroller(key),
            );
        }
        self
    }

    /// Add the auto-jumping kangaroo
    ///
    /// With no model the character still simulates but draws nothing, so
    /// an asset failure degrades the scene instead of aborting it.
    pub fn add_kangaroo(mut self, model: Option<Model>, jump: &crate::config::JumpConfig) -> Self {
        let mesh = match model {
            Some(m) => Mesh::Model(m),
            None => {
                log::warn!("Kangaroo model unavailable; character will not be drawn");
                Mesh::Empty
            }
        };

        let key = self.world.add_entity(
            Entity::new(mesh)
                .with_transform(Transform::from_position(Vec3::new(
                    0.0,
                    jump.ground_level,
                    2.0,
                )))
                .with_name("kangaroo")
                .with_tag("character"),
        );

        let sim = JumpSimulator::new(
            JumpConfig::new(jump.gravity, jump.force).with_ground_level(jump.ground_level),
        );
        self.world
            .set_hopper(key, Hopper::new(sim, JumpTimer::new(jump.interval)));
        self
    }

    /// Add a custom entity to the scene
    pub fn add_entity(mut self, entity: Entity) -> Self {
        self.world.add_entity(entity);
        self
    }

    /// Build the scene and return the configured World
    pub fn build(self) -> World {
        log::info!(
            "Built scene: {} entities, {} scrollers",
            self.world.entity_count(),
            self.world.motion().scroller_count()
        );
        self.world
    }
}

fn jitter_from(band: &BandConfig) -> JitterRanges {
    JitterRanges {
        z: (band.z_range[0], band.z_range[1]),
        height: (band.height_range[0], band.height_range[1]),
        width: (band.width_range[0], band.width_range[1]),
    }
}

/// Build the fixed environment descriptors from the loaded config
pub fn build_environment(config: &AppConfig) -> Environment {
    Environment {
        camera: CameraDesc {
            position: Vec3::from_array(config.camera.position),
            look_at: Vec3::from_array(config.camera.look_at),
            fov: config.camera.fov,
        },
        lighting: LightingDesc {
            ambient_intensity: config.lighting.ambient_intensity,
            sun_position: Vec3::from_array(config.sky.sun_position),
            sun_intensity: config.lighting.sun_intensity,
            shadow_map_size: config.lighting.shadow_map_size,
            shadow_extent: config.lighting.shadow_extent,
        },
        fog: FogDesc {
            color: config.fog.color,
            near: config.fog.near,
            far: config.fog.far,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JumpConfig as JumpSettings;

    #[test]
    fn test_empty_scene() {
        let world = SceneBuilder::with_seed(Some(1)).build();
        assert_eq!(world.entity_count(), 0);
        assert_eq!(world.motion().scroller_count(), 0);
    }

    #[test]
    fn test_full_scene_entity_counts() {
        let config = AppConfig::default();
        let world = SceneBuilder::with_seed(Some(7))
            .add_sky(&config.sky)
            .add_sun(&config.sky)
            .add_ground(&config.ground)
            .add_hills(&config.hills)
            .add_clouds(&config.clouds)
            .add_kangaroo(None, &config.jump)
            .build();

        // sky + sun + ground + hills + clouds + kangaroo
        let expected = 3 + config.hills.count + config.clouds.count + 1;
        assert_eq!(world.entity_count(), expected);

        // ground, hills, clouds each get their own scroller
        assert_eq!(world.motion().scroller_count(), 3);

        // The kangaroo drives the hopper
        assert!(world.hopper_entity().is_some());
        assert!(world.motion().hopper().is_some());
    }

    #[test]
    fn test_sun_and_sky_never_scroll() {
        let config = AppConfig::default();
        let world = SceneBuilder::with_seed(Some(7))
            .add_sky(&config.sky)
            .add_sun(&config.sky)
            .add_ground(&config.ground)
            .build();

        assert!(world.get_by_name("sky").unwrap().1.scroller.is_none());
        assert!(world.get_by_name("sun").unwrap().1.scroller.is_none());
        assert!(world.get_by_name("ground").unwrap().1.scroller.is_some());
    }

    #[test]
    fn test_hills_share_one_scroller() {
        let config = AppConfig::default();
        let world = SceneBuilder::with_seed(Some(3))
            .add_hills(&config.hills)
            .build();

        let keys: Vec<_> = world
            .iter()
            .filter(|e| e.has_tag("hills"))
            .map(|e| e.scroller.expect("hill must scroll"))
            .collect();
        assert_eq!(keys.len(), config.hills.count);
        assert!(keys.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_scrollers_wrap_at_tile_span() {
        let config = AppConfig::default();
        let world = SceneBuilder::with_seed(Some(5))
            .add_ground(&config.ground)
            .add_hills(&config.hills)
            .add_clouds(&config.clouds)
            .build();

        let wrap_of = |e: &Entity| {
            world
                .motion()
                .scroller(e.scroller.expect("entity must scroll"))
                .unwrap()
                .wrap_threshold
        };

        let (_, ground) = world.get_by_name("ground").unwrap();
        assert_eq!(wrap_of(ground), config.ground.tile);
        for hill in world.iter().filter(|e| e.has_tag("hills")) {
            assert_eq!(wrap_of(hill), config.hills.spacing);
        }
        for cloud in world.iter().filter(|e| e.has_tag("clouds")) {
            assert_eq!(wrap_of(cloud), config.clouds.spacing);
        }
    }

    #[test]
    fn test_wrap_realigns_hills_to_grid() {
        // Scrolling at 0.5 units per tick (exact in f32), the hill band
        // reaches one full spacing (9.0) at tick 18 and wraps on tick 19.
        // A seamless wrap means each hill lands exactly on the pre-wrap
        // position of its right-hand neighbor.
        let config = AppConfig::default();
        assert_eq!(config.hills.spacing, 9.0);
        let mut world = SceneBuilder::with_seed(Some(11))
            .add_hills(&config.hills)
            .build();

        let hill_xs = |w: &World| -> Vec<f32> {
            w.iter()
                .filter(|e| e.has_tag("hills"))
                .map(|e| e.transform.position.x)
                .collect()
        };

        for _ in 0..18 {
            world.update(0.1);
        }
        let before = hill_xs(&world);

        world.update(0.1); // the wrap tick
        let after = hill_xs(&world);

        for i in 0..before.len() - 1 {
            assert!(
                (after[i] - before[i + 1]).abs() < 1e-4,
                "hill {} should re-align onto its neighbor's slot: {} vs {}",
                i,
                after[i],
                before[i + 1]
            );
        }
    }

    #[test]
    fn test_clouds_are_translucent() {
        let config = AppConfig::default();
        let world = SceneBuilder::with_seed(Some(3))
            .add_clouds(&config.clouds)
            .build();

        for cloud in world.iter().filter(|e| e.has_tag("clouds")) {
            assert!(cloud.material.transparent);
            assert!(cloud.material.opacity < 1.0);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = AppConfig::default();
        let build = || {
            SceneBuilder::with_seed(Some(42))
                .add_hills(&config.hills)
                .add_clouds(&config.clouds)
                .build()
        };
        let a = build();
        let b = build();

        let positions = |w: &World| -> Vec<[f32; 3]> {
            w.iter().map(|e| e.anchor.to_array()).collect()
        };
        assert_eq!(positions(&a), positions(&b));
    }

    #[test]
    fn test_kangaroo_without_model_is_empty_mesh() {
        let world = SceneBuilder::with_seed(Some(1))
            .add_kangaroo(None, &JumpSettings::default())
            .build();

        let (_, roo) = world.get_by_name("kangaroo").unwrap();
        assert!(matches!(roo.mesh, Mesh::Empty));
        // The simulation still runs
        assert!(world.motion().hopper().is_some());
    }

    #[test]
    fn test_environment_from_config() {
        let config = AppConfig::default();
        let env = build_environment(&config);
        assert_eq!(env.camera.fov, config.camera.fov);
        assert_eq!(env.fog.color, config.fog.color);
        assert_eq!(
            env.lighting.sun_position.to_array(),
            config.sky.sun_position
        );
    }
}
