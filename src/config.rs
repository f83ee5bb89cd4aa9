//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`OUTBACK_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Demo run configuration
    #[serde(default)]
    pub demo: DemoConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Jump physics configuration
    #[serde(default)]
    pub jump: JumpConfig,
    /// Hill band configuration
    #[serde(default = "BandConfig::hills")]
    pub hills: BandConfig,
    /// Cloud band configuration
    #[serde(default = "BandConfig::clouds")]
    pub clouds: BandConfig,
    /// Ground configuration
    #[serde(default)]
    pub ground: GroundConfig,
    /// Sky and sun configuration
    #[serde(default)]
    pub sky: SkyConfig,
    /// Lighting configuration
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Fog configuration
    #[serde(default)]
    pub fog: FogConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            demo: DemoConfig::default(),
            camera: CameraConfig::default(),
            jump: JumpConfig::default(),
            hills: BandConfig::hills(),
            clouds: BandConfig::clouds(),
            ground: GroundConfig::default(),
            sky: SkyConfig::default(),
            lighting: LightingConfig::default(),
            fog: FogConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`OUTBACK_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // OUTBACK_DEMO__TARGET_FPS=30 -> demo.target_fps = 30
        figment = figment.merge(Env::prefixed("OUTBACK_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Demo run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// How long the demo runs in seconds (0 = forever)
    pub duration_secs: f32,
    /// Frame pacing target
    pub target_fps: u32,
    /// Layout seed; omit for a different scene every run
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            duration_secs: 30.0,
            target_fps: 60,
            seed: None,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Camera position [x, y, z]
    pub position: [f32; 3],
    /// Point the camera looks at [x, y, z]
    pub look_at: [f32; 3],
    /// Field of view in degrees
    pub fov: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 3.0, 12.0],
            look_at: [0.0, 2.0, 0.0],
            fov: 60.0,
        }
    }
}

/// Jump physics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JumpConfig {
    /// Gravity (negative = downward)
    pub gravity: f32,
    /// Upward launch velocity
    pub force: f32,
    /// Ground level the character rests at
    pub ground_level: f32,
    /// Seconds between automatic jumps
    pub interval: f32,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            gravity: -15.0,
            force: 8.0,
            ground_level: 0.0,
            interval: 1.8,
        }
    }
}

/// One scrolling band of generated features (hills or clouds)
///
/// The band wraps after scrolling exactly one `spacing`, so each feature
/// lands on the grid slot of its neighbor and the loop stays seamless.
/// There is deliberately no separate wrap distance to misconfigure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandConfig {
    /// Number of features in the band
    pub count: usize,
    /// Horizontal spacing between features; also the wrap distance
    pub spacing: f32,
    /// X position of the first feature
    pub start_x: f32,
    /// Scroll speed (units per second, leftward)
    pub speed: f32,
    /// Depth jitter range [min, max]
    pub z_range: [f32; 2],
    /// Height jitter range [min, max]
    pub height_range: [f32; 2],
    /// Width jitter range [min, max]
    pub width_range: [f32; 2],
}

impl BandConfig {
    /// Defaults for the hill band
    pub fn hills() -> Self {
        Self {
            count: 12,
            spacing: 9.0,
            start_x: -40.0,
            speed: 5.0,
            z_range: [-35.0, -18.0],
            height_range: [2.0, 6.0],
            width_range: [6.0, 14.0],
        }
    }

    /// Defaults for the cloud band
    pub fn clouds() -> Self {
        Self {
            count: 8,
            spacing: 14.0,
            start_x: -45.0,
            speed: 1.5,
            z_range: [-45.0, -25.0],
            height_range: [9.0, 14.0],
            width_range: [4.0, 8.0],
        }
    }
}

/// Ground configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundConfig {
    /// Plane width (X extent); must keep the view covered across a wrap
    pub width: f32,
    /// Plane depth (Z extent)
    pub depth: f32,
    /// Scroll speed (units per second, leftward)
    pub speed: f32,
    /// Span of one repeating ground tile; also the wrap distance
    pub tile: f32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            depth: 120.0,
            speed: 5.0,
            tile: 40.0,
        }
    }
}

/// Sky and sun configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkyConfig {
    /// Sky dome radius
    pub dome_radius: f32,
    /// Sun disc position [x, y, z]
    pub sun_position: [f32; 3],
    /// Sun disc radius
    pub sun_radius: f32,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            dome_radius: 100.0,
            sun_position: [-25.0, 30.0, -60.0],
            sun_radius: 4.0,
        }
    }
}

/// Lighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightingConfig {
    /// Ambient fill intensity
    pub ambient_intensity: f32,
    /// Directional light intensity
    pub sun_intensity: f32,
    /// Shadow map resolution (texels per side)
    pub shadow_map_size: u32,
    /// Half-extent of the area the shadow camera covers
    pub shadow_extent: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.5,
            sun_intensity: 1.1,
            shadow_map_size: 2048,
            shadow_extent: 60.0,
        }
    }
}

/// Fog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FogConfig {
    /// Fog color [r, g, b], normally matched to the sky
    pub color: [f32; 3],
    /// Distance where fog starts
    pub near: f32,
    /// Distance of full fog
    pub far: f32,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            color: [0.95, 0.76, 0.58],
            near: 30.0,
            far: 90.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Seconds between frame-stat log lines (0 = never)
    pub log_interval_secs: f32,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_interval_secs: 5.0,
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.demo.target_fps, 60);
        assert_eq!(config.jump.gravity, -15.0);
        assert_eq!(config.hills.speed, 5.0);
        assert!(config.clouds.speed < config.hills.speed);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("target_fps"));
        assert!(toml.contains("gravity"));
        assert!(toml.contains("spacing"));
    }

    #[test]
    fn test_missing_config_dir_uses_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.demo.target_fps, 60);
        assert_eq!(config.jump.interval, 1.8);
    }
}
