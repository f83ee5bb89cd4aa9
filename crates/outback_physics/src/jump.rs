//! Jump physics for the hopping character
//!
//! A two-state machine (grounded / airborne) with gravity, vertical
//! velocity, and a ground clamp. Integration is semi-implicit Euler per
//! frame: velocity first, then position. The trajectory is therefore
//! frame-rate dependent; callers that need an exact replay must feed the
//! same dt sequence.

use serde::{Serialize, Deserialize};

/// Default upward velocity applied when a jump starts
pub const DEFAULT_JUMP_FORCE: f32 = 8.0;

/// Default gravity acceleration (negative = downward)
pub const DEFAULT_GRAVITY: f32 = -15.0;

/// Constants for the jump simulation
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct JumpConfig {
    /// Gravity acceleration (negative = downward)
    pub gravity: f32,
    /// Upward velocity applied when a jump starts
    pub jump_force: f32,
    /// Baseline Y the character rests on and is clamped to
    pub ground_level: f32,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            jump_force: DEFAULT_JUMP_FORCE,
            ground_level: 0.0,
        }
    }
}

impl JumpConfig {
    /// Create a config with the given gravity and jump force, ground at 0
    pub fn new(gravity: f32, jump_force: f32) -> Self {
        Self {
            gravity,
            jump_force,
            ground_level: 0.0,
        }
    }

    /// Set the ground level
    pub fn with_ground_level(mut self, ground_level: f32) -> Self {
        self.ground_level = ground_level;
        self
    }
}

/// Vertical jump state for the character
///
/// Invariants: `position_y >= ground_level` at all times; while grounded,
/// `position_y == ground_level` and `velocity_y == 0`.
#[derive(Clone, Debug)]
pub struct JumpSimulator {
    config: JumpConfig,
    jumping: bool,
    velocity_y: f32,
    position_y: f32,
}

impl JumpSimulator {
    /// Create a simulator resting on the ground
    pub fn new(config: JumpConfig) -> Self {
        Self {
            jumping: false,
            velocity_y: 0.0,
            position_y: config.ground_level,
            config,
        }
    }

    /// Start a jump if grounded
    ///
    /// A trigger that arrives while airborne is dropped, not queued.
    /// Returns whether a jump actually started.
    pub fn trigger(&mut self) -> bool {
        if self.jumping {
            return false;
        }
        self.jumping = true;
        self.velocity_y = self.config.jump_force;
        true
    }

    /// Integrate one frame of `dt` seconds
    ///
    /// While airborne: apply gravity to velocity, integrate velocity into
    /// position, and land within the same tick once the position comes
    /// back down to the ground. Grounded steps are no-ops.
    pub fn step(&mut self, dt: f32) {
        if !self.jumping {
            return;
        }

        self.velocity_y += self.config.gravity * dt;
        self.position_y += self.velocity_y * dt;

        // The velocity check keeps a freshly-triggered jump (still at
        // ground level, moving up) from landing on a zero-dt frame.
        if self.position_y <= self.config.ground_level && self.velocity_y <= 0.0 {
            self.position_y = self.config.ground_level;
            self.velocity_y = 0.0;
            self.jumping = false;
        }
    }

    /// Whether the character is currently airborne
    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    /// Current height
    #[inline]
    pub fn position_y(&self) -> f32 {
        self.position_y
    }

    /// Current vertical velocity (zero while grounded)
    #[inline]
    pub fn velocity_y(&self) -> f32 {
        self.velocity_y
    }

    /// The simulation constants
    #[inline]
    pub fn config(&self) -> &JumpConfig {
        &self.config
    }

    /// Height above the ground level
    #[inline]
    pub fn height_above_ground(&self) -> f32 {
        self.position_y - self.config.ground_level
    }
}
