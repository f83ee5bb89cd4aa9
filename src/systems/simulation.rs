//! Demo simulation system
//!
//! Manages the frame loop simulation including:
//! - Delta time calculation
//! - World stepping
//! - Frame statistics for periodic logging

use outback_core::World;
use std::time::Instant;

/// Result of a simulation update
pub struct SimulationResult {
    /// Delta time actually applied this frame, after capping
    pub dt: f32,
    /// Frames simulated since construction
    pub frame: u64,
}

/// Manages the demo simulation loop
pub struct SimulationSystem {
    last_frame: Instant,
    frame: u64,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            frame: 0,
        }
    }

    /// Run one simulation frame against wall-clock time
    ///
    /// The delta is capped so a pause (debugger, suspended laptop) does
    /// not turn into one giant physics step that teleports the scenery.
    pub fn update(&mut self, world: &mut World) -> SimulationResult {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        let dt = raw_dt.min(0.25);
        self.last_frame = now;

        world.update(dt);
        self.frame += 1;

        SimulationResult {
            dt,
            frame: self.frame,
        }
    }

    /// Frames simulated so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Run one frame with a fixed timestep, ignoring wall-clock time
    ///
    /// Used by the demos and by anything that wants a deterministic run.
    pub fn update_fixed(&mut self, world: &mut World, dt: f32) -> SimulationResult {
        self.last_frame = Instant::now();
        world.update(dt);
        self.frame += 1;

        SimulationResult {
            dt,
            frame: self.frame,
        }
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}
