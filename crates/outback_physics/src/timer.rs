//! Periodic trigger timer
//!
//! Drives the automatic jumps. The timer is plain owned state advanced by
//! the frame loop: no background thread, no scheduled callback. Dropping
//! it (entity teardown) releases the periodic activity; `cancel` stops it
//! explicitly while keeping the value around.

/// Default seconds between automatic jump triggers
pub const DEFAULT_JUMP_INTERVAL: f32 = 1.8;

/// Shortest interval a timer will accept
///
/// Guards the remainder arithmetic in `tick`: a zero interval would turn
/// `elapsed % interval` into NaN and fire the timer every frame.
const MIN_INTERVAL: f32 = 1e-3;

/// Fires once every fixed interval of accumulated tick time
///
/// Firings are level-triggered per frame: if one tick spans several
/// intervals, the extra crossings are dropped, not queued.
#[derive(Clone, Debug)]
pub struct JumpTimer {
    interval: f32,
    elapsed: f32,
    cancelled: bool,
}

impl JumpTimer {
    /// Create a timer firing every `interval` seconds
    ///
    /// Non-positive intervals are clamped to a small positive minimum.
    pub fn new(interval: f32) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            elapsed: 0.0,
            cancelled: false,
        }
    }

    /// Advance by `dt` seconds; returns true when the timer fires
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.cancelled {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed < self.interval {
            return false;
        }

        self.elapsed -= self.interval;
        // A pathological dt may span several intervals; keep only the
        // remainder so at most one firing is reported per tick.
        if self.elapsed >= self.interval {
            self.elapsed %= self.interval;
        }
        true
    }

    /// Stop the timer permanently
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether the timer has been cancelled
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Seconds between firings
    #[inline]
    pub fn interval(&self) -> f32 {
        self.interval
    }
}

impl Default for JumpTimer {
    fn default() -> Self {
        Self::new(DEFAULT_JUMP_INTERVAL)
    }
}
