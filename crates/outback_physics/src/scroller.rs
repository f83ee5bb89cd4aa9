//! Parallax scrolling state
//!
//! A scroller advances a group's horizontal offset each tick and wraps it
//! back when the repeating pattern has moved one full span, creating the
//! illusion of endless forward motion.

use slotmap::new_key_type;

new_key_type! {
    /// Key to a scroller in the motion world
    ///
    /// Uses generational indexing so a stale key returns None instead of
    /// pointing at a reused slot.
    pub struct ScrollerKey;
}

/// Horizontal scroll state for one repeating group
///
/// Every tick the offset is decremented by `speed * dt`. Once it falls
/// below `-wrap_threshold` it snaps back to `reset_value`. The wrap
/// distance must equal the group's tile span for the loop to be seamless.
#[derive(Clone, Debug)]
pub struct ParallaxScroller {
    /// Current horizontal offset of the group origin
    pub offset_x: f32,
    /// Scroll speed in units per second
    pub speed: f32,
    /// Offset magnitude at which the group wraps
    pub wrap_threshold: f32,
    /// Offset the group snaps back to when wrapping
    pub reset_value: f32,
}

impl ParallaxScroller {
    /// Create a scroller that wraps back to 0
    pub fn new(speed: f32, wrap_threshold: f32) -> Self {
        Self {
            offset_x: 0.0,
            speed,
            wrap_threshold,
            reset_value: 0.0,
        }
    }

    /// Set a custom reset offset
    pub fn with_reset_value(mut self, reset_value: f32) -> Self {
        self.reset_value = reset_value;
        self
    }

    /// Advance the scroll by `dt` seconds
    ///
    /// `tick(0.0)` leaves the offset unchanged.
    pub fn tick(&mut self, dt: f32) {
        self.offset_x -= self.speed * dt;
        if self.offset_x < -self.wrap_threshold {
            self.offset_x = self.reset_value;
        }
    }

    /// Current offset of the group origin
    #[inline]
    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }
}
