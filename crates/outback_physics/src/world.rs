//! Motion world: all per-tick animated state
//!
//! Owns every scroller and the hopping character's jump state, and steps
//! them together once per frame. The scene layer links entities to this
//! state through [`ScrollerKey`]s and syncs transforms after each step.

use crate::jump::JumpSimulator;
use crate::scroller::{ParallaxScroller, ScrollerKey};
use crate::timer::JumpTimer;
use slotmap::SlotMap;

/// The hopping character's motion state: jump physics plus its trigger
///
/// Dropping the hopper (scene teardown) also drops the timer, so the
/// periodic trigger can never outlive the entity that owns it.
#[derive(Clone, Debug)]
pub struct Hopper {
    /// Jump state machine
    pub sim: JumpSimulator,
    /// Periodic auto-jump trigger
    pub timer: JumpTimer,
}

impl Hopper {
    /// Create a hopper from its jump simulator and trigger timer
    pub fn new(sim: JumpSimulator, timer: JumpTimer) -> Self {
        Self { sim, timer }
    }

    /// Advance one frame: fire the trigger if due, then integrate
    ///
    /// A firing that lands while airborne is dropped by the simulator's
    /// re-entrancy guard.
    pub fn step(&mut self, dt: f32) {
        if self.timer.tick(dt) {
            self.sim.trigger();
        }
        self.sim.step(dt);
    }
}

/// Container for all animated motion state in the scene
pub struct MotionWorld {
    /// All scrollers (using generational keys)
    scrollers: SlotMap<ScrollerKey, ParallaxScroller>,
    /// The single hopping character, if the scene has one
    hopper: Option<Hopper>,
}

impl MotionWorld {
    /// Create an empty motion world
    pub fn new() -> Self {
        Self {
            scrollers: SlotMap::with_key(),
            hopper: None,
        }
    }

    /// Add a scroller and return its key
    pub fn add_scroller(&mut self, scroller: ParallaxScroller) -> ScrollerKey {
        self.scrollers.insert(scroller)
    }

    /// Remove a scroller
    pub fn remove_scroller(&mut self, key: ScrollerKey) -> Option<ParallaxScroller> {
        self.scrollers.remove(key)
    }

    /// Get a scroller by key
    pub fn scroller(&self, key: ScrollerKey) -> Option<&ParallaxScroller> {
        self.scrollers.get(key)
    }

    /// Get a mutable scroller by key
    pub fn scroller_mut(&mut self, key: ScrollerKey) -> Option<&mut ParallaxScroller> {
        self.scrollers.get_mut(key)
    }

    /// Current offset of the scroller, if the key is live
    pub fn scroll_offset(&self, key: ScrollerKey) -> Option<f32> {
        self.scrollers.get(key).map(|s| s.offset_x())
    }

    /// Number of scrollers
    pub fn scroller_count(&self) -> usize {
        self.scrollers.len()
    }

    /// Install the hopping character's motion state
    pub fn set_hopper(&mut self, hopper: Hopper) {
        self.hopper = Some(hopper);
    }

    /// The hopper, if installed
    pub fn hopper(&self) -> Option<&Hopper> {
        self.hopper.as_ref()
    }

    /// Mutable access to the hopper
    pub fn hopper_mut(&mut self) -> Option<&mut Hopper> {
        self.hopper.as_mut()
    }

    /// Tear down the hopper, cancelling its trigger timer
    pub fn clear_hopper(&mut self) -> Option<Hopper> {
        let mut hopper = self.hopper.take();
        if let Some(ref mut h) = hopper {
            h.timer.cancel();
        }
        hopper
    }

    /// Step every scroller and the hopper forward by `dt` seconds
    ///
    /// Entities' states are disjoint, so the order within a frame does
    /// not matter.
    pub fn step(&mut self, dt: f32) {
        for (_key, scroller) in &mut self.scrollers {
            scroller.tick(dt);
        }
        if let Some(ref mut hopper) = self.hopper {
            hopper.step(dt);
        }
    }
}

impl Default for MotionWorld {
    fn default() -> Self {
        Self::new()
    }
}
