//! Internal-cooldown (ICD) gate shared between a proc trigger and the buff
//! it grants. A single `Cooldown` value behind `Rc<RefCell<_>>` is the one
//! shared gate: the trigger starts it when it fires, and anything else
//! holding the handle observes the same readiness.

use std::cell::RefCell;
use std::rc::Rc;

use crate::sim::SimTime;

/// Minimum time between successive activations, independent of how often the
/// trigger condition is evaluated. Zero duration means no gating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cooldown {
    pub duration: f64,
    ready_at: SimTime,
}

impl Cooldown {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            ready_at: 0.0,
        }
    }

    pub fn is_ready(&self, now: SimTime) -> bool {
        self.duration <= 0.0 || now >= self.ready_at
    }

    pub fn start(&mut self, now: SimTime) {
        self.ready_at = now + self.duration;
    }

    pub fn time_to_ready(&self, now: SimTime) -> f64 {
        (self.ready_at - now).max(0.0)
    }

    pub fn reset(&mut self) {
        self.ready_at = 0.0;
    }
}

/// The shared-gate handle. Owned by neither the trigger nor the buff
/// exclusively; both reference the same state.
pub type SharedCooldown = Rc<RefCell<Cooldown>>;

pub fn shared_cooldown(duration: f64) -> SharedCooldown {
    Rc::new(RefCell::new(Cooldown::new(duration)))
}
