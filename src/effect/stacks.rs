//! Stacking buff controller: a buff whose magnitude is stack count times a
//! per-stack amount, with the count moving on a fixed cadence.
//!
//! Two variants. Decaying: activation grants the initial count and each
//! cadence tick removes one stack; the buff ends when the count reaches
//! zero. Accumulating: stacks rise one per tick up to the maximum while an
//! independent whole-buff duration governs when everything is lost at once.
//! Stack count is a pure function of (activation time, now), so the host's
//! timer wheel only ever reads it; there is no tick callback to schedule.

use std::cell::Cell;
use std::rc::Rc;

use crate::sim::character::{Stat, StatBonusSource};
use crate::sim::cooldown::SharedCooldown;
use crate::sim::SimTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum StackMode {
    Decay,
    Accumulate,
}

#[derive(Debug, Clone)]
pub struct StackingBuffConfig {
    pub label: String,
    pub aura_id: u32,
    pub stat: Stat,
    pub bonus_per_stack: f64,
    pub max_stacks: u32,
    /// Cadence between stack changes, in seconds.
    pub time_per_stack: f64,
    /// Whole-buff duration; governs the end of an accumulating buff. A
    /// decaying buff ends when its count reaches zero instead.
    pub duration: f64,
    pub mode: StackMode,
    /// Grant the first stack change at activation time instead of after one
    /// full cadence interval.
    pub tick_immediately: bool,
}

#[derive(Debug)]
pub struct StackingBuff {
    config: StackingBuffConfig,
    activated_at: Option<SimTime>,
    icd: Option<SharedCooldown>,
    enabled: Rc<Cell<bool>>,
}

impl StackingBuff {
    pub fn new(config: StackingBuffConfig) -> Self {
        Self {
            config,
            activated_at: None,
            icd: None,
            enabled: Rc::new(Cell::new(true)),
        }
    }

    pub fn config(&self) -> &StackingBuffConfig {
        &self.config
    }

    /// Adopt the shared gate of the trigger that grants this buff, so the
    /// grant chance and the buff's own reapplication share one cooldown.
    pub fn share_icd(&mut self, icd: SharedCooldown) {
        self.icd = Some(icd);
    }

    pub fn icd(&self) -> Option<&SharedCooldown> {
        self.icd.as_ref()
    }

    pub fn enable_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.enabled)
    }

    /// Refresh semantics: restarts stack progression from the configured
    /// initial state; never stacks a second independent instance.
    pub fn activate(&mut self, now: SimTime) {
        if self.enabled.get() {
            self.activated_at = Some(now);
        }
    }

    pub fn deactivate(&mut self) {
        self.activated_at = None;
    }

    fn initial_stacks(&self) -> u32 {
        match self.config.mode {
            StackMode::Decay => {
                if self.config.tick_immediately {
                    1
                } else {
                    self.config.max_stacks
                }
            }
            StackMode::Accumulate => u32::from(self.config.tick_immediately),
        }
    }

    /// Completed cadence ticks at `elapsed` seconds after activation.
    fn ticks(&self, elapsed: f64) -> u32 {
        if self.config.time_per_stack <= 0.0 {
            return 0;
        }
        (elapsed / self.config.time_per_stack) as u32
    }

    pub fn stacks(&self, now: SimTime) -> u32 {
        if !self.enabled.get() {
            return 0;
        }
        let Some(at) = self.activated_at else {
            return 0;
        };
        let elapsed = now - at;
        if elapsed < 0.0 {
            return 0;
        }
        match self.config.mode {
            StackMode::Decay => self.initial_stacks().saturating_sub(self.ticks(elapsed)),
            StackMode::Accumulate => {
                if elapsed >= self.config.duration {
                    0
                } else {
                    (self.initial_stacks() + self.ticks(elapsed)).min(self.config.max_stacks)
                }
            }
        }
    }

    /// Active while stacks remain (decay) or the duration runs
    /// (accumulate; a zero-stack ramp-up phase still counts as active).
    pub fn is_active(&self, now: SimTime) -> bool {
        if !self.enabled.get() {
            return false;
        }
        let Some(at) = self.activated_at else {
            return false;
        };
        let elapsed = now - at;
        if elapsed < 0.0 {
            return false;
        }
        match self.config.mode {
            StackMode::Decay => self.stacks(now) > 0,
            StackMode::Accumulate => elapsed < self.config.duration,
        }
    }

    /// Total magnitude at `now`: stack count times the per-stack amount.
    pub fn magnitude(&self, now: SimTime) -> f64 {
        self.stacks(now) as f64 * self.config.bonus_per_stack
    }
}

impl StatBonusSource for StackingBuff {
    fn stat_bonus(&self, stat: Stat, now: SimTime) -> f64 {
        if stat == self.config.stat {
            self.magnitude(now)
        } else {
            0.0
        }
    }
}
