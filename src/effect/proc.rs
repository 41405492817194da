//! Proc trigger: a condition-plus-handler unit wiring a chance model (flat
//! probability or rate-per-minute) and an internal cooldown to a combat
//! event subscription.
//!
//! Gating order per event: enable flag, callback mask, proc mask, outcome,
//! damage requirement, extra predicate, internal cooldown, then the chance
//! roll. The roll happens only once cooldown-gating passes, so no two
//! handler invocations occur closer together than the configured cooldown
//! and a blocked event consumes no chance state. Every failed gate is a
//! silent no-op.

use std::cell::Cell;
use std::rc::Rc;

use crate::sim::character::Character;
use crate::sim::cooldown::{shared_cooldown, SharedCooldown};
use crate::sim::events::{Outcome, ProcEvent};
use crate::sim::Sim;

/// Chance source: exactly one model is effective per trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProcChance {
    /// Flat per-event probability in `[0, 1]`.
    Flat(f64),
    /// Procs per minute, converted per event from the character's current
    /// attack cadence so speed changes mid-fight adjust the effective rate.
    Rppm(f64),
}

#[derive(Debug, Clone)]
pub struct ProcTriggerConfig {
    pub name: String,
    /// Bit mask of qualifying callback categories ([crate::sim::callback]).
    pub callback: u8,
    /// Required proc-mask bits of the causing action; 0 accepts any.
    pub proc_mask: u32,
    /// Required outcome; None accepts any.
    pub outcome: Option<Outcome>,
    pub chance: ProcChance,
    /// Internal cooldown in seconds; 0 allows back-to-back fires.
    pub icd: f64,
    /// Ignore events that dealt no damage.
    pub require_damage_dealt: bool,
}

impl ProcTriggerConfig {
    pub fn new(name: impl Into<String>, callback: u8, chance: ProcChance) -> Self {
        Self {
            name: name.into(),
            callback,
            proc_mask: 0,
            outcome: Some(Outcome::Landed),
            chance,
            icd: 0.0,
            require_damage_dealt: false,
        }
    }

    pub fn proc_mask(mut self, mask: u32) -> Self {
        self.proc_mask = mask;
        self
    }

    pub fn outcome(mut self, outcome: Option<Outcome>) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn icd(mut self, seconds: f64) -> Self {
        self.icd = seconds;
        self
    }

    pub fn require_damage_dealt(mut self) -> Self {
        self.require_damage_dealt = true;
        self
    }
}

pub type ProcHandler = Box<dyn FnMut(&mut Sim, &Character, &ProcEvent)>;
pub type ProcPredicate = Box<dyn Fn(&Sim, &Character, &ProcEvent) -> bool>;

pub struct ProcTrigger {
    config: ProcTriggerConfig,
    extra_condition: Option<ProcPredicate>,
    handler: ProcHandler,
    icd: SharedCooldown,
    enabled: Rc<Cell<bool>>,
}

impl ProcTrigger {
    pub fn new(
        config: ProcTriggerConfig,
        handler: impl FnMut(&mut Sim, &Character, &ProcEvent) + 'static,
    ) -> Self {
        let icd = shared_cooldown(config.icd);
        Self {
            config,
            extra_condition: None,
            handler: Box::new(handler),
            icd,
            enabled: Rc::new(Cell::new(true)),
        }
    }

    pub fn with_condition(
        mut self,
        condition: impl Fn(&Sim, &Character, &ProcEvent) -> bool + 'static,
    ) -> Self {
        self.extra_condition = Some(Box::new(condition));
        self
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Handle to the internal cooldown, for sharing with the granted buff.
    pub fn icd(&self) -> SharedCooldown {
        Rc::clone(&self.icd)
    }

    /// Equip-state gate; registered with the character's item swap.
    pub fn enable_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.enabled)
    }

    fn chance_for(&self, character: &Character) -> f64 {
        match self.config.chance {
            ProcChance::Flat(p) => p,
            ProcChance::Rppm(ppm) => character.rppm_chance(ppm),
        }
    }

    /// Offer one combat event; invokes the handler synchronously when every
    /// gate passes and the chance roll succeeds. Returns whether it fired.
    pub fn offer(&mut self, sim: &mut Sim, character: &Character, event: &ProcEvent) -> bool {
        if !self.enabled.get() {
            return false;
        }
        if self.config.callback & event.callback == 0 {
            return false;
        }
        if self.config.proc_mask != 0 && self.config.proc_mask & event.proc_mask == 0 {
            return false;
        }
        if let Some(required) = self.config.outcome {
            if event.outcome != required {
                return false;
            }
        }
        if self.config.require_damage_dealt && event.damage <= 0.0 {
            return false;
        }
        if let Some(condition) = &self.extra_condition {
            if !condition(sim, character, event) {
                return false;
            }
        }
        if !self.icd.borrow().is_ready(sim.now) {
            return false;
        }

        let chance = self.chance_for(character);
        if !sim.proc_roll(&self.config.name, chance) {
            return false;
        }

        self.icd.borrow_mut().start(sim.now);
        sim.trace.record_proc(&self.config.name, sim.now);
        (self.handler)(sim, character, event);
        true
    }
}

impl std::fmt::Debug for ProcTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcTrigger")
            .field("config", &self.config)
            .field("has_condition", &self.extra_condition.is_some())
            .finish_non_exhaustive()
    }
}
