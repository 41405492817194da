//! Refreshable timed stat aura: a fixed stat amount for a fixed duration,
//! re-activation extends the window rather than stacking a second instance.

use std::cell::Cell;
use std::rc::Rc;

use crate::sim::character::{Stat, StatBonusSource};
use crate::sim::cooldown::SharedCooldown;
use crate::sim::SimTime;

#[derive(Debug)]
pub struct TimedStatBuff {
    pub label: String,
    pub aura_id: u32,
    pub stat: Stat,
    pub amount: f64,
    pub duration: f64,
    active_until: Option<SimTime>,
    icd: Option<SharedCooldown>,
    enabled: Rc<Cell<bool>>,
}

impl TimedStatBuff {
    pub fn new(label: impl Into<String>, aura_id: u32, stat: Stat, amount: f64, duration: f64) -> Self {
        Self {
            label: label.into(),
            aura_id,
            stat,
            amount,
            duration,
            active_until: None,
            icd: None,
            enabled: Rc::new(Cell::new(true)),
        }
    }

    /// Adopt the shared gate of the trigger that grants this buff.
    pub fn share_icd(&mut self, icd: SharedCooldown) {
        self.icd = Some(icd);
    }

    pub fn icd(&self) -> Option<&SharedCooldown> {
        self.icd.as_ref()
    }

    pub fn enable_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.enabled)
    }

    /// Refresh semantics: restarts the full duration.
    pub fn activate(&mut self, now: SimTime) {
        if self.enabled.get() {
            self.active_until = Some(now + self.duration);
        }
    }

    pub fn deactivate(&mut self) {
        self.active_until = None;
    }

    pub fn is_active(&self, now: SimTime) -> bool {
        self.enabled.get() && self.active_until.is_some_and(|until| now < until)
    }

    pub fn remaining(&self, now: SimTime) -> f64 {
        self.active_until.map_or(0.0, |until| (until - now).max(0.0))
    }
}

impl StatBonusSource for TimedStatBuff {
    fn stat_bonus(&self, stat: Stat, now: SimTime) -> f64 {
        if stat == self.stat && self.is_active(now) {
            self.amount
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_grants_bonus_for_duration() {
        let mut buff = TimedStatBuff::new("Outrage", 146245, Stat::Strength, 11761.0, 10.0);
        assert_eq!(buff.stat_bonus(Stat::Strength, 0.0), 0.0);

        buff.activate(0.0);
        assert_eq!(buff.stat_bonus(Stat::Strength, 5.0), 11761.0);
        assert_eq!(buff.stat_bonus(Stat::Agility, 5.0), 0.0);
        assert_eq!(buff.stat_bonus(Stat::Strength, 10.0), 0.0);
    }

    #[test]
    fn reactivation_refreshes_instead_of_stacking() {
        let mut buff = TimedStatBuff::new("Winds of Time", 148447, Stat::HasteRating, 3647.0, 20.0);
        buff.activate(0.0);
        buff.activate(15.0);
        assert_eq!(buff.stat_bonus(Stat::HasteRating, 30.0), 3647.0);
        assert_eq!(buff.remaining(30.0), 5.0);
        assert!(!buff.is_active(35.0));
    }

    #[test]
    fn disabled_buff_neither_activates_nor_grants() {
        let mut buff = TimedStatBuff::new("Dextrous", 146308, Stat::Agility, 14039.0, 20.0);
        buff.enable_flag().set(false);
        buff.activate(0.0);
        assert_eq!(buff.stat_bonus(Stat::Agility, 1.0), 0.0);
    }
}
