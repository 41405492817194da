//! Combat-event view delivered to proc triggers. The host engine fills one
//! `ProcEvent` per qualifying combat callback; triggers filter on the
//! callback kind, proc-mask bits, and landed/missed outcome.

use serde::Serialize;

use crate::sim::roster::TargetId;

/// Combat-callback categories a trigger can subscribe to (bit mask).
pub mod callback {
    pub const SPELL_HIT_DEALT: u8 = 1 << 0;
    pub const PERIODIC_DAMAGE_DEALT: u8 = 1 << 1;
}

/// Proc-mask bits describing what kind of action produced an event.
pub mod proc_mask {
    pub const EMPTY: u32 = 0;
    pub const MELEE: u32 = 1 << 0;
    pub const MELEE_PROC: u32 = 1 << 1;
    pub const RANGED: u32 = 1 << 2;
    pub const RANGED_PROC: u32 = 1 << 3;
    pub const SPELL: u32 = 1 << 4;
    pub const SPELL_PROC: u32 = 1 << 5;

    pub const DIRECT: u32 = MELEE | RANGED | SPELL;
    pub const PROC: u32 = MELEE_PROC | RANGED_PROC | SPELL_PROC;
    pub const MELEE_OR_MELEE_PROC: u32 = MELEE | MELEE_PROC;
    pub const RANGED_OR_RANGED_PROC: u32 = RANGED | RANGED_PROC;
    pub const SPELL_OR_SPELL_PROC: u32 = SPELL | SPELL_PROC;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Landed,
    Missed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpellSchool {
    Physical,
    Arcane,
    Fire,
    Frost,
    Frostfire,
    Nature,
    Shadow,
    Holy,
}

/// Spell identity with a disambiguating tag, used where two actions share a
/// spell id (e.g. a periodic tick of a direct spell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionId {
    pub spell_id: u32,
    pub tag: u8,
}

impl ActionId {
    pub const fn new(spell_id: u32) -> Self {
        Self { spell_id, tag: 0 }
    }

    pub const fn with_tag(spell_id: u32, tag: u8) -> Self {
        Self { spell_id, tag }
    }
}

/// One qualifying combat callback as seen by proc triggers.
#[derive(Debug, Clone, Copy)]
pub struct ProcEvent {
    /// Which callback category fired (single bit from [callback]).
    pub callback: u8,
    /// Proc-mask bits of the causing action.
    pub proc_mask: u32,
    pub outcome: Outcome,
    /// Damage dealt by the causing action; 0 for non-damaging events.
    pub damage: f64,
    pub target: TargetId,
    pub school: SpellSchool,
    pub action: ActionId,
}

impl ProcEvent {
    /// A landed direct melee hit, the most common qualifying event.
    pub fn melee_hit(target: TargetId, damage: f64) -> Self {
        Self {
            callback: callback::SPELL_HIT_DEALT,
            proc_mask: proc_mask::MELEE,
            outcome: Outcome::Landed,
            damage,
            target,
            school: SpellSchool::Physical,
            action: ActionId::new(0),
        }
    }

    /// A landed direct spell hit.
    pub fn spell_hit(target: TargetId, damage: f64, school: SpellSchool) -> Self {
        Self {
            callback: callback::SPELL_HIT_DEALT,
            proc_mask: proc_mask::SPELL,
            outcome: Outcome::Landed,
            damage,
            target,
            school,
            action: ActionId::new(0),
        }
    }

    /// A periodic damage tick.
    pub fn periodic_tick(target: TargetId, damage: f64, school: SpellSchool) -> Self {
        Self {
            callback: callback::PERIODIC_DAMAGE_DEALT,
            proc_mask: proc_mask::SPELL_PROC,
            outcome: Outcome::Landed,
            damage,
            target,
            school,
            action: ActionId::new(0),
        }
    }

    pub fn with_proc_mask(mut self, mask: u32) -> Self {
        self.proc_mask = mask;
        self
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn with_action(mut self, action: ActionId) -> Self {
        self.action = action;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_masks_cover_their_bits() {
        assert_eq!(proc_mask::DIRECT & proc_mask::MELEE, proc_mask::MELEE);
        assert_eq!(proc_mask::DIRECT & proc_mask::SPELL, proc_mask::SPELL);
        assert_eq!(proc_mask::PROC & proc_mask::DIRECT, 0);
    }

    #[test]
    fn builders_set_fields() {
        let ev = ProcEvent::melee_hit(TargetId(0), 100.0)
            .with_proc_mask(proc_mask::RANGED)
            .with_outcome(Outcome::Missed);
        assert_eq!(ev.proc_mask, proc_mask::RANGED);
        assert_eq!(ev.outcome, Outcome::Missed);
        assert_eq!(ev.damage, 100.0);
    }
}
