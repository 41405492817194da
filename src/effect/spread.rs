//! Multi-target damage spread and derived-spell dispatch.
//!
//! Deterministic spread (cleave) walks the active-target roster in order
//! starting just after the primary, hitting up to min(N, active - 1) other
//! targets. Stochastic spread draws one uniform target, then a second
//! guaranteed distinct from the first when two or more are active.
//! Damage is threaded explicitly through every call; nothing is smuggled
//! through captured state.

use std::collections::HashMap;

use serde::Serialize;

use crate::sim::character::{Class, Spec};
use crate::sim::events::SpellSchool;
use crate::sim::roster::{TargetId, TargetRoster};
use crate::sim::Sim;

/// Hard cap on extra cleave targets.
pub const MAX_CLEAVE_TARGETS: usize = 5;

/// Rejection-sampling retries for the distinct second target before the
/// complement draw takes over. Bounded so a roster inconsistency can never
/// loop the trial.
pub const DISTINCT_SAMPLE_RETRIES: usize = 8;

/// Damage-outcome mechanic used when the derived spell lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutcomeKind {
    AlwaysHit,
    RangedHit,
    MeleeSpecialHit,
    MagicHit,
}

/// The spell a spread effect casts; chosen once per character and reused
/// for every cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedSpell {
    pub spell_id: u32,
    pub school: SpellSchool,
}

impl DerivedSpell {
    pub const fn new(spell_id: u32, school: SpellSchool) -> Self {
        Self { spell_id, school }
    }
}

/// (class, spec) -> derived-spell lookup, built once at content-load time.
/// Adding a class is a data change, not a control-flow change.
#[derive(Debug, Clone)]
pub struct DerivedSpellTable {
    physical_default: DerivedSpell,
    physical_by_class: HashMap<Class, DerivedSpell>,
    magic_by_class: HashMap<Class, DerivedSpell>,
    magic_by_spec: HashMap<(Class, Spec), DerivedSpell>,
    /// Data-gap fallback when a class has no magic mapping; None means such
    /// classes reuse their physical spell.
    magic_default: Option<DerivedSpell>,
}

impl DerivedSpellTable {
    pub fn new(physical_default: DerivedSpell) -> Self {
        Self {
            physical_default,
            physical_by_class: HashMap::new(),
            magic_by_class: HashMap::new(),
            magic_by_spec: HashMap::new(),
            magic_default: None,
        }
    }

    pub fn physical_for_class(mut self, class: Class, spell: DerivedSpell) -> Self {
        self.physical_by_class.insert(class, spell);
        self
    }

    pub fn magic_for_class(mut self, class: Class, spell: DerivedSpell) -> Self {
        self.magic_by_class.insert(class, spell);
        self
    }

    pub fn magic_for_spec(mut self, class: Class, spec: Spec, spell: DerivedSpell) -> Self {
        self.magic_by_spec.insert((class, spec), spell);
        self
    }

    pub fn magic_default(mut self, spell: DerivedSpell) -> Self {
        self.magic_default = Some(spell);
        self
    }

    pub fn physical_for(&self, class: Class) -> DerivedSpell {
        self.physical_by_class
            .get(&class)
            .copied()
            .unwrap_or(self.physical_default)
    }

    /// Magic variant: spec mapping wins over class mapping, then the table
    /// default, then the physical spell.
    pub fn magic_for(&self, class: Class, spec: Spec) -> DerivedSpell {
        self.magic_by_spec
            .get(&(class, spec))
            .or_else(|| self.magic_by_class.get(&class))
            .copied()
            .or(self.magic_default)
            .unwrap_or_else(|| self.physical_for(class))
    }

    /// Both variants for one character, resolved once at registration.
    pub fn spells_for(&self, class: Class, spec: Spec) -> (DerivedSpell, DerivedSpell) {
        (self.physical_for(class), self.magic_for(class, spec))
    }
}

/// Class-appropriate outcome mechanic for a derived spell: ranged classes
/// roll ranged hits, physical spells roll melee-special, magic rolls magic.
pub fn outcome_for(class: Class, school: SpellSchool) -> OutcomeKind {
    if class == Class::Hunter {
        OutcomeKind::RangedHit
    } else if school == SpellSchool::Physical {
        OutcomeKind::MeleeSpecialHit
    } else {
        OutcomeKind::MagicHit
    }
}

/// Extra targets for a deterministic cleave from `primary`: roster order
/// starting just after the primary, excluding it, never revisiting a target,
/// capped at `max_extra` and at (active count - 1).
pub fn cleave_targets(
    roster: &TargetRoster,
    primary: TargetId,
    max_extra: usize,
) -> Vec<TargetId> {
    let active = roster.active_count();
    if active <= 1 || max_extra == 0 {
        return Vec::new();
    }
    let wanted = max_extra.min(active - 1);
    let mut extra = Vec::with_capacity(wanted);
    let mut current = primary;
    while extra.len() < wanted {
        match roster.next_active_after(current) {
            Some(next) if next != primary && !extra.contains(&next) => {
                extra.push(next);
                current = next;
            }
            _ => break,
        }
    }
    extra
}

/// Cast a cleave: deal `damage_per_target` to each extra target with the
/// given spell and outcome mechanic via `deal`. Returns the number hit.
pub fn cast_cleave(
    sim: &mut Sim,
    spell: DerivedSpell,
    outcome: OutcomeKind,
    primary: TargetId,
    damage_per_target: f64,
    max_extra: usize,
    mut deal: impl FnMut(&mut Sim, DerivedSpell, TargetId, f64, OutcomeKind),
) -> usize {
    let targets = cleave_targets(&sim.roster, primary, max_extra);
    for &target in &targets {
        sim.trace
            .record_spread_cast(spell.spell_id, target, damage_per_target, sim.now);
        deal(sim, spell, target, damage_per_target, outcome);
    }
    targets.len()
}

/// Draw one uniform active target, plus a second guaranteed distinct when
/// at least two are active. Bounded rejection sampling with a direct
/// complement draw as the fallback. None when the roster is empty.
pub fn random_target_pair(sim: &mut Sim, label: &str) -> Option<(TargetId, Option<TargetId>)> {
    let active = sim.roster.active_count();
    if active == 0 {
        return None;
    }
    let first_index = sim.roll_index(label, active);
    let first = sim.roster.target_at(first_index)?;
    if active == 1 {
        return Some((first, None));
    }

    let mut second_index = None;
    for _ in 0..DISTINCT_SAMPLE_RETRIES {
        let index = sim.roll_index(label, active);
        if index != first_index {
            second_index = Some(index);
            break;
        }
    }
    let second_index = match second_index {
        Some(index) => index,
        None => {
            // Complement draw: uniform over the remaining indices.
            let drawn = sim.roll_index(label, active - 1);
            if drawn >= first_index {
                drawn + 1
            } else {
                drawn
            }
        }
    };
    let second = sim.roster.target_at(second_index);
    Some((first, second))
}

/// Cast a stochastic spread tick: one cast at a random target, and a second
/// cast at a distinct random target when more than one is active. Returns
/// the number of casts.
pub fn cast_random_spread(
    sim: &mut Sim,
    spell: DerivedSpell,
    outcome: OutcomeKind,
    damage_per_target: f64,
    label: &str,
    mut deal: impl FnMut(&mut Sim, DerivedSpell, TargetId, f64, OutcomeKind),
) -> usize {
    let Some((first, second)) = random_target_pair(sim, label) else {
        return 0;
    };
    let mut casts = 0;
    for target in std::iter::once(first).chain(second) {
        sim.trace
            .record_spread_cast(spell.spell_id, target, damage_per_target, sim.now);
        deal(sim, spell, target, damage_per_target, outcome);
        casts += 1;
    }
    casts
}
