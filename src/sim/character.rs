//! Per-character state the framework registers effects against: class and
//! spec for derived-spell dispatch, attack cadence for rate-per-minute
//! conversion, slot bookkeeping, and the accumulated stat payloads of every
//! attached buff and permanent aura.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Serialize;

use crate::sim::slots::{EquipSlot, ItemSwap};
use crate::sim::{ItemId, SimTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Class {
    DeathKnight,
    Druid,
    Hunter,
    Mage,
    Monk,
    Paladin,
    Priest,
    Rogue,
    Shaman,
    Warlock,
    Warrior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Spec {
    BloodDeathKnight,
    FrostDeathKnight,
    UnholyDeathKnight,
    BalanceDruid,
    FeralDruid,
    GuardianDruid,
    BeastMasteryHunter,
    MarksmanshipHunter,
    SurvivalHunter,
    ArcaneMage,
    FireMage,
    FrostMage,
    BrewmasterMonk,
    MistweaverMonk,
    WindwalkerMonk,
    HolyPaladin,
    ProtectionPaladin,
    RetributionPaladin,
    DisciplinePriest,
    HolyPriest,
    ShadowPriest,
    AssassinationRogue,
    CombatRogue,
    SubtletyRogue,
    ElementalShaman,
    EnhancementShaman,
    RestorationShaman,
    AfflictionWarlock,
    DemonologyWarlock,
    DestructionWarlock,
    ArmsWarrior,
    FuryWarrior,
    ProtectionWarrior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stat {
    Agility,
    Strength,
    Intellect,
    Spirit,
    HasteRating,
    MasteryRating,
    CritRating,
}

/// Anything that contributes a time-varying flat stat bonus (timed buffs,
/// stacking buffs). The character sums active sources on demand.
pub trait StatBonusSource {
    fn stat_bonus(&self, stat: Stat, now: SimTime) -> f64;
}

/// Permanent multiplicative aura payload gated by an equip flag. Label and
/// aura id identify the aura to the host's registries and UI.
#[derive(Debug)]
struct GatedFactor {
    label: String,
    aura_id: u32,
    enabled: Rc<Cell<bool>>,
    factor: f64,
}

#[derive(Debug)]
struct GatedStatFactor {
    label: String,
    aura_id: u32,
    enabled: Rc<Cell<bool>>,
    stat: Stat,
    factor: f64,
}

pub struct Character {
    pub class: Class,
    pub spec: Spec,
    /// Seconds between qualifying attacks; the host updates this as haste
    /// changes so rate-per-minute conversion tracks current speed.
    pub attack_interval: f64,
    pub item_swap: ItemSwap,
    stat_sources: Vec<Rc<RefCell<dyn StatBonusSource>>>,
    cooldown_mods: Vec<GatedFactor>,
    crit_damage_mods: Vec<GatedFactor>,
    stat_multipliers: Vec<GatedStatFactor>,
}

impl Character {
    pub fn new(class: Class, spec: Spec) -> Self {
        Self {
            class,
            spec,
            attack_interval: 2.0,
            item_swap: ItemSwap::new(),
            stat_sources: Vec::new(),
            cooldown_mods: Vec::new(),
            crit_damage_mods: Vec::new(),
            stat_multipliers: Vec::new(),
        }
    }

    pub fn with_attack_interval(mut self, interval: f64) -> Self {
        self.attack_interval = interval;
        self
    }

    /// Rate-per-minute chance model: instantaneous per-event probability
    /// derived from the character's current attack cadence. Recomputed at
    /// each qualifying event rather than cached.
    pub fn rppm_chance(&self, ppm: f64) -> f64 {
        (ppm * self.attack_interval / 60.0).clamp(0.0, 1.0)
    }

    /// Attach a stat-proc buff and gate it on the item's equip state.
    pub fn add_stat_proc_buff(
        &mut self,
        item: ItemId,
        enabled: Rc<Cell<bool>>,
        source: Rc<RefCell<dyn StatBonusSource>>,
        slots: &[EquipSlot],
    ) {
        self.item_swap.register_proc_with_slots(item, enabled, slots);
        self.stat_sources.push(source);
    }

    /// Total flat bonus for `stat` from every active attached source.
    pub fn stat_bonus(&self, stat: Stat, now: SimTime) -> f64 {
        self.stat_sources
            .iter()
            .map(|source| source.borrow().stat_bonus(stat, now))
            .sum()
    }

    /// Permanent ability-cooldown multiplier (readiness auras). Returns the
    /// enable flag so the caller can gate it on equip state.
    pub fn attach_cooldown_multiplier(
        &mut self,
        label: impl Into<String>,
        aura_id: u32,
        factor: f64,
    ) -> Rc<Cell<bool>> {
        let enabled = Rc::new(Cell::new(true));
        self.cooldown_mods.push(GatedFactor {
            label: label.into(),
            aura_id,
            enabled: Rc::clone(&enabled),
            factor,
        });
        enabled
    }

    pub fn cooldown_multiplier(&self) -> f64 {
        self.cooldown_mods
            .iter()
            .filter(|m| m.enabled.get())
            .map(|m| m.factor)
            .product()
    }

    /// Permanent crit-damage multiplier (amplification auras).
    pub fn attach_crit_damage_multiplier(
        &mut self,
        label: impl Into<String>,
        aura_id: u32,
        factor: f64,
    ) -> Rc<Cell<bool>> {
        let enabled = Rc::new(Cell::new(true));
        self.crit_damage_mods.push(GatedFactor {
            label: label.into(),
            aura_id,
            enabled: Rc::clone(&enabled),
            factor,
        });
        enabled
    }

    pub fn crit_damage_multiplier(&self) -> f64 {
        self.crit_damage_mods
            .iter()
            .filter(|m| m.enabled.get())
            .map(|m| m.factor)
            .product()
    }

    /// Permanent multiplicative rating amplification for one stat.
    pub fn attach_stat_multiplier(
        &mut self,
        label: impl Into<String>,
        aura_id: u32,
        stat: Stat,
        factor: f64,
    ) -> Rc<Cell<bool>> {
        let enabled = Rc::new(Cell::new(true));
        self.stat_multipliers.push(GatedStatFactor {
            label: label.into(),
            aura_id,
            enabled: Rc::clone(&enabled),
            stat,
            factor,
        });
        enabled
    }

    pub fn stat_multiplier(&self, stat: Stat) -> f64 {
        self.stat_multipliers
            .iter()
            .filter(|m| m.enabled.get() && m.stat == stat)
            .map(|m| m.factor)
            .product()
    }

    /// Labels and aura ids of every attached permanent aura, for the host's
    /// aura registry and UI.
    pub fn permanent_auras(&self) -> Vec<(&str, u32)> {
        self.cooldown_mods
            .iter()
            .chain(&self.crit_damage_mods)
            .map(|m| (m.label.as_str(), m.aura_id))
            .chain(
                self.stat_multipliers
                    .iter()
                    .map(|m| (m.label.as_str(), m.aura_id)),
            )
            .collect()
    }
}

impl std::fmt::Debug for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Character")
            .field("class", &self.class)
            .field("spec", &self.spec)
            .field("attack_interval", &self.attack_interval)
            .field("stat_sources", &self.stat_sources.len())
            .finish_non_exhaustive()
    }
}
