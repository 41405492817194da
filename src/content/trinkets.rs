//! Siege-raid trinket catalog.
//!
//! Five effect families: readiness (permanent cooldown reduction gated by
//! spec, plus a flat-chance stat proc), multistrike (single-target echo
//! damage plus a rate-per-minute stat proc), amplification (permanent
//! rating multipliers plus a flat-chance stat proc), cleave (deterministic
//! spread damage plus a flat-chance stat proc), and stacking stat procs
//! (decaying or accumulating). One single-version trinket registers
//! directly without a variant map.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::OnceLock;

use serde::Serialize;

use crate::effect::proc::{ProcChance, ProcTrigger, ProcTriggerConfig};
use crate::effect::registry::{EffectRegistry, InitContext};
use crate::effect::scaling::ItemLevelState;
use crate::effect::spread::{
    cast_cleave, outcome_for, DerivedSpell, DerivedSpellTable, OutcomeKind, MAX_CLEAVE_TARGETS,
};
use crate::effect::stacks::{StackMode, StackingBuff, StackingBuffConfig};
use crate::effect::variant::{ItemVersion, ItemVersionMap};
use crate::sim::buff::TimedStatBuff;
use crate::sim::character::{Class, Spec, Stat};
use crate::sim::events::{callback, proc_mask, ActionId, SpellSchool};
use crate::sim::ItemId;

/// Stat-budget coefficient of the standard stat-proc payload.
const STAT_PROC_COEFFICIENT: f64 = 2.973_000_049_59;
const STAT_PROC_CHANCE: f64 = 0.15;

const MULTISTRIKE_CHANCE_COEFFICIENT: f64 = 0.035_399_999_47;
const MULTISTRIKE_PPM: f64 = 0.920_000_016_69;
const MULTISTRIKE_BUFF_DURATION: f64 = 10.0;
const MULTISTRIKE_BUFF_ICD: f64 = 10.0;

const CLEAVE_CHANCE_COEFFICIENT: f64 = 0.078_599_996_86;

const CRIT_AMP_COEFFICIENT: f64 = 0.000_884_999_99;
const RATING_AMP_COEFFICIENT: f64 = 0.001_769_999_97;
const AMPLIFICATION_AURA_ID: u32 = 146051;

/// Windwalker Blackout Kick periodic ticks deal physical damage but proc
/// the magic echo variant.
const BLACKOUT_KICK_TICK: ActionId = ActionId::with_tag(100784, 2);

/// Time-Lost Artifact has a single loot-table entry, no variant map.
pub const TIME_LOST_ARTIFACT: ItemId = 103678;
const TIME_LOST_HASTE_COEFFICIENT: f64 = 1.567_999_958_99;

/// Stat-proc buff payload shared across the trinket families.
#[derive(Debug, Clone, Serialize)]
pub struct ProcBuffSpec {
    pub aura_label: String,
    pub aura_id: u32,
    pub stat: Stat,
    pub duration: f64,
    pub icd: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessTrinket {
    pub versions: ItemVersionMap,
    pub label: String,
    pub buff: Option<ProcBuffSpec>,
    pub cdr_coefficient: f64,
    pub cdr_aura_ids: HashMap<Spec, u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MultistrikeTrinket {
    pub versions: ItemVersionMap,
    pub label: String,
    pub buff: ProcBuffSpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct AmplificationTrinket {
    pub versions: ItemVersionMap,
    pub label: String,
    pub buff: ProcBuffSpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct CleaveTrinket {
    pub versions: ItemVersionMap,
    pub label: String,
    pub buff: ProcBuffSpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct StackingTrinket {
    pub versions: ItemVersionMap,
    pub label: String,
    pub stacking_label: String,
    pub stacking_aura_id: u32,
    pub stat: Stat,
    pub per_stack_coefficient: f64,
    pub max_stacks: u32,
    pub time_per_stack: f64,
    pub duration: f64,
    pub mode: StackMode,
    pub tick_immediately: bool,
    pub ppm: f64,
    pub trigger_mask: u32,
}

/// Register the whole catalog into `registry`. Deterministic: same catalog,
/// same registrations.
pub fn register_all(registry: &mut EffectRegistry) {
    for def in readiness_trinkets() {
        register_readiness_trinket(registry, def);
    }
    for def in multistrike_trinkets() {
        register_multistrike_trinket(registry, def);
    }
    for def in amplification_trinkets() {
        register_amplification_trinket(registry, def);
    }
    for def in cleave_trinkets() {
        register_cleave_trinket(registry, def);
    }
    for def in stacking_trinkets() {
        register_stacking_trinket(registry, def);
    }
    register_time_lost_artifact(registry);
}

/// Builds the standard flat-chance stat-proc pair (timed buff + trigger
/// with a shared ICD) and wires it onto the character.
fn attach_stat_proc(
    ctx: &mut InitContext<'_>,
    item: ItemId,
    state: ItemLevelState,
    trigger_name: String,
    buff_label: String,
    buff: &ProcBuffSpec,
    chance: ProcChance,
    trigger_mask: u32,
) {
    let amount = ctx
        .scaling
        .item_effect_scaling_stat(item, STAT_PROC_COEFFICIENT, state);
    let stat_buff = Rc::new(RefCell::new(TimedStatBuff::new(
        buff_label,
        buff.aura_id,
        buff.stat,
        amount,
        buff.duration,
    )));

    let trigger = {
        let stat_buff = Rc::clone(&stat_buff);
        ProcTrigger::new(
            ProcTriggerConfig::new(trigger_name, callback::SPELL_HIT_DEALT, chance)
                .proc_mask(trigger_mask)
                .icd(buff.icd),
            move |sim, _, _| {
                let mut buff = stat_buff.borrow_mut();
                buff.activate(sim.now);
                sim.trace.record_buff(&buff.label, sim.now);
            },
        )
    };
    stat_buff.borrow_mut().share_icd(trigger.icd());

    let eligible = ctx.character.item_swap.eligible_slots_for_item(item);
    let buff_flag = stat_buff.borrow().enable_flag();
    ctx.character
        .add_stat_proc_buff(item, buff_flag, stat_buff, &eligible);
    ctx.character
        .item_swap
        .register_proc_with_slots(item, trigger.enable_flag(), &eligible);
    ctx.effects.add_trigger(trigger);
}

fn register_readiness_trinket(registry: &mut EffectRegistry, def: ReadinessTrinket) {
    def.versions.clone().register_all(|_, item_id, version_label| {
        let def = def.clone();
        let version_label = version_label.to_string();
        registry.register(item_id, move |ctx, state| {
            let eligible = ctx.character.item_swap.eligible_slots_for_item(item_id);

            if let Some(&cdr_aura_id) = def.cdr_aura_ids.get(&ctx.character.spec) {
                let cdr = 1.0
                    / (1.0
                        + ctx
                            .scaling
                            .item_effect_scaling_stat(item_id, def.cdr_coefficient, state)
                            / 100.0);
                let flag = ctx.character.attach_cooldown_multiplier(
                    format!("Readiness ({version_label})"),
                    cdr_aura_id,
                    cdr,
                );
                ctx.character
                    .item_swap
                    .register_proc_with_slots(item_id, flag, &eligible);
            }

            if let Some(buff) = &def.buff {
                attach_stat_proc(
                    ctx,
                    item_id,
                    state,
                    format!("{} ({version_label}) - Trigger", def.label),
                    format!("{} ({version_label})", buff.aura_label),
                    buff,
                    ProcChance::Flat(STAT_PROC_CHANCE),
                    proc_mask::DIRECT | proc_mask::PROC,
                );
            }
        });
    });
}

fn multistrike_spell_table() -> &'static DerivedSpellTable {
    static TABLE: OnceLock<DerivedSpellTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        DerivedSpellTable::new(DerivedSpell::new(146061, SpellSchool::Physical))
            .physical_for_class(Class::Hunter, DerivedSpell::new(146069, SpellSchool::Physical))
            .magic_for_class(Class::Druid, DerivedSpell::new(146064, SpellSchool::Arcane))
            .magic_for_class(Class::Mage, DerivedSpell::new(146067, SpellSchool::Frostfire))
            .magic_for_spec(
                Class::Mage,
                Spec::ArcaneMage,
                DerivedSpell::new(146070, SpellSchool::Arcane),
            )
            .magic_for_class(Class::Monk, DerivedSpell::new(146075, SpellSchool::Nature))
            .magic_for_class(Class::Priest, DerivedSpell::new(146063, SpellSchool::Holy))
            .magic_for_spec(
                Class::Priest,
                Spec::ShadowPriest,
                DerivedSpell::new(146065, SpellSchool::Shadow),
            )
            .magic_for_class(Class::Shaman, DerivedSpell::new(146071, SpellSchool::Nature))
            .magic_for_class(Class::Warlock, DerivedSpell::new(146065, SpellSchool::Shadow))
    })
}

fn cleave_spell_table() -> &'static DerivedSpellTable {
    static TABLE: OnceLock<DerivedSpellTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        DerivedSpellTable::new(DerivedSpell::new(146137, SpellSchool::Physical))
            .physical_for_class(Class::Hunter, DerivedSpell::new(146162, SpellSchool::Physical))
            .magic_for_class(Class::Druid, DerivedSpell::new(146158, SpellSchool::Arcane))
            .magic_for_class(Class::Mage, DerivedSpell::new(146160, SpellSchool::Frostfire))
            .magic_for_spec(
                Class::Mage,
                Spec::ArcaneMage,
                DerivedSpell::new(146166, SpellSchool::Arcane),
            )
            .magic_for_class(Class::Monk, DerivedSpell::new(146172, SpellSchool::Nature))
            .magic_for_class(Class::Paladin, DerivedSpell::new(146157, SpellSchool::Holy))
            .magic_for_class(Class::Priest, DerivedSpell::new(146157, SpellSchool::Holy))
            .magic_for_spec(
                Class::Priest,
                Spec::ShadowPriest,
                DerivedSpell::new(146159, SpellSchool::Shadow),
            )
            .magic_for_class(Class::Shaman, DerivedSpell::new(146171, SpellSchool::Nature))
            .magic_for_class(Class::Warlock, DerivedSpell::new(146159, SpellSchool::Shadow))
    })
}

fn register_multistrike_trinket(registry: &mut EffectRegistry, def: MultistrikeTrinket) {
    def.versions.clone().register_all(|_, item_id, version_label| {
        let def = def.clone();
        let version_label = version_label.to_string();
        registry.register(item_id, move |ctx, state| {
            let (physical, magic) = multistrike_spell_table()
                .spells_for(ctx.character.class, ctx.character.spec);

            let echo_chance = ctx
                .scaling
                .item_effect_scaling_stat(item_id, MULTISTRIKE_CHANCE_COEFFICIENT, state)
                / 1000.0;
            let echo_trigger = {
                let deal = Rc::clone(&ctx.deal);
                ProcTrigger::new(
                    ProcTriggerConfig::new(
                        format!("{} ({version_label}) - Multistrike Trigger", def.label),
                        callback::SPELL_HIT_DEALT | callback::PERIODIC_DAMAGE_DEALT,
                        ProcChance::Flat(echo_chance),
                    )
                    .require_damage_dealt(),
                    move |sim, _, event| {
                        let echo_damage = event.damage / 3.0;
                        let spell = if event.school == SpellSchool::Physical
                            && event.action != BLACKOUT_KICK_TICK
                        {
                            physical
                        } else {
                            magic
                        };
                        sim.trace.record_spread_cast(
                            spell.spell_id,
                            event.target,
                            echo_damage,
                            sim.now,
                        );
                        deal(sim, spell, event.target, echo_damage, OutcomeKind::AlwaysHit);
                    },
                )
                .with_condition(|_, _, event| event.proc_mask != proc_mask::EMPTY)
            };

            let eligible = ctx.character.item_swap.eligible_slots_for_item(item_id);
            ctx.character.item_swap.register_proc_with_slots(
                item_id,
                echo_trigger.enable_flag(),
                &eligible,
            );
            ctx.effects.add_trigger(echo_trigger);

            attach_stat_proc(
                ctx,
                item_id,
                state,
                format!("{} ({version_label}) - Stat Trigger", def.label),
                format!("{} ({version_label})", def.buff.aura_label),
                &def.buff,
                ProcChance::Rppm(MULTISTRIKE_PPM),
                proc_mask::DIRECT | proc_mask::PROC,
            );
        });
    });
}

fn register_amplification_trinket(registry: &mut EffectRegistry, def: AmplificationTrinket) {
    def.versions.clone().register_all(|_, item_id, version_label| {
        let def = def.clone();
        let version_label = version_label.to_string();
        registry.register(item_id, move |ctx, state| {
            let crit_damage =
                1.0 + ctx.scaling.item_effect_scaling(item_id, CRIT_AMP_COEFFICIENT, state) / 100.0;
            let rating =
                1.0 + ctx.scaling.item_effect_scaling(item_id, RATING_AMP_COEFFICIENT, state)
                    / 100.0;

            let eligible = ctx.character.item_swap.eligible_slots_for_item(item_id);
            let label = format!("Amplification ({version_label})");
            let flags = [
                ctx.character.attach_crit_damage_multiplier(
                    label.clone(),
                    AMPLIFICATION_AURA_ID,
                    crit_damage,
                ),
                ctx.character.attach_stat_multiplier(
                    label.clone(),
                    AMPLIFICATION_AURA_ID,
                    Stat::HasteRating,
                    rating,
                ),
                ctx.character.attach_stat_multiplier(
                    label.clone(),
                    AMPLIFICATION_AURA_ID,
                    Stat::MasteryRating,
                    rating,
                ),
                ctx.character.attach_stat_multiplier(
                    label.clone(),
                    AMPLIFICATION_AURA_ID,
                    Stat::Spirit,
                    rating,
                ),
            ];
            for flag in flags {
                ctx.character
                    .item_swap
                    .register_proc_with_slots(item_id, flag, &eligible);
            }

            attach_stat_proc(
                ctx,
                item_id,
                state,
                format!("{} ({version_label})", def.label),
                format!("{} ({version_label})", def.buff.aura_label),
                &def.buff,
                ProcChance::Flat(STAT_PROC_CHANCE),
                // This trigger carries no attack-kind restriction, so hits
                // without any proc flags still qualify.
                proc_mask::EMPTY,
            );
        });
    });
}

fn register_cleave_trinket(registry: &mut EffectRegistry, def: CleaveTrinket) {
    def.versions.clone().register_all(|_, item_id, version_label| {
        let def = def.clone();
        let version_label = version_label.to_string();
        registry.register(item_id, move |ctx, state| {
            let (physical, magic) =
                cleave_spell_table().spells_for(ctx.character.class, ctx.character.spec);
            let class = ctx.character.class;

            let cleave_chance = ctx
                .scaling
                .item_effect_scaling_stat(item_id, CLEAVE_CHANCE_COEFFICIENT, state)
                / 10_000.0;
            let cleave_trigger = {
                let deal = Rc::clone(&ctx.deal);
                ProcTrigger::new(
                    ProcTriggerConfig::new(
                        format!("{} ({version_label}) - Cleave Trigger", def.label),
                        callback::SPELL_HIT_DEALT | callback::PERIODIC_DAMAGE_DEALT,
                        ProcChance::Flat(cleave_chance),
                    )
                    .require_damage_dealt(),
                    move |sim, _, event| {
                        let spell = if event.proc_mask & proc_mask::SPELL_OR_SPELL_PROC != 0 {
                            magic
                        } else {
                            physical
                        };
                        let outcome = outcome_for(class, spell.school);
                        cast_cleave(
                            sim,
                            spell,
                            outcome,
                            event.target,
                            event.damage,
                            MAX_CLEAVE_TARGETS,
                            |sim, spell, target, damage, outcome| {
                                deal(sim, spell, target, damage, outcome);
                            },
                        );
                    },
                )
                .with_condition(|sim, _, _| sim.roster.active_count() > 1)
            };

            let eligible = ctx.character.item_swap.eligible_slots_for_item(item_id);
            ctx.character.item_swap.register_proc_with_slots(
                item_id,
                cleave_trigger.enable_flag(),
                &eligible,
            );
            ctx.effects.add_trigger(cleave_trigger);

            attach_stat_proc(
                ctx,
                item_id,
                state,
                format!("{} ({version_label}) - Stat Trigger", def.label),
                format!("{} ({version_label})", def.buff.aura_label),
                &def.buff,
                ProcChance::Flat(STAT_PROC_CHANCE),
                proc_mask::DIRECT | proc_mask::PROC,
            );
        });
    });
}

fn register_stacking_trinket(registry: &mut EffectRegistry, def: StackingTrinket) {
    def.versions.clone().register_all(|_, item_id, version_label| {
        let def = def.clone();
        let version_label = version_label.to_string();
        registry.register(item_id, move |ctx, state| {
            let per_stack = ctx
                .scaling
                .item_effect_scaling_stat(item_id, def.per_stack_coefficient, state);
            let stacking = Rc::new(RefCell::new(StackingBuff::new(StackingBuffConfig {
                label: format!("{} ({version_label})", def.stacking_label),
                aura_id: def.stacking_aura_id,
                stat: def.stat,
                bonus_per_stack: per_stack,
                max_stacks: def.max_stacks,
                time_per_stack: def.time_per_stack,
                duration: def.duration,
                mode: def.mode,
                tick_immediately: def.tick_immediately,
            })));

            let trigger = {
                let stacking = Rc::clone(&stacking);
                ProcTrigger::new(
                    ProcTriggerConfig::new(
                        format!("{} ({version_label}) - Stat Trigger", def.label),
                        callback::SPELL_HIT_DEALT,
                        ProcChance::Rppm(def.ppm),
                    )
                    .proc_mask(def.trigger_mask)
                    .icd(def.duration),
                    move |sim, _, _| {
                        let mut buff = stacking.borrow_mut();
                        buff.activate(sim.now);
                        sim.trace.record_buff(&buff.config().label, sim.now);
                    },
                )
            };
            stacking.borrow_mut().share_icd(trigger.icd());

            let eligible = ctx.character.item_swap.eligible_slots_for_item(item_id);
            let buff_flag = stacking.borrow().enable_flag();
            ctx.character
                .add_stat_proc_buff(item_id, buff_flag, stacking, &eligible);
            ctx.character.item_swap.register_proc_with_slots(
                item_id,
                trigger.enable_flag(),
                &eligible,
            );
            ctx.effects.add_trigger(trigger);
        });
    });
}

/// Time-Lost Artifact: melee and ranged attacks have a 20% chance to grant
/// haste for 20 sec, 50 sec internal cooldown. Single loot-table entry.
fn register_time_lost_artifact(registry: &mut EffectRegistry) {
    registry.register(TIME_LOST_ARTIFACT, |ctx, state| {
        let amount = ctx.scaling.item_effect_scaling_stat(
            TIME_LOST_ARTIFACT,
            TIME_LOST_HASTE_COEFFICIENT,
            state,
        );
        let stat_buff = Rc::new(RefCell::new(TimedStatBuff::new(
            "Winds of Time",
            148447,
            Stat::HasteRating,
            amount,
            20.0,
        )));

        let trigger = {
            let stat_buff = Rc::clone(&stat_buff);
            ProcTrigger::new(
                ProcTriggerConfig::new(
                    "Time-Lost Artifact Trigger",
                    callback::SPELL_HIT_DEALT,
                    ProcChance::Flat(0.2),
                )
                .proc_mask(proc_mask::MELEE_OR_MELEE_PROC | proc_mask::RANGED_OR_RANGED_PROC)
                .icd(50.0),
                move |sim, _, _| {
                    let mut buff = stat_buff.borrow_mut();
                    buff.activate(sim.now);
                    sim.trace.record_buff(&buff.label, sim.now);
                },
            )
        };
        stat_buff.borrow_mut().share_icd(trigger.icd());

        let eligible = ctx
            .character
            .item_swap
            .eligible_slots_for_item(TIME_LOST_ARTIFACT);
        let buff_flag = stat_buff.borrow().enable_flag();
        ctx.character
            .add_stat_proc_buff(TIME_LOST_ARTIFACT, buff_flag, stat_buff, &eligible);
        ctx.character.item_swap.register_proc_with_slots(
            TIME_LOST_ARTIFACT,
            trigger.enable_flag(),
            &eligible,
        );
        ctx.effects.add_trigger(trigger);
    });
}

pub fn readiness_trinkets() -> Vec<ReadinessTrinket> {
    vec![
        // Assurance of Consequence: cooldown recovery for agility damage
        // roles; attacks have a 15% chance to grant Agility for 20 sec,
        // 115 sec cooldown.
        ReadinessTrinket {
            versions: ItemVersionMap::from_pairs(&[
                (ItemVersion::RaidFinder, 104974),
                (ItemVersion::Normal, 102292),
                (ItemVersion::Heroic, 104476),
                (ItemVersion::Warforged, 105223),
                (ItemVersion::HeroicWarforged, 105472),
                (ItemVersion::Flexible, 104725),
            ]),
            label: "Assurance of Consequence".to_string(),
            buff: Some(ProcBuffSpec {
                aura_label: "Dextrous".to_string(),
                aura_id: 146308,
                stat: Stat::Agility,
                duration: 20.0,
                icd: 115.0,
            }),
            cdr_coefficient: 0.009_899_999_95,
            cdr_aura_ids: HashMap::from([
                (Spec::FeralDruid, 145961),
                (Spec::BeastMasteryHunter, 145964),
                (Spec::MarksmanshipHunter, 145965),
                (Spec::SurvivalHunter, 145966),
                (Spec::AssassinationRogue, 145983),
                (Spec::CombatRogue, 145984),
                (Spec::SubtletyRogue, 145985),
                (Spec::EnhancementShaman, 145986),
                (Spec::WindwalkerMonk, 145969),
            ]),
        },
        // Evil Eye of Galakras: the strength-role counterpart, 10 sec buff
        // with a 55 sec cooldown.
        ReadinessTrinket {
            versions: ItemVersionMap::from_pairs(&[
                (ItemVersion::RaidFinder, 104993),
                (ItemVersion::Normal, 102298),
                (ItemVersion::Heroic, 104495),
                (ItemVersion::Warforged, 105242),
                (ItemVersion::HeroicWarforged, 105491),
                (ItemVersion::Flexible, 104744),
            ]),
            label: "Evil Eye of Galakras".to_string(),
            buff: Some(ProcBuffSpec {
                aura_label: "Outrage".to_string(),
                aura_id: 146245,
                stat: Stat::Strength,
                duration: 10.0,
                icd: 55.0,
            }),
            cdr_coefficient: 0.009_899_999_95,
            cdr_aura_ids: HashMap::from([
                (Spec::FrostDeathKnight, 145959),
                (Spec::UnholyDeathKnight, 145960),
                (Spec::RetributionPaladin, 145975),
                (Spec::ArmsWarrior, 145990),
                (Spec::FuryWarrior, 145991),
            ]),
        },
        // Vial of Living Corruption: tank-role cooldown recovery, no stat
        // proc.
        ReadinessTrinket {
            versions: ItemVersionMap::from_pairs(&[
                (ItemVersion::RaidFinder, 105070),
                (ItemVersion::Normal, 102306),
                (ItemVersion::Heroic, 104572),
                (ItemVersion::Warforged, 105319),
                (ItemVersion::HeroicWarforged, 105568),
                (ItemVersion::Flexible, 104821),
            ]),
            label: "Vial of Living Corruption".to_string(),
            buff: None,
            cdr_coefficient: 0.004_949_999_97,
            cdr_aura_ids: HashMap::from([
                (Spec::BloodDeathKnight, 145958),
                (Spec::GuardianDruid, 145962),
                (Spec::BrewmasterMonk, 145967),
                (Spec::ProtectionPaladin, 145976),
                (Spec::ProtectionWarrior, 145992),
            ]),
        },
    ]
}

pub fn multistrike_trinkets() -> Vec<MultistrikeTrinket> {
    vec![
        // Haromm's Talisman: multistrike echo at 1/3 damage, plus an RPPM
        // Agility proc.
        MultistrikeTrinket {
            versions: ItemVersionMap::from_pairs(&[
                (ItemVersion::RaidFinder, 105029),
                (ItemVersion::Normal, 102301),
                (ItemVersion::Heroic, 104531),
                (ItemVersion::Warforged, 105278),
                (ItemVersion::HeroicWarforged, 105527),
                (ItemVersion::Flexible, 104780),
            ]),
            label: "Haromm's Talisman".to_string(),
            buff: ProcBuffSpec {
                aura_label: "Vicious".to_string(),
                aura_id: 148903,
                stat: Stat::Agility,
                duration: MULTISTRIKE_BUFF_DURATION,
                icd: MULTISTRIKE_BUFF_ICD,
            },
        },
        // Kardris' Toxic Totem: the Intellect counterpart.
        MultistrikeTrinket {
            versions: ItemVersionMap::from_pairs(&[
                (ItemVersion::RaidFinder, 105042),
                (ItemVersion::Normal, 102300),
                (ItemVersion::Heroic, 104544),
                (ItemVersion::Warforged, 105291),
                (ItemVersion::HeroicWarforged, 105540),
                (ItemVersion::Flexible, 104793),
            ]),
            label: "Kardris' Toxic Totem".to_string(),
            buff: ProcBuffSpec {
                aura_label: "Toxic Power".to_string(),
                aura_id: 148906,
                stat: Stat::Intellect,
                duration: MULTISTRIKE_BUFF_DURATION,
                icd: MULTISTRIKE_BUFF_ICD,
            },
        },
    ]
}

pub fn amplification_trinkets() -> Vec<AmplificationTrinket> {
    vec![
        // Thok's Tail Tip: amplifies crit damage, haste, mastery, and
        // spirit; attacks have a chance to grant Strength.
        AmplificationTrinket {
            versions: ItemVersionMap::from_pairs(&[
                (ItemVersion::RaidFinder, 105111),
                (ItemVersion::Normal, 102305),
                (ItemVersion::Heroic, 104613),
                (ItemVersion::Warforged, 105360),
                (ItemVersion::HeroicWarforged, 105609),
                (ItemVersion::Flexible, 104862),
            ]),
            label: "Thok's Tail Tip".to_string(),
            buff: ProcBuffSpec {
                aura_label: "Determination".to_string(),
                aura_id: 146250,
                stat: Stat::Strength,
                duration: 20.0,
                icd: 115.0,
            },
        },
        // Purified Bindings of Immerseus: the Intellect counterpart.
        AmplificationTrinket {
            versions: ItemVersionMap::from_pairs(&[
                (ItemVersion::RaidFinder, 104924),
                (ItemVersion::Normal, 102293),
                (ItemVersion::Heroic, 104426),
                (ItemVersion::Warforged, 105173),
                (ItemVersion::HeroicWarforged, 105422),
                (ItemVersion::Flexible, 104675),
            ]),
            label: "Purified Bindings of Immerseus".to_string(),
            buff: ProcBuffSpec {
                aura_label: "Expanded Mind".to_string(),
                aura_id: 146046,
                stat: Stat::Intellect,
                duration: 20.0,
                icd: 115.0,
            },
        },
    ]
}

pub fn cleave_trinkets() -> Vec<CleaveTrinket> {
    let buff = |aura_label: &str, aura_id: u32, stat: Stat| ProcBuffSpec {
        aura_label: aura_label.to_string(),
        aura_id,
        stat,
        duration: 15.0,
        icd: 85.0,
    };
    vec![
        CleaveTrinket {
            versions: ItemVersionMap::from_pairs(&[
                (ItemVersion::RaidFinder, 104961),
                (ItemVersion::Normal, 102295),
                (ItemVersion::Heroic, 104463),
                (ItemVersion::Warforged, 105210),
                (ItemVersion::HeroicWarforged, 105459),
                (ItemVersion::Flexible, 104712),
            ]),
            label: "Fusion-Fire Core".to_string(),
            buff: buff("Tenacious", 148899, Stat::Strength),
        },
        CleaveTrinket {
            versions: ItemVersionMap::from_pairs(&[
                (ItemVersion::RaidFinder, 105082),
                (ItemVersion::Normal, 102302),
                (ItemVersion::Heroic, 104584),
                (ItemVersion::Warforged, 105331),
                (ItemVersion::HeroicWarforged, 105580),
                (ItemVersion::Flexible, 104833),
            ]),
            label: "Sigil of Rampage".to_string(),
            buff: buff("Ferocity", 148896, Stat::Agility),
        },
        CleaveTrinket {
            versions: ItemVersionMap::from_pairs(&[
                (ItemVersion::RaidFinder, 105074),
                (ItemVersion::Normal, 102303),
                (ItemVersion::Heroic, 104576),
                (ItemVersion::Warforged, 105323),
                (ItemVersion::HeroicWarforged, 105572),
                (ItemVersion::Flexible, 104825),
            ]),
            label: "Frenzied Crystal of Rage".to_string(),
            buff: buff("Extravagant Visions", 148897, Stat::Intellect),
        },
    ]
}

pub fn stacking_trinkets() -> Vec<StackingTrinket> {
    vec![
        // Ticking Ebon Detonator: Agility burst that decays stack by stack
        // every half second.
        StackingTrinket {
            versions: ItemVersionMap::from_pairs(&[
                (ItemVersion::RaidFinder, 105114),
                (ItemVersion::Normal, 102311),
                (ItemVersion::Heroic, 104616),
                (ItemVersion::Warforged, 105363),
                (ItemVersion::HeroicWarforged, 105612),
                (ItemVersion::Flexible, 104865),
            ]),
            label: "Ticking Ebon Detonator".to_string(),
            stacking_label: "Restless Agility".to_string(),
            stacking_aura_id: 146310,
            stat: Stat::Agility,
            per_stack_coefficient: 0.270_300_000_91,
            max_stacks: 20,
            time_per_stack: 0.5,
            duration: 10.0,
            mode: StackMode::Decay,
            tick_immediately: false,
            ppm: 1.0,
            trigger_mask: proc_mask::DIRECT,
        },
        // Skeer's Bloodsoaked Talisman: Critical Strike ramping up every
        // half second while Cruelty runs.
        StackingTrinket {
            versions: ItemVersionMap::from_pairs(&[
                (ItemVersion::RaidFinder, 105134),
                (ItemVersion::Normal, 102308),
                (ItemVersion::Heroic, 104636),
                (ItemVersion::Warforged, 105383),
                (ItemVersion::HeroicWarforged, 105632),
                (ItemVersion::Flexible, 104885),
            ]),
            label: "Skeer's Bloodsoaked Talisman".to_string(),
            stacking_label: "Cruelty".to_string(),
            stacking_aura_id: 146285,
            stat: Stat::CritRating,
            per_stack_coefficient: 0.296_999_990_94,
            max_stacks: 20,
            time_per_stack: 0.5,
            duration: 10.0,
            mode: StackMode::Accumulate,
            tick_immediately: true,
            ppm: MULTISTRIKE_PPM,
            trigger_mask: proc_mask::MELEE_OR_MELEE_PROC,
        },
        // Black Blood of Y'Shaarj: Intellect ramping up every second while
        // Wrath of the Darkspear runs.
        StackingTrinket {
            versions: ItemVersionMap::from_pairs(&[
                (ItemVersion::RaidFinder, 105150),
                (ItemVersion::Normal, 102310),
                (ItemVersion::Heroic, 104652),
                (ItemVersion::Warforged, 105399),
                (ItemVersion::HeroicWarforged, 105648),
                (ItemVersion::Flexible, 104901),
            ]),
            label: "Black Blood of Y'Shaarj".to_string(),
            stacking_label: "Wrath of the Darkspear".to_string(),
            stacking_aura_id: 146184,
            stat: Stat::Intellect,
            per_stack_coefficient: 0.593_999_981_88,
            max_stacks: 10,
            time_per_stack: 1.0,
            duration: 10.0,
            mode: StackMode::Accumulate,
            tick_immediately: true,
            ppm: MULTISTRIKE_PPM,
            trigger_mask: proc_mask::DIRECT | proc_mask::PROC,
        },
    ]
}
