use std::cell::RefCell;
use std::rc::Rc;

use talisman::effect::{
    cast_cleave, cast_random_spread, cleave_targets, outcome_for, random_target_pair,
    CharacterEffects, DealFn, DerivedSpell, DerivedSpellTable, EffectRegistry, InitContext,
    ItemLevelState, ItemVersion, ItemVersionMap, OutcomeKind, ProcChance, ProcTrigger,
    ProcTriggerConfig, ScalingCurves, ScalingEntry, StackMode, StackingBuff, StackingBuffConfig,
    MAX_CLEAVE_TARGETS,
};
use talisman::sim::{
    callback, proc_mask, serialize_events_json, Character, Class, ProcEvent, Sim, Spec,
    SpellSchool, Stat, TargetId, TargetRoster, TimedStatBuff, TraceMode,
};

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "expected {b}, got {a}");
}

fn recording_deal() -> (DealFn, Rc<RefCell<Vec<(u32, TargetId, f64)>>>) {
    let hits: Rc<RefCell<Vec<(u32, TargetId, f64)>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&hits);
    let deal: DealFn = Rc::new(move |_sim, spell, target, damage, _outcome| {
        sink.borrow_mut().push((spell.spell_id, target, damage));
    });
    (deal, hits)
}

#[test]
fn version_map_expands_one_definition_per_variant() {
    let versions = ItemVersionMap::from_pairs(&[
        (ItemVersion::Normal, 100),
        (ItemVersion::Heroic, 200),
    ]);

    let mut registry = EffectRegistry::new();
    versions.register_all(|_, item_id, label| {
        let label = label.to_string();
        registry.register(item_id, move |_, _| {
            let _ = &label;
        });
    });

    assert_eq!(registry.len(), 2);
    assert!(registry.contains(100));
    assert!(registry.contains(200));
    assert!(!registry.contains(300));
}

#[test]
fn version_labels_are_stable() {
    assert_eq!(ItemVersion::RaidFinder.label(), "LFR");
    assert_eq!(ItemVersion::Heroic.label(), "Heroic");
    assert_eq!(ItemVersion::HeroicWarforged.label(), "Heroic Warforged");
    assert_eq!(ItemVersion::Flexible.label(), "Flex");
}

#[test]
fn scaling_falls_back_state_then_base_then_neutral() {
    let mut curves = ScalingCurves::new();
    curves.set_base(
        7,
        ScalingEntry {
            effect_points: 100.0,
            stat_points: 200.0,
        },
    );
    curves.set_state(
        7,
        ItemLevelState::Upgrade2,
        ScalingEntry {
            effect_points: 120.0,
            stat_points: 240.0,
        },
    );

    // Exact state match.
    approx_eq(
        curves.item_effect_scaling(7, 2.0, ItemLevelState::Upgrade2),
        240.0,
        1e-12,
    );
    // Missing state falls back to the base entry.
    approx_eq(
        curves.item_effect_scaling(7, 2.0, ItemLevelState::Upgrade1),
        200.0,
        1e-12,
    );
    // Unknown item falls back to the neutral curve: coefficient passes
    // through unscaled.
    approx_eq(
        curves.item_effect_scaling(999, 2.0, ItemLevelState::Base),
        2.0,
        1e-12,
    );
    approx_eq(
        curves.item_effect_scaling_stat(7, 0.5, ItemLevelState::Base),
        100.0,
        1e-12,
    );
}

#[test]
fn stat_proc_pipeline_respects_shared_cooldown() {
    // Certain-chance proc granting a 20 sec buff with a 115 sec internal
    // cooldown: over 300 sec of one event per second, exactly three fires.
    let mut sim = Sim::new(11, TargetRoster::new(1));
    let character = Character::new(Class::Rogue, Spec::CombatRogue);

    let buff = Rc::new(RefCell::new(TimedStatBuff::new(
        "Dextrous",
        146308,
        Stat::Agility,
        14_037.0,
        20.0,
    )));
    let trigger = {
        let buff = Rc::clone(&buff);
        ProcTrigger::new(
            ProcTriggerConfig::new(
                "Dextrous Trigger",
                callback::SPELL_HIT_DEALT,
                ProcChance::Flat(1.0),
            )
            .proc_mask(proc_mask::DIRECT | proc_mask::PROC)
            .icd(115.0),
            move |sim, _, _| buff.borrow_mut().activate(sim.now),
        )
    };
    buff.borrow_mut().share_icd(trigger.icd());

    let mut effects = CharacterEffects::new();
    effects.add_trigger(trigger);

    let event = ProcEvent::melee_hit(TargetId(0), 1_000.0);
    let mut fires = 0;
    for t in 0..300 {
        sim.now = t as f64;
        fires += effects.offer(&mut sim, &character, &event);
    }
    assert_eq!(fires, 3); // t = 0, 115, 230

    // The buff sees the trigger's cooldown through the shared handle.
    let icd = buff.borrow().icd().cloned();
    let icd = icd.unwrap();
    assert!(!icd.borrow().is_ready(299.0));
    assert!(icd.borrow().is_ready(345.0));
}

#[test]
fn timed_buff_contributes_only_while_active() {
    let mut character = Character::new(Class::Shaman, Spec::EnhancementShaman);
    let buff = Rc::new(RefCell::new(TimedStatBuff::new(
        "Vicious",
        148903,
        Stat::Agility,
        500.0,
        10.0,
    )));
    let flag = buff.borrow().enable_flag();
    character.add_stat_proc_buff(42, flag, buff.clone(), &[]);

    assert_eq!(character.stat_bonus(Stat::Agility, 0.0), 0.0);
    buff.borrow_mut().activate(3.0);
    approx_eq(character.stat_bonus(Stat::Agility, 5.0), 500.0, 1e-12);
    // Other stats are untouched.
    assert_eq!(character.stat_bonus(Stat::Intellect, 5.0), 0.0);
    // Expired.
    assert_eq!(character.stat_bonus(Stat::Agility, 13.5), 0.0);
}

#[test]
fn decaying_stacks_follow_the_elapsed_time_floor() {
    let mut buff = StackingBuff::new(StackingBuffConfig {
        label: "Restless Agility".to_string(),
        aura_id: 146310,
        stat: Stat::Agility,
        bonus_per_stack: 100.0,
        max_stacks: 20,
        time_per_stack: 0.5,
        duration: 10.0,
        mode: StackMode::Decay,
        tick_immediately: false,
    });
    buff.activate(50.0);

    assert_eq!(buff.stacks(50.0), 20);
    assert_eq!(buff.stacks(50.4), 20);
    assert_eq!(buff.stacks(50.5), 19);
    assert_eq!(buff.stacks(55.0), 10);
    assert_eq!(buff.stacks(59.5), 1);
    assert_eq!(buff.stacks(60.0), 0);
    assert!(!buff.is_active(60.0));
    approx_eq(buff.magnitude(55.0), 1_000.0, 1e-9);
}

#[test]
fn accumulating_stacks_ramp_and_cap() {
    let mut buff = StackingBuff::new(StackingBuffConfig {
        label: "Wrath of the Darkspear".to_string(),
        aura_id: 146184,
        stat: Stat::Intellect,
        bonus_per_stack: 350.0,
        max_stacks: 10,
        time_per_stack: 1.0,
        duration: 10.0,
        mode: StackMode::Accumulate,
        tick_immediately: true,
    });
    buff.activate(0.0);

    assert_eq!(buff.stacks(0.0), 1);
    assert_eq!(buff.stacks(4.5), 5);
    assert_eq!(buff.stacks(9.5), 10);
    // Window over: stacks collapse to zero.
    assert_eq!(buff.stacks(10.0), 0);
    assert!(!buff.is_active(10.0));
}

#[test]
fn cleave_walks_roster_order_and_caps_extras() {
    let roster = TargetRoster::new(8);

    let extras = cleave_targets(&roster, TargetId(2), MAX_CLEAVE_TARGETS);
    assert_eq!(
        extras,
        vec![TargetId(3), TargetId(4), TargetId(5), TargetId(6), TargetId(7)]
    );

    // Wraps past the end of the roster.
    let extras = cleave_targets(&roster, TargetId(6), 3);
    assert_eq!(extras, vec![TargetId(7), TargetId(0), TargetId(1)]);
}

#[test]
fn cleave_is_bounded_by_active_count_minus_one() {
    let roster = TargetRoster::new(3);
    let extras = cleave_targets(&roster, TargetId(0), MAX_CLEAVE_TARGETS);
    assert_eq!(extras, vec![TargetId(1), TargetId(2)]);

    let solo = TargetRoster::new(1);
    assert!(cleave_targets(&solo, TargetId(0), MAX_CLEAVE_TARGETS).is_empty());
}

#[test]
fn cast_cleave_deals_full_damage_to_each_extra() {
    let mut sim = Sim::new(5, TargetRoster::new(4));
    let spell = DerivedSpell::new(146137, SpellSchool::Physical);
    let (deal, hits) = recording_deal();

    let hit_count = cast_cleave(
        &mut sim,
        spell,
        OutcomeKind::MeleeSpecialHit,
        TargetId(1),
        2_500.0,
        MAX_CLEAVE_TARGETS,
        |sim, spell, target, damage, outcome| deal(sim, spell, target, damage, outcome),
    );

    assert_eq!(hit_count, 3);
    let hits = hits.borrow();
    assert_eq!(hits.len(), 3);
    for &(spell_id, target, damage) in hits.iter() {
        assert_eq!(spell_id, 146137);
        assert_ne!(target, TargetId(1));
        approx_eq(damage, 2_500.0, 1e-12);
    }
}

#[test]
fn random_pair_is_always_distinct_with_multiple_targets() {
    let mut sim = Sim::new(97, TargetRoster::new(4));
    for _ in 0..500 {
        let (first, second) = random_target_pair(&mut sim, "spread").unwrap();
        let second = second.unwrap();
        assert_ne!(first, second);
        assert!(sim.roster.position(first).is_some());
        assert!(sim.roster.position(second).is_some());
    }
}

#[test]
fn random_pair_single_target_has_no_second() {
    let mut sim = Sim::new(3, TargetRoster::new(1));
    let (first, second) = random_target_pair(&mut sim, "spread").unwrap();
    assert_eq!(first, TargetId(0));
    assert!(second.is_none());
}

#[test]
fn random_pair_empty_roster_is_none() {
    let mut sim = Sim::new(3, TargetRoster::new(0));
    assert!(random_target_pair(&mut sim, "spread").is_none());
}

#[test]
fn random_spread_casts_once_or_twice() {
    let mut sim = Sim::new(21, TargetRoster::new(3));
    let spell = DerivedSpell::new(148009, SpellSchool::Shadow);
    let (deal, hits) = recording_deal();

    let casts = cast_random_spread(
        &mut sim,
        spell,
        OutcomeKind::MagicHit,
        800.0,
        "spirits",
        |sim, spell, target, damage, outcome| deal(sim, spell, target, damage, outcome),
    );
    assert_eq!(casts, 2);
    assert_eq!(hits.borrow().len(), 2);
    assert_ne!(hits.borrow()[0].1, hits.borrow()[1].1);
}

#[test]
fn derived_spell_table_prefers_spec_then_class_then_default() {
    let table = DerivedSpellTable::new(DerivedSpell::new(1, SpellSchool::Physical))
        .physical_for_class(Class::Hunter, DerivedSpell::new(2, SpellSchool::Physical))
        .magic_for_class(Class::Mage, DerivedSpell::new(3, SpellSchool::Frostfire))
        .magic_for_spec(Class::Mage, Spec::ArcaneMage, DerivedSpell::new(4, SpellSchool::Arcane))
        .magic_default(DerivedSpell::new(5, SpellSchool::Shadow));

    assert_eq!(table.physical_for(Class::Hunter).spell_id, 2);
    assert_eq!(table.physical_for(Class::Warrior).spell_id, 1);
    assert_eq!(table.magic_for(Class::Mage, Spec::ArcaneMage).spell_id, 4);
    assert_eq!(table.magic_for(Class::Mage, Spec::FrostMage).spell_id, 3);
    assert_eq!(table.magic_for(Class::Priest, Spec::HolyPriest).spell_id, 5);
}

#[test]
fn outcome_kind_tracks_class_and_school() {
    assert_eq!(
        outcome_for(Class::Hunter, SpellSchool::Physical),
        OutcomeKind::RangedHit
    );
    assert_eq!(
        outcome_for(Class::Warrior, SpellSchool::Physical),
        OutcomeKind::MeleeSpecialHit
    );
    assert_eq!(
        outcome_for(Class::Warlock, SpellSchool::Shadow),
        OutcomeKind::MagicHit
    );
}

#[test]
fn registry_apply_is_a_noop_for_unregistered_items() {
    let registry = EffectRegistry::new();
    let mut character = Character::new(Class::Druid, Spec::BalanceDruid);
    let mut effects = CharacterEffects::new();
    let scaling = ScalingCurves::new();
    let (deal, _) = recording_deal();

    let mut ctx = InitContext {
        character: &mut character,
        effects: &mut effects,
        scaling: &scaling,
        deal,
    };
    assert!(!registry.apply(55555, &mut ctx, ItemLevelState::Base));
    assert_eq!(effects.trigger_count(), 0);
}

#[test]
fn registry_apply_wires_triggers_through_the_context() {
    let mut registry = EffectRegistry::new();
    registry.register(77, |ctx, _| {
        ctx.effects.add_trigger(ProcTrigger::new(
            ProcTriggerConfig::new("wired", callback::SPELL_HIT_DEALT, ProcChance::Flat(1.0)),
            |_, _, _| {},
        ));
    });

    let mut character = Character::new(Class::Druid, Spec::BalanceDruid);
    let mut effects = CharacterEffects::new();
    let scaling = ScalingCurves::new();
    let (deal, _) = recording_deal();

    let mut ctx = InitContext {
        character: &mut character,
        effects: &mut effects,
        scaling: &scaling,
        deal,
    };
    assert!(registry.apply(77, &mut ctx, ItemLevelState::Base));
    assert_eq!(effects.trigger_count(), 1);
}

#[test]
fn unequipping_an_item_silences_its_triggers_and_buffs() {
    let mut sim = Sim::new(13, TargetRoster::new(1));
    let mut character = Character::new(Class::Monk, Spec::WindwalkerMonk);

    let buff = Rc::new(RefCell::new(TimedStatBuff::new(
        "Winds of Time",
        148447,
        Stat::HasteRating,
        1_600.0,
        20.0,
    )));
    let trigger = {
        let buff = Rc::clone(&buff);
        ProcTrigger::new(
            ProcTriggerConfig::new(
                "Winds of Time Trigger",
                callback::SPELL_HIT_DEALT,
                ProcChance::Flat(1.0),
            ),
            move |sim, _, _| buff.borrow_mut().activate(sim.now),
        )
    };

    let slots = character.item_swap.eligible_slots_for_item(103678);
    let buff_flag = buff.borrow().enable_flag();
    character.add_stat_proc_buff(103678, buff_flag, buff.clone(), &slots);
    character
        .item_swap
        .register_proc_with_slots(103678, trigger.enable_flag(), &slots);

    let mut effects = CharacterEffects::new();
    effects.add_trigger(trigger);

    let event = ProcEvent::melee_hit(TargetId(0), 900.0);
    assert_eq!(effects.offer(&mut sim, &character, &event), 1);
    assert!(character.stat_bonus(Stat::HasteRating, sim.now) > 0.0);

    character.item_swap.set_item_equipped(103678, false);
    sim.advance(30.0);
    assert_eq!(effects.offer(&mut sim, &character, &event), 0);
    assert_eq!(character.stat_bonus(Stat::HasteRating, sim.now), 0.0);

    // Re-equipping brings the trigger back.
    character.item_swap.set_item_equipped(103678, true);
    assert_eq!(effects.offer(&mut sim, &character, &event), 1);
}

#[test]
fn proc_trace_serializes_to_json() {
    let mut sim = Sim::new(29, TargetRoster::new(2)).with_trace(TraceMode::Procs);
    let character = Character::new(Class::Mage, Spec::FireMage);

    let mut effects = CharacterEffects::new();
    effects.add_trigger(ProcTrigger::new(
        ProcTriggerConfig::new("Expanded Mind", callback::SPELL_HIT_DEALT, ProcChance::Flat(1.0)),
        |_, _, _| {},
    ));

    sim.now = 4.5;
    let event = ProcEvent::spell_hit(TargetId(1), 1_234.0, SpellSchool::Fire);
    assert_eq!(effects.offer(&mut sim, &character, &event), 1);

    let json = serialize_events_json(sim.trace.events()).unwrap();
    assert!(json.contains("\"proc_fired\""));
    assert!(json.contains("Expanded Mind"));
    assert!(json.contains("4.5"));
}
