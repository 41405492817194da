//! Effect registry: item id -> initializer, built by a deterministic
//! content-loading step and passed explicitly to the host's character setup
//! path. The initializer runs once per character that owns the item, before
//! combat begins, and wires scaling, buffs, triggers, and slot gating.

use std::collections::HashMap;
use std::rc::Rc;

use crate::effect::proc::ProcTrigger;
use crate::effect::scaling::{ItemLevelState, ScalingCurves};
use crate::effect::spread::{DerivedSpell, OutcomeKind};
use crate::sim::character::Character;
use crate::sim::roster::TargetId;
use crate::sim::{ItemId, Sim};

/// Engine damage entry point handed to initializers; spread and echo
/// handlers call it for every derived-spell cast.
pub type DealFn = Rc<dyn Fn(&mut Sim, DerivedSpell, TargetId, f64, OutcomeKind)>;

/// Per-character runtime objects produced by initializers. Owned by the
/// host; the host feeds combat events to [CharacterEffects::offer].
#[derive(Default)]
pub struct CharacterEffects {
    triggers: Vec<ProcTrigger>,
}

impl CharacterEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_trigger(&mut self, trigger: ProcTrigger) {
        self.triggers.push(trigger);
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    pub fn triggers(&self) -> impl Iterator<Item = &ProcTrigger> {
        self.triggers.iter()
    }

    /// Offer one combat event to every registered trigger, in registration
    /// order. Returns how many fired.
    pub fn offer(
        &mut self,
        sim: &mut Sim,
        character: &Character,
        event: &crate::sim::events::ProcEvent,
    ) -> usize {
        self.triggers
            .iter_mut()
            .map(|t| t.offer(sim, character, event))
            .filter(|&fired| fired)
            .count()
    }
}

/// Everything an initializer needs to wire one item's effect onto one
/// character.
pub struct InitContext<'a> {
    pub character: &'a mut Character,
    pub effects: &'a mut CharacterEffects,
    pub scaling: &'a ScalingCurves,
    pub deal: DealFn,
}

type EffectInitializer = Box<dyn Fn(&mut InitContext<'_>, ItemLevelState) + Send + Sync>;

/// Process-independent mapping from item id to initialization callback.
/// Definitions are read-only once authored and shared across trials.
#[derive(Default)]
pub struct EffectRegistry {
    effects: HashMap<ItemId, EffectInitializer>,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the initializer for `item`. Registering the same id twice is a
    /// content-authoring error and panics; the host's startup validation is
    /// expected to never reach that state.
    pub fn register(
        &mut self,
        item: ItemId,
        initializer: impl Fn(&mut InitContext<'_>, ItemLevelState) + Send + Sync + 'static,
    ) {
        if self.effects.insert(item, Box::new(initializer)).is_some() {
            panic!("duplicate item effect registration for item {item}");
        }
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.effects.contains_key(&item)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.effects.keys().copied()
    }

    /// Run the initializer for one owned item. Returns false when no effect
    /// is registered for the id (a plain stat-stick; silent no-op).
    pub fn apply(&self, item: ItemId, ctx: &mut InitContext<'_>, state: ItemLevelState) -> bool {
        match self.effects.get(&item) {
            Some(initializer) => {
                initializer(ctx, state);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::character::{Class, Spec};

    fn noop_deal() -> DealFn {
        Rc::new(|_, _, _, _, _| {})
    }

    #[test]
    fn apply_runs_registered_initializer() {
        let mut registry = EffectRegistry::new();
        registry.register(100, |ctx, _| {
            ctx.character.attach_cooldown_multiplier("Readiness", 145966, 0.5);
        });

        let mut character = Character::new(Class::Hunter, Spec::SurvivalHunter);
        let mut effects = CharacterEffects::new();
        let scaling = ScalingCurves::new();
        let mut ctx = InitContext {
            character: &mut character,
            effects: &mut effects,
            scaling: &scaling,
            deal: noop_deal(),
        };

        assert!(registry.apply(100, &mut ctx, ItemLevelState::Base));
        assert_eq!(character.cooldown_multiplier(), 0.5);
    }

    #[test]
    fn apply_unknown_item_is_a_noop() {
        let registry = EffectRegistry::new();
        let mut character = Character::new(Class::Hunter, Spec::SurvivalHunter);
        let mut effects = CharacterEffects::new();
        let scaling = ScalingCurves::new();
        let mut ctx = InitContext {
            character: &mut character,
            effects: &mut effects,
            scaling: &scaling,
            deal: noop_deal(),
        };
        assert!(!registry.apply(31337, &mut ctx, ItemLevelState::Base));
    }

    #[test]
    #[should_panic(expected = "duplicate item effect registration")]
    fn duplicate_registration_panics() {
        let mut registry = EffectRegistry::new();
        registry.register(100, |_, _| {});
        registry.register(100, |_, _| {});
    }

    #[test]
    fn offer_counts_every_fired_trigger() {
        use crate::effect::proc::{ProcChance, ProcTriggerConfig};
        use crate::sim::events::{callback, ProcEvent};
        use crate::sim::roster::{TargetId, TargetRoster};

        let mut effects = CharacterEffects::new();
        for name in ["first", "second"] {
            effects.add_trigger(ProcTrigger::new(
                ProcTriggerConfig::new(name, callback::SPELL_HIT_DEALT, ProcChance::Flat(1.0)),
                |_, _, _| {},
            ));
        }
        effects.add_trigger(ProcTrigger::new(
            ProcTriggerConfig::new("never", callback::SPELL_HIT_DEALT, ProcChance::Flat(0.0)),
            |_, _, _| {},
        ));

        let mut sim = Sim::new(9, TargetRoster::new(1));
        let character = Character::new(Class::Hunter, Spec::SurvivalHunter);
        let event = ProcEvent::melee_hit(TargetId(0), 100.0);
        assert_eq!(effects.offer(&mut sim, &character, &event), 2);
    }
}
