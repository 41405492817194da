//! The reusable item-effect machinery: variant expansion, item-level
//! scaling, proc triggers with internal cooldowns, stacking buff
//! controllers, multi-target damage spread, and the effect registry.

pub mod proc;
pub mod registry;
pub mod scaling;
pub mod spread;
pub mod stacks;
pub mod variant;

pub use proc::{ProcChance, ProcTrigger, ProcTriggerConfig};
pub use registry::{CharacterEffects, DealFn, EffectRegistry, InitContext};
pub use scaling::{ItemLevelState, ScalingCurves, ScalingEntry};
pub use spread::{
    cast_cleave, cast_random_spread, cleave_targets, outcome_for, random_target_pair,
    DerivedSpell, DerivedSpellTable, OutcomeKind, DISTINCT_SAMPLE_RETRIES, MAX_CLEAVE_TARGETS,
};
pub use stacks::{StackMode, StackingBuff, StackingBuffConfig};
pub use variant::{ItemVersion, ItemVersionMap};
