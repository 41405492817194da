//! Item-effect registration and proc-resolution framework for a turn-free
//! combat simulator.
//!
//! The crate declares how equippable items behave in combat: stat-buff procs
//! with internal cooldowns, rate-per-minute triggers, decaying and
//! accumulating stacked buffs, cooldown-reduction auras, and multi-target
//! damage spread. The combat engine proper (outcome rolls, threat, the event
//! queue) lives outside this crate; handlers written here run synchronously
//! inside the host's event loop through the [sim] contract types.
//!
//! - [sim]: per-trial context shared with the host: virtual clock, seeded
//!   RNG, active-target roster, trace capture, character state.
//! - [effect]: the reusable machinery: variant expansion, item-level
//!   scaling, proc triggers, stacking buffs, damage spread, the registry.
//! - [content]: the declarative trinket catalog built on top of [effect].
//! - [parallel]: Rayon helpers for running independent seeded trials.

pub mod content;
pub mod effect;
pub mod parallel;
pub mod sim;
