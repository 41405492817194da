//! Declarative item content riding on the effect framework. Each definition
//! here is read-only data; [register_all] expands it into per-variant
//! registry entries in a deterministic content-loading step.

pub mod trinkets;

pub use trinkets::{
    amplification_trinkets, cleave_trinkets, multistrike_trinkets, readiness_trinkets,
    register_all, stacking_trinkets, AmplificationTrinket, CleaveTrinket, MultistrikeTrinket,
    ProcBuffSpec, ReadinessTrinket, StackingTrinket, TIME_LOST_ARTIFACT,
};
