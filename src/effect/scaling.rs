//! Item-level scaling: converts a per-item-level coefficient into a concrete
//! magnitude for a specific item at a specific upgrade state. The host
//! provides the underlying point curves; missing entries fall back to the
//! item's base entry, then to a neutral default, never to an error.
//! A trial must not halt on a data gap.

use std::collections::HashMap;

use serde::Serialize;

use crate::sim::ItemId;

/// Upgrade state of an owned item; item level (and therefore magnitude)
/// differs per state and may differ per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ItemLevelState {
    #[default]
    Base,
    Upgrade1,
    Upgrade2,
}

/// Scaling points for one (item, state): a generic effect curve and a
/// stat-budget curve, since stat payloads scale on their own table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalingEntry {
    pub effect_points: f64,
    pub stat_points: f64,
}

impl ScalingEntry {
    pub const fn uniform(points: f64) -> Self {
        Self {
            effect_points: points,
            stat_points: points,
        }
    }
}

const NEUTRAL_ENTRY: ScalingEntry = ScalingEntry::uniform(1.0);

/// Host-provided scaling data, read-only during trials.
#[derive(Debug, Clone, Default)]
pub struct ScalingCurves {
    by_state: HashMap<(ItemId, ItemLevelState), ScalingEntry>,
    base: HashMap<ItemId, ScalingEntry>,
}

impl ScalingCurves {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_base(&mut self, item: ItemId, entry: ScalingEntry) {
        self.base.insert(item, entry);
    }

    pub fn set_state(&mut self, item: ItemId, state: ItemLevelState, entry: ScalingEntry) {
        self.by_state.insert((item, state), entry);
    }

    fn entry(&self, item: ItemId, state: ItemLevelState) -> ScalingEntry {
        self.by_state
            .get(&(item, state))
            .or_else(|| self.base.get(&item))
            .copied()
            .unwrap_or(NEUTRAL_ENTRY)
    }

    /// Scaled magnitude for a non-stat coefficient (proc chances, cooldown
    /// reduction). Pure function of its inputs.
    pub fn item_effect_scaling(&self, item: ItemId, coefficient: f64, state: ItemLevelState) -> f64 {
        coefficient * self.entry(item, state).effect_points
    }

    /// Scaled magnitude routed through the stat-budget curve (stat payloads).
    pub fn item_effect_scaling_stat(
        &self,
        item: ItemId,
        coefficient: f64,
        state: ItemLevelState,
    ) -> f64 {
        coefficient * self.entry(item, state).stat_points
    }
}
