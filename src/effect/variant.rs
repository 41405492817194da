//! Loot-table variant expansion: one logical item exists as several
//! quality-tier variants, each with its own item id. One effect definition
//! registers once per tier, with a tier label appended to aura names so
//! otherwise-identical auras do not collide in the host's registries.

use std::collections::HashMap;

use serde::Serialize;

use crate::sim::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemVersion {
    Base,
    RaidFinder,
    Normal,
    Heroic,
    Warforged,
    HeroicWarforged,
    Flexible,
}

impl ItemVersion {
    /// Short human-readable tag for aura-label disambiguation.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::RaidFinder => "LFR",
            Self::Normal => "Normal",
            Self::Heroic => "Heroic",
            Self::Warforged => "Warforged",
            Self::HeroicWarforged => "Heroic Warforged",
            Self::Flexible => "Flex",
        }
    }
}

/// Tier -> item id for one logical item. May omit tiers that do not exist
/// for the item; ids are unique within a map. Iteration order is
/// unspecified and must not be relied upon.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemVersionMap {
    versions: HashMap<ItemVersion, ItemId>,
}

impl ItemVersionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(ItemVersion, ItemId)]) -> Self {
        Self {
            versions: pairs.iter().copied().collect(),
        }
    }

    pub fn insert(&mut self, version: ItemVersion, item: ItemId) {
        self.versions.insert(version, item);
    }

    pub fn get(&self, version: ItemVersion) -> Option<ItemId> {
        self.versions.get(&version).copied()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Invoke `register` exactly once per present tier with the tier, its
    /// item id, and the tier label.
    pub fn register_all(&self, mut register: impl FnMut(ItemVersion, ItemId, &str)) {
        for (&version, &item) in &self.versions {
            register(version, item, version.label());
        }
    }
}
