//! Equip-slot gating. Full inventory swapping lives in the host; this keeps
//! just enough bookkeeping to answer "which slots can this item occupy" and
//! to flip registered effect gates when an item leaves those slots, so
//! unequipping disables an effect without explicit teardown.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::sim::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipSlot {
    Trinket1,
    Trinket2,
    MainHand,
    OffHand,
    Ranged,
}

pub const DEFAULT_TRINKET_SLOTS: [EquipSlot; 2] = [EquipSlot::Trinket1, EquipSlot::Trinket2];

#[derive(Debug)]
struct SlotGate {
    item: ItemId,
    slots: Vec<EquipSlot>,
    enabled: Rc<Cell<bool>>,
}

/// Slot eligibility plus the enable-flags of every effect registered against
/// an item. Effects start enabled (registration happens because the
/// character owns the item) and are flipped off on unequip.
#[derive(Debug, Default)]
pub struct ItemSwap {
    eligible: HashMap<ItemId, Vec<EquipSlot>>,
    unequipped: HashSet<ItemId>,
    gates: Vec<SlotGate>,
}

impl ItemSwap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_eligible_slots(&mut self, item: ItemId, slots: Vec<EquipSlot>) {
        self.eligible.insert(item, slots);
    }

    /// Slots this item may occupy; trinket slots when nothing was declared.
    pub fn eligible_slots_for_item(&self, item: ItemId) -> Vec<EquipSlot> {
        self.eligible
            .get(&item)
            .cloned()
            .unwrap_or_else(|| DEFAULT_TRINKET_SLOTS.to_vec())
    }

    /// Register an effect's enable-flag so it tracks the item's equip state.
    pub fn register_proc_with_slots(
        &mut self,
        item: ItemId,
        enabled: Rc<Cell<bool>>,
        slots: &[EquipSlot],
    ) {
        enabled.set(!self.unequipped.contains(&item));
        self.gates.push(SlotGate {
            item,
            slots: slots.to_vec(),
            enabled,
        });
    }

    pub fn is_equipped(&self, item: ItemId) -> bool {
        !self.unequipped.contains(&item)
    }

    /// Flip every gate registered against `item`. Called by the host's swap
    /// logic when the item enters or leaves its eligible slots.
    pub fn set_item_equipped(&mut self, item: ItemId, equipped: bool) {
        if equipped {
            self.unequipped.remove(&item);
        } else {
            self.unequipped.insert(item);
        }
        for gate in &self.gates {
            if gate.item == item {
                gate.enabled.set(equipped);
            }
        }
    }

    /// Empty one slot: every item gated on it is marked unequipped and its
    /// registered effects are disabled.
    pub fn clear_slot(&mut self, slot: EquipSlot) {
        for gate in &self.gates {
            if gate.slots.contains(&slot) {
                self.unequipped.insert(gate.item);
                gate.enabled.set(false);
            }
        }
    }
}
