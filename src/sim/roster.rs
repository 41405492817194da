//! Active-target topology: an ordered, read-mostly view of the encounter's
//! live targets. The spread distributor walks it in order for cleave and
//! draws uniform indices into it for randomized selection.

use serde::Serialize;

/// Opaque handle for one encounter target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TargetId(pub u32);

/// Ordered sequence of currently active targets. The host adds and removes
/// targets as they spawn and die; ordering of the survivors is stable.
#[derive(Debug, Clone, Default)]
pub struct TargetRoster {
    targets: Vec<TargetId>,
}

impl TargetRoster {
    /// Roster with `count` targets with ids `0..count`.
    pub fn new(count: usize) -> Self {
        Self {
            targets: (0..count as u32).map(TargetId).collect(),
        }
    }

    pub fn from_ids(targets: Vec<TargetId>) -> Self {
        Self { targets }
    }

    pub fn active_count(&self) -> usize {
        self.targets.len()
    }

    pub fn target_at(&self, index: usize) -> Option<TargetId> {
        self.targets.get(index).copied()
    }

    pub fn position(&self, target: TargetId) -> Option<usize> {
        self.targets.iter().position(|&t| t == target)
    }

    /// Next active target after `target` in roster order, wrapping at the
    /// end. Returns the first target when `target` is not in the roster,
    /// and None when the roster is empty.
    pub fn next_active_after(&self, target: TargetId) -> Option<TargetId> {
        if self.targets.is_empty() {
            return None;
        }
        match self.position(target) {
            Some(i) => self.target_at((i + 1) % self.targets.len()),
            None => self.target_at(0),
        }
    }

    pub fn add_target(&mut self, target: TargetId) {
        if self.position(target).is_none() {
            self.targets.push(target);
        }
    }

    pub fn remove_target(&mut self, target: TargetId) {
        self.targets.retain(|&t| t != target);
    }
}
