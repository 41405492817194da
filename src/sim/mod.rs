//! Per-trial simulation context and the contract types shared with the host
//! engine: virtual clock, seeded RNG, active-target roster, trace capture,
//! and per-character state. Everything here is single-threaded within one
//! trial; independent trials each build their own `Sim`.

pub mod buff;
pub mod character;
pub mod cooldown;
pub mod events;
pub mod rng;
pub mod roster;
pub mod slots;
pub mod trace;

pub use buff::TimedStatBuff;
pub use character::{Character, Class, Spec, Stat, StatBonusSource};
pub use cooldown::{shared_cooldown, Cooldown, SharedCooldown};
pub use events::{callback, proc_mask, ActionId, Outcome, ProcEvent, SpellSchool};
pub use rng::Rng;
pub use roster::{TargetId, TargetRoster};
pub use slots::{EquipSlot, ItemSwap};
pub use trace::{serialize_events_json, TraceCollector, TraceEvent, TraceMode};

/// Virtual-clock time in seconds from trial start.
pub type SimTime = f64;

/// Item identifier (one per loot-table variant of a logical item).
pub type ItemId = u32;

/// Per-trial context passed into every proc handler and distributor call.
///
/// The host engine owns the event loop and advances [Sim::now] between
/// callbacks; handlers never block or suspend.
#[derive(Debug)]
pub struct Sim {
    pub now: SimTime,
    pub rng: Rng,
    pub roster: TargetRoster,
    pub trace: TraceCollector,
}

impl Sim {
    pub fn new(seed: u64, roster: TargetRoster) -> Self {
        Self {
            now: 0.0,
            rng: Rng::new(seed),
            roster,
            trace: TraceCollector::new(TraceMode::Off),
        }
    }

    pub fn with_trace(mut self, mode: TraceMode) -> Self {
        self.trace = TraceCollector::new(mode);
        self
    }

    /// Advance the virtual clock. The host calls this between events.
    pub fn advance(&mut self, dt: SimTime) {
        self.now += dt;
    }

    /// Uniform roll in `[lo, hi)`, labeled for reproducibility debugging.
    pub fn roll(&mut self, label: &str, lo: f64, hi: f64) -> f64 {
        let value = self.rng.uniform(lo, hi);
        self.trace.record_roll(label, value, self.now);
        value
    }

    /// Uniform index roll in `[0, n)`. Returns 0 when `n` is 0; callers gate
    /// on roster size before drawing.
    pub fn roll_index(&mut self, label: &str, n: usize) -> usize {
        let value = self.rng.index(n);
        self.trace.record_roll(label, value as f64, self.now);
        value
    }

    /// Chance roll: true with probability `chance` (clamped to `[0, 1]`).
    pub fn proc_roll(&mut self, label: &str, chance: f64) -> bool {
        let value = self.rng.next_f64();
        self.trace.record_roll(label, value, self.now);
        value < chance.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proc_roll_extremes() {
        let mut sim = Sim::new(42, TargetRoster::new(1));
        for _ in 0..50 {
            assert!(sim.proc_roll("always", 1.0));
            assert!(!sim.proc_roll("never", 0.0));
        }
    }

    #[test]
    fn roll_stays_in_range() {
        let mut sim = Sim::new(7, TargetRoster::new(1));
        for _ in 0..200 {
            let v = sim.roll("range", 2.0, 5.0);
            assert!((2.0..5.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn advance_moves_clock_forward() {
        let mut sim = Sim::new(1, TargetRoster::new(1));
        sim.advance(1.5);
        sim.advance(0.5);
        assert_eq!(sim.now, 2.0);
    }
}
