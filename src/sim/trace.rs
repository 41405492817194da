//! Trace capture for debugging and calibration. Records proc fires, buff
//! activations, spread casts, and (in full mode) every labeled RNG roll;
//! serializes to JSON for offline inspection.

use serde::Serialize;

use crate::sim::roster::TargetId;
use crate::sim::SimTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceMode {
    /// Record nothing.
    Off,
    /// Record proc fires, buff activations, and spread casts.
    Procs,
    /// Additionally record every labeled RNG roll.
    Full,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    ProcFired { name: String, at: SimTime },
    BuffActivated { label: String, at: SimTime },
    SpreadCast {
        spell_id: u32,
        target: TargetId,
        damage: f64,
        at: SimTime,
    },
    Roll { label: String, value: f64, at: SimTime },
}

#[derive(Debug)]
pub struct TraceCollector {
    mode: TraceMode,
    events: Vec<TraceEvent>,
}

impl TraceCollector {
    pub fn new(mode: TraceMode) -> Self {
        Self {
            mode,
            events: Vec::new(),
        }
    }

    pub fn mode(&self) -> TraceMode {
        self.mode
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn record_proc(&mut self, name: &str, at: SimTime) {
        if self.mode != TraceMode::Off {
            self.events.push(TraceEvent::ProcFired {
                name: name.to_string(),
                at,
            });
        }
    }

    pub fn record_buff(&mut self, label: &str, at: SimTime) {
        if self.mode != TraceMode::Off {
            self.events.push(TraceEvent::BuffActivated {
                label: label.to_string(),
                at,
            });
        }
    }

    pub fn record_spread_cast(&mut self, spell_id: u32, target: TargetId, damage: f64, at: SimTime) {
        if self.mode != TraceMode::Off {
            self.events.push(TraceEvent::SpreadCast {
                spell_id,
                target,
                damage,
                at,
            });
        }
    }

    pub fn record_roll(&mut self, label: &str, value: f64, at: SimTime) {
        if self.mode == TraceMode::Full {
            self.events.push(TraceEvent::Roll {
                label: label.to_string(),
                value,
                at,
            });
        }
    }
}

/// Serialize recorded events as a JSON array string (pretty-printed).
pub fn serialize_events_json(events: &[TraceEvent]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(events)
}
