use crate::models::{Severity, TireCompound};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Per-decision car state supplied fresh on every advisor run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub tire_age_laps: f64,
    pub compound: TireCompound,
    pub caution_active: bool,
}

impl Default for TelemetrySnapshot {
    fn default() -> Self {
        Self {
            tire_age_laps: 15.0,
            compound: TireCompound::Medium,
            caution_active: false,
        }
    }
}

/// Ordered record of every compound used so far in the session, oldest
/// first. Append-only: the strategy core reads it, only the session owner
/// records new stints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StintHistory {
    compounds: Vec<TireCompound>,
}

impl StintHistory {
    pub fn starting_on(compound: TireCompound) -> Self {
        Self {
            compounds: vec![compound],
        }
    }

    /// Record a completed stint. Called when the car actually pits.
    pub fn record(&mut self, compound: TireCompound) {
        self.compounds.push(compound);
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.compounds.len() {
            self.compounds.remove(index);
        }
    }

    pub fn compounds(&self) -> &[TireCompound] {
        &self.compounds
    }

    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }
}

/// A row in the pit-wall strategy log: the call that was made and the
/// telemetry it was made on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyLogEntry {
    pub time: DateTime<Local>,
    pub compound: TireCompound,
    pub laps: f64,
    pub call: String,
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_appends_in_order() {
        let mut history = StintHistory::starting_on(TireCompound::Soft);
        history.record(TireCompound::Medium);
        history.record(TireCompound::Soft);
        assert_eq!(
            history.compounds(),
            &[TireCompound::Soft, TireCompound::Medium, TireCompound::Soft]
        );
    }

    #[test]
    fn remove_out_of_bounds_is_a_no_op() {
        let mut history = StintHistory::starting_on(TireCompound::Hard);
        history.remove(5);
        assert_eq!(history.len(), 1);
        history.remove(0);
        assert!(history.is_empty());
    }
}
