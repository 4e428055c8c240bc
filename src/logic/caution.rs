//! Caution-period risk from a fixed conditional-probability table.
//!
//! Three small discrete dimensions index the table: circuit layout class,
//! coarse weather, and the venue's historical caution frequency. No data
//! is fetched and nothing is learned; the table is calibration.

use crate::models::{CautionHistory, TrackCategory, WeatherCategory};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CautionEntry {
    pub track: TrackCategory,
    pub weather: WeatherCategory,
    pub history: CautionHistory,
    pub probability: f64,
}

fn entry(
    track: TrackCategory,
    weather: WeatherCategory,
    history: CautionHistory,
    probability: f64,
) -> CautionEntry {
    CautionEntry {
        track,
        weather,
        history,
        probability,
    }
}

/// Conditional-probability table for a caution period occurring.
///
/// Probabilities rise monotonically with street-circuit-ness, wetness and
/// historical caution frequency. Injectable so alternate series
/// calibrations can replace the defaults without code change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CautionRiskTable {
    pub entries: Vec<CautionEntry>,
    /// Returned for any combination missing from the table: insufficient
    /// data reads as a coin flip, not an error.
    pub fallback: f64,
}

impl Default for CautionRiskTable {
    fn default() -> Self {
        use CautionHistory::{High, Low, Medium};
        use TrackCategory::{Permanent, Street};
        use WeatherCategory::{Dry, Wet};

        Self {
            entries: vec![
                entry(Permanent, Dry, Low, 0.1),
                entry(Permanent, Dry, Medium, 0.3),
                entry(Permanent, Dry, High, 0.5),
                entry(Permanent, Wet, Low, 0.4),
                entry(Permanent, Wet, Medium, 0.6),
                entry(Permanent, Wet, High, 0.8),
                entry(Street, Dry, Low, 0.3),
                entry(Street, Dry, Medium, 0.5),
                entry(Street, Dry, High, 0.7),
                entry(Street, Wet, Low, 0.7),
                entry(Street, Wet, Medium, 0.8),
                entry(Street, Wet, High, 0.9),
            ],
            fallback: 0.5,
        }
    }
}

impl CautionRiskTable {
    /// Probability in [0, 1] that a caution period occurs under the given
    /// conditions. Deterministic lookup; never fails.
    pub fn probability(
        &self,
        track: TrackCategory,
        weather: WeatherCategory,
        history: CautionHistory,
    ) -> f64 {
        self.entries
            .iter()
            .find(|e| e.track == track && e.weather == weather && e.history == history)
            .map(|e| e.probability)
            .unwrap_or(self.fallback)
    }
}
