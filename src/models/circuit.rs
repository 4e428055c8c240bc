use serde::{Deserialize, Serialize};

/// Circuit layout class. Street circuits run between walls and carry a
/// materially higher caution-period risk than permanent road courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackCategory {
    Street,
    Permanent,
}

impl TrackCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackCategory::Street => "Street",
            TrackCategory::Permanent => "Permanent",
        }
    }
}

impl std::fmt::Display for TrackCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Long-run caution-period frequency at a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CautionHistory {
    Low,
    Medium,
    High,
}

impl CautionHistory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CautionHistory::Low => "Low",
            CautionHistory::Medium => "Medium",
            CautionHistory::High => "High",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            CautionHistory::Low => Color::Green,
            CautionHistory::Medium => Color::Yellow,
            CautionHistory::High => Color::Red,
        }
    }
}

impl std::fmt::Display for CautionHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A venue in the season directory. Coordinates feed the weather
/// datasource; category and caution history feed the risk estimator.
#[derive(Debug, Clone, Serialize)]
pub struct Circuit {
    pub country: &'static str,
    pub venue: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub category: TrackCategory,
    pub caution_history: CautionHistory,
}

/// Built-in season calendar. Read-only venue data; the advisor never
/// mutates it.
pub const CIRCUITS: &[Circuit] = &[
    Circuit { country: "Australia", venue: "Melbourne", lat: -37.8497, lon: 144.968, category: TrackCategory::Street, caution_history: CautionHistory::High },
    Circuit { country: "China", venue: "Shanghai", lat: 31.3389, lon: 121.2215, category: TrackCategory::Permanent, caution_history: CautionHistory::Medium },
    Circuit { country: "Japan", venue: "Suzuka", lat: 34.8431, lon: 136.541, category: TrackCategory::Permanent, caution_history: CautionHistory::Medium },
    Circuit { country: "Bahrain", venue: "Sakhir", lat: 26.0325, lon: 50.5106, category: TrackCategory::Permanent, caution_history: CautionHistory::Medium },
    Circuit { country: "Saudi Arabia", venue: "Jeddah", lat: 21.6319, lon: 39.1044, category: TrackCategory::Street, caution_history: CautionHistory::High },
    Circuit { country: "USA", venue: "Miami", lat: 25.958, lon: -80.2389, category: TrackCategory::Street, caution_history: CautionHistory::High },
    Circuit { country: "Canada", venue: "Montreal", lat: 45.5, lon: -73.5228, category: TrackCategory::Street, caution_history: CautionHistory::High },
    Circuit { country: "Monaco", venue: "Monaco", lat: 43.7347, lon: 7.4205, category: TrackCategory::Street, caution_history: CautionHistory::High },
    Circuit { country: "Spain", venue: "Barcelona", lat: 41.57, lon: 2.2611, category: TrackCategory::Permanent, caution_history: CautionHistory::Low },
    Circuit { country: "Austria", venue: "Spielberg", lat: 47.2197, lon: 14.7647, category: TrackCategory::Permanent, caution_history: CautionHistory::Medium },
    Circuit { country: "Great Britain", venue: "Silverstone", lat: 52.0786, lon: -1.0169, category: TrackCategory::Permanent, caution_history: CautionHistory::Medium },
    Circuit { country: "Belgium", venue: "Spa", lat: 50.4372, lon: 5.9714, category: TrackCategory::Permanent, caution_history: CautionHistory::High },
    Circuit { country: "Hungary", venue: "Budapest", lat: 47.583, lon: 19.2476, category: TrackCategory::Permanent, caution_history: CautionHistory::Low },
    Circuit { country: "Netherlands", venue: "Zandvoort", lat: 52.3888, lon: 4.5409, category: TrackCategory::Permanent, caution_history: CautionHistory::High },
    Circuit { country: "Italy", venue: "Monza", lat: 45.6156, lon: 9.2811, category: TrackCategory::Permanent, caution_history: CautionHistory::Medium },
    Circuit { country: "Azerbaijan", venue: "Baku", lat: 40.3725, lon: 49.8533, category: TrackCategory::Street, caution_history: CautionHistory::High },
    Circuit { country: "Singapore", venue: "Singapore", lat: 1.2914, lon: 103.864, category: TrackCategory::Street, caution_history: CautionHistory::High },
    Circuit { country: "USA", venue: "Austin", lat: 30.1328, lon: -97.6411, category: TrackCategory::Permanent, caution_history: CautionHistory::Medium },
    Circuit { country: "Mexico", venue: "Mexico City", lat: 19.4042, lon: -99.0907, category: TrackCategory::Permanent, caution_history: CautionHistory::Medium },
    Circuit { country: "Brazil", venue: "Sao Paulo", lat: -23.7036, lon: -46.6997, category: TrackCategory::Permanent, caution_history: CautionHistory::Medium },
    Circuit { country: "USA", venue: "Las Vegas", lat: 36.1147, lon: -115.1728, category: TrackCategory::Street, caution_history: CautionHistory::High },
    Circuit { country: "Qatar", venue: "Lusail", lat: 25.4223, lon: 51.4556, category: TrackCategory::Permanent, caution_history: CautionHistory::Medium },
    Circuit { country: "Abu Dhabi", venue: "Yas Marina", lat: 24.4672, lon: 54.6031, category: TrackCategory::Permanent, caution_history: CautionHistory::Medium },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_is_populated() {
        assert_eq!(CIRCUITS.len(), 23);
        assert!(CIRCUITS.iter().any(|c| c.venue == "Monaco"));
        assert!(CIRCUITS.iter().any(|c| c.venue == "Monza"));
    }

    #[test]
    fn street_circuits_carry_high_caution_history() {
        // Every street circuit in the current calendar is a High venue.
        for circuit in CIRCUITS {
            if circuit.category == TrackCategory::Street {
                assert_eq!(circuit.caution_history, CautionHistory::High);
            }
        }
    }

    #[test]
    fn coordinates_are_plausible() {
        for circuit in CIRCUITS {
            assert!(circuit.lat.abs() <= 90.0, "{} latitude", circuit.venue);
            assert!(circuit.lon.abs() <= 180.0, "{} longitude", circuit.venue);
        }
    }
}
