use serde::{Deserialize, Serialize};

/// Tire compound fitted to the car.
///
/// Slicks (Soft/Medium/Hard) are dry-weather tires; Inter and Wet are
/// grooved rain tires. The performance rank feeds the urgency estimator:
/// faster, softer rubber wears sooner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TireCompound {
    Soft,
    Medium,
    Hard,
    Inter,
    Wet,
}

impl TireCompound {
    pub const ALL: [TireCompound; 5] = [
        TireCompound::Soft,
        TireCompound::Medium,
        TireCompound::Hard,
        TireCompound::Inter,
        TireCompound::Wet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TireCompound::Soft => "SOFT",
            TireCompound::Medium => "MEDIUM",
            TireCompound::Hard => "HARD",
            TireCompound::Inter => "INTER",
            TireCompound::Wet => "WET",
        }
    }

    /// Single-letter sidewall marking.
    pub fn letter(&self) -> &'static str {
        match self {
            TireCompound::Soft => "S",
            TireCompound::Medium => "M",
            TireCompound::Hard => "H",
            TireCompound::Inter => "I",
            TireCompound::Wet => "W",
        }
    }

    /// True for the grooved rain tires (Inter/Wet).
    pub fn is_rain_tire(&self) -> bool {
        matches!(self, TireCompound::Inter | TireCompound::Wet)
    }

    /// Next compound in display order, wrapping around. Used by the
    /// telemetry panel's compound selector.
    pub fn cycle(&self) -> TireCompound {
        match self {
            TireCompound::Soft => TireCompound::Medium,
            TireCompound::Medium => TireCompound::Hard,
            TireCompound::Hard => TireCompound::Inter,
            TireCompound::Inter => TireCompound::Wet,
            TireCompound::Wet => TireCompound::Soft,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "SOFT" | "S" => Some(TireCompound::Soft),
            "MEDIUM" | "M" => Some(TireCompound::Medium),
            "HARD" | "H" => Some(TireCompound::Hard),
            "INTER" | "I" => Some(TireCompound::Inter),
            "WET" | "W" => Some(TireCompound::Wet),
            _ => None,
        }
    }

    /// Sidewall color, matching the real-world tire markings.
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            TireCompound::Soft => Color::Red,
            TireCompound::Medium => Color::Yellow,
            TireCompound::Hard => Color::White,
            TireCompound::Inter => Color::Green,
            TireCompound::Wet => Color::Blue,
        }
    }
}

impl std::fmt::Display for TireCompound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
