use serde::{Deserialize, Serialize};

/// How loudly the strategy call should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Neutral,
    Strategic,
    Elevated,
    Critical,
    Caution,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Neutral => "Neutral",
            Severity::Strategic => "Strategic",
            Severity::Elevated => "Elevated",
            Severity::Critical => "Critical",
            Severity::Caution => "Caution",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Severity::Neutral => Color::White,
            Severity::Strategic => Color::LightBlue,
            Severity::Elevated => Color::LightYellow,
            Severity::Critical => Color::Red,
            Severity::Caution => Color::Yellow,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome class of the tire-regulation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceTag {
    Ok,
    Warning,
    WetExempt,
}

impl ComplianceTag {
    pub fn symbol(&self) -> &'static str {
        match self {
            ComplianceTag::Ok => "✔",
            ComplianceTag::Warning => "⚠",
            ComplianceTag::WetExempt => "🌧",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            ComplianceTag::Ok => Color::Green,
            ComplianceTag::Warning => Color::Red,
            ComplianceTag::WetExempt => Color::LightBlue,
        }
    }
}

/// Structured verdict of the tire-regulation validator. An invalid result
/// is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    pub valid: bool,
    pub message: &'static str,
    pub tag: ComplianceTag,
}

/// Final output of one advisor run.
#[derive(Debug, Clone, Serialize)]
pub struct PitAdvice {
    pub call: &'static str,
    pub reason: &'static str,
    pub severity: Severity,
    pub urgency: f64,
    pub caution_probability: f64,
    pub compliance: ComplianceReport,
}
