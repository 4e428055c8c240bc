//! Decision combiner: merges the three analysis modules into one call.
//!
//! The policy is a priority-ordered branch chain; the first matching
//! branch wins and the order is part of the contract. All thresholds live
//! in [`StrategyCalibration`] so alternate series rules can be swapped in
//! as configuration.

use crate::logic::caution::CautionRiskTable;
use crate::logic::compliance::validate_compliance;
use crate::logic::fuzzy::estimate_urgency;
use crate::models::{
    Circuit, ComplianceReport, PitAdvice, Severity, StintHistory, TelemetrySnapshot, TireCompound,
    TrackWeather,
};
use serde::{Deserialize, Serialize};

/// Performance rank per compound, the urgency estimator's compound input.
/// Softer and rain rubber rank higher.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CompoundRanks {
    pub hard: f64,
    pub medium: f64,
    pub soft: f64,
    pub inter: f64,
    pub wet: f64,
}

impl Default for CompoundRanks {
    fn default() -> Self {
        Self {
            hard: 3.0,
            medium: 5.0,
            soft: 7.0,
            inter: 9.0,
            wet: 10.0,
        }
    }
}

impl CompoundRanks {
    pub fn rank(&self, compound: TireCompound) -> f64 {
        match compound {
            TireCompound::Hard => self.hard,
            TireCompound::Medium => self.medium,
            TireCompound::Soft => self.soft,
            TireCompound::Inter => self.inter,
            TireCompound::Wet => self.wet,
        }
    }
}

/// Decision thresholds and the caution-period urgency override.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Above this urgency the tire situation is critical (strictly `>`).
    pub critical: f64,
    /// At or above this urgency an undercut window is open (`>=`).
    pub strategic: f64,
    /// Caution probability above which a strategic stop is upgraded.
    pub caution_risk_gate: f64,
    /// Caution probability above which a gamble stop is considered.
    pub gamble_probability: f64,
    /// Minimum urgency for the gamble branch to apply.
    pub gamble_urgency: f64,
    /// Added to urgency while a caution is live.
    pub caution_urgency_boost: f64,
    /// Urgency never exceeds this after the boost.
    pub urgency_cap: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            critical: 7.5,
            strategic: 4.5,
            caution_risk_gate: 0.3,
            gamble_probability: 0.6,
            gamble_urgency: 3.0,
            caution_urgency_boost: 2.0,
            urgency_cap: 10.0,
        }
    }
}

/// Complete immutable calibration of the strategy core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyCalibration {
    pub thresholds: Thresholds,
    pub compound_ranks: CompoundRanks,
    pub caution_table: CautionRiskTable,
}

/// One branch of the combiner's verdict, before the numeric context is
/// attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub call: &'static str,
    pub reason: &'static str,
    pub severity: Severity,
}

const fn verdict(call: &'static str, reason: &'static str, severity: Severity) -> Verdict {
    Verdict {
        call,
        reason,
        severity,
    }
}

/// Merge the module outputs into the final call. Pure and total; the
/// branches are evaluated in this exact priority order.
pub fn decide(
    thresholds: &Thresholds,
    urgency: f64,
    caution_probability: f64,
    compliance_valid: bool,
    caution_active: bool,
) -> Verdict {
    if caution_active {
        // A live caution makes the stop cheap no matter what else says.
        return verdict("BOX BOX (SC)", "Cheap Pit Stop Window", Severity::Caution);
    }
    if urgency > thresholds.critical {
        if !compliance_valid {
            return verdict(
                "BOX (CRITICAL*)",
                "High Wear but Regs Invalid!",
                Severity::Critical,
            );
        }
        return verdict(
            "BOX BOX (CRITICAL)",
            "Tire Life Critical / Wrong Tire",
            Severity::Critical,
        );
    }
    if urgency >= thresholds.strategic {
        if caution_probability > thresholds.caution_risk_gate {
            return verdict(
                "BOX (STRATEGIC + SC RISK)",
                "Undercut + High SC Chance",
                Severity::Elevated,
            );
        }
        return verdict("BOX (STRATEGIC)", "Undercut window open", Severity::Strategic);
    }
    if caution_probability > thresholds.gamble_probability && urgency > thresholds.gamble_urgency {
        return verdict("BOX (GAMBLE)", "Anticipate Safety Car", Severity::Elevated);
    }
    verdict("STAY OUT", "Pace is optimal", Severity::Neutral)
}

/// Runs the full analysis pipeline: the three independent estimators feed
/// the combiner, nothing is shared between them and no state survives the
/// call.
#[derive(Debug, Clone, Default)]
pub struct StrategyAdvisor {
    calibration: StrategyCalibration,
}

impl StrategyAdvisor {
    pub fn new(calibration: StrategyCalibration) -> Self {
        Self { calibration }
    }

    /// Produce a pit call for the current circuit, weather, telemetry and
    /// stint history. Stateless: identical inputs give identical advice.
    pub fn advise(
        &self,
        circuit: &Circuit,
        weather: &TrackWeather,
        telemetry: &TelemetrySnapshot,
        history: &StintHistory,
    ) -> PitAdvice {
        let cal = &self.calibration;
        let category = weather.category();

        let mut urgency = estimate_urgency(
            telemetry.tire_age_laps,
            cal.compound_ranks.rank(telemetry.compound),
            weather.fuzzy_severity(),
        );
        // The boost lives here, not in the estimator, so the estimator
        // stays a pure function of tire state and weather.
        if telemetry.caution_active {
            urgency = (urgency + cal.thresholds.caution_urgency_boost).min(cal.thresholds.urgency_cap);
        }

        let caution_probability = cal.caution_table.probability(
            circuit.category,
            category,
            circuit.caution_history,
        );

        let compliance: ComplianceReport =
            validate_compliance(history.compounds(), telemetry.compound, category);

        let verdict = decide(
            &cal.thresholds,
            urgency,
            caution_probability,
            compliance.valid,
            telemetry.caution_active,
        );

        tracing::debug!(
            venue = circuit.venue,
            call = verdict.call,
            urgency,
            caution_probability,
            compliant = compliance.valid,
            "advisor run"
        );

        PitAdvice {
            call: verdict.call,
            reason: verdict.reason,
            severity: verdict.severity,
            urgency,
            caution_probability,
            compliance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CautionHistory, TrackCategory};
    use approx::assert_relative_eq;

    fn thresholds() -> Thresholds {
        Thresholds::default()
    }

    #[test]
    fn live_caution_overrides_everything() {
        // Even a maxed-out, non-compliant car gets the safety-car call.
        let v = decide(&thresholds(), 9.9, 0.9, false, true);
        assert_eq!(v.call, "BOX BOX (SC)");
        assert_eq!(v.severity, Severity::Caution);
    }

    #[test]
    fn critical_branch_splits_on_compliance() {
        let v = decide(&thresholds(), 8.0, 0.1, true, false);
        assert_eq!(v.call, "BOX BOX (CRITICAL)");
        assert_eq!(v.severity, Severity::Critical);

        let v = decide(&thresholds(), 8.0, 0.1, false, false);
        assert_eq!(v.call, "BOX (CRITICAL*)");
        assert_eq!(v.reason, "High Wear but Regs Invalid!");
    }

    #[test]
    fn critical_threshold_is_strict() {
        // Exactly 7.5 is not critical; it falls through to strategic.
        let v = decide(&thresholds(), 7.5, 0.1, true, false);
        assert_eq!(v.call, "BOX (STRATEGIC)");
    }

    #[test]
    fn strategic_threshold_is_inclusive() {
        let v = decide(&thresholds(), 4.5, 0.1, true, false);
        assert_eq!(v.call, "BOX (STRATEGIC)");
        assert_eq!(v.severity, Severity::Strategic);

        let v = decide(&thresholds(), 4.499, 0.1, true, false);
        assert_eq!(v.call, "STAY OUT");
    }

    #[test]
    fn strategic_upgrades_on_caution_risk() {
        let v = decide(&thresholds(), 5.0, 0.31, true, false);
        assert_eq!(v.call, "BOX (STRATEGIC + SC RISK)");
        assert_eq!(v.severity, Severity::Elevated);

        let v = decide(&thresholds(), 5.0, 0.3, true, false);
        assert_eq!(v.call, "BOX (STRATEGIC)");
    }

    #[test]
    fn gamble_needs_both_high_risk_and_some_urgency() {
        let v = decide(&thresholds(), 3.5, 0.7, true, false);
        assert_eq!(v.call, "BOX (GAMBLE)");
        assert_eq!(v.reason, "Anticipate Safety Car");

        // Not enough urgency to gamble.
        let v = decide(&thresholds(), 3.0, 0.7, true, false);
        assert_eq!(v.call, "STAY OUT");

        // Not enough risk to gamble.
        let v = decide(&thresholds(), 3.5, 0.6, true, false);
        assert_eq!(v.call, "STAY OUT");
    }

    #[test]
    fn default_is_stay_out() {
        let v = decide(&thresholds(), 1.0, 0.1, true, false);
        assert_eq!(v.call, "STAY OUT");
        assert_eq!(v.reason, "Pace is optimal");
        assert_eq!(v.severity, Severity::Neutral);
    }

    fn permanent_medium_circuit() -> Circuit {
        Circuit {
            country: "Italy",
            venue: "Monza",
            lat: 45.6156,
            lon: 9.2811,
            category: TrackCategory::Permanent,
            caution_history: CautionHistory::Medium,
        }
    }

    fn dry_weather(cloud: f64) -> TrackWeather {
        TrackWeather {
            raining: false,
            cloud_cover_percent: cloud,
            ..TrackWeather::default()
        }
    }

    #[test]
    fn end_to_end_worn_hard_tire_is_a_critical_box() {
        let advisor = StrategyAdvisor::default();
        let telemetry = TelemetrySnapshot {
            tire_age_laps: 55.0,
            compound: TireCompound::Hard,
            caution_active: false,
        };
        let history = StintHistory::starting_on(TireCompound::Soft);

        let advice = advisor.advise(
            &permanent_medium_circuit(),
            &dry_weather(10.0),
            &telemetry,
            &history,
        );

        assert!(advice.urgency > 7.5, "urgency {} not critical", advice.urgency);
        assert_relative_eq!(advice.caution_probability, 0.3);
        assert!(advice.compliance.valid);
        assert_eq!(advice.call, "BOX BOX (CRITICAL)");
        assert_eq!(advice.severity, Severity::Critical);
    }

    #[test]
    fn caution_boost_is_capped_at_ten() {
        let advisor = StrategyAdvisor::default();
        let telemetry = TelemetrySnapshot {
            tire_age_laps: 55.0,
            compound: TireCompound::Hard,
            caution_active: true,
        };
        let history = StintHistory::starting_on(TireCompound::Soft);

        let advice = advisor.advise(
            &permanent_medium_circuit(),
            &dry_weather(10.0),
            &telemetry,
            &history,
        );

        // Base urgency is already ~9.8; the +2 boost saturates at the cap.
        assert_relative_eq!(advice.urgency, 10.0);
        // And the live caution wins the decision regardless.
        assert_eq!(advice.call, "BOX BOX (SC)");
    }

    #[test]
    fn advice_is_deterministic() {
        let advisor = StrategyAdvisor::default();
        let telemetry = TelemetrySnapshot {
            tire_age_laps: 30.0,
            compound: TireCompound::Medium,
            caution_active: false,
        };
        let history = StintHistory::starting_on(TireCompound::Soft);
        let circuit = permanent_medium_circuit();
        let weather = dry_weather(40.0);

        let a = advisor.advise(&circuit, &weather, &telemetry, &history);
        let b = advisor.advise(&circuit, &weather, &telemetry, &history);
        assert_eq!(a.call, b.call);
        assert_eq!(a.urgency, b.urgency);
        assert_eq!(a.caution_probability, b.caution_probability);
        assert_eq!(a.compliance, b.compliance);
    }
}
