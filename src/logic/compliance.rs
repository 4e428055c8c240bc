//! Tire-regulation compliance check.
//!
//! Evaluates the full compound sequence for the session (history plus the
//! tire currently fitted) against two mutually exclusive regimes keyed on
//! weather. Always returns a structured verdict; an invalid result is an
//! expected outcome, not an error.

use crate::models::{ComplianceReport, ComplianceTag, TireCompound, WeatherCategory};
use std::collections::HashSet;

const MSG_WET_TIRE_REQUIRED: &str = "WET RACE: MUST USE WET/INTER";
const MSG_DUPLICATE: &str = "DUPLICATE COMPOUND USED";
const MSG_TWO_COMPOUNDS: &str = "MUST USE 2 DIFFERENT COMPOUNDS";
const MSG_WET_OK: &str = "WET RACE: REGULATION OK";
const MSG_DRY_OK: &str = "REGULATION SATISFIED";

fn has_duplicates(compounds: &[TireCompound]) -> bool {
    let distinct: HashSet<TireCompound> = compounds.iter().copied().collect();
    distinct.len() < compounds.len()
}

fn distinct_count(compounds: &[TireCompound]) -> usize {
    let distinct: HashSet<TireCompound> = compounds.iter().copied().collect();
    distinct.len()
}

fn invalid(message: &'static str) -> ComplianceReport {
    ComplianceReport {
        valid: false,
        message,
        tag: ComplianceTag::Warning,
    }
}

/// Check the stint history plus the current tire against the regulations.
///
/// Wet races demand that a rain tire appears somewhere in the sequence;
/// dry races demand two distinct slick compounds (rain tires are ignored
/// in that count). In both regimes repeating a compound is a violation,
/// checked before the distinct-count rule.
pub fn validate_compliance(
    history: &[TireCompound],
    current: TireCompound,
    weather: WeatherCategory,
) -> ComplianceReport {
    let mut sequence: Vec<TireCompound> = history.to_vec();
    sequence.push(current);

    match weather {
        WeatherCategory::Wet => {
            if !sequence.iter().any(|c| c.is_rain_tire()) {
                return invalid(MSG_WET_TIRE_REQUIRED);
            }
            if has_duplicates(&sequence) {
                return invalid(MSG_DUPLICATE);
            }
            if distinct_count(&sequence) < 2 {
                return invalid(MSG_TWO_COMPOUNDS);
            }
            ComplianceReport {
                valid: true,
                message: MSG_WET_OK,
                tag: ComplianceTag::WetExempt,
            }
        }
        WeatherCategory::Dry => {
            let dry_compounds: Vec<TireCompound> = sequence
                .iter()
                .copied()
                .filter(|c| !c.is_rain_tire())
                .collect();
            if has_duplicates(&dry_compounds) {
                return invalid(MSG_DUPLICATE);
            }
            if distinct_count(&dry_compounds) < 2 {
                return invalid(MSG_TWO_COMPOUNDS);
            }
            ComplianceReport {
                valid: true,
                message: MSG_DRY_OK,
                tag: ComplianceTag::Ok,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TireCompound::{Hard, Inter, Medium, Soft, Wet};
    use WeatherCategory::{Dry, Wet as WetRace};

    #[test]
    fn dry_two_distinct_slicks_is_compliant() {
        let report = validate_compliance(&[Soft], Hard, Dry);
        assert!(report.valid);
        assert_eq!(report.tag, ComplianceTag::Ok);
        assert_eq!(report.message, "REGULATION SATISFIED");
    }

    #[test]
    fn dry_single_compound_violates_two_compound_rule() {
        let report = validate_compliance(&[Soft], Soft, Dry);
        assert!(!report.valid);
        assert_eq!(report.tag, ComplianceTag::Warning);
        assert_eq!(report.message, "DUPLICATE COMPOUND USED");

        let report = validate_compliance(&[], Medium, Dry);
        assert!(!report.valid);
        assert_eq!(report.message, "MUST USE 2 DIFFERENT COMPOUNDS");
    }

    #[test]
    fn dry_repeat_is_flagged_before_distinct_count() {
        // Soft-Soft-Hard has two distinct compounds but still repeats one;
        // the duplicate verdict wins.
        let report = validate_compliance(&[Soft, Soft], Hard, Dry);
        assert!(!report.valid);
        assert_eq!(report.message, "DUPLICATE COMPOUND USED");
    }

    #[test]
    fn dry_count_ignores_rain_tires() {
        // Inter does not count toward the two-slick requirement.
        let report = validate_compliance(&[Inter], Soft, Dry);
        assert!(!report.valid);
        assert_eq!(report.message, "MUST USE 2 DIFFERENT COMPOUNDS");

        // But it also does not trip the duplicate check for slicks.
        let report = validate_compliance(&[Inter, Soft], Hard, Dry);
        assert!(report.valid);
    }

    #[test]
    fn wet_race_without_rain_tire_is_invalid() {
        let report = validate_compliance(&[Soft], Hard, WetRace);
        assert!(!report.valid);
        assert_eq!(report.tag, ComplianceTag::Warning);
        assert_eq!(report.message, "WET RACE: MUST USE WET/INTER");
    }

    #[test]
    fn wet_race_with_both_rain_compounds_is_exempt() {
        let report = validate_compliance(&[Wet], Inter, WetRace);
        assert!(report.valid);
        assert_eq!(report.tag, ComplianceTag::WetExempt);
        assert_eq!(report.message, "WET RACE: REGULATION OK");
    }

    #[test]
    fn wet_race_repeat_is_flagged() {
        let report = validate_compliance(&[Wet, Inter], Wet, WetRace);
        assert!(!report.valid);
        assert_eq!(report.message, "DUPLICATE COMPOUND USED");
    }

    #[test]
    fn wet_race_single_rain_tire_still_needs_variety() {
        let report = validate_compliance(&[], Wet, WetRace);
        assert!(!report.valid);
        assert_eq!(report.message, "MUST USE 2 DIFFERENT COMPOUNDS");
    }

    #[test]
    fn verdict_is_deterministic() {
        let a = validate_compliance(&[Soft, Medium], Hard, Dry);
        let b = validate_compliance(&[Soft, Medium], Hard, Dry);
        assert_eq!(a, b);
    }
}
