//! Mamdani-style fuzzy inference for pit-stop urgency.
//!
//! Maps {tire age in laps, compound performance rank, weather severity}
//! onto a crisp urgency score in [0, 10]. AND is min, aggregation is max,
//! defuzzification is the discretized centroid of the clipped output sets.

/// Triangular membership: 0 outside [a, c], peak 1 at b.
///
/// The peak test comes first so degenerate shapes (a == b or b == c) keep
/// their full-membership vertex: a brand-new tire is fully NEW, and the
/// top of a right-triangle output set is fully inside it.
pub fn triangular(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if x == b {
        return 1.0;
    }
    if x <= a || x >= c {
        return 0.0;
    }
    if x < b {
        (x - a) / (b - a)
    } else {
        (c - x) / (c - b)
    }
}

/// Trapezoidal membership: 0 outside [a, d], plateau 1 on [b, c].
///
/// The plateau test comes first for the same reason: a set whose plateau
/// reaches the universe edge (c == d) saturates there instead of snapping
/// to zero.
pub fn trapezoidal(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if x >= b && x <= c {
        return 1.0;
    }
    if x <= a || x >= d {
        return 0.0;
    }
    if x < b {
        (x - a) / (b - a)
    } else {
        (d - x) / (d - c)
    }
}

/// Linguistic urgency levels of the output universe [0, 10].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UrgencyLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl UrgencyLevel {
    const ALL: [UrgencyLevel; 5] = [
        UrgencyLevel::VeryLow,
        UrgencyLevel::Low,
        UrgencyLevel::Medium,
        UrgencyLevel::High,
        UrgencyLevel::VeryHigh,
    ];

    /// Output membership shape for this level.
    fn membership(&self, x: f64) -> f64 {
        match self {
            UrgencyLevel::VeryLow => triangular(x, 0.0, 0.0, 3.0),
            UrgencyLevel::Low => triangular(x, 2.0, 4.0, 6.0),
            UrgencyLevel::Medium => triangular(x, 5.0, 7.0, 9.0),
            UrgencyLevel::High => triangular(x, 8.0, 9.0, 10.0),
            UrgencyLevel::VeryHigh => triangular(x, 9.0, 10.0, 10.0),
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Fuzzified tire-age memberships over the 0-60 lap universe.
struct TireAgeSets {
    new: f64,
    early: f64,
    mid: f64,
    late: f64,
    critical: f64,
}

impl TireAgeSets {
    fn fuzzify(age_laps: f64) -> Self {
        Self {
            new: triangular(age_laps, 0.0, 0.0, 10.0),
            early: triangular(age_laps, 5.0, 15.0, 25.0),
            mid: triangular(age_laps, 20.0, 30.0, 40.0),
            late: triangular(age_laps, 35.0, 45.0, 55.0),
            critical: trapezoidal(age_laps, 50.0, 55.0, 60.0, 60.0),
        }
    }
}

/// Fuzzified compound memberships over the 0-10 performance-rank scale
/// (Hard=3, Medium=5, Soft=7, Inter=9, Wet=10).
struct CompoundSets {
    hard: f64,
    medium: f64,
    soft: f64,
    wet: f64,
}

impl CompoundSets {
    fn fuzzify(rank: f64) -> Self {
        Self {
            hard: trapezoidal(rank, 0.0, 0.0, 2.0, 4.0),
            medium: triangular(rank, 2.0, 5.0, 8.0),
            soft: triangular(rank, 6.0, 8.0, 9.0),
            wet: trapezoidal(rank, 8.0, 9.0, 10.0, 10.0),
        }
    }

    /// Strongest slick membership. Rain on any slick is an emergency.
    fn slick(&self) -> f64 {
        self.hard.max(self.medium).max(self.soft)
    }
}

/// Fuzzified weather memberships over the 0-100 severity scale.
struct WeatherSets {
    clear: f64,
    rain: f64,
}

impl WeatherSets {
    fn fuzzify(severity: f64) -> Self {
        // An OVERCAST set tri(30,50,70) would sit between these two, but
        // no rule consumes it; only CLEAR and RAIN drive the output.
        Self {
            clear: trapezoidal(severity, 0.0, 0.0, 20.0, 40.0),
            rain: trapezoidal(severity, 60.0, 80.0, 100.0, 100.0),
        }
    }
}

const CENTROID_STEP: f64 = 0.5;
const CENTROID_STEPS: usize = 20; // samples [0, 10] inclusive

/// Estimate pit urgency in [0, 10].
///
/// Pure and total: out-of-range inputs saturate to 0 membership, and when
/// no rule fires at all the score degrades to 0 rather than dividing by
/// zero. The caution-period urgency boost is applied by the advisor, not
/// here.
pub fn estimate_urgency(tire_age_laps: f64, compound_rank: f64, weather_severity: f64) -> f64 {
    let age = TireAgeSets::fuzzify(tire_age_laps);
    let compound = CompoundSets::fuzzify(compound_rank);
    let weather = WeatherSets::fuzzify(weather_severity);

    // Rule base: (antecedent strength, consequent level). Several rules
    // may reinforce the same level; aggregation below takes the max.
    let rules: [(f64, UrgencyLevel); 7] = [
        (age.critical, UrgencyLevel::VeryHigh),
        (age.late, UrgencyLevel::High),
        (age.mid, UrgencyLevel::Medium),
        (age.early, UrgencyLevel::Low),
        (age.new, UrgencyLevel::VeryLow),
        // Rain on slicks: get off the dry tire regardless of its age.
        (weather.rain.min(compound.slick()), UrgencyLevel::VeryHigh),
        // Clear track on a wet tire: the crossover is just as urgent.
        (weather.clear.min(compound.wet), UrgencyLevel::VeryHigh),
    ];

    let mut aggregated = [0.0_f64; 5];
    for (strength, level) in rules {
        let slot = &mut aggregated[level.index()];
        if strength > *slot {
            *slot = strength;
        }
    }

    // Discretized centroid over the clipped-and-unioned output sets.
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for step in 0..=CENTROID_STEPS {
        let x = step as f64 * CENTROID_STEP;
        let membership = UrgencyLevel::ALL
            .iter()
            .map(|level| level.membership(x).min(aggregated[level.index()]))
            .fold(0.0_f64, f64::max);
        numerator += x * membership;
        denominator += membership;
    }

    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn triangular_shape() {
        assert_relative_eq!(triangular(15.0, 5.0, 15.0, 25.0), 1.0);
        assert_relative_eq!(triangular(10.0, 5.0, 15.0, 25.0), 0.5);
        assert_relative_eq!(triangular(20.0, 5.0, 15.0, 25.0), 0.5);
        assert_relative_eq!(triangular(5.0, 5.0, 15.0, 25.0), 0.0);
        assert_relative_eq!(triangular(25.0, 5.0, 15.0, 25.0), 0.0);
    }

    #[test]
    fn triangular_degenerate_peaks_stay_inside() {
        // Left-degenerate: the vertex itself has full membership.
        assert_relative_eq!(triangular(0.0, 0.0, 0.0, 10.0), 1.0);
        assert_relative_eq!(triangular(5.0, 0.0, 0.0, 10.0), 0.5);
        // Right-degenerate likewise.
        assert_relative_eq!(triangular(10.0, 9.0, 10.0, 10.0), 1.0);
        assert_relative_eq!(triangular(9.5, 9.0, 10.0, 10.0), 0.5);
    }

    #[test]
    fn trapezoidal_shape() {
        assert_relative_eq!(trapezoidal(30.0, 0.0, 0.0, 20.0, 40.0), 0.5);
        assert_relative_eq!(trapezoidal(10.0, 0.0, 0.0, 20.0, 40.0), 1.0);
        assert_relative_eq!(trapezoidal(0.0, 0.0, 0.0, 20.0, 40.0), 1.0);
        assert_relative_eq!(trapezoidal(40.0, 0.0, 0.0, 20.0, 40.0), 0.0);
        assert_relative_eq!(trapezoidal(57.0, 50.0, 55.0, 60.0, 60.0), 1.0);
        assert_relative_eq!(trapezoidal(52.5, 50.0, 55.0, 60.0, 60.0), 0.5);
        // Plateau reaching the universe edge saturates instead of dropping.
        assert_relative_eq!(trapezoidal(60.0, 50.0, 55.0, 60.0, 60.0), 1.0);
    }

    #[test]
    fn mid_stint_medium_in_the_dry_is_exactly_low() {
        // Age 15 peaks the EARLY set, rank 5 peaks MEDIUM, severity 10 is
        // fully CLEAR: only the EARLY->LOW rule fires at strength 1, so
        // the centroid of the full LOW triangle is the answer.
        assert_relative_eq!(estimate_urgency(15.0, 5.0, 10.0), 4.0);
    }

    #[test]
    fn worn_out_hard_tire_is_critical() {
        // Age 55 sits on the CRITICAL plateau; nothing else fires, so the
        // centroid samples only the VERY_HIGH triangle (points 9.5 and 10
        // of the grid): (9.5 * 0.5 + 10.0) / 1.5.
        assert_relative_eq!(estimate_urgency(55.0, 3.0, 10.0), 59.0 / 6.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_activation_degrades_to_zero() {
        // Age 70 is beyond every age set and the dry slick triggers no
        // weather rule: empty output set, score 0 rather than NaN.
        assert_relative_eq!(estimate_urgency(70.0, 5.0, 10.0), 0.0);
    }

    #[test]
    fn rain_on_slicks_outranks_fresh_rubber() {
        let dry = estimate_urgency(5.0, 5.0, 10.0);
        let rain = estimate_urgency(5.0, 5.0, 95.0);
        assert!(
            rain > dry,
            "rain {rain} should beat dry {dry} on a fresh slick"
        );
        assert!(rain > 2.0);
    }

    #[test]
    fn wet_tire_on_a_drying_track_is_urgent() {
        let clear_on_wets = estimate_urgency(5.0, 10.0, 10.0);
        let rain_on_wets = estimate_urgency(5.0, 10.0, 95.0);
        assert!(clear_on_wets > rain_on_wets);
        assert!(clear_on_wets > 4.0);
    }

    #[test]
    fn urgency_is_monotone_in_tire_age() {
        // Holding compound and weather fixed, older tires never look
        // fresher than younger ones.
        for (rank, severity) in [(3.0, 10.0), (5.0, 10.0), (7.0, 45.0)] {
            let mut previous = 0.0;
            for age in 0..=60 {
                let urgency = estimate_urgency(age as f64, rank, severity);
                assert!(
                    urgency + 1e-9 >= previous,
                    "urgency dipped at age {age} (rank {rank}, severity {severity}): \
                     {urgency} < {previous}"
                );
                previous = urgency;
            }
        }
    }

    proptest! {
        #[test]
        fn urgency_stays_in_range(
            age in -10.0..120.0_f64,
            rank in 0.0..12.0_f64,
            severity in -20.0..150.0_f64,
        ) {
            let urgency = estimate_urgency(age, rank, severity);
            prop_assert!((0.0..=10.0).contains(&urgency));
        }

        #[test]
        fn urgency_is_deterministic(
            age in 0.0..80.0_f64,
            rank in 0.0..10.0_f64,
            severity in 0.0..100.0_f64,
        ) {
            let first = estimate_urgency(age, rank, severity);
            let second = estimate_urgency(age, rank, severity);
            prop_assert_eq!(first, second);
        }
    }
}
