use serde::{Deserialize, Serialize};

/// Coarse weather class consumed by the caution-risk estimator and the
/// tire-regulation validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCategory {
    Dry,
    Wet,
}

impl WeatherCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCategory::Dry => "DRY",
            WeatherCategory::Wet => "WET",
        }
    }
}

impl std::fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeatherGlyph {
    #[default]
    Sun,
    Cloud,
    Rain,
    Heavy,
}

impl WeatherGlyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherGlyph::Sun => "☀",
            WeatherGlyph::Cloud => "☁",
            WeatherGlyph::Rain => "🌧",
            WeatherGlyph::Heavy => "⛈",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            WeatherGlyph::Sun => Color::Yellow,
            WeatherGlyph::Cloud => Color::Gray,
            WeatherGlyph::Rain => Color::LightBlue,
            WeatherGlyph::Heavy => Color::Blue,
        }
    }
}

/// Resolved weather observation for the selected circuit.
///
/// Both signals the strategy core consumes are derived here, from the same
/// raw observation, so they cannot disagree: the categorical class
/// (`category`) and the continuous severity (`fuzzy_severity`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackWeather {
    pub status: String,
    pub detail: String,
    pub rain_probability: String,
    pub raining: bool,
    pub cloud_cover_percent: f64,
    pub glyph: WeatherGlyph,
}

impl Default for TrackWeather {
    fn default() -> Self {
        Self {
            status: "--".into(),
            detail: "Syncing...".into(),
            rain_probability: "--%".into(),
            raining: false,
            cloud_cover_percent: 10.0,
            glyph: WeatherGlyph::Sun,
        }
    }
}

impl TrackWeather {
    /// Neutral observation used when the weather datasource is down.
    pub fn unavailable() -> Self {
        Self {
            status: "ERROR".into(),
            detail: "API ERROR (DEFAULT)".into(),
            ..Self::default()
        }
    }

    /// Coarse class for the risk estimator and regulation validator.
    /// Heavy cloud without active rain still counts as Wet: the track is
    /// assumed green-flag damp.
    pub fn category(&self) -> WeatherCategory {
        if self.raining || self.cloud_cover_percent > 50.0 {
            WeatherCategory::Wet
        } else {
            WeatherCategory::Dry
        }
    }

    /// Continuous severity [0,100] for the urgency estimator. Active rain
    /// pins the value near the top of the scale; otherwise cloud cover is
    /// the proxy. Always at least as wet as `category()` implies.
    pub fn fuzzy_severity(&self) -> f64 {
        if self.raining {
            95.0
        } else {
            self.cloud_cover_percent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dry() {
        let weather = TrackWeather::default();
        assert_eq!(weather.category(), WeatherCategory::Dry);
        assert!((weather.fuzzy_severity() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rain_forces_wet_category_and_high_severity() {
        let weather = TrackWeather {
            raining: true,
            cloud_cover_percent: 20.0,
            ..TrackWeather::default()
        };
        assert_eq!(weather.category(), WeatherCategory::Wet);
        assert!((weather.fuzzy_severity() - 95.0).abs() < f64::EPSILON);
    }

    #[test]
    fn heavy_cloud_is_wet_without_rain() {
        let weather = TrackWeather {
            raining: false,
            cloud_cover_percent: 60.0,
            ..TrackWeather::default()
        };
        assert_eq!(weather.category(), WeatherCategory::Wet);
        assert!((weather.fuzzy_severity() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn severity_and_category_stay_consistent() {
        // Whenever the severity implies rain-level wetness the category
        // must be Wet as well.
        for cloud in 0..=100 {
            for raining in [false, true] {
                let weather = TrackWeather {
                    raining,
                    cloud_cover_percent: cloud as f64,
                    ..TrackWeather::default()
                };
                if weather.fuzzy_severity() >= 80.0 {
                    assert_eq!(weather.category(), WeatherCategory::Wet);
                }
            }
        }
    }
}
