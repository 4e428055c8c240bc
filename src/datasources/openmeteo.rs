use crate::error::{PitwallError, Result};
use crate::models::{Circuit, TrackWeather, WeatherGlyph};
use serde::Deserialize;

const API_BASE_URL: &str = "https://api.open-meteo.com/v1";

/// Current-conditions client for the Open-Meteo forecast API. No API key
/// required; one fetch per advisor refresh.
pub struct OpenMeteoClient {
    client: reqwest::Client,
}

// Open-Meteo API response structures
#[derive(Debug, Deserialize)]
struct OmResponse {
    current: OmCurrent,
    #[serde(default)]
    minutely_15: Option<OmMinutely>,
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    cloud_cover: f64,
    precipitation: f64,
    #[serde(default)]
    precipitation_probability: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OmMinutely {
    precipitation: Vec<f64>,
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch and classify current conditions at the circuit.
    pub async fn fetch_weather(&self, circuit: &Circuit) -> Result<TrackWeather> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&minutely_15=precipitation&current=cloud_cover,precipitation,precipitation_probability&timezone=auto",
            API_BASE_URL, circuit.lat, circuit.lon
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PitwallError::DataSourceUnavailable(format!(
                "Open-Meteo returned {}: {}",
                status, body
            )));
        }

        let om_response: OmResponse = response.json().await?;

        Ok(classify_conditions(&om_response))
    }

    /// Probe the API with a fixed coordinate; used by `pitwall check`.
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!(
            "{}/forecast?latitude=45.62&longitude=9.28&current=cloud_cover",
            API_BASE_URL
        );

        let response = self.client.get(&url).send().await?;

        Ok(response.status().is_success())
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn raw current conditions into the resolved track observation.
///
/// Active precipitation wins over the short-range forecast, which wins
/// over plain cloud cover. The thresholds mirror what race engineers care
/// about: anything over 0.1 mm is a wet track.
fn classify_conditions(response: &OmResponse) -> TrackWeather {
    let cloud = response.current.cloud_cover;
    let precip_prob = response.current.precipitation_probability.unwrap_or(0.0);
    let precip_now = response.current.precipitation;

    // Second 15-minute bucket: rain arriving within the next window.
    let rain_soon = response
        .minutely_15
        .as_ref()
        .and_then(|m| m.precipitation.get(1).copied())
        .unwrap_or(0.0);

    if precip_now > 0.1 {
        return TrackWeather {
            status: "WET".into(),
            detail: format!("RAIN: {}mm", precip_now),
            rain_probability: "100%".into(),
            raining: true,
            cloud_cover_percent: cloud,
            glyph: WeatherGlyph::Heavy,
        };
    }
    if rain_soon > 0.1 {
        return TrackWeather {
            status: "RAIN SOON".into(),
            detail: "PRECIPITATION < 15M".into(),
            rain_probability: format!("{}%", precip_prob.max(80.0)),
            raining: true,
            cloud_cover_percent: cloud,
            glyph: WeatherGlyph::Rain,
        };
    }
    if cloud > 70.0 {
        return TrackWeather {
            status: "OVERCAST".into(),
            detail: format!("CLOUD COVER: {}%", cloud),
            rain_probability: format!("{}%", precip_prob),
            raining: false,
            cloud_cover_percent: cloud,
            glyph: WeatherGlyph::Cloud,
        };
    }
    TrackWeather {
        status: "DRY".into(),
        detail: if cloud < 30.0 {
            "SUNNY".into()
        } else {
            "PARTLY CLOUDY".into()
        },
        rain_probability: format!("{}%", precip_prob),
        raining: false,
        cloud_cover_percent: cloud,
        glyph: WeatherGlyph::Sun,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherCategory;

    fn response(cloud: f64, precip_now: f64, rain_soon: Option<f64>) -> OmResponse {
        OmResponse {
            current: OmCurrent {
                cloud_cover: cloud,
                precipitation: precip_now,
                precipitation_probability: Some(40.0),
            },
            minutely_15: rain_soon.map(|v| OmMinutely {
                precipitation: vec![0.0, v],
            }),
        }
    }

    #[test]
    fn active_rain_is_wet() {
        let weather = classify_conditions(&response(85.0, 1.2, None));
        assert_eq!(weather.status, "WET");
        assert!(weather.raining);
        assert_eq!(weather.rain_probability, "100%");
        assert_eq!(weather.glyph, WeatherGlyph::Heavy);
        assert_eq!(weather.category(), WeatherCategory::Wet);
    }

    #[test]
    fn imminent_rain_counts_as_raining() {
        let weather = classify_conditions(&response(40.0, 0.0, Some(0.5)));
        assert_eq!(weather.status, "RAIN SOON");
        assert!(weather.raining);
        // Reported probability is floored at 80% once rain is on radar.
        assert_eq!(weather.rain_probability, "80%");
        assert_eq!(weather.glyph, WeatherGlyph::Rain);
    }

    #[test]
    fn heavy_cloud_is_overcast() {
        let weather = classify_conditions(&response(85.0, 0.0, Some(0.0)));
        assert_eq!(weather.status, "OVERCAST");
        assert!(!weather.raining);
        assert_eq!(weather.glyph, WeatherGlyph::Cloud);
    }

    #[test]
    fn clear_sky_is_sunny() {
        let weather = classify_conditions(&response(10.0, 0.0, None));
        assert_eq!(weather.status, "DRY");
        assert_eq!(weather.detail, "SUNNY");
        assert_eq!(weather.category(), WeatherCategory::Dry);

        let weather = classify_conditions(&response(45.0, 0.0, None));
        assert_eq!(weather.detail, "PARTLY CLOUDY");
    }

    #[test]
    fn missing_minutely_block_is_tolerated() {
        let weather = classify_conditions(&OmResponse {
            current: OmCurrent {
                cloud_cover: 20.0,
                precipitation: 0.0,
                precipitation_probability: None,
            },
            minutely_15: None,
        });
        assert_eq!(weather.status, "DRY");
        assert_eq!(weather.rain_probability, "0%");
    }
}
