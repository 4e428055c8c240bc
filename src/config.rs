use crate::error::{PitwallError, Result};
use crate::logic::StrategyCalibration;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration. Everything has a complete default
/// so the app runs with no config file at all; a YAML file only needs to
/// name the values it overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Strategy-core calibration: decision thresholds, compound ranks and
    /// the caution-risk table. Injected into the advisor, never read as
    /// hidden globals, so alternate series regulations are a config swap.
    pub calibration: StrategyCalibration,
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Disable to run fully offline on the default dry observation.
    pub enabled: bool,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists.
    /// An explicit `--config` path must exist; discovered paths are
    /// optional.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(PitwallError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| PitwallError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| PitwallError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Search for pitwall.yaml in standard locations. Returns the first
    /// existing path, or None to signal built-in defaults.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/pitwall.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("pitwall").join("pitwall.yaml");
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_carry_the_reference_calibration() {
        let config = Config::default();
        assert_relative_eq!(config.calibration.thresholds.critical, 7.5);
        assert_relative_eq!(config.calibration.thresholds.strategic, 4.5);
        assert_relative_eq!(config.calibration.compound_ranks.hard, 3.0);
        assert_relative_eq!(config.calibration.compound_ranks.wet, 10.0);
        assert_eq!(config.calibration.caution_table.entries.len(), 12);
        assert!(config.weather.enabled);
    }

    #[test]
    fn partial_yaml_overrides_only_named_values() {
        let yaml = r#"
calibration:
  thresholds:
    critical: 8.0
weather:
  enabled: false
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_relative_eq!(config.calibration.thresholds.critical, 8.0);
        // Untouched sections keep their defaults.
        assert_relative_eq!(config.calibration.compound_ranks.soft, 7.0);
        assert_eq!(config.calibration.caution_table.entries.len(), 12);
        assert!(!config.weather.enabled);
    }
}
