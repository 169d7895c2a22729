use std::env;

use crate::convert::{TemperatureUnit, TimeFormat};
use crate::errors::ConfigError;

/// Defaults applied by the skycast front ends when the caller does not pick
/// a unit or format explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkycastConfig {
    pub temperature_unit: TemperatureUnit,
    pub time_format: TimeFormat,
    pub log_level: String,
}

impl Default for SkycastConfig {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::default(),
            time_format: TimeFormat::default(),
            log_level: "info".to_string(),
        }
    }
}

impl SkycastConfig {
    /// Loads configuration from the process environment (`SKYCAST_*`).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env_with_prefix("SKYCAST_")
    }

    /// Loads configuration from env vars prefixed with the provided value (e.g. `WEATHER_`).
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        let key = |suffix: &str| format!("{}{}", prefix, suffix);
        let defaults = Self::default();

        let temperature_unit = match read_var(&key("TEMPERATURE_UNIT"))? {
            Some((name, raw)) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: name, value: raw })?,
            None => defaults.temperature_unit,
        };

        let time_format = match read_var(&key("TIME_FORMAT"))? {
            Some((name, raw)) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: name, value: raw })?,
            None => defaults.time_format,
        };

        let log_level = read_var(&key("LOG"))?
            .map(|(_, raw)| raw)
            .unwrap_or(defaults.log_level);

        Ok(Self {
            temperature_unit,
            time_format,
            log_level,
        })
    }
}

fn read_var(name: &str) -> Result<Option<(String, String)>, ConfigError> {
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => Ok(Some((name.to_string(), raw))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source) => Err(ConfigError::InvalidEnvVar {
            key: name.to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_prefix_yields_defaults() {
        let cfg = SkycastConfig::from_env_with_prefix("SKYCAST_TEST_UNSET_").expect("config");
        assert_eq!(cfg, SkycastConfig::default());
        assert_eq!(cfg.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(cfg.time_format, TimeFormat::Iso);
    }

    #[test]
    fn reads_prefixed_values() {
        std::env::set_var("SKYCAST_TEST_READ_TEMPERATURE_UNIT", "fahrenheit");
        std::env::set_var("SKYCAST_TEST_READ_TIME_FORMAT", "unix");
        std::env::set_var("SKYCAST_TEST_READ_LOG", "debug");
        let cfg = SkycastConfig::from_env_with_prefix("SKYCAST_TEST_READ_").expect("config");
        assert_eq!(cfg.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(cfg.time_format, TimeFormat::Unix);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn rejects_unknown_unit() {
        std::env::set_var("SKYCAST_TEST_BAD_TEMPERATURE_UNIT", "rankine");
        let err = SkycastConfig::from_env_with_prefix("SKYCAST_TEST_BAD_").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. }
            if key == "SKYCAST_TEST_BAD_TEMPERATURE_UNIT"));
    }
}
