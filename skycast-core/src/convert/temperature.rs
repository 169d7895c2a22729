//! Kelvin to Celsius/Fahrenheit conversions.
//!
//! Results are rounded to two decimals by rendering the exact binary value
//! with `{:.2}` and parsing it back, so exact ties round to even.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::errors::{ConvertError, Result};

/// Kelvin value of 0 °C.
pub const KELVIN_OFFSET: f64 = 273.15;
/// Fahrenheit value of 0 °C.
pub const FAHRENHEIT_OFFSET: f64 = 32.0;
/// Fahrenheit degrees per Celsius degree.
pub const FAHRENHEIT_DEGREE_SCALE: f64 = 1.8;

/// Temperature scales understood by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Kelvin,
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemperatureUnit::Kelvin => "kelvin",
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        };
        f.write_str(name)
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConvertError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "kelvin" | "k" => Ok(TemperatureUnit::Kelvin),
            "celsius" | "c" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(ConvertError::UnknownVariant {
                context: concat!(module_path!(), "::TemperatureUnit"),
                what: "temperature unit",
                value: value.to_string(),
            }),
        }
    }
}

/// Converts a Kelvin temperature to Celsius, rounded to two decimals.
pub fn kelvin_to_celsius<K: Into<f64>>(kelvin: K) -> Result<f64> {
    const CONTEXT: &str = concat!(module_path!(), "::kelvin_to_celsius");

    let kelvin = validate_kelvin(kelvin.into(), CONTEXT)?;
    let celsius = round_to_hundredths(kelvin - KELVIN_OFFSET);
    trace!(kelvin, celsius, "converted kelvin to celsius");
    Ok(celsius)
}

/// Converts a Kelvin temperature to Fahrenheit, rounded to two decimals.
pub fn kelvin_to_fahrenheit<K: Into<f64>>(kelvin: K) -> Result<f64> {
    const CONTEXT: &str = concat!(module_path!(), "::kelvin_to_fahrenheit");

    let kelvin = validate_kelvin(kelvin.into(), CONTEXT)?;
    let fahrenheit = round_to_hundredths(
        (kelvin - KELVIN_OFFSET) * FAHRENHEIT_DEGREE_SCALE + FAHRENHEIT_OFFSET,
    );
    trace!(kelvin, fahrenheit, "converted kelvin to fahrenheit");
    Ok(fahrenheit)
}

/// Converts a Kelvin temperature to `unit`. Kelvin targets are validated but
/// returned unrounded.
pub fn kelvin_to<K: Into<f64>>(kelvin: K, unit: TemperatureUnit) -> Result<f64> {
    match unit {
        TemperatureUnit::Kelvin => validate_kelvin(
            kelvin.into(),
            concat!(module_path!(), "::kelvin_to"),
        ),
        TemperatureUnit::Celsius => kelvin_to_celsius(kelvin),
        TemperatureUnit::Fahrenheit => kelvin_to_fahrenheit(kelvin),
    }
}

/// Converts every named Kelvin reading (e.g. `temp`, `temp_min`, `temp_max`)
/// of a weather payload to `unit`.
///
/// The first invalid reading aborts the conversion; the error names its key.
pub fn kelvin_map_to(
    readings: &BTreeMap<String, f64>,
    unit: TemperatureUnit,
) -> Result<BTreeMap<String, f64>> {
    readings
        .iter()
        .map(|(key, &kelvin)| {
            kelvin_to(kelvin, unit)
                .map(|converted| (key.clone(), converted))
                .map_err(|source| ConvertError::InvalidReading {
                    key: key.clone(),
                    source: Box::new(source),
                })
        })
        .collect()
}

fn validate_kelvin(kelvin: f64, context: &'static str) -> Result<f64> {
    if !kelvin.is_finite() {
        debug!(kelvin, context, "rejecting non-finite temperature");
        return Err(ConvertError::NonFiniteTemperature {
            context,
            value: kelvin,
        });
    }
    if kelvin < 0.0 {
        debug!(kelvin, context, "rejecting negative kelvin temperature");
        return Err(ConvertError::NegativeTemperature {
            context,
            value: kelvin,
        });
    }
    Ok(kelvin)
}

fn round_to_hundredths(value: f64) -> f64 {
    // a finite f64 rendered by `{:.2}` always parses back
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_zero() {
        assert_eq!(kelvin_to_celsius(0).unwrap(), -273.15);
        assert_eq!(kelvin_to_fahrenheit(0).unwrap(), -459.67);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(kelvin_to_celsius(300).unwrap(), 26.85);
        assert_eq!(kelvin_to_fahrenheit(300).unwrap(), 80.33);
        assert_eq!(kelvin_to_celsius(310.928).unwrap(), 37.78);
        assert_eq!(kelvin_to_fahrenheit(310.928).unwrap(), 100.0);
    }

    #[test]
    fn negative_kelvin_is_value_error() {
        let err = kelvin_to_celsius(-5).unwrap_err();
        assert!(err.is_value_error());
        assert!(err.to_string().contains("kelvin_to_celsius"));
        assert!(kelvin_to_fahrenheit(-0.01).unwrap_err().is_value_error());
    }

    #[test]
    fn non_finite_kelvin_is_rejected() {
        assert!(matches!(
            kelvin_to_celsius(f64::NAN),
            Err(ConvertError::NonFiniteTemperature { .. })
        ));
        assert!(kelvin_to_fahrenheit(f64::INFINITY).is_err());
    }

    #[test]
    fn accepts_integer_and_float_inputs() {
        assert_eq!(kelvin_to_celsius(273_u32).unwrap(), -0.15);
        assert_eq!(kelvin_to_celsius(273.15_f32).unwrap(), 0.0);
    }

    #[test]
    fn unit_dispatch() {
        assert_eq!(kelvin_to(280.5, TemperatureUnit::Kelvin).unwrap(), 280.5);
        assert_eq!(kelvin_to(280.5, TemperatureUnit::Celsius).unwrap(), 7.35);
        assert!(kelvin_to(-1.0, TemperatureUnit::Kelvin).is_err());
    }

    #[test]
    fn map_conversion_names_failing_key() {
        let mut readings = BTreeMap::new();
        readings.insert("temp".to_string(), 300.0);
        readings.insert("temp_min".to_string(), 290.0);
        let converted = kelvin_map_to(&readings, TemperatureUnit::Celsius).unwrap();
        assert_eq!(converted["temp"], 26.85);
        assert_eq!(converted["temp_min"], 16.85);

        readings.insert("temp_max".to_string(), -3.0);
        let err = kelvin_map_to(&readings, TemperatureUnit::Fahrenheit).unwrap_err();
        assert!(err.is_value_error());
        assert!(err.to_string().contains("temp_max"));
    }

    #[test]
    fn unit_parsing() {
        assert_eq!("F".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!("Celsius".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius);
        assert!("rankine".parse::<TemperatureUnit>().is_err());
    }
}
