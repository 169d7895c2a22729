//! Skycast: time and temperature conversions for weather-data clients.
//!
//! The weather API exchanges times as UNIX epochs or as fixed-format ISO8601
//! strings (`YYYY-MM-DD HH:MM:SS+00`) and temperatures in Kelvin. This crate
//! re-exports the converter from `skycast-core` so clients depend on a single
//! entry point:
//!
//! * `time`: epoch, ISO8601 and calendar conversions, always in UTC
//! * `temperature`: Kelvin to Celsius and Fahrenheit, rounded to two decimals

pub use skycast_core::convert::*;
pub use skycast_core::errors::{ConvertError, ErrorKind, Result};

/// Whether `text` follows the fixed ISO8601 pattern.
pub fn is_iso8601(text: &str) -> bool {
    iso8601_to_epoch(text).is_ok()
}
