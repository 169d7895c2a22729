//! The converter: stateless functions translating time representations and
//! temperature scales. Every function is pure and safe to call from any thread.

pub mod temperature;
pub mod time;

pub use temperature::{
    kelvin_map_to, kelvin_to, kelvin_to_celsius, kelvin_to_fahrenheit, TemperatureUnit,
    FAHRENHEIT_DEGREE_SCALE, FAHRENHEIT_OFFSET, KELVIN_OFFSET,
};
pub use time::{
    calendar_to_epoch, epoch_to_iso8601, format_time, iso8601_to_epoch,
    millis_offset_between_epochs, to_datetime, to_epoch, FormattedTime, TimeFormat, TimeValue,
    ISO8601_FORMAT, MAX_EPOCH,
};
