//! Conversions between UNIX epoch seconds, the fixed ISO8601 variant used by
//! the weather API (`YYYY-MM-DD HH:MM:SS+00`) and calendar date-times.
//!
//! Every calendar value is read as UTC. The `+00` suffix is a literal part of
//! the format, never a parsed offset.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::errors::{ConvertError, Result};

/// strftime pattern of the ISO8601 strings exchanged with the weather API.
pub const ISO8601_FORMAT: &str = "%Y-%m-%d %H:%M:%S+00";

/// Last second representable with a four digit year (`9999-12-31 23:59:59`).
pub const MAX_EPOCH: i64 = 253_402_300_799;

const SECONDS_PER_DAY: i64 = 86_400;
const MILLIS_PER_SECOND: i64 = 1_000;
/// Days between 0001-01-01 and 1970-01-01 in the proleptic Gregorian calendar.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Converts a UNIX epoch to its ISO8601 representation.
pub fn epoch_to_iso8601(epoch: i64) -> Result<String> {
    const CONTEXT: &str = concat!(module_path!(), "::epoch_to_iso8601");

    let datetime = checked_epoch_to_datetime(epoch, CONTEXT)?;
    let text = datetime.format(ISO8601_FORMAT).to_string();
    trace!(epoch, iso8601 = %text, "converted epoch to ISO8601");
    Ok(text)
}

/// Parses an ISO8601 string in the `YYYY-MM-DD HH:MM:SS+00` format into a UNIX epoch.
pub fn iso8601_to_epoch(text: &str) -> Result<i64> {
    const CONTEXT: &str = concat!(module_path!(), "::iso8601_to_epoch");

    let parsed = parse_iso8601(text, CONTEXT)?;
    let epoch = calendar_to_epoch(&parsed);
    trace!(iso8601 = text, epoch, "converted ISO8601 to epoch");
    Ok(epoch)
}

/// Converts calendar fields to a UNIX epoch using plain UTC arithmetic.
///
/// Offset-aware values contribute their local fields and the offset itself is
/// ignored. Sub-second precision is truncated; dates before 1970 yield
/// negative epochs.
pub fn calendar_to_epoch<T>(value: &T) -> i64
where
    T: Datelike + Timelike,
{
    let days = i64::from(value.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE;
    days * SECONDS_PER_DAY + i64::from(value.num_seconds_from_midnight())
}

/// Returns the UNIX epoch conveyed by any supported time value.
///
/// Epochs pass through untouched, calendar values go through
/// [`calendar_to_epoch`] and strings through [`iso8601_to_epoch`].
pub fn to_epoch(value: impl Into<TimeValue>) -> Result<i64> {
    match value.into() {
        TimeValue::Epoch(epoch) => Ok(epoch),
        TimeValue::Calendar(calendar) => Ok(calendar_to_epoch(&calendar)),
        TimeValue::Iso8601(text) => iso8601_to_epoch(&text),
    }
}

/// Returns the UTC date-time conveyed by any supported time value.
pub fn to_datetime(value: impl Into<TimeValue>) -> Result<DateTime<Utc>> {
    const CONTEXT: &str = concat!(module_path!(), "::to_datetime");

    match value.into() {
        TimeValue::Epoch(epoch) => Utc.timestamp_opt(epoch, 0).single().ok_or_else(|| {
            debug!(epoch, "epoch outside the calendar range");
            ConvertError::TimeOutOfRange {
                context: CONTEXT,
                value: epoch.to_string(),
            }
        }),
        TimeValue::Calendar(calendar) => Ok(Utc.from_utc_datetime(&calendar)),
        TimeValue::Iso8601(text) => {
            let parsed = parse_iso8601(&text, CONTEXT)?;
            Ok(Utc.from_utc_datetime(&parsed))
        }
    }
}

/// Renders a time value in the requested representation.
pub fn format_time(value: impl Into<TimeValue>, format: TimeFormat) -> Result<FormattedTime> {
    let value = value.into();
    match format {
        TimeFormat::Unix => to_epoch(value).map(FormattedTime::Unix),
        TimeFormat::Iso => {
            let epoch = to_epoch(value)?;
            epoch_to_iso8601(epoch).map(FormattedTime::Iso)
        }
        TimeFormat::Date => to_datetime(value).map(FormattedTime::Date),
    }
}

/// Signed distance in milliseconds from `reference` to `target`.
pub fn millis_offset_between_epochs(reference: i64, target: i64) -> i64 {
    target
        .saturating_sub(reference)
        .saturating_mul(MILLIS_PER_SECOND)
}

fn checked_epoch_to_datetime(epoch: i64, context: &'static str) -> Result<DateTime<Utc>> {
    if epoch < 0 {
        debug!(epoch, context, "rejecting negative epoch");
        return Err(ConvertError::NegativeTime {
            context,
            value: epoch,
        });
    }
    if epoch > MAX_EPOCH {
        debug!(epoch, context, "rejecting epoch past year 9999");
        return Err(ConvertError::TimeOutOfRange {
            context,
            value: epoch.to_string(),
        });
    }

    Utc.timestamp_opt(epoch, 0)
        .single()
        .ok_or_else(|| ConvertError::TimeOutOfRange {
            context,
            value: epoch.to_string(),
        })
}

fn parse_iso8601(text: &str, context: &'static str) -> Result<NaiveDateTime> {
    let reject = |source: Option<chrono::ParseError>| {
        debug!(input = text, context, "rejecting malformed ISO8601 string");
        ConvertError::BadIso8601 {
            context,
            input: text.to_string(),
            source,
        }
    };

    // chrono alone accepts signed or short years and padded fields
    if !has_iso8601_shape(text) {
        return Err(reject(None));
    }
    let parsed =
        NaiveDateTime::parse_from_str(text, ISO8601_FORMAT).map_err(|err| reject(Some(err)))?;
    if parsed.year() < 1 {
        return Err(reject(None));
    }
    Ok(parsed)
}

/// Checks the exact `YYYY-MM-DD HH:MM:SS+00` layout: 22 bytes, digits in
/// the numeric slots, literal separators everywhere else.
fn has_iso8601_shape(text: &str) -> bool {
    const TEMPLATE: &[u8] = b"dddd-dd-dd dd:dd:dd+00";

    text.len() == TEMPLATE.len()
        && text
            .bytes()
            .zip(TEMPLATE)
            .all(|(byte, &slot)| match slot {
                b'd' => byte.is_ascii_digit(),
                literal => byte == literal,
            })
}

/// Any of the time representations the converter accepts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum TimeValue {
    /// Seconds since 1970-01-01T00:00:00Z.
    Epoch(i64),
    /// Calendar fields interpreted as UTC.
    Calendar(NaiveDateTime),
    /// Text in the `YYYY-MM-DD HH:MM:SS+00` format.
    Iso8601(String),
}

impl TimeValue {
    /// Classifies a dynamically typed JSON value.
    ///
    /// Integers become epochs and strings ISO8601 text. Floats, booleans,
    /// nulls, arrays and objects are rejected with a type error.
    pub fn from_json(value: &Value) -> Result<Self> {
        const CONTEXT: &str = concat!(module_path!(), "::TimeValue::from_json");

        let found = match value {
            Value::String(text) => return Ok(TimeValue::Iso8601(text.clone())),
            Value::Number(number) => {
                if let Some(epoch) = number.as_i64() {
                    return Ok(TimeValue::Epoch(epoch));
                }
                if number.is_u64() {
                    debug!(value = %number, "integer time value exceeds i64");
                    return Err(ConvertError::TimeOutOfRange {
                        context: CONTEXT,
                        value: number.to_string(),
                    });
                }
                "float"
            }
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };

        debug!(found, "unsupported time value");
        Err(ConvertError::UnsupportedTimeValue {
            context: CONTEXT,
            found,
        })
    }
}

impl TryFrom<Value> for TimeValue {
    type Error = ConvertError;

    fn try_from(value: Value) -> Result<Self> {
        TimeValue::from_json(&value)
    }
}

impl From<i64> for TimeValue {
    fn from(value: i64) -> Self {
        TimeValue::Epoch(value)
    }
}

impl From<i32> for TimeValue {
    fn from(value: i32) -> Self {
        TimeValue::Epoch(i64::from(value))
    }
}

impl From<u32> for TimeValue {
    fn from(value: u32) -> Self {
        TimeValue::Epoch(i64::from(value))
    }
}

impl From<NaiveDateTime> for TimeValue {
    fn from(value: NaiveDateTime) -> Self {
        TimeValue::Calendar(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimeValue {
    fn from(value: DateTime<Tz>) -> Self {
        TimeValue::Calendar(value.naive_local())
    }
}

impl From<&str> for TimeValue {
    fn from(value: &str) -> Self {
        TimeValue::Iso8601(value.to_string())
    }
}

impl From<String> for TimeValue {
    fn from(value: String) -> Self {
        TimeValue::Iso8601(value)
    }
}

/// Output representation for [`format_time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    Unix,
    #[default]
    Iso,
    Date,
}

impl FromStr for TimeFormat {
    type Err = ConvertError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unix" | "epoch" => Ok(TimeFormat::Unix),
            "iso" | "iso8601" => Ok(TimeFormat::Iso),
            "date" | "datetime" => Ok(TimeFormat::Date),
            _ => Err(ConvertError::UnknownVariant {
                context: concat!(module_path!(), "::TimeFormat"),
                what: "time format",
                value: value.to_string(),
            }),
        }
    }
}

/// A time value rendered by [`format_time`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormattedTime {
    Unix(i64),
    Iso(String),
    Date(DateTime<Utc>),
}

impl fmt::Display for FormattedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattedTime::Unix(epoch) => write!(f, "{epoch}"),
            FormattedTime::Iso(text) => f.write_str(text),
            FormattedTime::Date(datetime) => write!(f, "{}", datetime.to_rfc3339()),
        }
    }
}
