use thiserror::Error;

/// Result type used across the converter.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// The two families of conversion failures.
///
/// `Type` means the input is not one of the accepted representations,
/// `Value` means it has the right shape but cannot be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Value,
}

/// Canonical error raised by every conversion function.
///
/// `context` always holds the path of the operation that rejected the input.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(
        "{context}: unsupported time value ({found}); expected an integer UNIX epoch, \
         a calendar date-time or an ISO8601-formatted string"
    )]
    UnsupportedTimeValue {
        context: &'static str,
        found: &'static str,
    },

    #[error("{context}: negative time values not allowed (got {value})")]
    NegativeTime { context: &'static str, value: i64 },

    #[error("{context}: time value {value} is outside the supported range")]
    TimeOutOfRange { context: &'static str, value: String },

    #[error(
        "{context}: bad format for input ISO8601 string {input:?}, \
         should have been: YYYY-MM-DD HH:MM:SS+00"
    )]
    BadIso8601 {
        context: &'static str,
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("{context}: negative temperature values not allowed (got {value})")]
    NegativeTemperature { context: &'static str, value: f64 },

    #[error("{context}: temperature must be a finite number (got {value})")]
    NonFiniteTemperature { context: &'static str, value: f64 },

    #[error("{context}: unknown {what} {value:?}")]
    UnknownVariant {
        context: &'static str,
        what: &'static str,
        value: String,
    },

    #[error("reading {key:?}: {source}")]
    InvalidReading {
        key: String,
        #[source]
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    /// Classifies the error into one of the two conversion error kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::UnsupportedTimeValue { .. } => ErrorKind::Type,
            ConvertError::InvalidReading { source, .. } => source.kind(),
            ConvertError::NegativeTime { .. }
            | ConvertError::TimeOutOfRange { .. }
            | ConvertError::BadIso8601 { .. }
            | ConvertError::NegativeTemperature { .. }
            | ConvertError::NonFiniteTemperature { .. }
            | ConvertError::UnknownVariant { .. } => ErrorKind::Value,
        }
    }

    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    pub fn is_value_error(&self) -> bool {
        self.kind() == ErrorKind::Value
    }
}

/// Dedicated configuration error used by the configuration module.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("Environment variable {key} is not valid unicode: {source}")]
    InvalidEnvVar {
        key: String,
        #[source]
        source: std::env::VarError,
    },
}

/// Umbrella error for the binaries built on top of the core crate.
#[derive(Debug, Error)]
pub enum SkycastError {
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("General error: {0}")]
    GeneralError(String),
}

impl From<serde_json::Error> for SkycastError {
    fn from(err: serde_json::Error) -> Self {
        SkycastError::DeserializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_reading_keeps_inner_kind() {
        let err = ConvertError::InvalidReading {
            key: "temp_min".into(),
            source: Box::new(ConvertError::NegativeTemperature {
                context: "test",
                value: -1.0,
            }),
        };
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(err.to_string().contains("temp_min"));
    }

    #[test]
    fn unsupported_value_is_type_kind() {
        let err = ConvertError::UnsupportedTimeValue {
            context: "skycast_core::convert::time",
            found: "float",
        };
        assert!(err.is_type_error());
        assert!(err.to_string().starts_with("skycast_core::convert::time"));
    }
}
