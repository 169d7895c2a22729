use crate::errors::SkycastError;

/// Serializes a value to pretty JSON with canonical error handling.
pub fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, SkycastError> {
    serde_json::to_string_pretty(value)
        .map_err(|err| SkycastError::SerializationError(err.to_string()))
}

/// Deserializes a JSON string into the provided type with shared error semantics.
pub fn from_json_str<T: serde::de::DeserializeOwned>(input: &str) -> Result<T, SkycastError> {
    serde_json::from_str(input).map_err(|err| SkycastError::DeserializationError(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{FormattedTime, TimeValue};
    use std::collections::BTreeMap;

    #[test]
    fn readings_round_trip() {
        let readings: BTreeMap<String, f64> =
            from_json_str(r#"{"temp": 300.0, "temp_min": 290.5}"#).expect("deserialize");
        let json = to_pretty_json(&readings).expect("serialize");
        let decoded: BTreeMap<String, f64> = from_json_str(&json).expect("deserialize again");
        assert_eq!(decoded, readings);
    }

    #[test]
    fn formatted_time_serializes_untagged() {
        let json = to_pretty_json(&FormattedTime::Unix(60)).expect("serialize");
        assert_eq!(json, "60");
    }

    #[test]
    fn float_time_value_is_deserialization_error() {
        let err = from_json_str::<TimeValue>("3.14").unwrap_err();
        assert!(matches!(err, SkycastError::DeserializationError(_)));
        assert!(err.to_string().contains("unsupported time value"));
    }
}
