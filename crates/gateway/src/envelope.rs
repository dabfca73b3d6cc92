//! Response envelope unwrapping.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::GatewayError;

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Unwrap the `{ "data": ... }` wrapper assumed around every successful
/// response body and deserialize the payload.
pub fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> Result<T, GatewayError> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|source| GatewayError::MalformedBody { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_unwraps_payload() {
        let token: Value = unwrap_envelope(r#"{"data": {"token": "abc"}}"#).unwrap();
        assert_eq!(token["token"], "abc");
    }

    #[test]
    fn test_missing_envelope_is_malformed() {
        let result: Result<Value, _> = unwrap_envelope(r#"{"token": "abc"}"#);
        assert!(matches!(result, Err(GatewayError::MalformedBody { .. })));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let result: Result<Value, _> = unwrap_envelope("<html>oops</html>");
        assert!(matches!(result, Err(GatewayError::MalformedBody { .. })));
    }

    #[test]
    fn test_null_payload_is_accepted() {
        let value: Value = unwrap_envelope(r#"{"data": null}"#).unwrap();
        assert!(value.is_null());
    }
}
