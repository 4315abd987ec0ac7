//! DTO for the JSON shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request and response body of `POST /api/shorten`.
///
/// The shape is deliberately asymmetric: `url` is read from the request but
/// never written back, and `result` is only ever written.
///
/// ```json
/// // request
/// { "url": "https://example.com" }
/// // response
/// { "result": "http://localhost:8080/AbCdEfGhIjKl" }
/// ```
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UrlProcessingResult {
    #[serde(skip_serializing)]
    pub url: String,

    #[serde(default, skip_deserializing)]
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_only_result() {
        let dto = UrlProcessingResult {
            url: "http://a.com".to_string(),
            result: "http://short/abc".to_string(),
        };

        let json = serde_json::to_string(&dto).unwrap();
        assert_eq!(json, r#"{"result":"http://short/abc"}"#);
    }

    #[test]
    fn test_deserializes_url_and_ignores_result() {
        let dto: UrlProcessingResult =
            serde_json::from_str(r#"{"url":"http://a.com","result":"forged"}"#).unwrap();

        assert_eq!(dto.url, "http://a.com");
        assert!(dto.result.is_empty());
    }

    #[test]
    fn test_missing_url_is_rejected() {
        let result = serde_json::from_str::<UrlProcessingResult>(r#"{"link":"http://a.com"}"#);
        assert!(result.is_err());
    }
}
