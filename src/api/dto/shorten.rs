//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DisplayFromStr, PickFirst, serde_as};
use validator::Validate;

/// Request to shorten a URL.
///
/// `validityMinutes` accepts a number or a numeric string. Any other value
/// (fractions, words, objects) is treated as absent and the default applies.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(required(message = "longUrl is required"))]
    pub long_url: Option<String>,

    /// Optional custom short code (4-15 alphanumeric characters).
    pub custom_short_code: Option<String>,

    /// Optional lifetime in minutes.
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    pub validity_minutes: Option<i64>,
}

impl ShortenRequest {
    /// Custom code, with an empty string treated as not supplied.
    pub fn custom_code(&self) -> Option<String> {
        self.custom_short_code
            .as_deref()
            .filter(|code| !code.is_empty())
            .map(str::to_string)
    }
}

/// Response for a newly created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
    pub expires_at: DateTime<Utc>,
    pub custom_short_code_used: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ShortenRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_validity_minutes_number() {
        let req = parse(json!({ "longUrl": "https://a.com", "validityMinutes": 15 }));
        assert_eq!(req.validity_minutes, Some(15));
    }

    #[test]
    fn test_validity_minutes_numeric_string() {
        let req = parse(json!({ "longUrl": "https://a.com", "validityMinutes": "45" }));
        assert_eq!(req.validity_minutes, Some(45));
    }

    #[test]
    fn test_validity_minutes_garbage_is_absent() {
        for value in [json!("soon"), json!(1.5), json!({}), json!(null)] {
            let req = parse(json!({ "longUrl": "https://a.com", "validityMinutes": value }));
            assert_eq!(req.validity_minutes, None);
        }
    }

    #[test]
    fn test_validity_minutes_missing() {
        let req = parse(json!({ "longUrl": "https://a.com" }));
        assert_eq!(req.validity_minutes, None);
    }

    #[test]
    fn test_long_url_required() {
        let req = parse(json!({ "customShortCode": "abcd" }));
        assert!(req.validate().is_err());

        let req = parse(json!({ "longUrl": "https://a.com" }));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_custom_code_is_absent() {
        let req = parse(json!({ "longUrl": "https://a.com", "customShortCode": "" }));
        assert_eq!(req.custom_code(), None);

        let req = parse(json!({ "longUrl": "https://a.com", "customShortCode": "Mine1" }));
        assert_eq!(req.custom_code(), Some("Mine1".to_string()));
    }

    #[test]
    fn test_response_uses_camel_case() {
        let response = ShortenResponse {
            short_url: "http://sho.rt/abcd".to_string(),
            original_url: "https://a.com".to_string(),
            expires_at: Utc::now(),
            custom_short_code_used: true,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["shortUrl"], "http://sho.rt/abcd");
        assert_eq!(value["originalUrl"], "https://a.com");
        assert_eq!(value["customShortCodeUsed"], true);
        assert!(value["expiresAt"].is_string());
    }
}
