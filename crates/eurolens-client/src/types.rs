//! Wire request bodies for the classification service.
//!
//! Request keys are snake_case except the legacy `userLocation` block, which
//! keeps its camelCase key on both analysis endpoints.

use serde::Serialize;

/// Optional city/country enrichment attached to analysis requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserLocation {
    pub city: String,
    pub country: String,
}

/// Body for `POST /v2/analyze-product`.
#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeImageRequest<'a> {
    /// Base64 JPEG payload from the image normalizer.
    pub image: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<&'a str>,
    #[serde(rename = "userLocation", skip_serializing_if = "Option::is_none")]
    pub user_location: Option<UserLocation>,
}

/// Body for `POST /v2/analyze-text`.
#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeTextRequest<'a> {
    pub product_text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<&'a str>,
    #[serde(rename = "userLocation", skip_serializing_if = "Option::is_none")]
    pub user_location: Option<UserLocation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_request_serializes_location_under_camel_case_key() {
        let request = AnalyzeImageRequest {
            image: "aGVsbG8=",
            prompt: Some("what is this"),
            user_location: Some(UserLocation {
                city: "Berlin".to_string(),
                country: "DE".to_string(),
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["image"], "aGVsbG8=");
        assert_eq!(json["userLocation"]["city"], "Berlin");
        assert_eq!(json["userLocation"]["country"], "DE");
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let request = AnalyzeTextRequest {
            product_text: "chocolate bar",
            prompt: None,
            user_location: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["product_text"], "chocolate bar");
        assert!(json.get("prompt").is_none());
        assert!(json.get("userLocation").is_none());
    }
}
