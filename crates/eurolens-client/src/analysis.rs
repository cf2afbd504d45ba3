//! HTTP client for the analysis endpoints.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;

use eurolens_core::{AnalysisResult, AppConfig};

use crate::error::ClientError;
use crate::location::LocationProvider;
use crate::types::{AnalyzeImageRequest, AnalyzeTextRequest, UserLocation};

const ANALYZE_IMAGE_ENDPOINT: &str = "v2/analyze-product";
const ANALYZE_TEXT_ENDPOINT: &str = "v2/analyze-text";

/// Client for the remote classification service's analysis endpoints.
///
/// Holds no per-call state: every call is independent, callers may share one
/// instance behind `Arc` and issue concurrent requests. Use
/// [`AnalysisClient::new`] for production or
/// [`AnalysisClient::with_base_url`] to point at a mock server in tests.
pub struct AnalysisClient {
    client: Client,
    base_url: Url,
    location: Arc<dyn LocationProvider>,
}

impl AnalysisClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unknown`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidUrl`] if the
    /// configured base URL does not parse.
    pub fn new(
        config: &AppConfig,
        location: Arc<dyn LocationProvider>,
    ) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
            location,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unknown`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        location: Arc<dyn LocationProvider>,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(|e| ClientError::Unknown(e.to_string()))?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join appends endpoint paths instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client,
            base_url,
            location,
        })
    }

    /// Classifies a captured image.
    ///
    /// `base64_image` is the normalized JPEG payload; `prompt` is optional
    /// free text forwarded to the model. The cached location (if authorized
    /// and complete) is attached, and a single background refresh is
    /// triggered so the next call sees fresher data; the current call never
    /// waits for it.
    ///
    /// # Errors
    ///
    /// One member of the [`ClientError`] taxonomy; see the crate docs. No
    /// internal retries are performed.
    pub async fn analyze_image(
        &self,
        base64_image: &str,
        prompt: Option<&str>,
    ) -> Result<AnalysisResult, ClientError> {
        let body = AnalyzeImageRequest {
            image: base64_image,
            prompt,
            user_location: self.cached_location(),
        };
        self.post_analysis(ANALYZE_IMAGE_ENDPOINT, &body).await
    }

    /// Classifies user-typed product text.
    ///
    /// Same request shape and location behavior as
    /// [`AnalysisClient::analyze_image`], with `product_text` as the primary
    /// payload.
    ///
    /// # Errors
    ///
    /// One member of the [`ClientError`] taxonomy; see the crate docs.
    pub async fn analyze_text(
        &self,
        text: &str,
        prompt: Option<&str>,
    ) -> Result<AnalysisResult, ClientError> {
        let body = AnalyzeTextRequest {
            product_text: text,
            prompt,
            user_location: self.cached_location(),
        };
        self.post_analysis(ANALYZE_TEXT_ENDPOINT, &body).await
    }

    /// Reads the best-effort cached location. Requires authorization and
    /// both fields; a half-populated cache sends nothing.
    fn cached_location(&self) -> Option<UserLocation> {
        if !self.location.is_authorized() {
            return None;
        }
        match (self.location.cached_city(), self.location.cached_country()) {
            (Some(city), Some(country)) => Some(UserLocation { city, country }),
            _ => None,
        }
    }

    /// Serializes `body`, POSTs it to `endpoint`, and decodes the typed
    /// result. Also fires the single-shot location refresh when authorized.
    async fn post_analysis<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<AnalysisResult, ClientError> {
        if self.location.is_authorized() {
            // Fire-and-forget: completion is only observed by a later call
            // reading the cache.
            self.location.request_refresh();
        }

        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| ClientError::InvalidUrl(format!("{endpoint}: {e}")))?;
        let payload = serde_json::to_vec(body).map_err(ClientError::Encode)?;

        tracing::debug!(%url, "sending analysis request");
        let response = self
            .client
            .post(url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(ClientError::InvalidResponse)?;
        serde_json::from_str(&text).map_err(|e| ClientError::Decode {
            context: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::StaticLocation;

    fn test_client(base_url: &str) -> AnalysisClient {
        AnalysisClient::with_base_url(
            base_url,
            30,
            "eurolens-test",
            Arc::new(StaticLocation::disabled()),
        )
        .expect("client construction should not fail")
    }

    #[test]
    fn base_url_trailing_slash_is_normalised() {
        let client = test_client("https://api.eurolens.app///");
        let url = client.base_url.join(ANALYZE_IMAGE_ENDPOINT).unwrap();
        assert_eq!(url.as_str(), "https://api.eurolens.app/v2/analyze-product");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = AnalysisClient::with_base_url(
            "not a url",
            30,
            "eurolens-test",
            Arc::new(StaticLocation::disabled()),
        );
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn cached_location_requires_both_fields() {
        let client = AnalysisClient::with_base_url(
            "https://api.eurolens.app",
            30,
            "eurolens-test",
            Arc::new(StaticLocation::new(Some("Berlin".into()), None)),
        )
        .unwrap();
        assert_eq!(client.cached_location(), None);

        let client = AnalysisClient::with_base_url(
            "https://api.eurolens.app",
            30,
            "eurolens-test",
            Arc::new(StaticLocation::new(Some("Berlin".into()), Some("DE".into()))),
        )
        .unwrap();
        assert_eq!(
            client.cached_location(),
            Some(UserLocation {
                city: "Berlin".to_string(),
                country: "DE".to_string(),
            })
        );
    }
}
