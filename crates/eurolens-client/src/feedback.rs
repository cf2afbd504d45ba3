//! HTTP client for feedback submission.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use eurolens_core::AppConfig;

use crate::error::ClientError;

const FEEDBACK_ENDPOINT: &str = "api/feedback/analysis";

/// User feedback tied to a prior analysis result.
///
/// Constructed fresh per feedback session and submitted at most once per
/// analysis. Submission tracking is the caller's responsibility; this
/// record carries no dedup state. `analysis_id` references the
/// server-assigned result id, not the local history item id.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRecord {
    pub analysis_id: i64,
    pub is_positive: bool,
    pub wrong_product: bool,
    pub wrong_brand: bool,
    pub wrong_country: bool,
    pub wrong_classification: bool,
    pub wrong_alternatives: bool,
    pub feedback_text: String,
    /// Re-compressed base64 image; only ever set through
    /// [`FeedbackRecord::with_image`] with consent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl FeedbackRecord {
    /// A blank record for `analysis_id` with every flag unset.
    #[must_use]
    pub fn new(analysis_id: i64, is_positive: bool) -> Self {
        Self {
            analysis_id,
            is_positive,
            wrong_product: false,
            wrong_brand: false,
            wrong_country: false,
            wrong_classification: false,
            wrong_alternatives: false,
            feedback_text: String::new(),
            image: None,
        }
    }

    /// Attaches the analyzed image, gated on user consent. Without consent
    /// the payload's image field stays absent no matter what was captured.
    #[must_use]
    pub fn with_image(mut self, image: String, consent: bool) -> Self {
        self.image = if consent { Some(image) } else { None };
        self
    }
}

/// Diagnostic error body some non-2xx feedback responses carry.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for `POST /api/feedback/analysis`.
///
/// Stateless; does not deduplicate by `analysis_id`. Callers that need
/// at-most-once submission must track already-submitted ids themselves.
pub struct FeedbackClient {
    client: Client,
    base_url: Url,
}

impl FeedbackClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unknown`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidUrl`] if the
    /// configured base URL does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
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
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(|e| ClientError::Unknown(e.to_string()))?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Submits one feedback record.
    ///
    /// On a non-2xx status the response's `{"error": …}` body, when present,
    /// is logged for diagnostics; the caller always gets the uniform
    /// [`ClientError::Server`] with the status code.
    ///
    /// # Errors
    ///
    /// One member of the [`ClientError`] taxonomy; see the crate docs.
    pub async fn submit(&self, record: &FeedbackRecord) -> Result<(), ClientError> {
        let url = self
            .base_url
            .join(FEEDBACK_ENDPOINT)
            .map_err(|e| ClientError::InvalidUrl(format!("{FEEDBACK_ENDPOINT}: {e}")))?;
        let payload = serde_json::to_vec(record).map_err(ClientError::Encode)?;

        tracing::debug!(%url, analysis_id = record.analysis_id, "submitting feedback");
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Best-effort diagnostics; never replaces the typed error.
        if let Ok(text) = response.text().await {
            if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
                tracing::warn!(
                    status = status.as_u16(),
                    error = %body.error,
                    "feedback rejected by server"
                );
            }
        }
        Err(ClientError::Server {
            status: status.as_u16(),
        })
    }
}
