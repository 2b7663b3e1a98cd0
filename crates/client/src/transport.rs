//! HTTP transport for submitting an enrollment.
//!
//! [`HttpTransport`] POSTs the draft as JSON to `{base_url}/api/enroll`.
//! One attempt per call: no retry, no explicit timeout, no cancellation.

use async_trait::async_trait;
use serde::Deserialize;
use verity_core::enrollment::EnrollmentForm;

use crate::state::MSG_SUBMISSION_FAILED;

/// Path of the enrollment endpoint relative to the server base URL.
pub const ENROLL_PATH: &str = "/api/enroll";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request failed before a full response was read (DNS, refused
    /// connection, reset, ...).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A non-2xx response whose body is not JSON.
    #[error("Unreadable response body: {0}")]
    Body(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Status and raw body of a completed request. The body is only read for
/// non-2xx answers and is empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<serde_json::Value>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Message to show for a rejected submission.
    ///
    /// Uses the body's `error` string, or a generic fallback when it is
    /// missing, empty or not a string. Fails when the body is not a JSON
    /// object at all.
    pub fn rejection_message(&self) -> Result<String, TransportError> {
        let body: ErrorBody = serde_json::from_str(&self.body)?;
        let message = body
            .error
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(MSG_SUBMISSION_FAILED);
        Ok(message.to_string())
    }
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

#[async_trait]
pub trait EnrollmentTransport: Send + Sync {
    /// Send one enrollment and return whatever the server answered.
    async fn post_enrollment(&self, form: &EnrollmentForm) -> Result<TransportResponse, TransportError>;
}

// ---------------------------------------------------------------------------
// HttpTransport
// ---------------------------------------------------------------------------

pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Transport targeting `{base_url}/api/enroll`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        let endpoint = format!("{}{ENROLL_PATH}", base_url.trim_end_matches('/'));
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EnrollmentTransport for HttpTransport {
    async fn post_enrollment(&self, form: &EnrollmentForm) -> Result<TransportResponse, TransportError> {
        tracing::debug!(endpoint = %self.endpoint, "Posting enrollment");
        let response = self.client.post(&self.endpoint).json(form).send().await?;
        let status = response.status().as_u16();
        if response.status().is_success() {
            return Ok(TransportResponse {
                status,
                body: String::new(),
            });
        }
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
