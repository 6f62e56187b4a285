//! Linear GraphQL client.
//!
//! Posts attempt reports as issue comments via the `commentCreate`
//! mutation. One POST per delivery, no retries: a failed delivery is
//! reported with the raw response body and left to the operator.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::errors::{SyncError, SyncResult};
use crate::domain::models::config::TrackerConfig;
use crate::domain::ports::{CommentReceipt, IssueTracker};

use super::models::{GraphqlRequest, GraphqlResponse};

/// HTTP client for the Linear GraphQL API.
///
/// Implements [`IssueTracker`]. All failure modes map to
/// [`SyncError::Delivery`] carrying the raw response for diagnostics.
#[derive(Clone)]
pub struct LinearClient {
    /// The underlying HTTP client.
    http: Client,
    /// GraphQL endpoint URL.
    api_url: String,
    /// Personal API key, sent as the `Authorization` header value.
    api_key: String,
}

impl LinearClient {
    /// Create a new client from tracker configuration.
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            http: Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn delivery_error(external_id: &str, detail: String) -> SyncError {
        SyncError::Delivery {
            external_id: external_id.to_string(),
            detail,
        }
    }
}

// The API key must never reach logs through Debug formatting.
impl fmt::Debug for LinearClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl IssueTracker for LinearClient {
    async fn post_comment(&self, external_id: &str, body: &str) -> SyncResult<CommentReceipt> {
        let request = GraphqlRequest::comment_create(external_id, body);

        tracing::info!(
            issue = external_id,
            body_len = body.len(),
            "Linear: posting attempt comment"
        );

        let response = self
            .http
            .post(&self.api_url)
            .header("Authorization", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Self::delivery_error(external_id, format!("request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Self::delivery_error(external_id, format!("unreadable response: {e}")))?;

        if !status.is_success() {
            return Err(Self::delivery_error(
                external_id,
                format!("Linear returned {status}: {text}"),
            ));
        }

        let envelope: GraphqlResponse = serde_json::from_str(&text).map_err(|e| {
            Self::delivery_error(external_id, format!("unparseable response: {e}: {text}"))
        })?;

        if let Some(payload) = envelope.comment_create() {
            if payload.success {
                let comment_id = payload.comment.as_ref().map(|c| c.id.clone());
                tracing::info!(issue = external_id, comment_id = ?comment_id, "Linear: comment created");
                return Ok(CommentReceipt { comment_id });
            }
        }

        // Transport succeeded but the mutation did not; surface whatever
        // the server said together with the raw body.
        let detail = match envelope.error_messages() {
            Some(messages) => format!("GraphQL errors: {messages}; raw response: {text}"),
            None => format!("tracker reported failure: {text}"),
        };
        Err(Self::delivery_error(external_id, detail))
    }
}
