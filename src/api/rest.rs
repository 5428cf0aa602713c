//! REST implementation of the journal service client
//!
//! Talks to the journal service over HTTP with a bearer credential on
//! every request. Non-2xx responses are mapped to `JournalError::Api`
//! using the service's `{"detail": "..."}` error body when present;
//! 401 responses become `JournalError::Authentication`.

use crate::api::types::{
    AnalyticsReport, ApiErrorBody, ConversationDetail, ConversationSummary,
    CreateConversationRequest, SendMessageRequest, SendMessageResponse, TradeRecord,
};
use crate::api::JournalApi;
use crate::config::ApiConfig;
use crate::error::{JournalError, Result};

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

/// REST client for the journal service
///
/// Endpoints are built relative to the configured base URL, which lets
/// tests point the client at a mock server.
pub struct RestApi {
    client: Client,
    base_url: String,
    token: String,
}

impl RestApi {
    /// Create a new REST client
    ///
    /// # Arguments
    ///
    /// * `config` - API configuration (base URL, timeout)
    /// * `token` - Bearer credential attached to every request
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    pub fn new(config: &ApiConfig, token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("tradejournal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| JournalError::Api(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        tracing::info!("Initialized journal API client: base_url={}", base_url);

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Build a full endpoint URL from a path like `/chats`
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success response to an error
    ///
    /// Prefers the service's `{"detail": ...}` body; falls back to the
    /// HTTP status when the body is absent or unparsable.
    async fn error_from_response(response: Response) -> anyhow::Error {
        let status = response.status();
        let detail = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.detail)
            .unwrap_or_else(|_| format!("API Error: {}", status));

        if status == StatusCode::UNAUTHORIZED {
            JournalError::Authentication(detail).into()
        } else {
            JournalError::Api(detail).into()
        }
    }

    /// Check a response, returning it untouched on success
    async fn check(response: Response) -> Result<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            tracing::warn!("Journal service returned {}", status);
            Err(Self::error_from_response(response).await)
        }
    }
}

#[async_trait]
impl JournalApi for RestApi {
    async fn create_conversation(&self, title: &str) -> Result<ConversationSummary> {
        let url = self.endpoint("/chats");
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&CreateConversationRequest {
                title: title.to_string(),
            })
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn list_conversations(&self) -> Result<Vec<ConversationSummary>> {
        let url = self.endpoint("/chats");
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn get_conversation(&self, id: &str) -> Result<ConversationDetail> {
        let url = self.endpoint(&format!("/chats/{}", id));
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn delete_conversation(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&format!("/chats/{}", id));
        tracing::debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn send_message(
        &self,
        conversation_id: &str,
        content: &str,
    ) -> Result<SendMessageResponse> {
        let url = self.endpoint("/ai/chat");
        tracing::debug!("POST {} (conversation={})", url, conversation_id);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&SendMessageRequest {
                chat_id: conversation_id.to_string(),
                message: content.to_string(),
            })
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn list_trades(&self) -> Result<Vec<TradeRecord>> {
        let url = self.endpoint("/trades");
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn get_analytics(&self) -> Result<AnalyticsReport> {
        let url = self.endpoint("/ai/analytics");
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_with_base(base: &str) -> RestApi {
        let config = ApiConfig {
            base_url: base.to_string(),
            timeout_seconds: 5,
        };
        RestApi::new(&config, "test-token".to_string()).unwrap()
    }

    #[test]
    fn test_endpoint_joins_path() {
        let api = api_with_base("http://localhost:8000/api");
        assert_eq!(api.endpoint("/chats"), "http://localhost:8000/api/chats");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let api = api_with_base("http://localhost:8000/api/");
        assert_eq!(
            api.endpoint("/chats/c-1"),
            "http://localhost:8000/api/chats/c-1"
        );
    }

    #[test]
    fn test_new_with_default_config() {
        let api = RestApi::new(&ApiConfig::default(), "t".to_string());
        assert!(api.is_ok());
    }
}
