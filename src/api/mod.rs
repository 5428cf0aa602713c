//! Remote data client for the journal service
//!
//! This module defines the `JournalApi` trait that the chat pipeline and
//! the read-only commands talk to, plus the REST implementation. The
//! trait is the seam: the pipeline never knows whether it is talking to a
//! real service or a test double.

pub mod rest;
pub mod types;

pub use rest::RestApi;
pub use types::{
    AnalyticsReport, ConversationDetail, ConversationSummary, MessageRecord, SendMessageResponse,
    TradeRecord, WireRole,
};

use crate::error::Result;
use async_trait::async_trait;

/// Client interface to the journal service
///
/// All remote operations the application performs. Every call carries the
/// bearer credential supplied at construction; a missing or rejected
/// credential fails fast with an authentication error.
///
/// # Examples
///
/// ```no_run
/// use tradejournal::api::{JournalApi, RestApi};
/// use tradejournal::config::ApiConfig;
///
/// # async fn example() -> tradejournal::error::Result<()> {
/// let api = RestApi::new(&ApiConfig::default(), "token".to_string())?;
/// let conversations = api.list_conversations().await?;
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JournalApi: Send + Sync {
    /// Create a new conversation with the given title
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the service rejects it
    async fn create_conversation(&self, title: &str) -> Result<ConversationSummary>;

    /// List all conversations, newest first
    async fn list_conversations(&self) -> Result<Vec<ConversationSummary>>;

    /// Fetch a conversation's metadata and full message history
    async fn get_conversation(&self, id: &str) -> Result<ConversationDetail>;

    /// Delete a conversation
    async fn delete_conversation(&self, id: &str) -> Result<()>;

    /// Send a message to the assistant within a conversation
    ///
    /// # Returns
    ///
    /// The assistant's reply text and whether a trade was parsed out of
    /// the message
    async fn send_message(&self, conversation_id: &str, content: &str)
        -> Result<SendMessageResponse>;

    /// List recorded trades
    async fn list_trades(&self) -> Result<Vec<TradeRecord>>;

    /// Fetch the aggregate analytics report
    async fn get_analytics(&self) -> Result<AnalyticsReport>;
}
