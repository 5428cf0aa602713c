//! Wire types for the journal service REST API
//!
//! Request and response structures exchanged with the journal service.
//! Field names follow the service's JSON contract (`created_at`,
//! `chat_id`, `trade_extracted`, ...), so these types stay private to the
//! API layer; the rest of the crate works with the `journal` domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message, as reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireRole {
    User,
    Assistant,
}

/// Conversation metadata from `GET /chats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// Durable identifier issued by the service
    pub id: String,
    /// Display title
    pub title: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A persisted message from `GET /chats/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Durable identifier issued by the service
    pub id: String,
    /// Message author
    pub role: WireRole,
    /// Message text
    pub content: String,
}

/// Full conversation payload from `GET /chats/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationDetail {
    /// Conversation metadata (title may have changed server-side)
    pub chat: ConversationSummary,
    /// Full ordered message history
    #[serde(default)]
    pub messages: Vec<MessageRecord>,
}

/// Request body for `POST /chats`
#[derive(Debug, Clone, Serialize)]
pub struct CreateConversationRequest {
    pub title: String,
}

/// Request body for `POST /ai/chat`
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: String,
    pub message: String,
}

/// Response body from `POST /ai/chat`
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageResponse {
    /// The assistant's reply text
    pub message: String,
    /// True when the service parsed a trade out of the message
    #[serde(default)]
    pub trade_extracted: bool,
}

/// A recorded trade from `GET /trades`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: String,
    pub symbol: String,
    #[serde(default)]
    pub entry_price: Option<f64>,
    #[serde(default)]
    pub exit_price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub pnl: Option<f64>,
    #[serde(default)]
    pub executed_at: Option<DateTime<Utc>>,
}

/// Aggregate report from `POST /ai/analytics`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsReport {
    #[serde(default)]
    pub total_trades: u64,
    #[serde(default)]
    pub total_conversations: u64,
    #[serde(default)]
    pub win_rate: Option<f64>,
    #[serde(default)]
    pub total_pnl: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Error body the service attaches to non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_role_deserialize() {
        let role: WireRole = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, WireRole::User);
        let role: WireRole = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(role, WireRole::Assistant);
    }

    #[test]
    fn test_wire_role_rejects_unknown() {
        let role = serde_json::from_str::<WireRole>("\"system\"");
        assert!(role.is_err());
    }

    #[test]
    fn test_conversation_summary_deserialize() {
        let json = r#"{"id":"c-1","title":"Bought AAPL","created_at":"2024-03-01T12:00:00Z"}"#;
        let summary: ConversationSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, "c-1");
        assert_eq!(summary.title, "Bought AAPL");
    }

    #[test]
    fn test_conversation_detail_defaults_messages() {
        let json = r#"{"chat":{"id":"c-1","title":"t","created_at":"2024-03-01T12:00:00Z"}}"#;
        let detail: ConversationDetail = serde_json::from_str(json).unwrap();
        assert!(detail.messages.is_empty());
    }

    #[test]
    fn test_send_message_request_serialize() {
        let request = SendMessageRequest {
            chat_id: "c-1".to_string(),
            message: "Bought AAPL at 150".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"chat_id\":\"c-1\""));
        assert!(json.contains("\"message\":\"Bought AAPL at 150\""));
    }

    #[test]
    fn test_send_message_response_default_trade_flag() {
        let json = r#"{"message":"Logged."}"#;
        let response: SendMessageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message, "Logged.");
        assert!(!response.trade_extracted);
    }

    #[test]
    fn test_send_message_response_trade_extracted() {
        let json = r#"{"message":"Logged.","trade_extracted":true}"#;
        let response: SendMessageResponse = serde_json::from_str(json).unwrap();
        assert!(response.trade_extracted);
    }

    #[test]
    fn test_trade_record_partial_fields() {
        let json = r#"{"id":"t-1","symbol":"AAPL"}"#;
        let trade: TradeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(trade.symbol, "AAPL");
        assert!(trade.entry_price.is_none());
        assert!(trade.pnl.is_none());
    }

    #[test]
    fn test_analytics_report_defaults() {
        let report: AnalyticsReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report.total_trades, 0);
        assert!(report.win_rate.is_none());
    }

    #[test]
    fn test_api_error_body() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"detail":"Chat not found"}"#).unwrap();
        assert_eq!(body.detail, "Chat not found");
    }
}
