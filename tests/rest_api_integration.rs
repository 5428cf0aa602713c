use serde_json::json;

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tradejournal::api::{JournalApi, RestApi};
use tradejournal::config::ApiConfig;
use tradejournal::error::JournalError;

fn client_for(server: &MockServer) -> RestApi {
    let config = ApiConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
    };
    RestApi::new(&config, "test-token".to_string()).unwrap()
}

/// Conversation creation posts the title and carries the bearer credential
#[tokio::test]
async fn test_create_conversation_posts_title() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chats"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({"title": "Bought AAPL at 150"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c-1",
            "title": "Bought AAPL at 150",
            "created_at": "2026-08-24T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    let summary = api.create_conversation("Bought AAPL at 150").await.unwrap();

    assert_eq!(summary.id, "c-1");
    assert_eq!(summary.title, "Bought AAPL at 150");
}

#[tokio::test]
async fn test_list_conversations() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chats"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "c-2", "title": "newest", "created_at": "2026-08-24T11:00:00Z"},
            {"id": "c-1", "title": "older", "created_at": "2026-08-23T09:30:00Z"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    let conversations = api.list_conversations().await.unwrap();

    assert_eq!(conversations.len(), 2);
    assert_eq!(conversations[0].id, "c-2");
}

/// The detail endpoint returns metadata plus the full history
#[tokio::test]
async fn test_get_conversation_returns_history() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chats/c-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chat": {"id": "c-1", "title": "Bought AAPL", "created_at": "2026-08-24T10:00:00Z"},
            "messages": [
                {"id": "m-1", "role": "user", "content": "Bought AAPL at 150"},
                {"id": "m-2", "role": "assistant", "content": "Noted."}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    let detail = api.get_conversation("c-1").await.unwrap();

    assert_eq!(detail.chat.id, "c-1");
    assert_eq!(detail.messages.len(), 2);
    assert_eq!(detail.messages[1].content, "Noted.");
}

/// A detail payload without a messages array parses as an empty history
#[tokio::test]
async fn test_get_conversation_tolerates_missing_messages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chats/c-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chat": {"id": "c-1", "title": "empty", "created_at": "2026-08-24T10:00:00Z"}
        })))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let detail = api.get_conversation("c-1").await.unwrap();
    assert!(detail.messages.is_empty());
}

#[tokio::test]
async fn test_delete_conversation() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/chats/c-1"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    assert!(api.delete_conversation("c-1").await.is_ok());
}

/// Sending routes through the AI endpoint with chat_id and message
#[tokio::test]
async fn test_send_message_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/chat"))
        .and(body_json(json!({"chat_id": "c-1", "message": "Bought TSLA at 200"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Trade recorded.",
            "trade_extracted": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    let response = api.send_message("c-1", "Bought TSLA at 200").await.unwrap();

    assert_eq!(response.message, "Trade recorded.");
    assert!(response.trade_extracted);
}

/// A reply without the trade flag defaults to false
#[tokio::test]
async fn test_send_message_defaults_trade_flag() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/chat"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Hello."})),
        )
        .mount(&server)
        .await;

    let api = client_for(&server);
    let response = api.send_message("c-1", "hi").await.unwrap();
    assert!(!response.trade_extracted);
}

#[tokio::test]
async fn test_list_trades() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "t-1",
                "symbol": "AAPL",
                "entry_price": 150.0,
                "exit_price": 165.5,
                "quantity": 10.0,
                "pnl": 155.0,
                "executed_at": "2026-08-20T14:00:00Z"
            },
            {"id": "t-2", "symbol": "TSLA"}
        ])))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let trades = api.list_trades().await.unwrap();

    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].symbol, "AAPL");
    assert_eq!(trades[0].pnl, Some(155.0));
    assert!(trades[1].entry_price.is_none());
}

#[tokio::test]
async fn test_get_analytics() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/analytics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_trades": 12,
            "total_conversations": 4,
            "win_rate": 0.75,
            "total_pnl": 1234.5,
            "summary": "Strong month."
        })))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let report = api.get_analytics().await.unwrap();

    assert_eq!(report.total_trades, 12);
    assert_eq!(report.win_rate, Some(0.75));
    assert_eq!(report.summary.as_deref(), Some("Strong month."));
}

/// Non-2xx responses surface the service's detail message
#[tokio::test]
async fn test_error_body_detail_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/chat"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"detail": "message is required"})),
        )
        .mount(&server)
        .await;

    let api = client_for(&server);
    let err = api.send_message("c-1", "x").await.unwrap_err();

    match err.downcast_ref::<JournalError>() {
        Some(JournalError::Api(detail)) => assert_eq!(detail, "message is required"),
        other => panic!("Expected Api error, got {:?}", other),
    }
}

/// An unparsable error body falls back to the HTTP status
#[tokio::test]
async fn test_error_without_body_falls_back_to_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chats"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let api = client_for(&server);
    let err = api.list_conversations().await.unwrap_err();

    match err.downcast_ref::<JournalError>() {
        Some(JournalError::Api(detail)) => {
            assert!(detail.contains("500"), "unexpected detail: {}", detail)
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

/// 401 maps to the authentication error variant
#[tokio::test]
async fn test_unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chats"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "invalid token"})),
        )
        .mount(&server)
        .await;

    let api = client_for(&server);
    let err = api.list_conversations().await.unwrap_err();

    match err.downcast_ref::<JournalError>() {
        Some(JournalError::Authentication(detail)) => assert_eq!(detail, "invalid token"),
        other => panic!("Expected Authentication error, got {:?}", other),
    }
}
