/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes the top-level command modules:

- `chat`          — Interactive chat session
- `conversations` — List, show, and delete conversations
- `trades`        — Trade ledger and analytics views
- `auth`          — Credential management

These handlers are intentionally small and use the library components:
the API client, the send pipeline, and the credential store.
*/

use crate::api::RestApi;
use crate::auth as credentials;
use crate::config::Config;
use crate::error::Result;

// Interactive chat session
pub mod chat;

// Session command parser for the chat loop
pub mod session;

// Conversation management
pub mod conversations;

// Trade ledger and analytics views
pub mod trades;

// Credential management
pub mod auth;

/// Build an authenticated API client from the loaded configuration
fn build_api(config: &Config) -> Result<RestApi> {
    let token = credentials::require_token()?;
    RestApi::new(&config.api, token)
}
