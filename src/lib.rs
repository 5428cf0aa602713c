//! TradeJournal - AI trading journal chat client
//!
//! A conversational client for the journal service: record trades in
//! natural language, review conversations and the trade ledger, and pull
//! aggregate analytics.
//!
//! The crate is organized around a small set of components:
//!
//! - [`api`] — the `JournalApi` trait and its REST implementation
//! - [`journal`] — session state: messages, conversations, and the
//!   optimistic send pipeline
//! - [`commands`] — handlers behind each CLI subcommand
//! - [`auth`] — bearer credential resolution and storage
//! - [`config`] — YAML configuration with CLI overrides
//! - [`notify`] — user-facing notification sink

pub mod api;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod journal;
pub mod notify;

pub use config::Config;
pub use error::{JournalError, Result};
