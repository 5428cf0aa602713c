//! Command-line interface definition for TradeJournal
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for the interactive chat session, conversation
//! management, trade/analytics views, and authentication.

use clap::{Parser, Subcommand};

/// TradeJournal - AI trading journal chat client
///
/// Record trades, ask for insights, and review your journal through a
/// conversational interface backed by the journal service.
#[derive(Parser, Debug, Clone)]
#[command(name = "tradejournal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the journal service API base URL
    #[arg(long, env = "TRADEJOURNAL_API_URL")]
    pub api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for TradeJournal
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Open a specific conversation instead of the most recent one
        #[arg(long)]
        conversation: Option<String>,

        /// Skip the welcome screen even when no conversation is selected
        #[arg(long)]
        no_welcome: bool,
    },

    /// Manage journal conversations
    Conversations {
        /// Conversation management subcommand
        #[command(subcommand)]
        command: ConversationCommand,
    },

    /// Manage recorded trades
    Trades {
        /// Trade subcommand
        #[command(subcommand)]
        command: TradeCommand,
    },

    /// Show aggregate journal analytics
    Analytics,

    /// Manage the journal service credential
    Auth {
        /// Authentication subcommand
        #[command(subcommand)]
        command: AuthCommand,
    },
}

/// Conversation management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConversationCommand {
    /// List all conversations, newest first
    List,

    /// Show a conversation's full message history
    Show {
        /// Conversation identifier
        id: String,
    },

    /// Delete a conversation
    Delete {
        /// Conversation identifier
        id: String,
    },
}

/// Trade subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TradeCommand {
    /// List recorded trades
    List,
}

/// Authentication subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum AuthCommand {
    /// Store a bearer token for the journal service
    Login {
        /// Token value; prompted for interactively when omitted
        #[arg(long)]
        token: Option<String>,
    },

    /// Show whether a credential is available and where it came from
    Status,

    /// Remove the stored credential
    Logout,
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
