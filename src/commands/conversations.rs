//! Conversation management commands
//!
//! Non-interactive counterparts to the session commands: list, show, and
//! delete conversations straight from the shell.

use crate::api::JournalApi;
use crate::commands::build_api;
use crate::config::Config;
use crate::error::Result;
use crate::journal::{Message, Role};

use colored::Colorize;
use prettytable::{row, Table};

/// List all conversations, newest first
pub async fn list_conversations(config: &Config) -> Result<()> {
    let api = build_api(config)?;
    let summaries = api.list_conversations().await?;

    if summaries.is_empty() {
        println!("No conversations yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["ID", "TITLE", "CREATED"]);
    for summary in &summaries {
        table.add_row(row![
            summary.id,
            summary.title,
            summary.created_at.format("%Y-%m-%d %H:%M")
        ]);
    }
    table.printstd();
    println!("\n{} conversation(s)", summaries.len());

    Ok(())
}

/// Show a conversation's full message history
pub async fn show_conversation(config: &Config, id: &str) -> Result<()> {
    let api = build_api(config)?;
    let detail = api.get_conversation(id).await?;

    println!("{} {}", "Conversation:".bold(), detail.chat.title.cyan());
    println!(
        "{}\n",
        format!(
            "({}, created {})",
            detail.chat.id,
            detail.chat.created_at.format("%Y-%m-%d %H:%M")
        )
        .dimmed()
    );

    if detail.messages.is_empty() {
        println!("No messages.");
        return Ok(());
    }

    for record in detail.messages {
        let message = Message::from(record);
        match message.role {
            Role::User => println!("{} {}", "you>".blue().bold(), message.content),
            Role::Assistant => println!("{} {}", "journal>".green().bold(), message.content),
        }
    }

    Ok(())
}

/// Delete a conversation
pub async fn delete_conversation(config: &Config, id: &str) -> Result<()> {
    let api = build_api(config)?;
    api.delete_conversation(id).await?;
    println!("Deleted conversation {}", id);
    Ok(())
}
