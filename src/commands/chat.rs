//! Interactive chat session handler
//!
//! Runs a readline-based loop that submits user input through the
//! optimistic send pipeline and renders replies as they arrive. Lines
//! starting with `/` are session commands (see [`super::session`]);
//! everything else goes to the journal.

use crate::api::{JournalApi, RestApi};
use crate::auth;
use crate::commands::session::{parse_session_command, print_help, SessionCommand};
use crate::config::Config;
use crate::error::Result;
use crate::journal::{Conversation, Role, SendPipeline, SubmitOutcome};
use crate::notify::TerminalNotifier;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::sync::Arc;

const WELCOME_SUGGESTIONS: [(&str, &str); 4] = [
    ("Log a Trade", "I bought AAPL at $256 and sold at $325"),
    ("Analyze Performance", "Show me my trading statistics this month"),
    ("Plan Strategy", "Help me plan my next trade for TSLA"),
    ("Review Trades", "What trades did I make last week?"),
];

/// Start an interactive chat session
///
/// Loads the conversation list, opens the requested conversation (or the
/// most recent one), and enters the readline loop.
pub async fn run_chat(
    config: Config,
    conversation: Option<String>,
    no_welcome: bool,
) -> Result<()> {
    let token = auth::require_token()?;
    let api: Arc<dyn JournalApi> = Arc::new(RestApi::new(&config.api, token)?);
    let mut pipeline = SendPipeline::new(api, Arc::new(TerminalNotifier), &config.chat);

    pipeline.load_conversations().await?;

    match conversation {
        Some(id) => pipeline.select(&id).await?,
        None => {
            // The most recent conversation opens automatically
            let recent = pipeline
                .store()
                .conversations()
                .first()
                .map(|c| c.id().to_string());
            if let Some(id) = recent {
                if let Err(e) = pipeline.select(&id).await {
                    tracing::warn!("Failed to load most recent conversation {}: {}", id, e);
                    eprintln!("{}", "Failed to load chat".red());
                }
            }
        }
    }

    match pipeline.store().selected() {
        Some(conversation) => render_conversation(conversation),
        None => {
            if config.chat.show_welcome && !no_welcome {
                print_welcome();
            }
        }
    }

    let mut rl = DefaultEditor::new()?;
    println!("Type a message, or '/help' for session commands.\n");

    loop {
        match rl.readline(&prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                rl.add_history_entry(trimmed)?;

                match parse_session_command(trimmed) {
                    Ok(SessionCommand::None) => submit(&mut pipeline, trimmed).await,
                    Ok(SessionCommand::New) => {
                        pipeline.clear_selection();
                        println!("Starting fresh. Your next message opens a new conversation.\n");
                    }
                    Ok(SessionCommand::List) => print_conversation_list(&pipeline),
                    Ok(SessionCommand::Open(id)) => match pipeline.select(&id).await {
                        Ok(()) => {
                            if let Some(conversation) = pipeline.store().selected() {
                                render_conversation(conversation);
                            }
                        }
                        Err(e) => {
                            tracing::warn!("Failed to open conversation {}: {}", id, e);
                            eprintln!("{}", "Failed to load chat".red());
                        }
                    },
                    Ok(SessionCommand::Delete(id)) => delete(&mut pipeline, id).await,
                    Ok(SessionCommand::Help) => print_help(),
                    Ok(SessionCommand::Quit) => break,
                    Err(e) => eprintln!("{}", e.to_string().yellow()),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("Goodbye!");
    Ok(())
}

async fn submit(pipeline: &mut SendPipeline, content: &str) {
    match pipeline.submit(content).await {
        SubmitOutcome::Sent { .. } => {
            let reply = pipeline
                .store()
                .selected()
                .and_then(|c| c.messages().iter().rev().find(|m| m.role == Role::Assistant));
            if let Some(reply) = reply {
                println!("\n{}\n", format_message_line(Role::Assistant, &reply.content));
            }
        }
        SubmitOutcome::RejectedBusy => {
            println!("{}", "Still sending your previous message".yellow());
        }
        // The pipeline surfaced a notice; nothing more to print
        SubmitOutcome::RejectedBlank
        | SubmitOutcome::SetupFailed
        | SubmitOutcome::SendFailed => {}
    }
}

async fn delete(pipeline: &mut SendPipeline, id: Option<String>) {
    let Some(id) = id.or_else(|| pipeline.store().selected_id().map(str::to_string)) else {
        eprintln!("{}", "No conversation open. Usage: /delete <id>".yellow());
        return;
    };
    match pipeline.delete(&id).await {
        Ok(()) => println!("Deleted conversation {}\n", id),
        Err(e) => {
            tracing::warn!("Failed to delete conversation {}: {}", id, e);
            eprintln!("{}", "Failed to delete conversation".red());
        }
    }
}

fn prompt() -> String {
    format!("{} ", "you>".blue().bold())
}

/// Render a full conversation: header plus message history
fn render_conversation(conversation: &Conversation) {
    println!(
        "\n{} {}",
        "Conversation:".bold(),
        conversation.title().cyan()
    );
    println!("{}\n", format!("({})", conversation.id()).dimmed());
    for message in conversation.messages() {
        println!("{}", format_message_line(message.role, &message.content));
    }
    if !conversation.is_empty() {
        println!();
    }
}

fn format_message_line(role: Role, content: &str) -> String {
    match role {
        Role::User => format!("{} {}", "you>".blue().bold(), content),
        Role::Assistant => format!("{} {}", "journal>".green().bold(), content),
    }
}

fn print_conversation_list(pipeline: &SendPipeline) {
    let store = pipeline.store();
    if store.is_empty() {
        println!("No conversations yet.\n");
        return;
    }
    println!();
    for conversation in store.conversations() {
        let marker = if store.selected_id() == Some(conversation.id()) {
            "*"
        } else {
            " "
        };
        println!(
            "{} {}  {}",
            marker,
            conversation.id().dimmed(),
            conversation.title()
        );
    }
    println!();
}

fn print_welcome() {
    println!("\n{}", "Your AI Trading Journal".bold());
    println!("Record trades, analyze performance, and plan strategies naturally\n");
    for (title, example) in WELCOME_SUGGESTIONS {
        println!("  {}", title.cyan());
        println!("    {}", example.dimmed());
    }
    println!();
}
