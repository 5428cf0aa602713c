//! Session commands for the interactive chat
//!
//! Parses the `/`-prefixed commands a user can enter during a chat
//! session. Session commands act on local session state (switching,
//! listing, deleting conversations) instead of being sent to the
//! journal service. Commands are case-insensitive.

use thiserror::Error;

/// Errors from parsing a session command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },
}

/// Commands that act on the session instead of being sent as messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Start a fresh conversation (next message creates it)
    New,

    /// List conversations, newest first
    List,

    /// Open a conversation by identifier
    Open(String),

    /// Delete a conversation; defaults to the open one when no id given
    Delete(Option<String>),

    /// Display help for session commands
    Help,

    /// End the session
    Quit,

    /// Not a session command; send the input as a message
    None,
}

/// Parse a line of input for a session command
///
/// Input that does not start with `/` is `SessionCommand::None` and goes
/// to the journal as a message.
pub fn parse_session_command(input: &str) -> Result<SessionCommand, CommandError> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return Ok(SessionCommand::None);
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or("").to_lowercase();
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

    match command.as_str() {
        "/new" => Ok(SessionCommand::New),
        "/list" => Ok(SessionCommand::List),
        "/open" => match arg {
            Some(id) => Ok(SessionCommand::Open(id.to_string())),
            None => Err(CommandError::MissingArgument {
                command: "/open".to_string(),
                usage: "/open <conversation-id>".to_string(),
            }),
        },
        "/delete" => Ok(SessionCommand::Delete(arg.map(str::to_string))),
        "/help" => Ok(SessionCommand::Help),
        "/quit" | "/exit" => Ok(SessionCommand::Quit),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// Print help for session commands
pub fn print_help() {
    println!("\nSession commands:");
    println!("  /new               Start a fresh conversation");
    println!("  /list              List conversations, newest first");
    println!("  /open <id>         Open a conversation");
    println!("  /delete [id]       Delete a conversation (default: the open one)");
    println!("  /help              Show this help");
    println!("  /quit              End the session");
    println!("\nAnything else is sent to your journal.\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_input_is_not_a_command() {
        assert_eq!(
            parse_session_command("Bought AAPL at 150").unwrap(),
            SessionCommand::None
        );
    }

    #[test]
    fn test_parse_new() {
        assert_eq!(parse_session_command("/new").unwrap(), SessionCommand::New);
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_session_command("/list").unwrap(), SessionCommand::List);
    }

    #[test]
    fn test_parse_open_with_id() {
        assert_eq!(
            parse_session_command("/open c-42").unwrap(),
            SessionCommand::Open("c-42".to_string())
        );
    }

    #[test]
    fn test_parse_open_requires_id() {
        assert!(matches!(
            parse_session_command("/open"),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_parse_delete_without_id() {
        assert_eq!(
            parse_session_command("/delete").unwrap(),
            SessionCommand::Delete(None)
        );
    }

    #[test]
    fn test_parse_delete_with_id() {
        assert_eq!(
            parse_session_command("/delete c-7").unwrap(),
            SessionCommand::Delete(Some("c-7".to_string()))
        );
    }

    #[test]
    fn test_parse_help_and_quit() {
        assert_eq!(parse_session_command("/help").unwrap(), SessionCommand::Help);
        assert_eq!(parse_session_command("/quit").unwrap(), SessionCommand::Quit);
        assert_eq!(parse_session_command("/exit").unwrap(), SessionCommand::Quit);
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        assert_eq!(parse_session_command("/NEW").unwrap(), SessionCommand::New);
        assert_eq!(
            parse_session_command("/Open c-1").unwrap(),
            SessionCommand::Open("c-1".to_string())
        );
    }

    #[test]
    fn test_unknown_command_is_an_error() {
        assert!(matches!(
            parse_session_command("/bogus"),
            Err(CommandError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_leading_whitespace_is_tolerated() {
        assert_eq!(
            parse_session_command("  /quit  ").unwrap(),
            SessionCommand::Quit
        );
    }
}
