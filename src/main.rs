//! TradeJournal - AI trading journal chat client
//!
//! Main entry point for the TradeJournal application.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tradejournal::cli::{AuthCommand, Cli, Commands, ConversationCommand, TradeCommand};
use tradejournal::commands;
use tradejournal::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    init_tracing(cli.verbose);

    // Load and validate configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Chat {
            conversation,
            no_welcome,
        } => {
            tracing::info!("Starting interactive chat session");
            if let Some(id) = &conversation {
                tracing::debug!("Opening conversation: {}", id);
            }
            commands::chat::run_chat(config, conversation, no_welcome).await?;
            Ok(())
        }
        Commands::Conversations { command } => match command {
            ConversationCommand::List => commands::conversations::list_conversations(&config).await,
            ConversationCommand::Show { id } => {
                commands::conversations::show_conversation(&config, &id).await
            }
            ConversationCommand::Delete { id } => {
                commands::conversations::delete_conversation(&config, &id).await
            }
        },
        Commands::Trades { command } => match command {
            TradeCommand::List => commands::trades::list_trades(&config).await,
        },
        Commands::Analytics => commands::trades::show_analytics(&config).await,
        Commands::Auth { command } => match command {
            AuthCommand::Login { token } => commands::auth::login(token),
            AuthCommand::Status => commands::auth::status(),
            AuthCommand::Logout => commands::auth::logout(),
        },
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "tradejournal=debug"
    } else {
        "tradejournal=info"
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
