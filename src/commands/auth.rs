//! Authentication command handlers
//!
//! Thin wrappers over the credential store: store, inspect, and remove
//! the journal service bearer token.

use crate::auth;
use crate::error::Result;

use colored::Colorize;
use rustyline::DefaultEditor;

/// Store a bearer token, prompting for it when not given on the CLI
pub fn login(token: Option<String>) -> Result<()> {
    let token = match token {
        Some(token) => token,
        None => {
            let mut rl = DefaultEditor::new()?;
            rl.readline("Token: ")?
        }
    };

    auth::store_token(&token)?;
    println!("{}", "Credential stored in the system keyring".green());
    Ok(())
}

/// Report whether a credential is available and where it comes from
pub fn status() -> Result<()> {
    match auth::resolve_token()? {
        Some((_, source)) => println!("Authenticated via {}", source),
        None => println!(
            "No credential found. Run 'tradejournal auth login' or set {}",
            auth::TOKEN_ENV_VAR
        ),
    }
    Ok(())
}

/// Remove the stored credential
pub fn logout() -> Result<()> {
    if auth::delete_token()? {
        println!("Credential removed");
    } else {
        println!("No credential was stored");
    }
    Ok(())
}
