//! Credential handling for the journal service
//!
//! The bearer token is resolved from the `TRADEJOURNAL_TOKEN` environment
//! variable first, then from the system keyring. `auth login` stores it
//! in the keyring; `auth logout` removes it.

use crate::error::{JournalError, Result};
use keyring::Entry;

const KEYRING_SERVICE: &str = "tradejournal";
const KEYRING_USER: &str = "api_token";

/// Environment variable consulted before the keyring
pub const TOKEN_ENV_VAR: &str = "TRADEJOURNAL_TOKEN";

/// Where a resolved credential came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Environment,
    Keyring,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Environment => write!(f, "environment ({})", TOKEN_ENV_VAR),
            Self::Keyring => write!(f, "system keyring"),
        }
    }
}

fn keyring_entry() -> Result<Entry> {
    Ok(Entry::new(KEYRING_SERVICE, KEYRING_USER)?)
}

/// Resolve the bearer token, if one is configured anywhere
pub fn resolve_token() -> Result<Option<(String, TokenSource)>> {
    if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
        if !token.trim().is_empty() {
            return Ok(Some((token, TokenSource::Environment)));
        }
    }

    match keyring_entry()?.get_password() {
        Ok(token) => Ok(Some((token, TokenSource::Keyring))),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Resolve the bearer token or fail with guidance
pub fn require_token() -> Result<String> {
    match resolve_token()? {
        Some((token, source)) => {
            tracing::debug!("Using credential from {}", source);
            Ok(token)
        }
        None => Err(JournalError::Authentication(
            "No credential found. Run 'tradejournal auth login' or set TRADEJOURNAL_TOKEN"
                .to_string(),
        )
        .into()),
    }
}

/// Store a bearer token in the system keyring
pub fn store_token(token: &str) -> Result<()> {
    let token = token.trim();
    if token.is_empty() {
        return Err(JournalError::Authentication("Token cannot be empty".to_string()).into());
    }
    keyring_entry()?.set_password(token)?;
    Ok(())
}

/// Remove the stored credential from the system keyring
///
/// Returns true if a credential was removed, false if none was stored.
pub fn delete_token() -> Result<bool> {
    match keyring_entry()?.delete_password() {
        Ok(()) => Ok(true),
        Err(keyring::Error::NoEntry) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_rejects_empty_token() {
        assert!(store_token("").is_err());
        assert!(store_token("   ").is_err());
    }

    #[test]
    fn test_token_source_display() {
        assert_eq!(
            TokenSource::Environment.to_string(),
            "environment (TRADEJOURNAL_TOKEN)"
        );
        assert_eq!(TokenSource::Keyring.to_string(), "system keyring");
    }
}
