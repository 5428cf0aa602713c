//! Message types for the journal chat
//!
//! A message is either provisional (created locally, awaiting
//! confirmation from the service) or persisted (carrying the durable
//! identifier the service issued). Modeling the identifier as a tagged
//! union makes reconciliation and rollback exhaustive: there is no string
//! prefix to sniff and no way to persist a provisional identifier.

use crate::api::types::{MessageRecord, WireRole};
use std::fmt;

/// Message author
///
/// Closed two-value enumeration; the service never reports anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl From<WireRole> for Role {
    fn from(role: WireRole) -> Self {
        match role {
            WireRole::User => Self::User,
            WireRole::Assistant => Self::Assistant,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// Message identifier
///
/// `Provisional` identifiers are process-local and exist only between an
/// optimistic append and the matching reconciliation or rollback; they
/// are never sent to the service. `Persisted` identifiers are durable and
/// issued by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageId {
    /// Locally assigned, pending confirmation
    Provisional(u64),
    /// Durable identifier issued by the service
    Persisted(String),
}

impl MessageId {
    /// Returns true for provisional identifiers
    pub fn is_provisional(&self) -> bool {
        matches!(self, Self::Provisional(_))
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Provisional or durable identifier
    pub id: MessageId,
    /// Message author
    pub role: Role,
    /// Message text
    pub content: String,
}

impl Message {
    /// Create a provisional user message
    pub fn provisional_user(local_id: u64, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::Provisional(local_id),
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a provisional assistant placeholder
    pub fn provisional_assistant(local_id: u64, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::Provisional(local_id),
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Create a persisted user message
    pub fn persisted_user(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::Persisted(id.into()),
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a persisted assistant message
    pub fn persisted_assistant(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::Persisted(id.into()),
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Returns true if this message is still awaiting confirmation
    pub fn is_provisional(&self) -> bool {
        self.id.is_provisional()
    }
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Self {
            id: MessageId::Persisted(record.id),
            role: record.role.into(),
            content: record.content,
        }
    }
}
