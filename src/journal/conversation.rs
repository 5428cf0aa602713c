//! Conversation state
//!
//! A conversation is a named, ordered thread of messages. The message
//! sequence is append-only during a session and replaced wholesale when
//! the history is (re-)fetched from the service.

use crate::api::types::ConversationSummary;
use crate::journal::message::Message;
use chrono::{DateTime, Utc};

/// Maximum length of a title derived from the first message
pub const TITLE_MAX_CHARS: usize = 50;

/// Derive a conversation title from its first message
///
/// Takes a character-safe prefix of the trimmed content, capped at
/// [`TITLE_MAX_CHARS`].
///
/// # Examples
///
/// ```
/// use tradejournal::journal::conversation::derive_title;
///
/// assert_eq!(derive_title("Bought AAPL at 150"), "Bought AAPL at 150");
/// assert_eq!(derive_title(&"x".repeat(80)).chars().count(), 50);
/// ```
pub fn derive_title(content: &str) -> String {
    content.trim().chars().take(TITLE_MAX_CHARS).collect()
}

/// A named, ordered thread of messages
#[derive(Debug, Clone)]
pub struct Conversation {
    id: String,
    title: String,
    created_at: DateTime<Utc>,
    messages: Vec<Message>,
    history_loaded: bool,
}

impl Conversation {
    /// Create a conversation from service metadata, with no history yet
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            created_at,
            messages: Vec::new(),
            history_loaded: false,
        }
    }

    /// Conversation identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Update the title (e.g. the service changed it)
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The ordered message sequence
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the conversation has no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether the full history has been fetched at least once
    ///
    /// Until this is true the empty message list means "not loaded yet",
    /// not "no messages".
    pub fn history_loaded(&self) -> bool {
        self.history_loaded
    }

    /// Append a single message
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Append two messages as one state update
    ///
    /// The optimistic pipeline appends the user message and the assistant
    /// placeholder together so no observer sees one without the other.
    pub fn push_pair(&mut self, first: Message, second: Message) {
        self.messages.push(first);
        self.messages.push(second);
    }

    /// Remove every provisional message, in one state update
    ///
    /// Returns the number of messages removed. Used for both rollback and
    /// the removal half of reconciliation; only one submission can be in
    /// flight, so all provisional entries belong to it.
    pub fn remove_provisional(&mut self) -> usize {
        let before = self.messages.len();
        self.messages.retain(|m| !m.is_provisional());
        before - self.messages.len()
    }

    /// Returns true if any message is still provisional
    pub fn has_provisional(&self) -> bool {
        self.messages.iter().any(Message::is_provisional)
    }

    /// Replace the message sequence with a freshly fetched history
    ///
    /// Fetched state replaces local state entirely; it is never merged
    /// with placeholders.
    pub fn replace_messages(&mut self, messages: Vec<Message>) {
        self.messages = messages;
        self.history_loaded = true;
    }
}

impl From<ConversationSummary> for Conversation {
    fn from(summary: ConversationSummary) -> Self {
        Self::new(summary.id, summary.title, summary.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::message::{Message, MessageId};

    fn conversation() -> Conversation {
        Conversation::new("c-1", "Test", Utc::now())
    }

    #[test]
    fn test_derive_title_short_content() {
        assert_eq!(derive_title("Bought AAPL at 150"), "Bought AAPL at 150");
    }

    #[test]
    fn test_derive_title_trims_whitespace() {
        assert_eq!(derive_title("  hello  "), "hello");
    }

    #[test]
    fn test_derive_title_caps_at_fifty_chars() {
        let long = "a".repeat(120);
        assert_eq!(derive_title(&long).chars().count(), TITLE_MAX_CHARS);
    }

    #[test]
    fn test_derive_title_is_character_safe() {
        // 60 multi-byte characters; slicing bytes at 50 would panic
        let long = "é".repeat(60);
        let title = derive_title(&long);
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS);
    }

    #[test]
    fn test_new_conversation_has_no_history() {
        let conversation = conversation();
        assert!(conversation.is_empty());
        assert!(!conversation.history_loaded());
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut conversation = conversation();
        conversation.push(Message::persisted_user("m-1", "first"));
        conversation.push(Message::persisted_assistant("m-2", "second"));
        assert_eq!(conversation.messages()[0].content, "first");
        assert_eq!(conversation.messages()[1].content, "second");
    }

    #[test]
    fn test_push_pair_appends_in_order() {
        let mut conversation = conversation();
        conversation.push_pair(
            Message::provisional_user(1, "hello"),
            Message::provisional_assistant(2, "..."),
        );
        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.messages()[0].id, MessageId::Provisional(1));
        assert_eq!(conversation.messages()[1].id, MessageId::Provisional(2));
    }

    #[test]
    fn test_remove_provisional_leaves_persisted() {
        let mut conversation = conversation();
        conversation.push(Message::persisted_user("m-1", "kept"));
        conversation.push_pair(
            Message::provisional_user(1, "pending"),
            Message::provisional_assistant(2, "..."),
        );

        let removed = conversation.remove_provisional();

        assert_eq!(removed, 2);
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.messages()[0].content, "kept");
        assert!(!conversation.has_provisional());
    }

    #[test]
    fn test_remove_provisional_on_clean_conversation() {
        let mut conversation = conversation();
        conversation.push(Message::persisted_user("m-1", "kept"));
        assert_eq!(conversation.remove_provisional(), 0);
        assert_eq!(conversation.len(), 1);
    }

    #[test]
    fn test_replace_messages_discards_placeholders() {
        let mut conversation = conversation();
        conversation.push_pair(
            Message::provisional_user(1, "pending"),
            Message::provisional_assistant(2, "..."),
        );

        conversation.replace_messages(vec![
            Message::persisted_user("m-1", "real"),
            Message::persisted_assistant("m-2", "reply"),
        ]);

        assert!(conversation.history_loaded());
        assert_eq!(conversation.len(), 2);
        assert!(!conversation.has_provisional());
    }

    #[test]
    fn test_from_summary() {
        let summary = ConversationSummary {
            id: "c-9".to_string(),
            title: "Review trades".to_string(),
            created_at: Utc::now(),
        };
        let conversation: Conversation = summary.into();
        assert_eq!(conversation.id(), "c-9");
        assert_eq!(conversation.title(), "Review trades");
        assert!(conversation.is_empty());
    }

    #[test]
    fn test_set_title() {
        let mut conversation = conversation();
        conversation.set_title("Updated");
        assert_eq!(conversation.title(), "Updated");
    }
}
