//! In-session conversation store
//!
//! Holds the ordered collection of conversations and the
//! selected-conversation pointer as explicit state. Mutations are keyed
//! by conversation identifier, so updates to one conversation never
//! disturb another.

use crate::api::types::ConversationSummary;
use crate::journal::conversation::Conversation;

/// Ordered collection of conversations plus the selection pointer
#[derive(Debug, Default)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    selected: Option<String>,
}

impl ConversationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection from a freshly listed set of summaries
    ///
    /// Clears the selection if the selected conversation is no longer
    /// present.
    pub fn replace_from_summaries(&mut self, summaries: Vec<ConversationSummary>) {
        self.conversations = summaries.into_iter().map(Conversation::from).collect();
        if let Some(selected) = &self.selected {
            if self.get(selected).is_none() {
                self.selected = None;
            }
        }
    }

    /// Insert a newly created conversation at the front (newest first)
    pub fn insert_front(&mut self, conversation: Conversation) {
        self.conversations.insert(0, conversation);
    }

    /// Remove a conversation by identifier
    ///
    /// Clears the selection if it pointed at the removed conversation.
    /// Returns true if a conversation was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.conversations.len();
        self.conversations.retain(|c| c.id() != id);
        let removed = self.conversations.len() < before;
        if removed && self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        removed
    }

    /// Look up a conversation by identifier
    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id() == id)
    }

    /// Look up a conversation mutably by identifier
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id() == id)
    }

    /// Point the selection at a conversation
    ///
    /// Returns false (selection unchanged) if the identifier is unknown.
    pub fn select(&mut self, id: &str) -> bool {
        if self.get(id).is_some() {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Clear the selection pointer
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Identifier of the selected conversation, if any
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected conversation, if any
    pub fn selected(&self) -> Option<&Conversation> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// The selected conversation mutably, if any
    pub fn selected_mut(&mut self) -> Option<&mut Conversation> {
        let id = self.selected.clone()?;
        self.get_mut(&id)
    }

    /// All conversations in display order (newest first)
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Number of conversations
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    /// Returns true if the store holds no conversations
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}
