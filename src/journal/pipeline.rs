//! Optimistic send pipeline
//!
//! Lets the user send a message and see it, plus a placeholder for the
//! assistant's reply, appear immediately while the durable round trip
//! happens in the background. On success the provisional pair is replaced
//! with finalized entries; on failure it is rolled back, leaving the
//! conversation exactly as it was before the submission began.
//!
//! Only one submission may be in flight at a time. The busy flag is the
//! single-flight guard; it is cleared on every exit path.

use crate::api::JournalApi;
use crate::config::ChatConfig;
use crate::error::Result;
use crate::journal::conversation::{derive_title, Conversation};
use crate::journal::message::Message;
use crate::journal::store::ConversationStore;
use crate::notify::{Notice, Notifier};

use std::sync::Arc;

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The exchange completed; `trade_logged` is true when the service
    /// parsed a trade out of the message
    Sent { trade_logged: bool },
    /// Ignored: another submission is in flight
    RejectedBusy,
    /// Ignored: content was blank after trimming
    RejectedBlank,
    /// Conversation creation failed; nothing was appended locally
    SetupFailed,
    /// The send failed after the optimistic append; it was rolled back
    SendFailed,
}

/// Drives the chat session state against the journal service
///
/// Owns the conversation store, the remote client, and the notification
/// sink. All state transitions from the session flow through here.
pub struct SendPipeline {
    api: Arc<dyn JournalApi>,
    notifier: Arc<dyn Notifier>,
    store: ConversationStore,
    pending_reply_text: String,
    busy: bool,
    next_local_id: u64,
    next_final_seq: u64,
}

impl SendPipeline {
    /// Create a pipeline over an API client and a notification sink
    pub fn new(api: Arc<dyn JournalApi>, notifier: Arc<dyn Notifier>, chat: &ChatConfig) -> Self {
        Self {
            api,
            notifier,
            store: ConversationStore::new(),
            pending_reply_text: chat.pending_reply_text.clone(),
            busy: false,
            next_local_id: 0,
            next_final_seq: 0,
        }
    }

    /// The conversation store, for rendering
    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// True while a submission is in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Drop the selection so the next submission starts a fresh conversation
    pub fn clear_selection(&mut self) {
        self.store.clear_selection();
    }

    /// Fetch the conversation list and replace the local collection
    pub async fn load_conversations(&mut self) -> Result<()> {
        let summaries = self.api.list_conversations().await?;
        tracing::debug!("Loaded {} conversations", summaries.len());
        self.store.replace_from_summaries(summaries);
        Ok(())
    }

    /// Select a conversation and fetch its full history
    ///
    /// The selection pointer moves immediately; until the fetch resolves
    /// the conversation may render empty. Fetched messages replace any
    /// local state for that conversation wholesale.
    pub async fn select(&mut self, id: &str) -> Result<()> {
        self.store.select(id);

        let detail = self.api.get_conversation(id).await?;
        let messages: Vec<Message> = detail.messages.into_iter().map(Message::from).collect();

        match self.store.get_mut(id) {
            Some(conversation) => {
                // Title may have changed server-side
                conversation.set_title(detail.chat.title);
                conversation.replace_messages(messages);
            }
            None => {
                let mut conversation = Conversation::from(detail.chat);
                conversation.replace_messages(messages);
                self.store.insert_front(conversation);
            }
        }

        self.store.select(id);
        Ok(())
    }

    /// Delete a conversation remotely and locally
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        self.api.delete_conversation(id).await?;
        self.store.remove(id);
        Ok(())
    }

    /// Submit a message through the optimistic pipeline
    ///
    /// If no conversation is selected, one is created first with a title
    /// derived from the content; a creation failure aborts the whole
    /// submission before any local mutation. Otherwise the user message
    /// and an assistant placeholder are appended together, the send is
    /// issued, and the pair is either finalized (success) or rolled back
    /// (failure). Blank input and submissions while one is already in
    /// flight are ignored without any state change.
    pub async fn submit(&mut self, content: &str) -> SubmitOutcome {
        let content = content.trim();
        if content.is_empty() {
            return SubmitOutcome::RejectedBlank;
        }
        if self.busy {
            tracing::debug!("Submission rejected: another send is in flight");
            return SubmitOutcome::RejectedBusy;
        }

        let conversation_id = match self.store.selected_id() {
            Some(id) => id.to_string(),
            None => match self.create_conversation_for(content).await {
                Some(id) => id,
                None => return SubmitOutcome::SetupFailed,
            },
        };

        // Both provisional entries are appended in one state update
        let user_message = Message::provisional_user(self.next_local_id(), content);
        let placeholder =
            Message::provisional_assistant(self.next_local_id(), self.pending_reply_text.clone());

        let Some(conversation) = self.store.get_mut(&conversation_id) else {
            // Selection pointed at a conversation the store no longer holds
            tracing::warn!("Selected conversation {} vanished from store", conversation_id);
            return SubmitOutcome::SetupFailed;
        };
        conversation.push_pair(user_message, placeholder);

        self.busy = true;
        let result = self.api.send_message(&conversation_id, content).await;
        self.busy = false;

        match result {
            Ok(response) => {
                let seq = self.next_final_seq();
                if let Some(conversation) = self.store.get_mut(&conversation_id) {
                    conversation.remove_provisional();
                    // The send endpoint does not echo identifiers; durable
                    // ids replace these on the next history load
                    conversation.push_pair(
                        Message::persisted_user(format!("sent-{}", seq), content),
                        Message::persisted_assistant(
                            format!("reply-{}", seq),
                            response.message,
                        ),
                    );
                }

                if response.trade_extracted {
                    self.notifier
                        .notify(Notice::success("Trade logged successfully"));
                }

                SubmitOutcome::Sent {
                    trade_logged: response.trade_extracted,
                }
            }
            Err(e) => {
                tracing::warn!("Send failed, rolling back optimistic update: {}", e);
                if let Some(conversation) = self.store.get_mut(&conversation_id) {
                    conversation.remove_provisional();
                }
                self.notifier
                    .notify(Notice::error("Failed to send message. Please try again."));
                SubmitOutcome::SendFailed
            }
        }
    }

    /// Create and select a conversation for a first message
    ///
    /// Returns the new conversation's identifier, or None after notifying
    /// on failure. Nothing is appended locally when creation fails.
    async fn create_conversation_for(&mut self, content: &str) -> Option<String> {
        let title = derive_title(content);
        match self.api.create_conversation(&title).await {
            Ok(summary) => {
                let id = summary.id.clone();
                tracing::info!("Created conversation {} ({})", id, summary.title);
                self.store.insert_front(Conversation::from(summary));
                self.store.select(&id);
                Some(id)
            }
            Err(e) => {
                tracing::warn!("Conversation creation failed: {}", e);
                self.notifier
                    .notify(Notice::error("Failed to create conversation"));
                None
            }
        }
    }

    fn next_local_id(&mut self) -> u64 {
        self.next_local_id += 1;
        self.next_local_id
    }

    fn next_final_seq(&mut self) -> u64 {
        self.next_final_seq += 1;
        self.next_final_seq
    }
}
