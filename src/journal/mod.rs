//! Session state for the trading journal chat
//!
//! The journal module owns everything that changes during a chat session:
//! messages, conversations, the conversation collection, and the
//! optimistic send pipeline that drives them.

pub mod conversation;
pub mod message;
pub mod pipeline;
pub mod store;

pub use conversation::{derive_title, Conversation, TITLE_MAX_CHARS};
pub use message::{Message, MessageId, Role};
pub use pipeline::{SendPipeline, SubmitOutcome};
pub use store::ConversationStore;
