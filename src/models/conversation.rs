use crate::models::message::Message;

/// All messages exchanged with one counterparty, in ascending timestamp
/// order (chat-thread order). Conversations are derived from existing
/// messages, so a conversation is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub counterparty_id: String,
    pub messages: Vec<Message>,
}

impl Conversation {
    /// The most recent message in the exchange.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Messages authored by the counterparty that have not been read yet.
    pub fn unread_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| !m.read && m.sender_id == self.counterparty_id)
            .count()
    }
}
