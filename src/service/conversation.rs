//! Conversation grouping over the flat message list. Grouping keys on the
//! identifier on the other side of the exchange; marking a conversation read
//! is an explicit operation, deliberately decoupled from any view
//! navigation.

use crate::models::conversation::Conversation;
use crate::models::message::Message;
use crate::store::collection::{CollectionStore, CURRENT_USER};
use std::collections::HashMap;

/// The identifier on the other side of the exchange: the recipient when the
/// active identity sent the message, the sender otherwise.
pub fn counterparty_id(message: &Message) -> &str {
    if message.sender_id == CURRENT_USER {
        &message.recipient_id
    } else {
        &message.sender_id
    }
}

/// Partition messages into one conversation per distinct counterparty.
/// Every message lands in exactly one group and groups are never empty.
/// Within a conversation messages are ordered ascending by timestamp
/// (thread order); the returned list is ordered by latest message
/// descending (conversation-list order).
pub fn conversations(messages: &[Message]) -> Vec<Conversation> {
    let mut by_counterparty: HashMap<String, Vec<Message>> = HashMap::new();
    for message in messages {
        by_counterparty
            .entry(counterparty_id(message).to_string())
            .or_default()
            .push(message.clone());
    }

    let mut conversations: Vec<Conversation> = by_counterparty
        .into_iter()
        .map(|(counterparty_id, mut messages)| {
            messages.sort_by_key(|m| m.timestamp);
            Conversation {
                counterparty_id,
                messages,
            }
        })
        .collect();

    conversations.sort_by(|a, b| {
        let a_latest = a.messages.last().map(|m| m.timestamp);
        let b_latest = b.messages.last().map(|m| m.timestamp);
        b_latest.cmp(&a_latest)
    });
    conversations
}

/// The conversation with one counterparty, if any messages exist.
pub fn conversation_with(messages: &[Message], counterparty: &str) -> Option<Conversation> {
    conversations(messages)
        .into_iter()
        .find(|c| c.counterparty_id == counterparty)
}

/// Mark every unread counterparty-authored message in the conversation as
/// read. Idempotent; messages the active identity sent are untouched.
pub fn mark_conversation_read(store: &mut CollectionStore, counterparty: &str) {
    let unread: Vec<String> = store
        .messages()
        .iter()
        .filter(|m| !m.read && m.sender_id == counterparty)
        .map(|m| m.id.clone())
        .collect();
    for id in unread {
        store.mark_message_as_read(&id);
    }
}
