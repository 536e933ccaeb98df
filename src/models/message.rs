use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A direct message between the active identity and one counterparty,
/// optionally tied to a help request. Never deleted; the read flag is the
/// only mutable field and only ever flips false to true.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub recipient_id: String,
    pub content: String,
    pub request_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}
