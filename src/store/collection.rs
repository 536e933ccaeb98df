use crate::error::app_error::AppError;
use crate::models::message::Message;
use crate::models::offer::{HelpOffer, HelpOfferDraft};
use crate::models::request::{HelpRequest, HelpRequestDraft, RequestStatus};
use crate::store::seed;
use crate::util;
use tracing::debug;
use validator::Validate;

/// Fixed placeholder standing in for the authenticated session identifier
/// throughout the collection store.
pub const CURRENT_USER: &str = "current-user";

/// Requests, offers, and messages for the lifetime of the process. Nothing
/// here is persisted; the seed dataset is loaded once at construction and
/// messages start empty. Mutations prepend, so index 0 is always the most
/// recently added entry.
pub struct CollectionStore {
    requests: Vec<HelpRequest>,
    offers: Vec<HelpOffer>,
    messages: Vec<Message>,
}

impl CollectionStore {
    pub fn seeded() -> Self {
        Self {
            requests: seed::requests(),
            offers: seed::offers(),
            messages: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self {
            requests: Vec::new(),
            offers: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn requests(&self) -> &[HelpRequest] {
        &self.requests
    }

    pub fn offers(&self) -> &[HelpOffer] {
        &self.offers
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn request(&self, id: &str) -> Option<&HelpRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn offer(&self, id: &str) -> Option<&HelpOffer> {
        self.offers.iter().find(|o| o.id == id)
    }

    /// Validate the draft, fill in the generated fields, and prepend.
    /// New requests always open as `Open` and are attributed to
    /// [`CURRENT_USER`].
    pub fn add_request(&mut self, draft: HelpRequestDraft) -> Result<HelpRequest, AppError> {
        draft.validate()?;

        let request = HelpRequest {
            id: util::next_id(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            urgency: draft.urgency,
            location: draft.location,
            status: RequestStatus::Open,
            created_by: CURRENT_USER.to_string(),
            created_at: util::today(),
            estimated_time: draft.estimated_time,
            preferred_time: draft.preferred_time,
        };
        debug!(request_id = %request.id, "request added");
        self.requests.insert(0, request.clone());
        Ok(request)
    }

    /// Validate the draft, deduplicate skills by exact match (first
    /// occurrence wins), fill in the generated fields, and prepend. New
    /// offers start with zero rating and zero completed jobs.
    pub fn add_offer(&mut self, draft: HelpOfferDraft) -> Result<HelpOffer, AppError> {
        draft.validate()?;

        let mut skills: Vec<String> = Vec::with_capacity(draft.skills.len());
        for skill in draft.skills {
            if !skills.contains(&skill) {
                skills.push(skill);
            }
        }

        let offer = HelpOffer {
            id: util::next_id(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            skills,
            availability: draft.availability,
            location: draft.location,
            radius: draft.radius,
            created_by: CURRENT_USER.to_string(),
            created_at: util::today(),
            rating: 0.0,
            completed_jobs: 0,
        };
        debug!(offer_id = %offer.id, "offer added");
        self.offers.insert(0, offer.clone());
        Ok(offer)
    }

    /// Replace the status of the matching request in place. Any status may
    /// be set; there is no workflow enforcement. Silent no-op when no
    /// request matches.
    pub fn update_request_status(&mut self, id: &str, status: RequestStatus) {
        if let Some(request) = self.requests.iter_mut().find(|r| r.id == id) {
            debug!(request_id = %id, status = %status, "request status updated");
            request.status = status;
        }
    }

    /// Record an outgoing message from [`CURRENT_USER`] and prepend it.
    pub fn send_message(&mut self, recipient_id: &str, content: &str, request_id: Option<String>) -> Message {
        let message = Message {
            id: util::next_id(),
            sender_id: CURRENT_USER.to_string(),
            recipient_id: recipient_id.to_string(),
            content: content.to_string(),
            request_id,
            timestamp: util::now(),
            read: false,
        };
        debug!(message_id = %message.id, recipient_id = %recipient_id, "message sent");
        self.messages.insert(0, message.clone());
        message
    }

    /// Inject a message as-is, bypassing send attribution. Tests use this to
    /// stage incoming traffic from counterparties.
    #[cfg(test)]
    pub(crate) fn push_message(&mut self, message: Message) {
        self.messages.insert(0, message);
    }

    /// One-way false→true transition; idempotent, no-op when not found.
    pub fn mark_message_as_read(&mut self, id: &str) {
        if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
            message.read = true;
        }
    }
}
