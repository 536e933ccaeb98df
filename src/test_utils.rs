use crate::models::message::Message;
use crate::models::offer::HelpOfferDraft;
use crate::models::request::{HelpRequestDraft, Urgency};
use crate::models::user::{RegisterRequest, User};
use crate::store::collection::CURRENT_USER;
use chrono::{Duration, NaiveDate, TimeZone, Utc};

pub fn sample_user() -> User {
    User {
        id: "1".to_string(),
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        location: "Downtown Area".to_string(),
        join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
        verified: true,
        rating: 4.8,
        completed_requests: 12,
        helped_neighbours: 8,
        avatar: None,
    }
}

pub fn sample_register_request() -> RegisterRequest {
    RegisterRequest {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        password: "hunter22".to_string(),
        location: "Riverside District".to_string(),
    }
}

pub fn sample_request_draft() -> HelpRequestDraft {
    HelpRequestDraft {
        title: "Leaky Faucet Repair".to_string(),
        description: "The kitchen faucet has been dripping for a week and I cannot fix it myself.".to_string(),
        category: "Home Repair".to_string(),
        urgency: Urgency::Medium,
        location: "Oak Street".to_string(),
        estimated_time: "1-2 hours".to_string(),
        preferred_time: "Weekends".to_string(),
    }
}

pub fn sample_offer_draft() -> HelpOfferDraft {
    HelpOfferDraft {
        title: "Garden Maintenance".to_string(),
        description: "Happy to help with weeding, pruning, and general garden upkeep.".to_string(),
        category: "Other".to_string(),
        skills: vec!["Gardening".to_string()],
        availability: "Weekends".to_string(),
        location: "Suburban Area".to_string(),
        radius: "5 miles".to_string(),
    }
}

/// A message received from `sender`, timestamped `offset_secs` after a fixed
/// epoch so tests control relative ordering.
pub fn incoming_message(id: &str, sender: &str, offset_secs: i64, read: bool) -> Message {
    let base = Utc.with_ymd_and_hms(2024, 12, 20, 9, 0, 0).unwrap();
    Message {
        id: id.to_string(),
        sender_id: sender.to_string(),
        recipient_id: CURRENT_USER.to_string(),
        content: format!("message {id}"),
        request_id: None,
        timestamp: base + Duration::seconds(offset_secs),
        read,
    }
}
