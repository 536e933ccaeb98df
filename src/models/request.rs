use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum RequestStatus {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        };
        write!(f, "{label}")
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequestStatus::Open => "Open",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Completed => "Completed",
        };
        write!(f, "{label}")
    }
}

/// A posted need for assistance. Never deleted; the status field may be set
/// to any value without workflow enforcement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HelpRequest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub urgency: Urgency,
    pub location: String,
    pub status: RequestStatus,
    pub created_by: String,
    pub created_at: NaiveDate,
    pub estimated_time: String,
    pub preferred_time: String,
}

/// Caller-supplied fields for a new request; the store fills in the
/// identifier, status, creation date, and creator.
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct HelpRequestDraft {
    #[validate(length(min = 5))]
    pub title: String,
    #[validate(length(min = 20))]
    pub description: String,
    #[validate(length(min = 1))]
    pub category: String,
    pub urgency: Urgency,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub estimated_time: String,
    #[validate(length(min = 1))]
    pub preferred_time: String,
}
