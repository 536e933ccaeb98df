use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A posted availability to help, with the skills on offer. Never deleted
/// and never status-transitioned.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HelpOffer {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub skills: Vec<String>,
    pub availability: String,
    pub location: String,
    pub radius: String,
    pub created_by: String,
    pub created_at: NaiveDate,
    pub rating: f32,
    pub completed_jobs: u32,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct HelpOfferDraft {
    #[validate(length(min = 5))]
    pub title: String,
    #[validate(length(min = 20))]
    pub description: String,
    #[validate(length(min = 1))]
    pub category: String,
    /// At least one skill; the store deduplicates exact repeats.
    #[validate(length(min = 1))]
    pub skills: Vec<String>,
    #[validate(length(min = 1))]
    pub availability: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(default = "default_radius")]
    pub radius: String,
}

fn default_radius() -> String {
    "5 miles".to_string()
}
