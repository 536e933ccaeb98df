//! Fixed literal dataset loaded once at startup. Values are the fixture set
//! the browse and detail views are built around; several tests depend on
//! them verbatim.

use crate::models::offer::HelpOffer;
use crate::models::request::{HelpRequest, RequestStatus, Urgency};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn requests() -> Vec<HelpRequest> {
    vec![
        HelpRequest {
            id: "1".to_string(),
            title: "Grocery Shopping Help".to_string(),
            description: "Need someone to help with weekly grocery shopping. I have mobility issues and would appreciate assistance.".to_string(),
            category: "Shopping".to_string(),
            urgency: Urgency::Medium,
            location: "Downtown Area".to_string(),
            status: RequestStatus::Open,
            created_by: "elderly-neighbor".to_string(),
            created_at: date(2024, 12, 18),
            estimated_time: "2-3 hours".to_string(),
            preferred_time: "Weekday mornings".to_string(),
        },
        HelpRequest {
            id: "2".to_string(),
            title: "Dog Walking Service".to_string(),
            description: "Looking for someone to walk my golden retriever twice a week. He's friendly and well-behaved.".to_string(),
            category: "Pet Care".to_string(),
            urgency: Urgency::Low,
            location: "Riverside District".to_string(),
            status: RequestStatus::InProgress,
            created_by: "busy-parent".to_string(),
            created_at: date(2024, 12, 17),
            estimated_time: "1 hour per walk".to_string(),
            preferred_time: "Evenings".to_string(),
        },
        HelpRequest {
            id: "3".to_string(),
            title: "Computer Setup Help".to_string(),
            description: "Need help setting up a new computer and installing basic software. Not very tech-savvy.".to_string(),
            category: "Technology".to_string(),
            urgency: Urgency::High,
            location: "Oak Street".to_string(),
            status: RequestStatus::Open,
            created_by: "senior-citizen".to_string(),
            created_at: date(2024, 12, 19),
            estimated_time: "2-4 hours".to_string(),
            preferred_time: "Flexible".to_string(),
        },
    ]
}

pub fn offers() -> Vec<HelpOffer> {
    vec![
        HelpOffer {
            id: "1".to_string(),
            title: "Handyman Services".to_string(),
            description: "Experienced in basic home repairs, plumbing, and electrical work. Happy to help neighbors with small projects.".to_string(),
            category: "Home Repair".to_string(),
            skills: vec!["Plumbing".to_string(), "Electrical".to_string(), "Carpentry".to_string()],
            availability: "Weekends".to_string(),
            location: "Downtown Area".to_string(),
            radius: "5 miles".to_string(),
            created_by: "handy-helper".to_string(),
            created_at: date(2024, 12, 15),
            rating: 4.9,
            completed_jobs: 15,
        },
        HelpOffer {
            id: "2".to_string(),
            title: "Tutoring Services".to_string(),
            description: "Math and science tutor available for middle and high school students. Patient and experienced.".to_string(),
            category: "Education".to_string(),
            skills: vec!["Mathematics".to_string(), "Physics".to_string(), "Chemistry".to_string()],
            availability: "Weekday evenings".to_string(),
            location: "University District".to_string(),
            radius: "3 miles".to_string(),
            created_by: "student-tutor".to_string(),
            created_at: date(2024, 12, 16),
            rating: 4.7,
            completed_jobs: 8,
        },
    ]
}
