//! Filtering for the browse views. An entry appears in the result exactly
//! when every active predicate holds; results keep collection order and are
//! not paginated.

use crate::models::offer::HelpOffer;
use crate::models::request::{HelpRequest, RequestStatus, Urgency};

/// Fixed vocabulary shared by the create forms and the browse filters.
pub const CATEGORIES: [&str; 7] = [
    "Shopping",
    "Pet Care",
    "Technology",
    "Home Repair",
    "Transportation",
    "Education",
    "Other",
];
pub const URGENCY_LEVELS: [Urgency; 3] = [Urgency::Low, Urgency::Medium, Urgency::High];
pub const LOCATIONS: [&str; 5] = [
    "Downtown Area",
    "Riverside District",
    "Oak Street",
    "University District",
    "Suburban Area",
];
pub const AVAILABILITIES: [&str; 5] = ["Weekdays", "Weekends", "Evenings", "Mornings", "Flexible"];

/// Filter dimensions for the requests browse view. `None` (or an empty
/// search string) leaves a dimension unconstrained.
///
/// The default is NOT fully unconstrained: the requests view opens on
/// `status = Open`, and clearing the filters returns to that default.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestFilter {
    pub search: String,
    pub category: Option<String>,
    pub urgency: Option<Urgency>,
    pub location: Option<String>,
    pub status: Option<RequestStatus>,
}

impl Default for RequestFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            urgency: None,
            location: None,
            status: Some(RequestStatus::Open),
        }
    }
}

impl RequestFilter {
    pub fn unconstrained() -> Self {
        Self {
            status: None,
            ..Self::default()
        }
    }

    /// Reset every dimension to the view default (`status = Open`).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, request: &HelpRequest) -> bool {
        let matches_search = contains_ignore_case(&request.title, &self.search)
            || contains_ignore_case(&request.description, &self.search);
        matches_search
            && self.category.as_ref().is_none_or(|c| &request.category == c)
            && self.urgency.is_none_or(|u| request.urgency == u)
            && self.location.as_ref().is_none_or(|l| &request.location == l)
            && self.status.is_none_or(|s| request.status == s)
    }
}

/// Filter dimensions for the offers browse view; fully unconstrained by
/// default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OfferFilter {
    pub search: String,
    pub category: Option<String>,
    pub location: Option<String>,
    /// Matched by case-sensitive substring containment within the offer's
    /// availability text, not exact equality.
    pub availability: Option<String>,
}

impl OfferFilter {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, offer: &HelpOffer) -> bool {
        let matches_search = contains_ignore_case(&offer.title, &self.search)
            || contains_ignore_case(&offer.description, &self.search)
            || offer.skills.iter().any(|s| contains_ignore_case(s, &self.search));
        matches_search
            && self.category.as_ref().is_none_or(|c| &offer.category == c)
            && self.location.as_ref().is_none_or(|l| &offer.location == l)
            && self
                .availability
                .as_ref()
                .is_none_or(|a| offer.availability.contains(a.as_str()))
    }
}

pub fn filter_requests<'a>(requests: &'a [HelpRequest], filter: &RequestFilter) -> Vec<&'a HelpRequest> {
    requests.iter().filter(|r| filter.matches(r)).collect()
}

pub fn filter_offers<'a>(offers: &'a [HelpOffer], filter: &OfferFilter) -> Vec<&'a HelpOffer> {
    offers.iter().filter(|o| filter.matches(o)).collect()
}

/// Case-insensitive substring containment; an empty needle matches anything.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
