use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The single "current user" record. At most one exists at a time; absence
/// means the session is anonymous. This is the only record that survives a
/// restart (persisted as a JSON blob under a fixed storage key).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub location: String,
    pub join_date: NaiveDate,
    pub verified: bool,
    pub rating: f32,
    pub completed_requests: u32,
    pub helped_neighbours: u32,
    pub avatar: Option<String>,
}

#[derive(Deserialize, Debug, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[validate(length(min = 1))]
    pub location: String,
}

#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Shallow profile merge: only the fields that are present replace the
/// current record's values.
#[derive(Deserialize, Debug, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub avatar: Option<String>,
}

impl User {
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(location) = &update.location {
            self.location = location.clone();
        }
        if let Some(avatar) = &update.avatar {
            self.avatar = Some(avatar.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_user;

    #[test]
    fn apply_merges_only_present_fields() {
        let mut user = sample_user();
        user.apply(&ProfileUpdate {
            location: Some("Oak Street".to_string()),
            ..ProfileUpdate::default()
        });
        assert_eq!(user.location, "Oak Street");
        assert_eq!(user.name, sample_user().name);
        assert_eq!(user.email, sample_user().email);
    }

    #[test]
    fn register_request_rejects_short_password_and_bad_email() {
        let request = RegisterRequest {
            name: "Jo".to_string(),
            email: "not-an-email".to_string(),
            password: "12345".to_string(),
            location: "Downtown Area".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
    }
}
