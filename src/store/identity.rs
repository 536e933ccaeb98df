use crate::auth::CredentialVerifier;
use crate::error::app_error::AppError;
use crate::models::user::{LoginRequest, ProfileUpdate, RegisterRequest, User};
use crate::storage::blob::{BlobStore, USER_STORAGE_KEY};
use crate::util;
use chrono::NaiveDate;
use tracing::{info, warn};
use validator::Validate;

/// Holds at most one current user record, mirrored into the blob store so
/// the identity survives a restart. Everything else in the application is
/// ephemeral.
pub struct IdentityStore<S: BlobStore> {
    storage: S,
    current: Option<User>,
}

impl<S: BlobStore> IdentityStore<S> {
    /// Load the persisted record if one exists. A corrupt blob is treated as
    /// absent: it is logged, cleared, and the session starts anonymous.
    pub fn open(mut storage: S) -> Self {
        let current = match storage.get(USER_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "stored user record is corrupt, starting anonymous");
                    if let Err(e) = storage.remove(USER_STORAGE_KEY) {
                        warn!(error = %e, "failed to clear corrupt user record");
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "failed to read stored user record, starting anonymous");
                None
            }
        };
        Self { storage, current }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Verify credentials through the given verifier, then fabricate the
    /// fixed mock profile around the supplied email. With [`MockVerifier`]
    /// this always succeeds.
    ///
    /// [`MockVerifier`]: crate::auth::MockVerifier
    pub fn login(&mut self, credentials: &LoginRequest, verifier: &dyn CredentialVerifier) -> Result<User, AppError> {
        verifier.verify(&credentials.email, &credentials.password)?;

        let user = User {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: credentials.email.clone(),
            location: "Downtown Area".to_string(),
            join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            verified: true,
            rating: 4.8,
            completed_requests: 12,
            helped_neighbours: 8,
            avatar: None,
        };

        self.persist(&user)?;
        info!(user_id = %user.id, "user logged in");
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Build a fresh record from the supplied fields. No duplicate-email
    /// check: registering an email that was used before produces a new,
    /// distinct identifier.
    pub fn register(&mut self, request: &RegisterRequest) -> Result<User, AppError> {
        request.validate()?;

        let user = User {
            id: util::next_id(),
            name: request.name.clone(),
            email: request.email.clone(),
            location: request.location.clone(),
            join_date: util::today(),
            verified: false,
            rating: 0.0,
            completed_requests: 0,
            helped_neighbours: 0,
            avatar: None,
        };

        self.persist(&user)?;
        info!(user_id = %user.id, "user registered");
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Clear the current record and its persisted copy. No-op when the
    /// session is already anonymous.
    pub fn logout(&mut self) -> Result<(), AppError> {
        if let Some(user) = self.current.take() {
            self.storage.remove(USER_STORAGE_KEY)?;
            info!(user_id = %user.id, "user logged out");
        }
        Ok(())
    }

    /// Shallow-merge the given fields into the current record and persist.
    /// Fails with `Unauthenticated` when no user is logged in.
    pub fn update_profile(&mut self, update: &ProfileUpdate) -> Result<User, AppError> {
        let mut user = self.current.clone().ok_or(AppError::Unauthenticated)?;
        user.apply(update);
        self.persist(&user)?;
        self.current = Some(user.clone());
        Ok(user)
    }

    fn persist(&mut self, user: &User) -> Result<(), AppError> {
        let raw = serde_json::to_string(user).map_err(|e| AppError::serialization("Failed to serialize user record", e))?;
        self.storage.put(USER_STORAGE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockVerifier;
    use crate::storage::memory::MemoryStore;
    use crate::test_utils::sample_register_request;

    fn login_request(email: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: "ignored".to_string(),
        }
    }

    #[test]
    fn login_fabricates_profile_around_given_email() {
        let mut store = IdentityStore::open(MemoryStore::default());
        let user = store.login(&login_request("jane@example.com"), &MockVerifier).unwrap();
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.name, "John Doe");
        assert!(user.verified);
        assert_eq!(store.current_user(), Some(&user));
    }

    #[test]
    fn identity_survives_reopen() {
        let mut store = IdentityStore::open(MemoryStore::default());
        let user = store.login(&login_request("jane@example.com"), &MockVerifier).unwrap();
        let reopened = IdentityStore::open(store.storage);
        assert_eq!(reopened.current_user(), Some(&user));
    }

    #[test]
    fn corrupt_blob_starts_anonymous_and_is_cleared() {
        let storage = MemoryStore::with_blob(USER_STORAGE_KEY, "{not json");
        let store = IdentityStore::open(storage);
        assert!(store.current_user().is_none());
        assert_eq!(store.storage.get(USER_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn logout_clears_record_and_is_idempotent() {
        let mut store = IdentityStore::open(MemoryStore::default());
        store.login(&login_request("jane@example.com"), &MockVerifier).unwrap();
        store.logout().unwrap();
        assert!(store.current_user().is_none());
        assert_eq!(store.storage.get(USER_STORAGE_KEY).unwrap(), None);
        store.logout().unwrap();
    }

    #[test]
    fn register_assigns_fresh_reputation_fields() {
        let mut store = IdentityStore::open(MemoryStore::default());
        let user = store.register(&sample_register_request()).unwrap();
        assert!(!user.verified);
        assert_eq!(user.rating, 0.0);
        assert_eq!(user.completed_requests, 0);
        assert_eq!(user.helped_neighbours, 0);
        assert!(user.avatar.is_none());
    }

    #[test]
    fn reregistering_same_email_yields_distinct_id() {
        let mut store = IdentityStore::open(MemoryStore::default());
        let first = store.register(&sample_register_request()).unwrap();
        store.logout().unwrap();
        let second = store.register(&sample_register_request()).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn register_rejects_invalid_fields() {
        let mut store = IdentityStore::open(MemoryStore::default());
        let mut request = sample_register_request();
        request.password = "short".to_string();
        let err = store.register(&request).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert!(store.current_user().is_none());
    }

    #[test]
    fn update_profile_merges_and_persists() {
        let mut store = IdentityStore::open(MemoryStore::default());
        store.login(&login_request("jane@example.com"), &MockVerifier).unwrap();
        let updated = store
            .update_profile(&ProfileUpdate {
                location: Some("Oak Street".to_string()),
                ..ProfileUpdate::default()
            })
            .unwrap();
        assert_eq!(updated.location, "Oak Street");
        assert_eq!(updated.email, "jane@example.com");
        let raw = store.storage.get(USER_STORAGE_KEY).unwrap().unwrap();
        let persisted: User = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, updated);
    }

    #[test]
    fn update_profile_while_anonymous_fails() {
        let mut store = IdentityStore::open(MemoryStore::default());
        let err = store.update_profile(&ProfileUpdate::default()).unwrap_err();
        assert!(matches!(err, AppError::Unauthenticated));
    }
}
