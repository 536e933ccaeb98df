use crate::error::app_error::AppError;

/// Seam for credential verification. The identity store only sees this
/// trait, so a real verifier can replace [`MockVerifier`] without changing
/// the login contract (`login` already returns `Result<User, AppError>`).
pub trait CredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> Result<(), AppError>;
}

/// Accepts any credentials. The password is ignored entirely.
pub struct MockVerifier;

impl CredentialVerifier for MockVerifier {
    fn verify(&self, _email: &str, _password: &str) -> Result<(), AppError> {
        Ok(())
    }
}
