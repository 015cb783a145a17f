// Password hashing and verification for account credentials

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::users::error::UserError;

/// Password service for hashing and verification
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using Argon2id with a random salt
    pub fn hash_password(password: &str) -> Result<String, UserError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| UserError::PasswordHash)
    }

    /// Verify a password against a stored hash
    /// A mismatch is Ok(false); only a malformed hash is an error
    pub fn verify_password(password: &str, hash: &str) -> Result<bool, UserError> {
        let parsed = PasswordHash::new(hash).map_err(|_| UserError::PasswordHash)?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = PasswordService::hash_password("correct horse battery").unwrap();

        assert_ne!(hash, "correct horse battery");
        assert!(PasswordService::verify_password("correct horse battery", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let hash = PasswordService::hash_password("correct horse battery").unwrap();

        assert!(!PasswordService::verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let first = PasswordService::hash_password("correct horse battery").unwrap();
        let second = PasswordService::hash_password("correct horse battery").unwrap();

        // Random salts keep equal passwords from producing equal hashes
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let result = PasswordService::verify_password("anything", "not-a-phc-string");

        assert!(matches!(result, Err(UserError::PasswordHash)));
    }
}
