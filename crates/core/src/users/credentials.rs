//! Credential hashing.
//!
//! Credentials are stored as argon2id PHC strings with a random salt and are
//! only ever checked through [`verify_password`], which compares in constant
//! time.

use std::sync::LazyLock;

use argon2::password_hash::{
    Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use rand::rngs::OsRng;

use crate::errors::{Error, Result};

static CONTEXT: LazyLock<Argon2<'static>> = LazyLock::new(|| {
    Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        argon2::Params::default(),
    )
});

// Verified against when the email is unknown so both failure paths cost the same.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("dailycap-unknown-account").ok());

pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    CONTEXT
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Credential(format!("Failed to hash password: {e}")))
}

/// Returns `Ok(false)` on a mismatch; errors only for malformed hashes.
pub fn verify_password(candidate: &str, password_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| Error::Credential(format!("Stored password hash is invalid: {e}")))?;

    match CONTEXT.verify_password(candidate.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(other) => Err(Error::Credential(format!(
            "Password verification failed: {other}"
        ))),
    }
}

/// Computes the unknown-account hash up front so the first failed login does
/// not pay for it. Returns whether the hash is available.
pub fn prepare_dummy_hash() -> bool {
    LazyLock::force(&DUMMY_HASH).is_some()
}

/// Burns one verification for a login attempt against an unknown email.
pub fn verify_against_dummy(candidate: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(candidate, hash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("correct horse").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("battery staple", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same").unwrap();
        let second = hash_password("same").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_dummy_hash_is_ready_before_first_login() {
        assert!(prepare_dummy_hash());
        let hash = DUMMY_HASH.as_deref().unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!verify_password("anything", hash).unwrap());
    }

    #[test]
    fn test_plaintext_is_not_a_valid_hash() {
        let err = verify_password("secret", "secret").unwrap_err();
        assert!(matches!(err, Error::Credential(_)));
    }
}
