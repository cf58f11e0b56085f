//! Password hashing with Argon2id.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;

use crate::error::{ApiError, Result};

/// Hashes `password` with a random 16-byte salt into a PHC string.
///
/// # Errors
/// Returns `ApiError::Internal` if salt encoding or hashing fails.
pub fn hash_password(password: &str) -> Result<String> {
    let salt: [u8; 16] = rand::rng().random();
    let salt = SaltString::encode_b64(&salt)
        .map_err(|e| ApiError::Internal(format!("salt: invalid salt bytes: {e}")))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("password: Argon2 hashing failed: {e}")))?;

    Ok(hash.to_string())
}

/// Checks `password` against a stored PHC string. A malformed hash never
/// verifies.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
