/**
 * Password Hashing
 *
 * This module wraps bcrypt hashing and verification behind a small API so
 * handlers never touch the cost factor or the raw bcrypt error type.
 *
 * # Security
 *
 * - Hashing uses a fixed cost of 10, matching the deployment's latency
 *   budget while staying resistant to offline brute force
 * - Each hash carries its own random salt; hashing the same password twice
 *   produces different strings
 * - Verification is constant-time (handled inside bcrypt)
 * - Raw passwords are never logged
 */

use thiserror::Error;

/// Fixed bcrypt cost factor.
const HASH_COST: u32 = 10;

/// bcrypt only hashes the first 72 bytes of input. Longer passwords are
/// rejected outright rather than silently truncated.
const MAX_PASSWORD_BYTES: usize = 72;

/// Errors from the password hashing primitive.
///
/// These are server faults (or bad stored data), never a signal about
/// whether a password matched.
#[derive(Debug, Error)]
pub enum HashingError {
    /// Password exceeds bcrypt's 72-byte input limit
    #[error("password exceeds the {MAX_PASSWORD_BYTES}-byte limit")]
    PasswordTooLong,

    /// The bcrypt primitive itself failed (e.g. a malformed stored hash)
    #[error("bcrypt failure: {0}")]
    Primitive(#[from] bcrypt::BcryptError),
}

/// Hash a password with a fresh random salt.
///
/// # Errors
///
/// Returns `HashingError::PasswordTooLong` for inputs over 72 bytes, or
/// `HashingError::Primitive` if bcrypt fails.
pub fn hash_password(password: &str) -> Result<String, HashingError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(HashingError::PasswordTooLong);
    }
    Ok(bcrypt::hash(password, HASH_COST)?)
}

/// Verify a password against a stored hash.
///
/// A mismatch is `Ok(false)`, not an error. An error means the stored hash
/// is structurally malformed or the primitive failed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, HashingError> {
    Ok(bcrypt::verify(password, hash)?)
}
