use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::rngs::OsRng;
use secrecy::{ExposeSecret, Secret};

#[derive(Debug, thiserror::Error)]
#[error("failed to process password hash: {0}")]
pub struct PasswordHashError(argon2::password_hash::Error);

/// Hash a plaintext password into an Argon2id PHC string with a fresh
/// OS-random salt. The stored value never equals the submitted plaintext;
/// checking a candidate must go through [`verify_password`].
pub fn hash_password(password: &Secret<String>) -> Result<String, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map_err(PasswordHashError)?;

    Ok(hash.to_string())
}

/// Check a candidate password against a stored PHC string.
///
/// Returns `Ok(false)` on a mismatch; `Err` only when the stored value is not
/// a parseable hash or the verifier itself fails.
pub fn verify_password(
    candidate: &Secret<String>,
    stored_hash: &str,
) -> Result<bool, PasswordHashError> {
    let parsed_hash = PasswordHash::new(stored_hash).map_err(PasswordHashError)?;

    match Argon2::default().verify_password(candidate.expose_secret().as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordHashError(e)),
    }
}
