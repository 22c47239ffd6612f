//! Password hashing and verification.
//!
//! These functions are CPU-bound by design. Call them through `tokio::task::spawn_blocking`
//! from async code, as the request handlers do.

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash};

#[derive(thiserror::Error, Debug)]
#[error("failed to generate password hash: {0}")]
pub struct HashError(String);

/// The password didn't match, or the stored hash couldn't be parsed.
///
/// Callers must not tell these apart when reporting to a client.
#[derive(thiserror::Error, Debug)]
#[error("password does not match hash")]
pub struct MismatchError;

/// Hashes `plaintext` with Argon2 and a fresh random salt, returning the PHC string form.
pub fn hash(plaintext: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(rand::thread_rng());
    Ok(PasswordHash::generate(Argon2::default(), plaintext, &salt)
        .map_err(|e| HashError(e.to_string()))?
        .to_string())
}

/// Checks `plaintext` against a hash produced by [`hash`].
///
/// The salt and parameters are read back out of `hashed`, and the comparison is done by
/// `argon2` itself rather than by comparing strings.
pub fn verify(hashed: &str, plaintext: &str) -> Result<(), MismatchError> {
    let hash = PasswordHash::new(hashed).map_err(|_| MismatchError)?;

    hash.verify_password(&[&Argon2::default()], plaintext)
        .map_err(|_| MismatchError)
}
