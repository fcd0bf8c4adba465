//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is fixed: every stack file ever written used
//! 100 000 rounds, and the container carries no parameters, so changing
//! it would make existing files unreadable.

use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::Sha256;

use super::keys::{DerivedKey, KEY_LEN};
use crate::errors::{Result, StackError};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Number of PBKDF2 rounds.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Derive a 32-byte key from a password and salt.
///
/// The same password + salt always produce the same key.  An empty
/// password is accepted; length rules belong to the caller.
pub fn derive_key(password: &[u8], salt: &[u8; SALT_LEN]) -> DerivedKey {
    DerivedKey::new(pbkdf2_sha256(password, salt, PBKDF2_ITERATIONS))
}

/// Raw PBKDF2-HMAC-SHA256 with an explicit round count.
pub(crate) fn pbkdf2_sha256(password: &[u8], salt: &[u8], rounds: u32) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, rounds, &mut key);
    key
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| StackError::EntropyUnavailable(format!("salt: {e}")))?;
    Ok(salt)
}
