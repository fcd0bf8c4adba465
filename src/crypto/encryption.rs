//! AES-256-GCM authenticated encryption.
//!
//! Unlike a self-contained blob format, the nonce is supplied by the
//! caller so the container codec can lay it out next to the salt.
//!
//! `seal` returns `ciphertext || 16-byte auth tag`.  No associated data
//! is authenticated.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use rand::rngs::OsRng;
use rand::TryRngCore;

use super::keys::DerivedKey;
use crate::errors::{Result, StackError};

/// Size of the AES-256-GCM nonce in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag appended to the ciphertext.
pub const TAG_LEN: usize = 16;

/// Encrypt and authenticate `plaintext` under `key` and `nonce`.
///
/// A (key, nonce) pair must never be used twice.
pub fn seal(key: &DerivedKey, nonce: &[u8; NONCE_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| StackError::EncryptionFailed(format!("encryption error: {e}")))
}

/// Verify the auth tag and decrypt data produced by `seal`.
///
/// Any mismatch (key, nonce, ciphertext or tag) yields
/// `AuthenticationFailure` and no plaintext.
pub fn open(key: &DerivedKey, nonce: &[u8; NONCE_LEN], sealed: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    cipher
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| StackError::AuthenticationFailure)
}

/// Generate a cryptographically random 12-byte nonce.
pub fn generate_nonce() -> Result<[u8; NONCE_LEN]> {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(|e| StackError::EntropyUnavailable(format!("nonce: {e}")))?;
    Ok(nonce)
}
