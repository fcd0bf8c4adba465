//! Password sealing and opening of container bytes.
//!
//! `encode` draws a fresh salt and nonce for every call, derives the key
//! from the password and salt, seals the plaintext and returns the
//! base64 text.  `decode` reverses the steps.
//!
//! Wrong password and corrupted data are indistinguishable under
//! AEAD; both surface as `AuthenticationFailure`.

use tracing::debug;

use super::format::ContainerLayout;
use crate::crypto::{derive_key, generate_nonce, generate_salt, open, seal, NONCE_LEN, SALT_LEN};
use crate::errors::Result;

/// Seal `plaintext` under `password` with a random salt and nonce.
pub fn encode(plaintext: &[u8], password: &[u8]) -> Result<String> {
    // Salt and nonce are drawn before the key is derived.
    let salt = generate_salt()?;
    let nonce = generate_nonce()?;

    encode_with(plaintext, password, &salt, &nonce)
}

/// Seal `plaintext` with a caller-provided salt and nonce.
///
/// Only for reproducible fixtures.  Reusing a salt/nonce pair with the
/// same password breaks confidentiality; use `encode` everywhere else.
pub fn encode_with(
    plaintext: &[u8],
    password: &[u8],
    salt: &[u8; SALT_LEN],
    nonce: &[u8; NONCE_LEN],
) -> Result<String> {
    let key = derive_key(password, salt);
    let sealed = seal(&key, nonce, plaintext)?;
    drop(key);

    let layout = ContainerLayout {
        salt: *salt,
        nonce: *nonce,
        sealed,
    };
    debug!(
        plaintext_len = plaintext.len(),
        sealed_len = layout.sealed.len(),
        "sealed stack container"
    );

    Ok(layout.to_text())
}

/// Open a container produced by `encode` and return the plaintext.
pub fn decode(text: &str, password: &[u8]) -> Result<Vec<u8>> {
    let layout = ContainerLayout::from_text(text)?;
    debug!(sealed_len = layout.sealed.len(), "parsed stack container");

    let key = derive_key(password, &layout.salt);
    let plaintext = open(&key, &layout.nonce, &layout.sealed)?;

    debug!(plaintext_len = plaintext.len(), "opened stack container");
    Ok(plaintext)
}
