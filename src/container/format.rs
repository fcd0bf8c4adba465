//! Stack file byte layout and text encoding.
//!
//! A container has this layout:
//!
//! ```text
//! [salt: 16 bytes][nonce: 12 bytes][ciphertext + GCM tag: variable]
//! ```
//!
//! The file on disk is the standard (padded) base64 encoding of those
//! bytes and nothing else: no magic, no version byte, no header.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::crypto::{NONCE_LEN, SALT_LEN};
use crate::errors::{Result, StackError};

/// Salt plus nonce: the shortest byte string that can be split.
pub const MIN_CONTAINER_LEN: usize = SALT_LEN + NONCE_LEN;

/// The three sections of a decoded container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerLayout {
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    /// Ciphertext with the auth tag appended.
    pub sealed: Vec<u8>,
}

impl ContainerLayout {
    /// Concatenate `salt || nonce || sealed`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(MIN_CONTAINER_LEN + self.sealed.len());
        buf.extend_from_slice(&self.salt);
        buf.extend_from_slice(&self.nonce);
        buf.extend_from_slice(&self.sealed);
        buf
    }

    /// Split raw container bytes into their sections.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < MIN_CONTAINER_LEN {
            return Err(StackError::MalformedContainer(format!(
                "{} bytes is too short, expected at least {MIN_CONTAINER_LEN}",
                data.len()
            )));
        }

        let (salt, rest) = data.split_at(SALT_LEN);
        let (nonce, sealed) = rest.split_at(NONCE_LEN);

        Ok(Self {
            salt: salt
                .try_into()
                .map_err(|_| StackError::MalformedContainer("bad salt".into()))?,
            nonce: nonce
                .try_into()
                .map_err(|_| StackError::MalformedContainer("bad nonce".into()))?,
            sealed: sealed.to_vec(),
        })
    }

    /// Base64 text form, as written to `.iiotstack` files.
    pub fn to_text(&self) -> String {
        BASE64.encode(self.to_bytes())
    }

    /// Parse the base64 text form.  Surrounding whitespace is ignored.
    pub fn from_text(text: &str) -> Result<Self> {
        let bytes = BASE64
            .decode(text.trim())
            .map_err(|e| StackError::MalformedContainer(format!("base64 decoding failed: {e}")))?;
        Self::from_bytes(&bytes)
    }
}

/// Describe a container without decrypting it.
///
/// Needs no password; salt and nonce are not secret.
pub fn inspect(text: &str) -> Result<ContainerLayout> {
    ContainerLayout::from_text(text)
}
