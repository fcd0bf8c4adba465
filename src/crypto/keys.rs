//! The symmetric key derived from a password.
//!
//! A `DerivedKey` only lives for the duration of one encode or decode
//! call.  It zeroes its memory when dropped and never prints its bytes.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of the derived AES-256 key (256 bits).
pub const KEY_LEN: usize = 32;

/// A wrapper around a 32-byte key that automatically zeroes
/// its memory when dropped.
#[derive(Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to build the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey(<redacted>)")
    }
}
