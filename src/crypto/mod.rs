//! Cryptographic primitives for stack files.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - AES-256-GCM sealing and opening with an explicit nonce (`encryption`)
//! - The zeroize-on-drop `DerivedKey` wrapper (`keys`)

pub mod encryption;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, derive_key, ...};
pub use encryption::{generate_nonce, open, seal, NONCE_LEN, TAG_LEN};
pub use kdf::{derive_key, generate_salt, PBKDF2_ITERATIONS, SALT_LEN};
pub use keys::{DerivedKey, KEY_LEN};
