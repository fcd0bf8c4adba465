//! Container module: the portable `.iiotstack` blob.
//!
//! This module provides:
//! - The byte layout and its base64 text form (`format`)
//! - Password-based sealing and opening of plaintext bytes (`codec`)

pub mod codec;
pub mod format;

// Re-export the most commonly used items.
pub use codec::{decode, encode, encode_with};
pub use format::{inspect, ContainerLayout, MIN_CONTAINER_LEN};
