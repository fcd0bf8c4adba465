//! Stack module: the plaintext stack configuration.
//!
//! This module provides:
//! - The minimal shape check run after every import (`validate`)
//! - `InstanceSummary` rows for display (`instance`)

pub mod instance;
pub mod validate;

// Re-export the most commonly used items.
pub use instance::{instances, InstanceSummary};
pub use validate::{validate, APP_ID_FIELD, INSTANCES_FIELD, INSTANCE_NAME_FIELD};
