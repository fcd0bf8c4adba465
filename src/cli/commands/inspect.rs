//! `iiotstack inspect`: show the sections of a stack file.
//!
//! Needs no password: salt and nonce are public and the ciphertext
//! stays sealed.

use crate::cli::{output, read_input};
use crate::container;
use crate::crypto::TAG_LEN;
use crate::errors::Result;

/// Execute the `inspect` command.
pub fn execute(file_path: &str) -> Result<()> {
    let text = read_input(file_path)?;
    let layout = container::inspect(&text)?;

    output::print_layout(&layout, text.trim().len());

    if layout.sealed.len() < TAG_LEN {
        output::warning("Ciphertext is shorter than the auth tag; this file cannot be opened.");
    }

    Ok(())
}
