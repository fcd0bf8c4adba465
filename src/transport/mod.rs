//! Transport module: where stack files come from and go to.
//!
//! This module provides:
//! - The `FileTransport` trait used by export and import
//! - A directory-backed transport with atomic writes (`fs`)
//! - An in-memory transport for embedding and tests (`memory`)

pub mod fs;
pub mod memory;

pub use fs::FsTransport;
pub use memory::MemoryTransport;

use crate::errors::Result;

/// Read and offer primitives for stack files.
///
/// Implementations must never leave a partial file behind: `offer`
/// either publishes the whole text under its final name or nothing.
pub trait FileTransport {
    /// Whatever identifies a file to read (a path, a name, an upload).
    type Handle: ?Sized;

    /// Read the full text contents of `handle`.
    fn read_text(&mut self, handle: &Self::Handle) -> Result<String>;

    /// Offer `contents` to the user as a file named `suggested_name`.
    ///
    /// Returns the name the file was actually stored under.
    fn offer(&mut self, suggested_name: &str, contents: &str) -> Result<String>;
}

/// Reject names that would escape the transport's target location.
pub(crate) fn check_file_name(name: &str) -> Result<()> {
    use crate::errors::StackError;

    if name.is_empty() || name == "." || name == ".." {
        return Err(StackError::Transport(format!("invalid file name '{name}'")));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(StackError::Transport(format!(
            "file name '{name}' must not contain path separators"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_accepted() {
        assert!(check_file_name("iiot-stack-2026-10-16.iiotstack").is_ok());
        assert!(check_file_name(".hidden").is_ok());
    }

    #[test]
    fn separators_and_dots_are_rejected() {
        assert!(check_file_name("").is_err());
        assert!(check_file_name("..").is_err());
        assert!(check_file_name("../escape.iiotstack").is_err());
        assert!(check_file_name("dir\\file").is_err());
    }
}
