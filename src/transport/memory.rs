use std::collections::BTreeMap;

use super::{check_file_name, FileTransport};
use crate::errors::{Result, StackError};

/// In-process transport: files live in a map keyed by name.
///
/// Useful when a host application already holds the uploaded text, and
/// for tests that need to observe what was (or was not) offered.
#[derive(Debug, Default, Clone)]
pub struct MemoryTransport {
    files: BTreeMap<String, String>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `contents` readable under `name`.
    pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(name.into(), contents.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl FileTransport for MemoryTransport {
    type Handle = str;

    fn read_text(&mut self, handle: &str) -> Result<String> {
        self.files
            .get(handle)
            .cloned()
            .ok_or_else(|| StackError::Transport(format!("no file named '{handle}'")))
    }

    fn offer(&mut self, suggested_name: &str, contents: &str) -> Result<String> {
        check_file_name(suggested_name)?;
        self.files
            .insert(suggested_name.to_string(), contents.to_string());
        Ok(suggested_name.to_string())
    }
}
