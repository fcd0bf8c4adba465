//! Directory-backed file transport.
//!
//! Offered files are written **atomically**:
//!
//! 1. Write the text to a hidden temp file in the target directory.
//! 2. Rename the temp file onto the final name, or hard-link it there
//!    when existing files must not be replaced.
//!
//! The temp file is owned by a guard that deletes it on drop, so an
//! error or panic between the two steps never leaves debris behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{check_file_name, FileTransport};
use crate::errors::{Result, StackError};

/// Reads stack files from any path and writes offers into one directory.
#[derive(Debug, Clone)]
pub struct FsTransport {
    dir: PathBuf,
    overwrite: bool,
}

impl FsTransport {
    /// Transport writing into `dir`, refusing to replace existing files.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overwrite: false,
        }
    }

    /// Allow `offer` to replace an existing file of the same name.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Directory offers are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileTransport for FsTransport {
    type Handle = Path;

    fn read_text(&mut self, handle: &Path) -> Result<String> {
        fs::read_to_string(handle).map_err(|e| {
            StackError::Transport(format!("failed to read {}: {e}", handle.display()))
        })
    }

    fn offer(&mut self, suggested_name: &str, contents: &str) -> Result<String> {
        check_file_name(suggested_name)?;

        if !self.dir.is_dir() {
            return Err(StackError::Transport(format!(
                "output directory {} does not exist",
                self.dir.display()
            )));
        }

        let target = self.dir.join(suggested_name);
        if target.exists() && !self.overwrite {
            return Err(StackError::Transport(format!(
                "{} already exists",
                target.display()
            )));
        }

        let mut pending = PendingFile::create(&self.dir, suggested_name)?;
        pending.write_all(contents.as_bytes())?;
        pending.commit(&target, self.overwrite)?;

        debug!(path = %target.display(), bytes = contents.len(), "wrote stack file");
        Ok(suggested_name.to_string())
    }
}

/// A temp file that is removed on drop unless committed.
struct PendingFile {
    path: PathBuf,
    file: Option<fs::File>,
}

impl PendingFile {
    fn create(dir: &Path, name: &str) -> Result<Self> {
        let path = dir.join(format!(".{name}.{:08x}.tmp", rand::random::<u32>()));
        let file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| {
                StackError::Transport(format!("cannot create {}: {e}", path.display()))
            })?;

        Ok(Self {
            path,
            file: Some(file),
        })
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| StackError::Transport("temp file already closed".into()))?;
        file.write_all(bytes)?;
        file.sync_all()?;
        Ok(())
    }

    /// Publish the temp file under `target`.
    ///
    /// Without `overwrite` the target is claimed with a hard link, which
    /// fails if the name appeared after the existence check.  Either way
    /// `Drop` then unlinks the temp name.
    fn commit(mut self, target: &Path, overwrite: bool) -> Result<()> {
        // Close before renaming; some platforms refuse to rename open files.
        self.file.take();

        if overwrite {
            fs::rename(&self.path, target).map_err(|e| {
                StackError::Transport(format!("cannot write {}: {e}", target.display()))
            })?;
            // Renamed away: nothing left for Drop to clean up.
            self.path = PathBuf::new();
            return Ok(());
        }

        fs::hard_link(&self.path, target).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => {
                StackError::Transport(format!("{} already exists", target.display()))
            }
            _ => StackError::Transport(format!("cannot write {}: {e}", target.display())),
        })?;
        Ok(())
    }
}

impl Drop for PendingFile {
    fn drop(&mut self) {
        self.file.take();
        if !self.path.as_os_str().is_empty() {
            let _ = fs::remove_file(&self.path);
        }
    }
}
