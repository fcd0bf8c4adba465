//! `iiotstack import`: open a `.iiotstack` file.
//!
//! The recovered JSON goes to stdout (nothing else does), or to a file
//! with `--output`.  Nothing is written unless the password is right
//! and the configuration passes the shape check.

use std::io::Write;
use std::path::Path;

use crate::cli::output;
use crate::cli::prompt_password;
use crate::errors::{Result, StackError};
use crate::exchange;
use crate::stack;
use crate::transport::{FileTransport, FsTransport};

/// Execute the `import` command.
pub fn execute(file_path: &str, output_path: Option<&str>, pretty: bool, force: bool) -> Result<()> {
    let source = Path::new(file_path);

    if !source.exists() {
        return Err(StackError::CommandFailed(format!(
            "stack file not found: {}",
            source.display()
        )));
    }

    let password = prompt_password()?;

    let cwd = std::env::current_dir()?;
    let mut reader = FsTransport::new(&cwd);
    let value = exchange::import_stack(&mut reader, source, &password)?;

    let mut rendered = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .map_err(|e| StackError::SerializationError(format!("JSON output: {e}")))?;
    rendered.push('\n');

    match output_path {
        Some(dest) => {
            let dest = Path::new(dest);

            // Safety: refuse to overwrite the sealed file with plaintext.
            if dest
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(exchange::FILE_EXTENSION))
            {
                return Err(StackError::CommandFailed(
                    "refusing to write plaintext over a .iiotstack file".into(),
                ));
            }

            let (dir, name) = split_destination(dest, &cwd)?;
            let mut writer = FsTransport::new(dir).with_overwrite(force);
            writer.offer(&name, &rendered)?;

            let instances = stack::instances(&value);
            output::success(&format!(
                "Imported {} instances into {}",
                instances.len(),
                dest.display()
            ));
            output::print_instances_table(&instances);
        }
        None => {
            // Write to stdout (no success message, just raw output).
            write_json(&mut std::io::stdout().lock(), &rendered)?;
        }
    }

    Ok(())
}

/// Write rendered JSON; a closed pipe surfaces as an error, not a panic.
fn write_json(out: &mut dyn Write, rendered: &str) -> Result<()> {
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Split an output path into (directory, file name).
fn split_destination(dest: &Path, cwd: &Path) -> Result<(std::path::PathBuf, String)> {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            StackError::CommandFailed(format!("invalid output path: {}", dest.display()))
        })?;

    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => cwd.join(p),
        _ => cwd.to_path_buf(),
    };

    Ok((dir, name))
}
