//! Command-line interface: argument definitions and password/input helpers.

pub mod commands;
pub mod output;

use std::io::Read;

use clap::Parser;

use zeroize::Zeroizing;

use crate::errors::{Result, StackError};
use crate::exchange::{check_password_strength, MIN_PASSWORD_LEN};

/// Environment variable that supplies the password non-interactively.
pub const PASSWORD_ENV: &str = "IIOTSTACK_PASSWORD";

/// iiotstack CLI: password-sealed stack configuration files.
#[derive(Parser)]
#[command(
    name = "iiotstack",
    about = "Password-protected export and import of stack configurations",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Seal a stack configuration (JSON) into a .iiotstack file
    Export {
        /// JSON file holding the stack configuration (`-` for stdin)
        input: String,

        /// Directory to write the file to (default: export_dir from .iiotstack.toml)
        #[arg(short, long)]
        output_dir: Option<String>,

        /// File name (default: <prefix>-<date>.iiotstack)
        #[arg(short, long)]
        name: Option<String>,

        /// Replace an existing file with the same name
        #[arg(short, long)]
        force: bool,
    },

    /// Open a .iiotstack file and print or save the configuration
    Import {
        /// Path to the .iiotstack file
        file: String,

        /// Write the recovered JSON to this path (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the recovered JSON
        #[arg(long)]
        pretty: bool,

        /// Replace an existing output file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the layout of a .iiotstack file without decrypting it
    Inspect {
        /// Path to the .iiotstack file
        file: String,
    },

    /// Check that a plaintext JSON stack configuration has the required shape
    Validate {
        /// JSON file holding the stack configuration (`-` for stdin)
        input: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the password for opening a stack file, trying in order:
/// 1. `IIOTSTACK_PASSWORD` env var (CI/CD)
/// 2. Interactive prompt
///
/// No length rule applies: files may predate the current minimum.
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter stack file password")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| StackError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new password with confirmation (used by `export`).
///
/// Also respects `IIOTSTACK_PASSWORD` for scripted usage.
/// Enforces the minimum password length.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        check_password_strength(&pw)?;
        return Ok(pw);
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose a password for this file")
            .with_confirmation("Confirm password", "Passwords do not match, try again")
            .interact()
            .map_err(|e| StackError::CommandFailed(format!("password prompt: {e}")))?;

        if check_password_strength(&password).is_err() {
            output::warning(&format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

fn password_from_env() -> Option<Zeroizing<String>> {
    match std::env::var(PASSWORD_ENV) {
        Ok(pw) if !pw.is_empty() => Some(Zeroizing::new(pw)),
        _ => None,
    }
}

/// Read a whole input file, or stdin when `input` is `-`.
pub fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| StackError::CommandFailed(format!("failed to read stdin: {e}")))?;
        return Ok(buf);
    }

    std::fs::read_to_string(input)
        .map_err(|e| StackError::CommandFailed(format!("failed to read {input}: {e}")))
}

/// Parse plaintext JSON given on the command line.
pub fn parse_json(input: &str, raw: &str) -> Result<serde_json::Value> {
    serde_json::from_str(raw)
        .map_err(|e| StackError::CommandFailed(format!("{input} is not valid JSON: {e}")))
}
