//! Export and import of password-sealed stack files.
//!
//! Export: check the password floor, serialize the payload, seal it and
//! offer the text through a `FileTransport`.
//!
//! Import: read the text, open it, parse JSON and run the shape check.
//! The value is handed back only when every step succeeded; any failure
//! yields exactly one error and nothing else.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::container;
use crate::errors::{Result, StackError};
use crate::stack;
use crate::transport::FileTransport;

/// Minimum password length (in characters) accepted for export.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Extension of stack files.
pub const FILE_EXTENSION: &str = "iiotstack";

/// File name prefix used when none is configured.
pub const DEFAULT_FILE_PREFIX: &str = "iiot-stack";

/// Seal `payload` with `password` and offer it through `transport`.
///
/// Uses `suggested_filename` when given, otherwise a dated default
/// name.  Returns the name the transport stored the file under.
pub fn export_stack<T, P>(
    transport: &mut T,
    payload: &P,
    password: &str,
    suggested_filename: Option<&str>,
) -> Result<String>
where
    T: FileTransport + ?Sized,
    P: Serialize + ?Sized,
{
    check_password_strength(password)?;

    let plaintext = Zeroizing::new(
        serde_json::to_vec(payload)
            .map_err(|e| StackError::SerializationError(format!("stack payload: {e}")))?,
    );
    let text = container::encode(&plaintext, password.as_bytes())?;
    drop(plaintext);

    let name = match suggested_filename {
        Some(name) => name.to_string(),
        None => default_filename(DEFAULT_FILE_PREFIX, chrono::Local::now().date_naive()),
    };

    let stored = transport.offer(&name, &text)?;
    info!(file = %stored, "exported stack configuration");
    Ok(stored)
}

/// Read, open and validate the stack file behind `handle`.
pub fn import_stack<T>(transport: &mut T, handle: &T::Handle, password: &str) -> Result<Value>
where
    T: FileTransport + ?Sized,
{
    if password.is_empty() {
        return Err(StackError::PasswordRequired);
    }

    let text = transport.read_text(handle)?;
    let value = open_stack(&text, password)?;

    info!("imported stack configuration");
    Ok(value)
}

/// Open stack-file text already in memory and validate the result.
pub fn open_stack(text: &str, password: &str) -> Result<Value> {
    let plaintext = Zeroizing::new(container::decode(text, password.as_bytes())?);

    let value: Value = serde_json::from_slice(&plaintext)
        .map_err(|e| StackError::DeserializationError(e.to_string()))?;
    debug!("decrypted payload parsed as JSON");

    stack::validate(&value)?;
    Ok(value)
}

/// Reject passwords shorter than `MIN_PASSWORD_LEN` characters.
pub fn check_password_strength(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(StackError::WeakPassword {
            min_len: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Dated file name, e.g. `iiot-stack-2026-10-16.iiotstack`.
pub fn default_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}-{}.{FILE_EXTENSION}", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;
    use serde_json::json;

    #[test]
    fn default_filename_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(
            default_filename("iiot-stack", date),
            "iiot-stack-2026-03-07.iiotstack"
        );
    }

    #[test]
    fn password_floor_counts_characters() {
        assert!(check_password_strength("1234567").is_err());
        assert!(check_password_strength("12345678").is_ok());
        // Eight characters, more than eight bytes.
        assert!(check_password_strength("pässwörd").is_ok());
        assert!(check_password_strength("").is_err());
    }

    #[test]
    fn export_without_name_uses_dated_default() {
        let mut transport = MemoryTransport::new();
        let name = export_stack(&mut transport, &json!({"instances": []}), "long-enough", None)
            .unwrap();
        assert!(name.starts_with("iiot-stack-"));
        assert!(name.ends_with(".iiotstack"));
        assert!(transport.get(&name).is_some());
    }

    #[test]
    fn import_rejects_empty_password() {
        let mut transport = MemoryTransport::new();
        transport.insert("a.iiotstack", "AAAA");
        let result = import_stack(&mut transport, "a.iiotstack", "");
        assert!(matches!(result, Err(StackError::PasswordRequired)));
    }

    #[test]
    fn import_accepts_short_password_attempts() {
        let text = container::encode(br#"{"instances":[]}"#, b"short").unwrap();
        let mut transport = MemoryTransport::new();
        transport.insert("legacy.iiotstack", text);

        let value = import_stack(&mut transport, "legacy.iiotstack", "short").unwrap();
        assert_eq!(value, json!({"instances": []}));
    }

    #[test]
    fn non_json_plaintext_is_deserialization_error() {
        let text = container::encode(b"not json at all", b"password-123").unwrap();
        let result = open_stack(&text, "password-123");
        assert!(matches!(result, Err(StackError::DeserializationError(_))));
    }
}
