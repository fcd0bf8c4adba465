use thiserror::Error;

/// All errors that can occur while sealing or opening stack files.
#[derive(Debug, Error)]
pub enum StackError {
    // --- Password errors ---
    #[error("Password must be at least {min_len} characters")]
    WeakPassword { min_len: usize },

    #[error("Password is required")]
    PasswordRequired,

    // --- Container errors ---
    #[error("Not a valid stack file: {0}")]
    MalformedContainer(String),

    /// Wrong password and tampered bytes are deliberately the same error.
    #[error("Invalid password or corrupted file")]
    AuthenticationFailure,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Secure random generator unavailable: {0}")]
    EntropyUnavailable(String),

    // --- Payload errors ---
    #[error("Decrypted data is not valid JSON: {0}")]
    DeserializationError(String),

    #[error("Invalid stack configuration: {message}")]
    ValidationError { field: String, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- Transport errors ---
    #[error("File transport error: {0}")]
    Transport(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

impl StackError {
    /// Name of the offending field for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            StackError::ValidationError { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Convenience type alias for stack results.
pub type Result<T> = std::result::Result<T, StackError>;
