use thiserror::Error;

/// All errors that can occur in credhash.
#[derive(Debug, Error)]
pub enum CredHashError {
    // --- Record errors ---
    #[error("Malformed credential record: {0}")]
    MalformedRecord(String),

    #[error("Unknown hash algorithm '{0}' — supported: md5, sha1, sha256, sha512")]
    UnknownAlgorithm(String),

    #[error("Iteration count {0} is out of range (1000..=1000000)")]
    IterationOutOfRange(u32),

    #[error("Key length {0} is out of range (8..=1024)")]
    KeyLengthOutOfRange(usize),

    #[error("Empty {0} field")]
    EmptyField(&'static str),

    #[error("Salt must not contain the '$' field separator")]
    SaltContainsSeparator,

    #[error("Password does not match")]
    PasswordMismatch,

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for credhash results.
pub type Result<T> = std::result::Result<T, CredHashError>;
