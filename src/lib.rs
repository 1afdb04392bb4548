//! Self-describing PBKDF2 password hashes.
//!
//! ```
//! let stored = credhash::encode(b"password", "salt", 10_000, 32, "sha512");
//! assert!(credhash::verify(b"password", &stored));
//! assert!(!credhash::verify(b"wrong", &stored));
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod record;

pub use crypto::{HashAlgorithm, HashParameters};
pub use errors::{CredHashError, Result};
pub use record::{
    decode, encode, try_encode, verify, verify_detailed, CredentialRecord, EncodeMode,
    Pbkdf2Hasher,
};
