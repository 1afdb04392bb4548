//! Cryptographic primitives for credhash.
//!
//! This module provides:
//! - Cost parameter bounds, clamping and checking (`params`)
//! - The closed set of supported digest algorithms (`algorithm`)
//! - PBKDF2-HMAC derivation and salt generation (`kdf`)

pub mod algorithm;
pub mod kdf;
pub mod params;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{derive_digest, HashAlgorithm, HashParameters, ...};
pub use algorithm::HashAlgorithm;
pub use kdf::{derive_digest, generate_salt, DEFAULT_SALT_LEN};
pub use params::{
    check_iteration, check_key_length, clamp_iteration, clamp_key_length, HashParameters,
};
