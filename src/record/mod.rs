//! Record module — the self-describing credential string.
//!
//! This module provides:
//! - The canonical record format, encoding and decoding (`format`)
//! - Constant-time password verification (`verify`)
//! - A configured `Pbkdf2Hasher` front end (`hasher`)

pub mod format;
pub mod hasher;
pub mod verify;

// Re-export the most commonly used items.
pub use format::{check_salt, decode, encode, try_encode, CredentialRecord};
pub use hasher::{EncodeMode, Pbkdf2Hasher};
pub use verify::{verify, verify_detailed};
