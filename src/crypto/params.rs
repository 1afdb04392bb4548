//! Bounds and normalization for PBKDF2 cost parameters.
//!
//! Two flavours are offered for each parameter:
//! - `clamp_*` silently replaces an out-of-range value with the default.
//! - `check_*` rejects an out-of-range value with a typed error.

use crate::errors::{CredHashError, Result};

pub const DEFAULT_ITERATION: u32 = 10_000;
pub const MIN_ITERATION: u32 = 1_000;
pub const MAX_ITERATION: u32 = 1_000_000;

pub const DEFAULT_KEY_LENGTH: usize = 32;
pub const MIN_KEY_LENGTH: usize = 8;
pub const MAX_KEY_LENGTH: usize = 1_024;

/// Return `iterations` if it is within bounds, otherwise the default.
pub fn clamp_iteration(iterations: u32) -> u32 {
    if (MIN_ITERATION..=MAX_ITERATION).contains(&iterations) {
        iterations
    } else {
        DEFAULT_ITERATION
    }
}

/// Return `key_length` if it is within bounds, otherwise the default.
pub fn clamp_key_length(key_length: usize) -> usize {
    if (MIN_KEY_LENGTH..=MAX_KEY_LENGTH).contains(&key_length) {
        key_length
    } else {
        DEFAULT_KEY_LENGTH
    }
}

/// Strict counterpart of [`clamp_iteration`].
pub fn check_iteration(iterations: u32) -> Result<u32> {
    if (MIN_ITERATION..=MAX_ITERATION).contains(&iterations) {
        Ok(iterations)
    } else {
        Err(CredHashError::IterationOutOfRange(iterations))
    }
}

/// Strict counterpart of [`clamp_key_length`].
pub fn check_key_length(key_length: usize) -> Result<usize> {
    if (MIN_KEY_LENGTH..=MAX_KEY_LENGTH).contains(&key_length) {
        Ok(key_length)
    } else {
        Err(CredHashError::KeyLengthOutOfRange(key_length))
    }
}

/// Cost parameters carried inside every credential record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParameters {
    /// PBKDF2 round count.
    pub iterations: u32,
    /// Derived key length in bytes.
    pub key_length: usize,
}

impl Default for HashParameters {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATION,
            key_length: DEFAULT_KEY_LENGTH,
        }
    }
}

impl HashParameters {
    /// Build parameters, replacing out-of-range values with defaults.
    pub fn clamped(iterations: u32, key_length: usize) -> Self {
        Self {
            iterations: clamp_iteration(iterations),
            key_length: clamp_key_length(key_length),
        }
    }

    /// Build parameters, rejecting out-of-range values.
    pub fn checked(iterations: u32, key_length: usize) -> Result<Self> {
        Ok(Self {
            iterations: check_iteration(iterations)?,
            key_length: check_key_length(key_length)?,
        })
    }
}
