//! Canonical credential record format.
//!
//! A record is a single `$`-separated string:
//!
//! ```text
//! pbkdf2_<algo>$<salt>$<iterations>$<key_length>$<hex digest>
//! ```
//!
//! - **algo**: `md5`, `sha1`, `sha256` or `sha512`, always lower-case.
//! - **salt**: stored verbatim; must be non-empty and free of `$`.
//! - **iterations**: decimal, `1000..=1000000`.
//! - **key_length**: decimal, `8..=1024`, in bytes.
//! - **hex digest**: lower-case hex, exactly `2 * key_length` characters.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::crypto::kdf::derive_digest;
use crate::crypto::params::{check_iteration, check_key_length};
use crate::crypto::{HashAlgorithm, HashParameters};
use crate::errors::{CredHashError, Result};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Literal prefix of the first field.
pub const PREFIX: &str = "pbkdf2_";

/// Field separator.
pub const SEPARATOR: char = '$';

/// Number of fields in a well-formed record.
const FIELD_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// CredentialRecord
// ---------------------------------------------------------------------------

/// A decoded (or freshly derived) credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub algorithm: HashAlgorithm,
    pub salt: String,
    pub params: HashParameters,
    /// Raw derived key, `params.key_length` bytes long.
    pub digest: Vec<u8>,
}

impl CredentialRecord {
    /// Run the KDF and wrap the result in a record.
    ///
    /// No bounds are applied here: callers clamp or check first.
    pub fn derive(
        algorithm: HashAlgorithm,
        password: &[u8],
        salt: &str,
        params: HashParameters,
    ) -> Self {
        let digest = derive_digest(algorithm, password, salt.as_bytes(), &params);
        Self {
            algorithm,
            salt: salt.to_string(),
            params,
            digest: digest.to_vec(),
        }
    }

    /// Everything before the digest field, without the trailing separator.
    pub fn header(&self) -> String {
        format!(
            "{PREFIX}{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
            self.algorithm, self.salt, self.params.iterations, self.params.key_length
        )
    }

    /// Lower-case hex rendering of the digest.
    pub fn digest_hex(&self) -> String {
        hex::encode(&self.digest)
    }
}

impl fmt::Display for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.header(), self.digest_hex())
    }
}

impl FromStr for CredentialRecord {
    type Err = CredHashError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Reject salts that cannot round-trip through the record format.
pub fn check_salt(salt: &str) -> Result<()> {
    if salt.is_empty() {
        return Err(CredHashError::EmptyField("salt"));
    }
    if salt.contains(SEPARATOR) {
        return Err(CredHashError::SaltContainsSeparator);
    }
    Ok(())
}

/// Hash `password` into a canonical record, normalizing bad inputs.
///
/// Unknown algorithm names become `sha512` and out-of-range parameters
/// become their defaults.  This never fails; every substitution is
/// reported as a `warn` event.  Use [`try_encode`] to reject instead.
pub fn encode(
    password: &[u8],
    salt: &str,
    iterations: u32,
    key_length: usize,
    algorithm: &str,
) -> String {
    let algo = HashAlgorithm::resolve(algorithm);
    if !algo.as_str().eq_ignore_ascii_case(algorithm) {
        warn!(requested = algorithm, used = %algo, "unsupported hash algorithm replaced");
    }

    let params = HashParameters::clamped(iterations, key_length);
    if params.iterations != iterations {
        warn!(
            requested = iterations,
            used = params.iterations,
            "iteration count out of range, using default"
        );
    }
    if params.key_length != key_length {
        warn!(
            requested = key_length,
            used = params.key_length,
            "key length out of range, using default"
        );
    }

    if let Err(e) = check_salt(salt) {
        warn!(error = %e, "record will not be verifiable");
    }

    CredentialRecord::derive(algo, password, salt, params).to_string()
}

/// Hash `password` into a canonical record, rejecting bad inputs.
///
/// Fails on unknown algorithm names, out-of-range parameters, and salts
/// that are empty or contain `$`.
pub fn try_encode(
    password: &[u8],
    salt: &str,
    iterations: u32,
    key_length: usize,
    algorithm: &str,
) -> Result<String> {
    let algo: HashAlgorithm = algorithm.parse()?;
    let params = HashParameters::checked(iterations, key_length)?;
    check_salt(salt)?;

    Ok(CredentialRecord::derive(algo, password, salt, params).to_string())
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Parse and validate a stored record.
///
/// Checks run in a fixed order and the first failure is returned:
/// field count, prefix, algorithm, iterations, key length, salt,
/// digest presence, digest hex and length.
pub fn decode(stored: &str) -> Result<CredentialRecord> {
    let fields: Vec<&str> = stored.split(SEPARATOR).collect();
    let [tag, salt, iterations, key_length, digest] = fields.as_slice() else {
        return Err(CredHashError::MalformedRecord(format!(
            "expected {FIELD_COUNT} '{SEPARATOR}'-separated fields, found {}",
            fields.len()
        )));
    };

    let name = tag.strip_prefix(PREFIX).ok_or_else(|| {
        CredHashError::MalformedRecord(format!("first field must start with '{PREFIX}'"))
    })?;
    let algorithm = HashAlgorithm::from_tag(name)
        .ok_or_else(|| CredHashError::UnknownAlgorithm(name.to_string()))?;

    let iterations: u32 = iterations.parse().map_err(|_| {
        CredHashError::MalformedRecord(format!("iteration count '{iterations}' is not a number"))
    })?;
    let iterations = check_iteration(iterations)?;

    let key_length: usize = key_length.parse().map_err(|_| {
        CredHashError::MalformedRecord(format!("key length '{key_length}' is not a number"))
    })?;
    let key_length = check_key_length(key_length)?;

    if salt.is_empty() {
        return Err(CredHashError::EmptyField("salt"));
    }
    if digest.is_empty() {
        return Err(CredHashError::EmptyField("digest"));
    }

    let digest = hex::decode(digest)
        .map_err(|e| CredHashError::MalformedRecord(format!("digest is not valid hex: {e}")))?;
    if digest.len() != key_length {
        return Err(CredHashError::MalformedRecord(format!(
            "digest is {} bytes, key length says {key_length}",
            digest.len()
        )));
    }

    Ok(CredentialRecord {
        algorithm,
        salt: salt.to_string(),
        params: HashParameters {
            iterations,
            key_length,
        },
        digest,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
