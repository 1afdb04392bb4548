//! Password verification against a stored credential record.

use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::Zeroizing;

use crate::crypto::kdf::derive_digest;
use crate::errors::{CredHashError, Result};

use super::format::{decode, SEPARATOR};

/// Check `password` against `stored`.
///
/// Returns `false` for a wrong password and for any malformed record
/// alike.  Use [`verify_detailed`] to tell the two apart.
pub fn verify(password: &[u8], stored: &str) -> bool {
    match verify_detailed(password, stored) {
        Ok(()) => true,
        Err(e) => {
            debug!(reason = %e, "credential verification failed");
            false
        }
    }
}

/// Check `password` against `stored`, reporting why it failed.
///
/// Errors are the decode errors for malformed records, or
/// `PasswordMismatch` when the record is valid but the password is not.
pub fn verify_detailed(password: &[u8], stored: &str) -> Result<()> {
    if stored.is_empty() {
        return Err(CredHashError::EmptyField("record"));
    }

    let record = decode(stored)?;

    // The header holds no secret; a plain comparison is fine here.
    // Only the canonical spelling (e.g. no leading zeros) is accepted.
    let (stored_header, stored_digest) = stored
        .rsplit_once(SEPARATOR)
        .ok_or_else(|| CredHashError::MalformedRecord("missing digest field".into()))?;
    if stored_header != record.header() {
        return Err(CredHashError::MalformedRecord(
            "record is not in canonical form".into(),
        ));
    }

    let candidate = derive_digest(
        record.algorithm,
        password,
        record.salt.as_bytes(),
        &record.params,
    );
    let candidate_hex = Zeroizing::new(hex::encode(&*candidate));

    if candidate_hex
        .as_bytes()
        .ct_eq(stored_digest.as_bytes())
        .into()
    {
        Ok(())
    } else {
        Err(CredHashError::PasswordMismatch)
    }
}
