//! PBKDF2-HMAC key derivation and salt generation.
//!
//! The derivation is dispatched over the closed `HashAlgorithm` enum so
//! each variant maps to exactly one concrete digest type.

use md5::Md5;
use pbkdf2::pbkdf2_hmac;
use rand::distr::Alphanumeric;
use rand::Rng;
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use zeroize::Zeroizing;

use super::algorithm::HashAlgorithm;
use super::params::HashParameters;

/// Default length of a generated salt, in characters.
pub const DEFAULT_SALT_LEN: usize = 16;

/// Derive `params.key_length` bytes from `password` and `salt`.
///
/// Callers are expected to pass parameters that are already within
/// bounds; this function does not clamp or check them.
pub fn derive_digest(
    algorithm: HashAlgorithm,
    password: &[u8],
    salt: &[u8],
    params: &HashParameters,
) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(vec![0u8; params.key_length]);
    let rounds = params.iterations;

    match algorithm {
        HashAlgorithm::Md5 => pbkdf2_hmac::<Md5>(password, salt, rounds, &mut out),
        HashAlgorithm::Sha1 => pbkdf2_hmac::<Sha1>(password, salt, rounds, &mut out),
        HashAlgorithm::Sha256 => pbkdf2_hmac::<Sha256>(password, salt, rounds, &mut out),
        HashAlgorithm::Sha512 => pbkdf2_hmac::<Sha512>(password, salt, rounds, &mut out),
    }

    out
}

/// Generate a random alphanumeric salt of `len` characters.
///
/// The alphabet never contains the `$` record separator, so the result
/// is always safe to embed in a credential record.
pub fn generate_salt(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
