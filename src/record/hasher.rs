//! Configured PBKDF2 hasher.
//!
//! `Pbkdf2Hasher` bundles an algorithm, cost parameters, a salt length
//! and an `EncodeMode` so callers do not have to thread them through
//! every `encode` call.

use crate::config::Settings;
use crate::crypto::kdf::generate_salt;
use crate::crypto::{HashAlgorithm, HashParameters, DEFAULT_SALT_LEN};
use crate::errors::Result;

use super::format::{encode, try_encode};
use super::verify::{verify, verify_detailed};

/// How out-of-range or unsafe inputs are handled when encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodeMode {
    /// Reject with a typed error.
    Strict,
    /// Substitute defaults and log a warning.
    #[default]
    Permissive,
}

#[derive(Debug, Clone)]
pub struct Pbkdf2Hasher {
    algorithm: HashAlgorithm,
    params: HashParameters,
    salt_len: usize,
    mode: EncodeMode,
}

impl Default for Pbkdf2Hasher {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            params: HashParameters::default(),
            salt_len: DEFAULT_SALT_LEN,
            mode: EncodeMode::default(),
        }
    }
}

impl Pbkdf2Hasher {
    pub fn new(algorithm: HashAlgorithm, params: HashParameters) -> Self {
        Self {
            algorithm,
            params,
            ..Self::default()
        }
    }

    /// Build a hasher from loaded settings.
    ///
    /// In strict mode an unknown algorithm name in the settings is an
    /// error; in permissive mode it resolves to `sha512`.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mode = settings.mode();
        let algorithm = match mode {
            EncodeMode::Strict => settings.algorithm.parse()?,
            EncodeMode::Permissive => HashAlgorithm::resolve(&settings.algorithm),
        };
        Ok(Self {
            algorithm,
            params: HashParameters {
                iterations: settings.iterations,
                key_length: settings.key_length,
            },
            salt_len: settings.salt_length,
            mode,
        })
    }

    pub fn with_mode(mut self, mode: EncodeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_salt_len(mut self, salt_len: usize) -> Self {
        self.salt_len = salt_len;
        self
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn params(&self) -> HashParameters {
        self.params
    }

    pub fn mode(&self) -> EncodeMode {
        self.mode
    }

    /// Hash `password` with a freshly generated random salt.
    pub fn hash(&self, password: &[u8]) -> Result<String> {
        let salt = generate_salt(self.salt_len);
        self.hash_with_salt(password, &salt)
    }

    /// Hash `password` with a caller-supplied salt.
    pub fn hash_with_salt(&self, password: &[u8], salt: &str) -> Result<String> {
        let algo = self.algorithm.as_str();
        let HashParameters {
            iterations,
            key_length,
        } = self.params;

        match self.mode {
            EncodeMode::Strict => try_encode(password, salt, iterations, key_length, algo),
            EncodeMode::Permissive => Ok(encode(password, salt, iterations, key_length, algo)),
        }
    }

    /// Check `password` against a stored record.
    pub fn verify(&self, password: &[u8], stored: &str) -> bool {
        verify(password, stored)
    }

    /// Check `password` against a stored record, reporting why it failed.
    pub fn verify_detailed(&self, password: &[u8], stored: &str) -> Result<()> {
        verify_detailed(password, stored)
    }
}
