use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::params::{DEFAULT_ITERATION, DEFAULT_KEY_LENGTH};
use crate::crypto::DEFAULT_SALT_LEN;
use crate::errors::{CredHashError, Result};
use crate::record::EncodeMode;

/// Project-level configuration, loaded from `.credhash.toml`.
///
/// Every field has a sensible default so credhash works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Hash algorithm name (default: "sha512").
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// PBKDF2 iteration count (default: 10 000).
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Derived key length in bytes (default: 32).
    #[serde(default = "default_key_length")]
    pub key_length: usize,

    /// Length of generated salts in characters (default: 16).
    #[serde(default = "default_salt_length")]
    pub salt_length: usize,

    /// Reject out-of-range parameters instead of clamping them.
    #[serde(default)]
    pub strict: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_algorithm() -> String {
    "sha512".to_string()
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATION
}

fn default_key_length() -> usize {
    DEFAULT_KEY_LENGTH
}

fn default_salt_length() -> usize {
    DEFAULT_SALT_LEN
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            iterations: default_iterations(),
            key_length: default_key_length(),
            salt_length: default_salt_length(),
            strict: false,
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".credhash.toml";

    /// Load settings from `<project_dir>/.credhash.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            CredHashError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        if settings.salt_length == 0 {
            return Err(CredHashError::ConfigError(format!(
                "salt_length in {} must be at least 1",
                config_path.display()
            )));
        }

        Ok(settings)
    }

    /// Encoding mode implied by the `strict` flag.
    pub fn mode(&self) -> EncodeMode {
        if self.strict {
            EncodeMode::Strict
        } else {
            EncodeMode::Permissive
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
