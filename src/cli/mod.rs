//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use clap::Parser;
use clap_complete::Shell;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{CredHashError, Result};

/// Environment variable consulted before prompting for a password.
pub const PASSWORD_ENV: &str = "CREDHASH_PASSWORD";

/// credhash CLI: self-describing PBKDF2 password hashes.
#[derive(Parser)]
#[command(
    name = "credhash",
    about = "Self-describing PBKDF2 password hashes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Hash a password into a credential record
    Hash(HashArgs),

    /// Check a password against a credential record
    Verify {
        /// Stored record (pbkdf2_<algo>$<salt>$<iterations>$<key_length>$<digest>)
        record: String,
    },

    /// Decode a credential record and show its fields
    Inspect {
        /// Stored record
        record: String,
        /// Print the fields as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a random salt
    Salt {
        /// Salt length in characters (default: from config, else 16)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Show version
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options for `credhash hash`.  Unset options fall back to `.credhash.toml`.
#[derive(clap::Args)]
pub struct HashArgs {
    /// Salt to use (random if omitted); must not contain '$'
    #[arg(short, long)]
    pub salt: Option<String>,

    /// PBKDF2 iteration count (1000..=1000000)
    #[arg(short, long)]
    pub iterations: Option<u32>,

    /// Derived key length in bytes (8..=1024)
    #[arg(short, long)]
    pub key_length: Option<usize>,

    /// Hash algorithm: md5, sha1, sha256 or sha512
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Reject out-of-range values instead of replacing them with defaults
    #[arg(long)]
    pub strict: bool,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load `.credhash.toml` from the current directory (or defaults).
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

/// Get the password to check, trying in order:
/// 1. `CREDHASH_PASSWORD` env var (scripts/CI)
/// 2. Interactive prompt
///
/// Empty passwords are accepted.  Returns `Zeroizing<String>` so the
/// password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        return Ok(Zeroizing::new(pw));
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| CredHashError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a password to hash, with confirmation.
///
/// Also respects `CREDHASH_PASSWORD` for scripted usage.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        return Ok(Zeroizing::new(pw));
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Password to hash")
        .with_confirmation("Confirm password", "Passwords do not match, try again")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| CredHashError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}
