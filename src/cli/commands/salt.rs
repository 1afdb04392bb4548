//! `credhash salt` — print a random salt.

use crate::cli::load_settings;
use crate::crypto::generate_salt;
use crate::errors::{CredHashError, Result};

/// Execute the `salt` command.
pub fn execute(length: Option<usize>) -> Result<()> {
    let length = match length {
        Some(n) => n,
        None => load_settings()?.salt_length,
    };
    if length == 0 {
        return Err(CredHashError::CommandFailed(
            "salt length must be at least 1".into(),
        ));
    }

    println!("{}", generate_salt(length));
    Ok(())
}
