//! `credhash verify` — check a password against a stored record.

use crate::cli::{output, prompt_password};
use crate::errors::Result;
use crate::record::verify_detailed;

/// Execute the `verify` command.
///
/// Succeeds only when the password matches; a wrong password and a
/// malformed record are both reported as errors (exit code 1).
pub fn execute(record: &str) -> Result<()> {
    let password = prompt_password()?;
    verify_detailed(password.as_bytes(), record)?;
    output::success("Password matches");
    Ok(())
}
