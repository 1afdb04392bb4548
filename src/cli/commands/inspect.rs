//! `credhash inspect` — decode a record and show its fields.

use crate::cli::output;
use crate::errors::{CredHashError, Result};
use crate::record::decode;

/// Execute the `inspect` command.
pub fn execute(record: &str, json: bool) -> Result<()> {
    let decoded = decode(record)?;
    let canonical = decoded.to_string() == record;

    if json {
        let value = serde_json::json!({
            "algorithm": decoded.algorithm,
            "salt": &decoded.salt,
            "iterations": decoded.params.iterations,
            "key_length": decoded.params.key_length,
            "digest": decoded.digest_hex(),
            "canonical": canonical,
        });
        let text = serde_json::to_string_pretty(&value)
            .map_err(|e| CredHashError::SerializationError(format!("inspect: {e}")))?;
        println!("{text}");
        return Ok(());
    }

    output::print_record_table(&decoded);
    if !canonical {
        output::warning("record is not in canonical form; it will never verify");
    }
    Ok(())
}
