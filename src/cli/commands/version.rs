//! `credhash version` — display version.

use console::style;

use crate::crypto::HashAlgorithm;
use crate::errors::Result;

/// Execute the `version` command.
pub fn execute() -> Result<()> {
    let current = env!("CARGO_PKG_VERSION");
    println!("credhash {current}");

    let algorithms: Vec<&str> = HashAlgorithm::ALL.iter().map(|a| a.as_str()).collect();
    println!(
        "{} {}",
        style("algorithms:").dim(),
        algorithms.join(", ")
    );

    Ok(())
}
