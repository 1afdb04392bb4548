//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::record::CredentialRecord;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print the fields of a decoded record as a two-column table.
pub fn print_record_table(record: &CredentialRecord) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec!["Algorithm".to_string(), record.algorithm.to_string()]);
    table.add_row(vec!["Salt".to_string(), record.salt.clone()]);
    table.add_row(vec![
        "Iterations".to_string(),
        record.params.iterations.to_string(),
    ]);
    table.add_row(vec![
        "Key length".to_string(),
        format!("{} bytes", record.params.key_length),
    ]);
    table.add_row(vec!["Digest".to_string(), record.digest_hex()]);

    println!("{table}");
}
