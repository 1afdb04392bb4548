//! `credhash hash` — hash a password into a credential record.

use crate::cli::{load_settings, output, prompt_new_password, HashArgs};
use crate::config::Settings;
use crate::crypto::{HashAlgorithm, HashParameters};
use crate::errors::Result;
use crate::record::{check_salt, EncodeMode, Pbkdf2Hasher};

/// Execute the `hash` command.
pub fn execute(args: &HashArgs) -> Result<()> {
    let settings = apply_overrides(load_settings()?, args);
    let hasher = Pbkdf2Hasher::from_settings(&settings)?;

    match hasher.mode() {
        EncodeMode::Strict => {
            // Fail before prompting.
            let params = hasher.params();
            HashParameters::checked(params.iterations, params.key_length)?;
            if let Some(salt) = &args.salt {
                check_salt(salt)?;
            }
        }
        EncodeMode::Permissive => warn_substitutions(&settings, args.salt.as_deref()),
    }

    let password = prompt_new_password()?;
    let record = match &args.salt {
        Some(salt) => hasher.hash_with_salt(password.as_bytes(), salt)?,
        None => hasher.hash(password.as_bytes())?,
    };

    println!("{record}");
    Ok(())
}

/// Command-line flags take precedence over `.credhash.toml`.
fn apply_overrides(mut settings: Settings, args: &HashArgs) -> Settings {
    if let Some(algorithm) = &args.algorithm {
        settings.algorithm = algorithm.clone();
    }
    if let Some(iterations) = args.iterations {
        settings.iterations = iterations;
    }
    if let Some(key_length) = args.key_length {
        settings.key_length = key_length;
    }
    settings.strict |= args.strict;
    settings
}

/// Tell the user about every value permissive encoding is about to replace.
fn warn_substitutions(settings: &Settings, salt: Option<&str>) {
    let algorithm = settings.algorithm.as_str();
    let iterations = settings.iterations;
    let key_length = settings.key_length;
    let mut replaced = false;

    if algorithm.parse::<HashAlgorithm>().is_err() {
        output::warning(&format!(
            "unknown algorithm '{algorithm}', using {}",
            HashAlgorithm::resolve(algorithm)
        ));
        replaced = true;
    }

    let params = HashParameters::clamped(iterations, key_length);
    if params.iterations != iterations {
        output::warning(&format!(
            "iteration count {iterations} out of range, using {}",
            params.iterations
        ));
        replaced = true;
    }
    if params.key_length != key_length {
        output::warning(&format!(
            "key length {key_length} out of range, using {}",
            params.key_length
        ));
        replaced = true;
    }

    if let Some(Err(e)) = salt.map(check_salt) {
        output::warning(&format!("{e}; the record will never verify"));
    }

    if replaced {
        output::tip("Pass --strict to reject out-of-range values instead.");
    }
}
