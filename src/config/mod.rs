//! Config module — optional `.credhash.toml` project settings.

pub mod settings;

pub use settings::Settings;
