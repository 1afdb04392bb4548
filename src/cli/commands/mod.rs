//! One module per subcommand.

pub mod completions;
pub mod hash;
pub mod inspect;
pub mod salt;
pub mod verify;
pub mod version;
