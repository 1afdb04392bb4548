use clap::Parser;
use credhash::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Hash(ref args) => credhash::cli::commands::hash::execute(args),
        Commands::Verify { ref record } => credhash::cli::commands::verify::execute(record),
        Commands::Inspect { ref record, json } => {
            credhash::cli::commands::inspect::execute(record, json)
        }
        Commands::Salt { length } => credhash::cli::commands::salt::execute(length),
        Commands::Version => credhash::cli::commands::version::execute(),
        Commands::Completions { shell } => credhash::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        credhash::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
