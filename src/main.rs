//! Keywarden - age-based hygiene enforcement for AWS IAM access keys.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keywarden::cli::output;
use keywarden::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support. The log
    // stream is the program's primary output surface, so default to info.
    let filter = EnvFilter::try_from_env("KEYWARDEN_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keywarden=debug")
        } else {
            EnvFilter::new("keywarden=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
