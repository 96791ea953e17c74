//! Command-line interface.

pub mod check;
pub mod output;
pub mod run;

use clap::{Parser, Subcommand};

/// Keywarden - age-based hygiene enforcement for AWS IAM access keys.
#[derive(Parser)]
#[command(
    name = "keywarden",
    about = "Age-based hygiene enforcement for AWS IAM access keys",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Scan all users and apply the key age policy (notify, deactivate)
    Run,

    /// Classify every key against the policy without acting on it
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    match command {
        Command::Run => run::execute(),
        Command::Check { json } => check::execute(json),
    }
}
