use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "apirules", version, about = "API rule verification for type models")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Print progress details to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Check type model files against every enabled rule
    Check {
        /// Model JSON files, or directories searched for *.json
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Config file (default: .apirules/apirules.json)
        #[arg(long, env = "APIRULES_CONFIG")]
        config: Option<PathBuf>,
        /// Treat every violation of this rule as a known exception
        #[arg(long)]
        suppress: Vec<String>,
        /// Known-exceptions file, one report line per accepted violation
        #[arg(long)]
        exceptions: Option<PathBuf>,
        /// Write the violation report to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// List available rules and whether they are enabled
    Rules {
        /// Config file (default: .apirules/apirules.json)
        #[arg(long, env = "APIRULES_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
