//! apirules CLI -- API rule verification for declarative type models.
//!
//! This binary provides the `apirules` command with subcommands for checking
//! type models and listing rules. See `apirules --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn apirules_output::OutputFormatter> = if cli.json {
        Box::new(apirules_output::json::JsonFormatter)
    } else {
        Box::new(apirules_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check {
            paths,
            config,
            suppress,
            exceptions,
            report,
        } => commands::check::run(
            &*formatter,
            cli.verbose,
            commands::check::CheckArgs {
                paths,
                config,
                suppress,
                exceptions,
                report,
            },
        ),
        Commands::Rules { config } => commands::rules::run(&*formatter, config),
        Commands::Completion { shell } => commands::completion::run(shell),
    };

    std::process::exit(exit_code);
}
