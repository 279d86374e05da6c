//! vigil: validate request parameters from the command line.

mod cli;
mod commands;
mod logging;
mod settings;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Command};
use commands::check::CheckArgs;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.log_format)?;

    match cli.command {
        Command::Check {
            request,
            fields,
            sort,
            config,
        } => commands::check::run(CheckArgs {
            request: &request,
            fields,
            sort,
            config: config.as_deref(),
        }),
        Command::Normalize { input } => {
            commands::normalize::run(&input)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
