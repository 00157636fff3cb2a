mod cli;
mod command_handlers;
mod config;
mod error;
mod linker;
mod logging;
mod platform;
mod prompt;
mod registry;
mod store;
#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use crate::cli::Cli;
use crate::config::ClivmConfig;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and are not failures.
            let failed = e.use_stderr();
            let _ = e.print();
            return if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };
    logging::init(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };
    let cfg = ClivmConfig::resolve(cli.home)?;
    command_handlers::dispatch::dispatch(command, &cfg)
}
