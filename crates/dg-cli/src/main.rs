//! driftguard CLI - apply a directory of SQL migrations exactly once

use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::common::ExitCode;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match commands::apply::execute(&cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ExitCode>() {
            Some(code) => std::process::ExitCode::from(code.as_u8()),
            None => {
                eprintln!("Error: {err:#}");
                std::process::ExitCode::FAILURE
            }
        },
    }
}
