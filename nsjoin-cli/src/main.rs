//! nsjoin CLI
//!
//! Runs a command inside the namespaces of another process. The joining
//! itself is done by the `nsjoin-hook` constructor when this binary
//! re-executes itself with `ddocker_pid` and `ddocker_cmd` set.

use clap::Parser;
use std::process;
use tracing::Level;

mod cli;
mod commands;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match commands::dispatch(cli.command, cli.verbose) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
