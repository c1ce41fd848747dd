//! dburl CLI - Inspect database URLs from the command line.

use clap::Parser;

use dburl_cli::cli::{Cli, Command};
use dburl_cli::commands;
use dburl_cli::error::CliResult;
use dburl_cli::output;

fn main() {
    dburl_core::logging::init();

    if let Err(e) = run() {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse(args) => commands::parse::run(args, cli.format),
        Command::Env(args) => commands::env::run(args, cli.format),
        Command::Schemes => commands::schemes::run(cli.format),
        Command::Version => commands::version::run(),
    }
}
