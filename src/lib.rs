use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

pub mod cli;
pub mod client;
pub mod commands;
pub mod tool;

use cli::{Cli, Commands};
use client::LocalClient;
use commands::*;

pub fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up colored output
    colored::control::set_override(cli.color && !cli.no_color);

    // Calculate verbosity
    let verbosity = cli.verbose as i8 - cli.quiet as i8;

    init_logging(verbosity)?;

    let client = LocalClient;

    match &cli.command {
        Commands::Rm(args) => cmd_rm(&client, &args.args),
    }
}

fn init_logging(verbosity: i8) -> Result<()> {
    let level = match verbosity {
        i8::MIN..=-1 => LevelFilter::Error,
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new().with_level(level).init()?;
    Ok(())
}
