#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{Cli, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use tidal::config::{LogConfig, TidalConfig, load_config};
use tidal_logger::{LevelFilter, Logger, parse_level};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: TidalConfig = load_config(cli.config.as_deref()).context("Failed to load config")?;
    let _logger = init_logger(&config.log, cli.verbose)?;

    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Generate(args) => handlers::generate::run(args, config)?,
        Commands::Inspect(args) => handlers::inspect::run(&args)?,
    }

    Ok(())
}

fn init_logger(log: &LogConfig, verbose: bool) -> Result<Logger> {
    let level = if verbose { LevelFilter::DEBUG } else { parse_level(&log.level)? };
    let builder = Logger::builder().name(env!("CARGO_BIN_NAME")).console(true).level(level);

    let logger = match &log.path {
        Some(path) => builder.path(path).json(log.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
