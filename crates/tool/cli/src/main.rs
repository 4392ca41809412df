//! Command-line inspector for serialized Ethereum transactions.

mod command;
mod config;

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};

use crate::{command::Command, config::Config};

const LOGGER: SimpleLogger = SimpleLogger;

#[derive(Parser)]
#[clap(name = "ethwire", version, author)]
struct CliArgs {
    /// Enables verbose mode
    #[clap(short, long, takes_value = false)]
    verbose: bool,
    /// Path to a TOML file with validation settings
    #[clap(long, short)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logger(args.verbose)?;

    let config = match args.config {
        Some(file_path) => Config::load(&file_path)?,
        None => Config::default(),
    };

    let output = args.command.run(&config)?;
    println!("{output}");

    Ok(())
}

struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        // Command output goes to stdout, so logs go to stderr.
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logger(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(level))
        .map_err(|error| anyhow!(error))
}
