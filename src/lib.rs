//! tsgrid library root.
//! Exposes the timestamp comparator, the date-time input adapter, the grid
//! host boundary, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod export;
pub mod grid;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Compare { .. } => cli::commands::compare::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    // Load config once; every command receives it explicitly.
    let cfg = Config::load(&config_path)?;

    logging::init(&cfg.log_filter);

    dispatch(&cli, &cfg, &config_path)
}
