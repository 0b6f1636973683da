//! rcalendar library root.
//! Exposes the event store, its persistence and queries, plus the CLI
//! parser and the high-level run() function used by the binary.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod session;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::AppContext;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, ctx),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, ctx),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, ctx),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, ctx),
        Commands::Stats => cli::commands::stats::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);
    let mut cfg = Config::load(Some(&config_path))?;

    logging::init(&cfg.log_level);

    // 3. command-line override of the data file
    if let Some(custom) = &cli.file {
        cfg.data_file = custom.clone();
    }

    let ctx = AppContext {
        data_path: cfg.data_path(),
        color: cfg.color && !cli.no_color,
        config_path,
        cfg,
    };
    log::debug!("using data file {}", ctx.data_path.display());

    dispatch(&cli, &ctx)
}
