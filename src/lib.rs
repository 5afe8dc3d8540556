//! bluebird library root.
//! Exposes the URI-routed data provider, the CLI parser and the high-level
//! run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod provider;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Type { .. }
        | Commands::Query { .. }
        | Commands::Insert { .. }
        | Commands::Update { .. }
        | Commands::Delete { .. } => cli::commands::resource::handle(&cli.command, cfg),
        Commands::Box { .. } => cli::commands::boxes::handle(&cli.command, cfg),
        Commands::Obs { .. } => cli::commands::obs::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load()?;

    // command-line DB override
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let _logger = logging::init_logging(&cfg.log_level)?;

    dispatch(&cli, &cfg)
}
