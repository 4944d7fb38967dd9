//! Cravings Coach library root.
//! Exposes the CLI parser, the high-level run() function and the workflow,
//! gateway and storage modules behind it.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod gateway;
pub mod models;
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
        Commands::Draft { .. }
        | Commands::Crave { .. }
        | Commands::Suggest
        | Commands::Choose { .. }
        | Commands::Cancel
        | Commands::Clear
        | Commands::Status => cli::commands::craving::handle(&cli.command, cfg),
        Commands::History { .. } | Commands::Insights => {
            cli::commands::history::handle(&cli.command, cfg)
        }
        Commands::Register { .. } | Commands::Login { .. } | Commands::Logout => {
            cli::commands::account::handle(&cli.command, cfg)
        }
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line database override wins over the config file
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
