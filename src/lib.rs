//! sehatkan library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod export;
pub mod messaging;
pub mod models;
pub mod photo;
pub mod store;
pub mod ui;
pub mod utils;

use auth::Session;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher. Everything but `init` needs a logged-in operator;
/// commands that change or copy the register act on behalf of that session.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if matches!(cli.command, Commands::Init) {
        return cli::commands::init::handle(cli);
    }

    let session = Session::from_args(
        &cfg.credentials,
        cli.user.as_deref(),
        cli.password.as_deref(),
    )?;

    match &cli.command {
        Commands::Init => Ok(()),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, &session),
        Commands::Message { .. } => cli::commands::message::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg, &session),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg, &session),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg, &session),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, &session),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line overrides win over the config file
    if let Some(custom_db) = &cli.db {
        cfg.store = custom_db.clone();
    }
    if let Some(dir) = &cli.photo_dir {
        cfg.photo_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}
