mod catalog;
mod cli;
mod config;
mod db;
mod models;
mod tracker;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::{RecordStore, Records, SqliteStore, UnavailableStore};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    // A broken data dir should not stop the app; everything still works in memory
    let store = open_store(&config);
    let records = Records::new(store.as_ref());

    match cli.command {
        Some(Commands::Prayer { action }) => handlers::handle_prayer(&records, &action)?,
        Some(Commands::Habit { action }) => handlers::handle_habit(&records, &action)?,
        Some(Commands::Ayat { action, random }) => {
            handlers::handle_ayat(&records, action.as_ref(), random)?
        }
        Some(Commands::Intention { action, random }) => {
            handlers::handle_intention(&records, action.as_ref(), random)?
        }
        Some(Commands::Quiz { action, random }) => {
            handlers::handle_quiz(&records, action.as_ref(), random)?
        }
        Some(Commands::Tasbeeh { action }) => {
            handlers::handle_tasbeeh(&records, &config, &action)?
        }
        Some(Commands::Virtue { action }) => handlers::handle_virtue(&records, &config, &action)?,
        Some(Commands::Calendar { action, date }) => {
            handlers::handle_calendar(&config, action.as_ref(), date.as_deref())?
        }

        // No subcommand → launch TUI
        None => tui::app::run(records, config)?,
    }

    Ok(())
}

fn open_store(config: &AppConfig) -> Box<dyn RecordStore> {
    let opened = config.ensure_data_dir().and_then(|_| {
        let db_path = config.db_path()?;
        SqliteStore::open(&db_path).with_context(|| format!("Opening database at {:?}", db_path))
    });
    match opened {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("Storage unavailable, changes will not be saved: {:#}", e);
            Box::new(UnavailableStore)
        }
    }
}
