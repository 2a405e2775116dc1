//! gamehub - GameHub community platform CLI
//!
//! A command-line front-end over the session, guard, and content catalogs.
//!
//! # Examples
//!
//! ```bash
//! # Sign in as the demo admin
//! gamehub login --username admin --password password
//!
//! # Visit the gated members area
//! gamehub open /members
//!
//! # Browse upcoming tournaments
//! gamehub tournaments --status upcoming --pretty
//! ```

mod cli;
mod commands;
mod error;
mod logger;
mod navigate;
mod route;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::error::{CliError, CliErrorResult};
use crate::navigate::navigate;
use crate::route::Route;

use hub_catalog::{Blog, Leaderboard, MemberDirectory, TournamentCatalog};
use hub_config::Config;
use hub_core::TournamentStatus;
use hub_session::{FileStorage, NewMemberProfile, SESSION_KEY, SessionStore};

use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use log::warn;
use serde_json::json;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliErrorResult<serde_json::Value> {
    let config = Config::load()?;
    config.validate()?;
    logger::initialize(config.logging.level, config.log_file()?)?;

    let storage = FileStorage::new(config.storage_dir()?);
    let mut store = SessionStore::new(Box::new(storage.clone()));

    // Restore the session before the first guarded navigation
    let load = store.init();
    if load.corruption.is_some() {
        // Move the bad record aside so the next launch starts clean
        if let Err(e) = storage.backup_corrupted(SESSION_KEY) {
            warn!("Could not back up corrupted session record: {e}");
        }
    }

    match &cli.command {
        Commands::Login { username, password } => {
            let identity = store.login(username, password)?;
            Ok(serde_json::to_value(identity)?)
        }

        Commands::Register {
            username,
            email,
            password,
        } => {
            let profile = NewMemberProfile {
                username: username.clone(),
                email: email.clone(),
                password: password.clone(),
            };
            let identity = store.register(&profile)?;
            Ok(serde_json::to_value(identity)?)
        }

        Commands::Logout => {
            store.logout()?;
            Ok(json!({ "loggedOut": true }))
        }

        Commands::Whoami => Ok(serde_json::to_value(store.current())?),

        Commands::Open { path } => {
            let route = Route::parse(path).ok_or_else(|| CliError::unknown_route(path))?;
            Ok(serde_json::to_value(navigate(&store, route))?)
        }

        Commands::Tournaments { status } => {
            let catalog = TournamentCatalog::new();
            match status {
                Some(status) => {
                    let status = TournamentStatus::from_str(status)?;
                    Ok(serde_json::to_value(catalog.by_status(status))?)
                }
                None => Ok(serde_json::to_value(catalog.all())?),
            }
        }

        Commands::Leaderboard { search } => {
            let board = Leaderboard::new();
            match search {
                Some(term) => Ok(serde_json::to_value(board.search(term))?),
                None => Ok(serde_json::to_value(board.entries())?),
            }
        }

        Commands::Blog { id, category } => {
            let blog = Blog::new();
            if let Some(id) = id {
                return Ok(serde_json::to_value(blog.find(*id))?);
            }
            match category {
                Some(category) => Ok(serde_json::to_value(blog.by_category(category))?),
                None => Ok(serde_json::to_value(blog.posts())?),
            }
        }

        Commands::Profiles { search } => {
            let directory = MemberDirectory::new();
            match search {
                Some(term) => Ok(serde_json::to_value(directory.search(term))?),
                None => Ok(serde_json::to_value(directory.profiles())?),
            }
        }
    }
}
