//! Duke - a line-oriented task tracking assistant.
//!
//! Reads commands from standard input, keeps a list of to-dos, deadlines and
//! events, and saves it to a JSON file after every change.
//!
//! # Commands
//!
//! - `todo <description>` - add a to-do
//! - `deadline <description> /by <dd/mm/yyyy [HH:MM]>` - add a deadline
//! - `event <description> /at <dd/mm/yyyy [HH:MM]>` - add an event
//! - `list [/on <dd/mm/yyyy>]` - show the list, or the tasks on one day
//! - `done <number>` - mark a task as done
//! - `delete <number>` - remove a task
//! - `hello`, `help`, `bye`
//!
//! # Architecture
//!
//! - [`commands`] - tokenizing, command selection, handlers and responses
//! - [`config`] - YAML configuration with environment overrides
//! - [`error`] - the error taxonomy shown to users
//! - [`locale`] - message catalogs
//! - [`session`] - the read loop and output framing
//! - [`tasks`] - task model, task list and JSON persistence
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - log filter for stderr (default: `warn`)
//! - `DUKE_*` - configuration overrides, see [`config`]

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{
    commands::Commander,
    config::Config,
    locale::Catalog,
    session::Session,
    tasks::{TaskList, TaskLoader},
};

mod commands;
mod config;
mod error;
mod locale;
mod session;
mod tasks;

/// Command-line arguments.
///
/// # Examples
///
/// ```bash
/// duke --config duke.yaml --data ~/.duke/tasks.json --locale german
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file. Optional; defaults apply when missing.
    #[arg(short, long, default_value = "duke.yaml")]
    config: String,

    /// Path to the JSON save file, overriding `storage.path`.
    #[arg(short, long)]
    data: Option<String>,

    /// Message language, overriding `locale.name`.
    #[arg(short, long)]
    locale: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Warnings only by default, stderr shares the terminal with the session
    let env = Env::default().filter_or("RUST_LOG", "warn");
    env_logger::init_from_env(env);

    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            std::process::exit(1);
        }
    };

    let storage_path = args.data.unwrap_or(config.storage.path);
    let locale = args.locale.unwrap_or(config.locale.name);

    let catalog = Catalog::for_locale(&locale);
    let loader = TaskLoader::new(storage_path);

    info!(
        "Starting duke {} with tasks at {} in {}",
        env!("CARGO_PKG_VERSION"),
        loader.path().display(),
        catalog.name()
    );

    let commander = Commander::new(catalog, config.dates.parse);
    let tasks = TaskList::new(loader);
    let mut session = Session::new(commander, tasks, config.ui.indent);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    if let Err(e) = session.run(stdin, &mut stdout).await {
        error!("Session aborted: {:#}", e);
        std::process::exit(1);
    }
}
