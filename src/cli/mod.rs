//! CLI command handlers.

mod chat;
mod data;

use std::path::PathBuf;

use anyhow::{Context, Result};

use cinebot::{Assistant, Config, MovieStore};

pub(crate) use chat::{cmd_ask, cmd_chat};
pub(crate) use data::{cmd_init, cmd_movies};

/// Load the config, applying a `--data` override.
pub(crate) fn load_config(data: Option<PathBuf>) -> Result<Config> {
    let mut config = Config::load().with_context(|| "Failed to load configuration")?;
    if let Some(path) = data {
        config.data_path = path;
    }
    Ok(config)
}

/// Open the movie table, printing guidance and exiting when it cannot be read.
pub(crate) fn open_store(config: &Config) -> MovieStore {
    match MovieStore::open(&config.data_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{}", format_cli_error(&e));
            std::process::exit(1);
        }
    }
}

pub(crate) fn load_assistant(data: Option<PathBuf>) -> Result<Assistant> {
    let config = load_config(data)?;
    let store = open_store(&config);
    Ok(Assistant::new(store, &config))
}

/// Format startup errors with actionable guidance for CLI users.
pub(crate) fn format_cli_error(e: &dyn std::fmt::Display) -> String {
    let msg = e.to_string();

    if msg.contains("Not found: movie table") {
        format!(
            "{}\n\n  Fix: Run 'cinebot init' to create the sample movie table.\n  Or:  Point CINEBOT_DATA_PATH (or --data) at an existing CSV file.",
            msg
        )
    } else if msg.contains("expected header") {
        format!(
            "{}\n\n  Fix: The first line must be: title,year,director,cast,genre,plot,trivia",
            msg
        )
    } else if msg.contains("duplicate title") || msg.contains("empty title") {
        format!(
            "{}\n\n  Fix: Every row needs a unique, non-empty title.",
            msg
        )
    } else if msg.contains("Configuration error") {
        format!("{}\n\n  Fix: Check {}.", msg, Config::path().display())
    } else {
        msg
    }
}
