//! Movie table management commands.

use std::path::PathBuf;

use anyhow::{Context, Result};

use cinebot::store::seed::ensure_data_file;

use super::{load_config, open_store};

/// Write the bundled sample table.
pub(crate) fn cmd_init(data: Option<PathBuf>, force: bool) -> Result<()> {
    let config = load_config(data)?;
    let path = &config.data_path;

    let written = ensure_data_file(path, force)
        .with_context(|| format!("Failed to write sample movie table to {}", path.display()))?;

    if written {
        println!("Wrote sample movie table to {}", path.display());
    } else {
        println!(
            "Movie table already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    Ok(())
}

/// Print the store summary and every title.
pub(crate) fn cmd_movies(data: Option<PathBuf>) -> Result<()> {
    let config = load_config(data)?;
    let store = open_store(&config);

    println!("{}", store.summary());
    println!();
    for movie in store.records() {
        match movie.year {
            Some(year) => println!("  {} ({})", movie.title, year),
            None => println!("  {}", movie.title),
        }
    }
    Ok(())
}
