use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "cinebot")]
#[command(about = "Movie assistant that answers questions and learns new facts", long_about = None)]
struct Cli {
    /// Movie table to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat (default)
    Chat,
    /// Ask a single question and print the answer
    Ask {
        /// Message to send
        message: String,
    },
    /// Write the bundled sample movie table
    Init {
        /// Overwrite an existing table
        #[arg(long)]
        force: bool,
    },
    /// List the movies in the table
    Movies,
    /// Show version information
    Version,
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.log_json);

    match cli.command {
        Some(Commands::Chat) | None => cli::cmd_chat(cli.data)?,
        Some(Commands::Ask { message }) => cli::cmd_ask(cli.data, &message)?,
        Some(Commands::Init { force }) => cli::cmd_init(cli.data, force)?,
        Some(Commands::Movies) => cli::cmd_movies(cli.data)?,
        Some(Commands::Version) => {
            println!("cinebot {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
