//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;

/// todos - In-memory to-do list service
#[derive(Parser, Debug)]
#[command(
    name = "todos",
    version,
    about = "In-memory to-do list service with a JSON HTTP API",
    long_about = "Serve a to-do list over HTTP.\n\n\
                  Todos live in memory under /api/todos and are discarded\n\
                  when the server stops."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Interface to bind (default 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (default $PORT, then 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Config file (default <config dir>/todos/config.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Some(Command::Serve { host, port, config }) => {
            commands::serve(host, port, config.as_deref())
        },
        Some(Command::Version) => {
            println!("todos v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        },
        None => {
            println!("todos v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'todos --help' for usage");
            println!("Run 'todos serve' to start the server");
            Ok(())
        },
    }
}
