//! Command-line interface for arcade_games.

use clap::{Parser, Subcommand};

/// Arcade Games - casual game server with a perfect-play tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "arcade_games")]
#[command(about = "Casual game server with a perfect-play tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Http {
        /// Port to bind to (overrides config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Ledger endpoint for game reports (overrides config file)
        #[arg(long)]
        report_url: Option<String>,
    },

    /// Play tic-tac-toe against the engine in the terminal
    Play,
}
