//! Arcade Games - Unified CLI
//!
//! Casual game server with a perfect-play tic-tac-toe engine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use arcade_games::{Game, GameStatus, Position, ServerConfig};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Http {
            port,
            host,
            config,
            report_url,
        } => run_http(port, host, config, report_url).await,
        Command::Play => run_play(),
    }
}

/// Run the HTTP game server
async fn run_http(
    port: Option<u16>,
    host: Option<String>,
    config_path: Option<std::path::PathBuf>,
    report_url: Option<String>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => ServerConfig::from_file(&path)?,
        None => ServerConfig::new(),
    };

    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if let Some(url) = report_url {
        config = config.with_report_url(url);
    }

    info!("Starting Arcade Games HTTP server");
    arcade_games::run_http_server(config).await
}

/// Play tic-tac-toe against the engine on stdin/stdout.
fn run_play() -> Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Game::new();

    println!("You are X, the engine is O. Enter a square (0-8 or a name");
    println!("like \"center\"), or \"quit\" to leave.\n");

    loop {
        println!("{}\n", game.board().display());
        print!("Your move: ");
        std::io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        let Some(pos) = Position::from_label_or_number(input) else {
            println!("Unrecognized square: {input}");
            continue;
        };

        let report = match game.play_turn(pos) {
            Ok(report) => report,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        if let Some(reply) = report.engine_reply {
            println!("Engine plays {reply}.");
        }

        match report.status {
            GameStatus::InProgress => {}
            GameStatus::Won(mark) => {
                println!("\n{}\n", report.board.display());
                if mark == Game::PLAYER {
                    println!("You win!\n");
                } else {
                    println!("The engine wins.\n");
                }
                game.reset();
                println!("New game.\n");
            }
            GameStatus::Draw => {
                println!("\n{}\n", report.board.display());
                println!("Draw.\n");
                game.reset();
                println!("New game.\n");
            }
        }
    }

    Ok(())
}
