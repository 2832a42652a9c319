//! Tic-tac-toe - terminal entry point.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_tui::{Cli, Command, GameConfig, init_file_tracing, run_console, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = GameConfig::load(&cli.config)?;
    if let Some(path) = cli.log_file {
        config = config.with_log_file(path);
    }
    init_file_tracing(config.log_file(), config.log_filter())?;

    let command = cli.command.unwrap_or_default();
    info!(
        ?command,
        player_one = %config.player_one(),
        player_two = %config.player_two(),
        "Starting tic-tac-toe"
    );

    match command {
        Command::Tui => run_tui(&config),
        Command::Console => {
            run_console(config.build_engine(), io::stdin().lock(), io::stdout().lock())?;
            Ok(())
        }
    }
}
