//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Local two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it is missing)
    #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Front end to run (defaults to the full-screen UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Full-screen terminal board
    #[default]
    Tui,

    /// Line-by-line play on stdin/stdout
    Console,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_tui() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.command.unwrap_or_default(), Command::Tui);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_console_with_options() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--config",
            "players.toml",
            "--log-file",
            "out.log",
            "console",
        ]);
        assert_eq!(cli.command, Some(Command::Console));
        assert_eq!(cli.config, PathBuf::from("players.toml"));
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
    }
}
