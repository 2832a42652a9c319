//! Front ends for local two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **Flow**: [`GameFlow`] binds one [`TurnEngine`](tictactoe_core::TurnEngine)
//!   to one [`Screen`] and turns selections into redraws and status lines
//! - **TUI**: full-screen ratatui board driven by the keyboard
//! - **Console**: line-oriented play over any reader and writer
//! - **Config/logging**: TOML settings and file-backed tracing

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod flow;
pub mod logging;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use console::{ConsoleCommand, ConsoleScreen, run_console};
pub use flow::{GameFlow, Screen};
pub use logging::init_file_tracing;
pub use tui::{App, run_tui};
