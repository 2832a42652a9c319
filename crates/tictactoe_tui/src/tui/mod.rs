//! Full-screen terminal front end.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for};

use crate::config::GameConfig;
use crate::flow::GameFlow;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Runs the terminal UI until the players quit.
#[instrument(skip_all)]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut flow = GameFlow::new(config.build_engine(), App::new());
    flow.start();

    let res = run_app(&mut terminal, &mut flow);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Terminal UI error");
    }
    info!("Terminal UI closed");
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    flow: &mut GameFlow<App>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, flow.screen()))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && let Some(action) = action_for(key)
            && !apply(flow, action)
        {
            return Ok(());
        }
    }
}

/// Applies an action; returns false when the program should exit.
#[instrument(skip(flow))]
pub fn apply(flow: &mut GameFlow<App>, action: Action) -> bool {
    match action {
        Action::Quit => {
            info!("Quit requested");
            return false;
        }
        Action::Reset => flow.reset(),
        Action::MoveCursor(d_row, d_column) => flow.screen_mut().move_cursor(d_row, d_column),
        Action::PlayCursor => {
            let pos = flow.screen().cursor();
            play(flow, pos);
        }
        Action::Play(pos) => {
            flow.screen_mut().set_cursor(pos);
            play(flow, pos);
        }
    }
    true
}

fn play(flow: &mut GameFlow<App>, pos: tictactoe_core::Position) {
    if !flow.screen().is_interactive() {
        debug!(%pos, "Board inactive, selection ignored");
        return;
    }
    flow.select(pos);
}
