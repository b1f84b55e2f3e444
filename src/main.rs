//! matriz-tui — Terminal viewer for whitespace-delimited integer matrix files.

mod app;
mod config;
mod data;
mod error;
mod event;
mod types;
mod ui;

use app::App;
use config::Config;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use data::{format_matrix, load_matrix};
use ratatui::prelude::*;
use std::io::{self, stdout, Write};
use std::path::PathBuf;
use std::time::Duration;

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<bool> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;
        if crossterm::event::poll(Duration::from_millis(100))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                if app.on_key(key) {
                    return Ok(true);
                }
            }
        }
    }
}

fn main() -> io::Result<()> {
    let mut args = std::env::args().skip(1);
    let cli_path: Option<PathBuf> = args.next().map(PathBuf::from);
    let config = Config::load();
    let input_path = config.input_path(cli_path.as_deref());

    let mut app = App::new(input_path.clone(), load_matrix(&input_path));

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let _ = run_app(&mut terminal, &mut app)?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // The alternate screen is gone now; echo whatever survived the session.
    if let Some(matrix) = &app.matrix {
        let mut out = io::stdout();
        out.write_all(format_matrix(matrix).as_bytes())?;
        out.flush()?;
    }

    Ok(())
}
