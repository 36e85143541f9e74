//! Terminal dashboard.
//!
//! A ratatui front end over the HTTP API: a sidebar of filters, a KPI row,
//! and chart tabs over the fetched records. The dashboard talks to the
//! backend exclusively through `client::ApiClient`.

use std::io;

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

mod app;
pub mod client;
mod ui;

pub use app::{App, Kpis};
pub use client::{ApiClient, FetchError, SalesFilter};

/// Run the dashboard until the user quits
pub fn run_dashboard(
    api_base_url: &str,
    timeout_secs: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(api_base_url, timeout_secs);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

/// Main application loop
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()>
where
    io::Error: From<B::Error>,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            let should_exit = app.handle_key(key);
            if should_exit {
                return Ok(());
            }
        }
    }
}
