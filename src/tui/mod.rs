//! Terminal User Interface
//!
//! Owns the terminal for the lifetime of the composer: raw mode + alternate
//! screen on entry, restored on exit (including the error path).

pub mod app;
pub mod events;
pub mod render;

pub use app::App;
pub use events::{EventHandler, TuiEvent};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Run the TUI until the user quits.
pub async fn run(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    EventHandler::start_terminal_listener(app.event_sender());

    let result = event_loop(&mut terminal, &mut app).await;

    // Always restore the terminal, even if the loop errored
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while !app.should_quit {
        terminal
            .draw(|f| render::render(f, app))
            .context("Failed to draw frame")?;

        match app.next_event().await {
            Some(event) => app.handle_event(event)?,
            None => break, // Listener task is gone
        }
    }
    Ok(())
}
