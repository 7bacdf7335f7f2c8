//! focustick - Terminal Countdown Timer
//!
//! A small focus timer for the terminal.
//!
//! Features:
//! - 10, 20 or 30 second countdowns with a progress bar
//! - Completion counter that survives restarts
//! - Light and dark themes, remembered between runs
//! - A motivational phrase after every finished run
//!
//! Usage: focustick

mod app;
mod config;
mod logging;
mod storage;
mod theme_ctx;
mod timer;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Instant;
use storage::FileStore;
use tracing::info;

fn main() -> Result<()> {
    // Parse arguments
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("focustick {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Run the application
    let result = run_app();

    // Terminal state is already restored at this point
    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"focustick - Terminal Countdown Timer

USAGE:
    focustick [OPTIONS]

OPTIONS:
    -h, --help       Print help information
    -v, --version    Print version information

KEYBINDINGS:
    (type)           Edit your name (before starting)
    Ctrl+U           Clear the name
    Tab / ←→         Choose 10, 20 or 30 seconds
    Enter            Start timer / try again
    Ctrl+T           Toggle light/dark theme
    Ctrl+R           Reset
    Esc, Ctrl+C      Quit
    t / r / q        Theme / reset / quit while the timer is shown

FILES:
    ~/.config/focustick/config.toml
    ~/.local/share/focustick/storage.json
    ~/.local/share/focustick/focustick.log
"#
    );
}

fn run_app() -> Result<()> {
    // Load configuration
    let config = config::Config::load()
        .context("Failed to load configuration")?;

    // Logging is optional; the timer works without it
    match config.log_file() {
        Ok(log_path) => {
            if let Err(e) = logging::init(&log_path, &config.log_level) {
                eprintln!("Warning: logging disabled: {:#}", e);
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {:#}", e),
    }

    let storage_path = config.storage_file()
        .context("Failed to locate storage file")?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        storage = %storage_path.display(),
        "Starting focustick"
    );

    // Create application state
    let store = storage::shared(FileStore::open(storage_path));
    let mut app = App::new(config, store);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app);

    // Tear the widget down before leaving; this cancels any running ticker
    drop(app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Exiting focustick");
    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Render UI
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        // Deliver due ticks
        app.update_timer()?;

        // Poll for events, waking up in time for the next tick
        if event::poll(app.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_panic() {
        print_help();
    }
}
