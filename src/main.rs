// ABOUTME: Main entry point for walkthrough with TUI and CLI support
//
// Binary: walkthrough
// Usage: walkthrough [COMMAND]
// - No command: launches the demo TUI
// - steps: print the effective step list
// - simulate: replay the demo walkthrough without a terminal

#![allow(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    time::Duration,
};

use walkthrough::app::{AppState, EventHandler};
use walkthrough::components::{OverlayComponent, ScreenComponent};
use walkthrough::config::AppConfig;
use walkthrough::watch::Viewport;

mod cli;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(terminal: &mut Terminal<B>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let args = cli::Cli::parse();
    let config = args.load_config()?;

    let result = match args.command {
        Some(cli::Commands::Steps) => cli::steps::execute(&config, args.format),
        Some(cli::Commands::Simulate) => cli::simulate::execute(&config, args.format),
        Some(cli::Commands::Tui) | None => run_tui(&config).await,
    };

    if result.is_err() {
        cleanup_terminal();
    }

    result
}

async fn run_tui(config: &AppConfig) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try `walkthrough simulate` for a headless run."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut state = AppState::from_config(config, Viewport::new(size.width, size.height));

    let result = run_tui_loop(&mut state, &mut terminal).await;

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

async fn run_tui_loop(state: &mut AppState, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let screen = ScreenComponent::new();
    let overlay = OverlayComponent::new(state.overlay_style.clone());

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            screen.render(frame, area, &state.document, state.viewport.current());
            overlay.render(frame, area, state.guide.render_state());
        })?;

        if event::poll(tick_rate)? {
            let event = event::read()?;
            if let Some(app_event) = EventHandler::handle_event(&event, state) {
                tracing::debug!(?app_event, "Handling event");
                EventHandler::process_event(app_event, state);
            }
        }

        // Mutations and viewport changes were queued by the watchers
        state.sync();

        if state.should_quit {
            break;
        }
    }

    state.guide.teardown();
    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::prelude::*;

    let log_dir = dirs::home_dir()
        .map(|home| home.join(".walkthrough").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".walkthrough/logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    let log_file = log_dir.join(format!(
        "walkthrough-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    // The terminal belongs to the TUI; without a log file we stay silent
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "walkthrough=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
