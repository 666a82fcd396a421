mod app;
mod config;
mod events;
mod logging;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use resizable_splitter::Orientation;
use std::io;
use std::path::PathBuf;

/// Two resizable panes in the terminal. Drag the handle with the mouse.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Config file to use instead of the default search paths
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Place the panes side by side
    #[arg(long)]
    horizontal: bool,

    /// Initial size of the first pane, in percent
    #[arg(short, long)]
    split: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match logging::init() {
        Ok(path) => tracing::debug!(path = %path.display(), "logging to file"),
        Err(err) => eprintln!("Logging disabled: {err}"),
    }

    // Load config
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    if cli.horizontal {
        config.splitter.orientation = Orientation::Horizontal;
    }
    if let Some(split) = cli.split {
        config.splitter.first_pane_size = split;
    }

    let mut app = App::new(config)?;

    // Setup panic hook for clean terminal restore
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(
        orientation = app.splitter.orientation().label(),
        ratio = app.splitter.ratio(),
        "starting"
    );
    let res = events::run_app(&mut terminal, &mut app).await;
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}
