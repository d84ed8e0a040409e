//! quill-tui - a three-pane writing workspace for the terminal
//!
//! Project navigator, manuscript and assistant panes side by side, with
//! drag-resizable, collapsible side panes whose widths are remembered per
//! project.

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::services::{FileStore, KeyValueStore, MemoryStore, ProjectId};
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quill-tui")]
#[command(about = "Three-pane writing workspace with persisted pane widths")]
#[command(version)]
struct Cli {
    /// Open this project instead of the last active one
    #[arg(short, long)]
    project: Option<String>,

    /// Keep pane widths in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Log file (defaults to ~/.quill-tui/quill-tui.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log debug events
    #[arg(short, long)]
    verbose: bool,
}

/// Send tracing output to a file; stdout belongs to the UI
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = cli.log_file.clone().or_else(Config::log_path) else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}

fn open_store(ephemeral: bool) -> Box<dyn KeyValueStore> {
    if ephemeral {
        return Box::new(MemoryStore::new());
    }
    match Config::storage_path() {
        Some(path) => {
            let store = FileStore::new(path);
            info!(path = %store.path().display(), "using layout storage");
            Box::new(store)
        }
        None => {
            warn!("no home directory, pane widths will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = Config::load_or_init();
    let store = open_store(cli.ephemeral);
    let project = cli.project.as_deref().and_then(ProjectId::new);

    let mut app = App::new(config, store, project);
    app.init()?;

    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    let result = run_app(&mut tui, &mut app);

    // Release any drag before the terminal goes away
    app.shutdown();
    tui.exit()?;

    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            let area = frame.area();
            if let Err(e) = app.draw(frame, area) {
                warn!(error = %e, "draw failed");
            }
        })?;

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(Event::FocusLost) => Some(Action::FocusLost),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        // An action may produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
