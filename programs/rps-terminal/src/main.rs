//! Piedra, Papel o Tijera: two players, one keyboard
//!
//! Player 1 plays with A/S/D, player 2 with the arrow keys. First to three
//! round wins takes the match.

mod app;
mod keymap;
mod terminal;
mod ui;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use rps_logic::{MoveCatalog, StaticCatalog};

use crate::app::App;
use crate::keymap::KeyBindings;
use crate::terminal::TerminalGuard;

#[derive(Parser, Debug)]
#[command(version, about = "Shared-keyboard Rock-Paper-Scissors")]
struct Args {
    /// Three move names in beats order: each beats the one two places after it
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    moves: Option<Vec<String>>,

    /// Write logs here (filter with RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let source = match args.moves {
        Some(moves) => StaticCatalog::new(moves),
        None => StaticCatalog::default(),
    };
    let catalog = MoveCatalog::from_source(&source).context("invalid --moves")?;
    log::info!("catalog: {}", catalog.iter().collect::<Vec<_>>().join(", "));

    let mut app = App::new(Arc::new(catalog), KeyBindings::default());
    run(&mut app)
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already installed")?;
    Ok(())
}

fn run(app: &mut App) -> anyhow::Result<()> {
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear()?;

    event_loop(&mut terminal, app)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(100);

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = app.poll_timeout(Instant::now(), tick_rate);
        if event::poll(timeout)? {
            if let Event::Key(k) = event::read()? {
                if k.kind == KeyEventKind::Press {
                    app.handle_key(k.code, Instant::now());
                }
            }
        }
        app.tick(Instant::now());
    }
    Ok(())
}
