//! Detective Quest
//!
//! Walk the mansion, collect clues and name the prime suspect.

use std::fs::File;
use std::io;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dq_core::GameState;
use dq_core::mansion::{Mansion, MansionLayout};
use dq_core::options::GameOptions;
use dq_tui::{App, Theme};

/// Detective Quest: explore the mansion and solve the case
#[derive(Parser, Debug)]
#[command(name = "detective")]
#[command(author, version, about = "Detective Quest - Explore the mansion!", long_about = None)]
struct Args {
    /// Mansion layout (JSON) to explore instead of the built-in one
    #[arg(short = 'l', long = "layout")]
    layout: Option<PathBuf>,

    /// Options file (defaults to the user's dqrc)
    #[arg(short = 'o', long = "options")]
    options: Option<PathBuf>,

    /// Number of slots in the suspect table
    #[arg(short = 'b', long = "buckets")]
    buckets: Option<usize>,

    /// Use colors suited to a light terminal background
    #[arg(long = "light")]
    light: bool,

    /// Write a trace log to this file (filtered by RUST_LOG)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Keep the session open after walking into a room with no exits
    #[arg(long = "no-stop-at-dead-end")]
    no_stop_at_dead_end: bool,
}

fn main() -> io::Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let options = load_options(&args)?;
    let mansion = load_mansion(&args)?;
    let theme = if options.light {
        Theme::light()
    } else {
        Theme::detect()
    };

    let state = GameState::new(mansion, options);
    let mut app = App::new(state, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    run_result?;

    // Leave the verdict on the normal screen
    let report = app.state().close_case();
    info!(
        clues = report.clues.len(),
        turns = app.state().turns,
        "case closed"
    );
    print!("{}", report);

    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;

            if let Some(command) = app.handle_event(event) {
                // A finished walk switches the app to the case closed screen
                app.execute(command);
            }

            if app.should_quit() {
                return Ok(());
            }
        }
    }
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Options from the rc file, then overridden by the command line
fn load_options(args: &Args) -> io::Result<GameOptions> {
    let mut options = match &args.options {
        Some(path) => GameOptions::load_from_file(path),
        None => GameOptions::load_default(),
    }
    .map_err(io::Error::other)?;

    if let Some(buckets) = args.buckets {
        options.bucket_count = NonZeroUsize::new(buckets).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "--buckets must be at least 1")
        })?;
    }
    if args.light {
        options.light = true;
    }
    if args.no_stop_at_dead_end {
        options.stop_at_dead_end = false;
    }

    Ok(options)
}

fn load_mansion(args: &Args) -> io::Result<Mansion> {
    let layout = match &args.layout {
        Some(path) => MansionLayout::load_from_file(path).map_err(io::Error::other)?,
        None => dq_data::default_layout(),
    };
    let mansion = Mansion::from_layout(&layout).map_err(io::Error::other)?;
    info!(rooms = mansion.len(), "mansion loaded");
    Ok(mansion)
}
