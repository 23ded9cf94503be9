use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::app::App;
use grid_snake::config::EngineConfig;
use grid_snake::game::GameEngine;
use grid_snake::input::InputHandler;
use grid_snake::renderer;
use grid_snake::score::{HighScore, ScoreStore};
use grid_snake::terminal_runtime::TerminalSession;
use log::{LevelFilter, error, info, warn};
use simplelog::{Config, WriteLogger};

/// Frame pacing for input polling and redraws.
const FRAME_BUDGET: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Grid snake in the terminal")]
struct Cli {
    /// Board width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Board height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Wrap around the edges instead of dying on them.
    #[arg(long = "wall-pass")]
    wall_pass: bool,

    /// Countdown before play resumes, in seconds (clamped to 1..=10).
    #[arg(long, allow_negative_numbers = true)]
    countdown: Option<i64>,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with engine settings; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity when a log file is set.
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.log_level)?;
    }

    let config = resolve_config(&cli);
    info!(
        "starting {}x{} board, wall pass {}, countdown {}s",
        config.grid_width, config.grid_height, config.wall_pass_enabled, config.countdown_time
    );

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    };

    let store = ScoreStore::default_location();
    let high_score = match store.load() {
        Ok(best) => best,
        Err(e) => {
            eprintln!("Warning: could not read high score: {e}");
            error!("failed to load high score from {}: {e}", store.path().display());
            0
        }
    };

    let mut session = TerminalSession::enter()?;
    let mut app = App::new(engine, HighScore::new(high_score), Some(store), Instant::now());
    run(&mut session, &mut app)?;
    drop(session);

    info!("exiting, high score {}", app.high_score());
    Ok(())
}

fn run(session: &mut TerminalSession, app: &mut App) -> io::Result<()> {
    let mut input = InputHandler::new();

    while !app.should_quit() {
        let now = Instant::now();
        session.draw(|frame| renderer::render(frame, app, now))?;

        if let Some(game_input) = input.poll_input(FRAME_BUDGET)? {
            app.handle_input(game_input, Instant::now());
        }

        app.update(Instant::now());
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> EngineConfig {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path).unwrap_or_else(|e| {
            eprintln!("Warning: {e}; using defaults");
            warn!("{e}");
            EngineConfig::default()
        }),
        None => EngineConfig::default(),
    };

    if let Some(width) = cli.width {
        config.grid_width = width;
    }
    if let Some(height) = cli.height {
        config.grid_height = height;
    }
    if cli.wall_pass {
        config.wall_pass_enabled = true;
    }
    if let Some(countdown) = cli.countdown {
        config.countdown_time = countdown;
    }

    config.normalized()
}

fn init_logging(path: &Path, level: LevelFilter) -> io::Result<()> {
    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file)
        .map_err(io::Error::other)
}
