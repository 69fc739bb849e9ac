//! Grid Snake entry point
//!
//! Sets up logging and the terminal, then runs the single-threaded loop:
//! poll input until the next tick is due, tick, render.

use std::fs::{self, OpenOptions};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use ratatui::backend::CrosstermBackend;

use grid_snake::consts::APP_DIR_NAME;
use grid_snake::input::InputBuffer;
use grid_snake::platform::{TerminalGuard, TickClock, poll_intents};
use grid_snake::renderer::TerminalRenderer;
use grid_snake::{FileStore, Game, GameConfig};

#[derive(Parser)]
#[command(name = "grid-snake", about = "Fixed-tick snake for the terminal")]
struct Args {
    /// Board is N×N cells
    #[arg(long)]
    grid_size: Option<u32>,
    /// RNG seed for reproducible food placement
    #[arg(long)]
    seed: Option<u64>,
    /// Config file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// High score file
    #[arg(long)]
    high_score_file: Option<PathBuf>,
    /// Write the effective config to the config file and exit
    #[arg(long)]
    write_config: bool,
}

/// Log to a file, since the terminal is busy drawing the board
fn init_logging() {
    let Some(dir) = dirs::data_dir().map(|d| d.join(APP_DIR_NAME)) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("grid-snake.log"))
    else {
        return;
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging();
    log::info!("Grid Snake starting...");

    let config_path = args.config.clone().or_else(GameConfig::default_path);
    let mut config = config_path
        .as_deref()
        .map(GameConfig::load_from)
        .unwrap_or_default();
    if let Some(size) = args.grid_size {
        config.grid_size = size;
    }
    if let Some(path) = args.high_score_file.clone() {
        config.high_score_path = Some(path);
    }
    let config = config.sanitized();

    if args.write_config {
        let Some(path) = config_path else {
            eprintln!("No config directory available; pass --config <path>");
            return Ok(());
        };
        return match config.save_to(&path) {
            Ok(()) => {
                println!("Wrote {}", path.display());
                Ok(())
            }
            Err(e) => Err(io::Error::other(e.to_string())),
        };
    }

    let store = FileStore::new(
        config
            .high_score_path
            .clone()
            .unwrap_or_else(FileStore::default_path),
    );
    let seed = args.seed.unwrap_or_else(time_seed);
    log::info!(
        "Seed {}, grid {}x{}, high score file {}",
        seed,
        config.grid_size,
        config.grid_size,
        store.path().display()
    );
    let mut game = Game::new(config, seed, store);

    let _guard = TerminalGuard::enter()?;
    run(&mut game)?;

    log::info!("Grid Snake exiting (high score {})", game.high_score());
    Ok(())
}

fn run(game: &mut Game<FileStore>) -> io::Result<()> {
    let mut renderer = TerminalRenderer::new(CrosstermBackend::new(stdout()))?;
    let mut buffer = InputBuffer::new();
    let mut clock = TickClock::new(Instant::now());

    renderer.draw(game.state(), game.high_score())?;

    loop {
        let speed = game.state().speed;
        let heading = game.state().heading();
        let wait = clock.until_next(Instant::now(), speed);
        poll_intents(wait, |intent| buffer.push(intent, heading))?;

        if buffer.quit_requested() {
            return Ok(());
        }

        let now = Instant::now();
        if clock.is_due(now, speed) {
            clock.mark(now);
            let input = buffer.take();
            game.step(&input);
            renderer.draw(game.state(), game.high_score())?;
        }
    }
}
