use std::fs::File;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use clap::Parser;
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use square_snake::config::{GameConfig, THEME_CLASSIC};
use square_snake::error::GameError;
use square_snake::game::{Game, UpdateSignal};
use square_snake::input::InputHandler;
use square_snake::renderer;
use square_snake::terminal_runtime::TerminalSession;

#[derive(Debug, Parser)]
struct Cli {
    /// Seed food placement for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// File that receives the game log.
    #[arg(long = "log-file", default_value = "square-snake.log")]
    log_file: PathBuf,

    /// Log food drops and other per-tick events.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), GameError> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = GameConfig::default();
    config.validate()?;

    let result = run(&cli, config);
    if let Err(error) = &result {
        error!("game aborted: {error}");
    }
    result
}

fn init_logging(cli: &Cli) -> Result<(), GameError> {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = File::create(&cli.log_file).map_err(|source| GameError::LogFile {
        path: cli.log_file.display().to_string(),
        source,
    })?;
    WriteLogger::init(level, Config::default(), file)?;

    info!("starting square-snake");
    Ok(())
}

fn run(cli: &Cli, config: GameConfig) -> Result<(), GameError> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();

    let started = Instant::now();
    let mut game = match cli.seed {
        Some(seed) => Game::new_with_seed(config, seed, started),
        None => Game::new(config, started),
    };

    let size = session.terminal_mut().size()?;
    let field = game.layout(size.width, size.height);
    info!(
        "terminal {}x{}, field {}x{}",
        size.width, size.height, field.width, field.height
    );

    loop {
        let frame_start = Instant::now();

        let frame_input = input.poll_input()?;
        if game.update(&frame_input, frame_start) == UpdateSignal::Quit {
            break;
        }

        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &game, &THEME_CLASSIC))?;

        if let Some(rest) = config.frame_period.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    Ok(())
}
