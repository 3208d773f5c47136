use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gridsweep_core::{CellCount, Coord, GameController};

use crate::session::Ending;
use crate::settings::Settings;

mod command;
mod render;
mod session;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Settings file in TOML format, flags take precedence over it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of rows and columns of the board
    #[arg(short, long)]
    side: Option<Coord>,

    /// Number of mines to place
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            side: self.side,
            mines: self.mines,
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level_filter());

    let file_settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let settings = file_settings.merge(args.settings());
    let config = settings.game_config()?;

    let mut game = match settings.seed {
        Some(seed) => GameController::with_seed(config, seed),
        None => GameController::new(config),
    }
    .context("could not start a game")?;
    log::debug!("seed: {:?}", game.seed());

    let ending = session::run(&mut game, std::io::stdin().lock(), std::io::stdout().lock())?;
    log::info!("game over: {:?}", ending);

    println!("---------------------");
    if ending == Ending::Quit {
        println!("Leaving the game.");
    }
    println!("Thank you very much for the game!");
    Ok(())
}

/// Sends `log` records to stderr through a `tracing-subscriber` formatter.
fn init_logging(filter: log::LevelFilter) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match filter {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
