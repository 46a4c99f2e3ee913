mod config;
mod controller;
mod engine;
mod food;
mod game;
mod input;
mod snake;
mod term;
mod timer;

use std::fs::File;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};

use crate::config::{GameConfig, SpeedLevel};

pub type GridInt = i16;
pub type Coords = (GridInt, GridInt);

#[derive(Parser)]
#[command(name = "snake")]
#[command(version, about = "Grid snake in the terminal")]
struct Cli {
    /// Starting speed level
    #[arg(long, value_enum, default_value_t = SpeedLevel::Medium)]
    level: SpeedLevel,

    /// Number of cells along each side of the square board
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(i16).range(8..=40))]
    grid_size: i16,

    /// File the game log is written to
    #[arg(long, default_value = "snake.log")]
    log_file: String,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level_filter: LevelFilter = cli
        .log_level
        .parse()
        .map_err(|_| anyhow!("Unknown log level {:?}", cli.log_level))?;

    // The terminal belongs to the board, so logs go to a file
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file))?;
    WriteLogger::init(level_filter, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = GameConfig::new(cli.grid_size);
    info!("Starting snake on a {0}x{0} grid at {1} speed", config.grid_size, cli.level);

    let mut game = game::SnakeGame::new(config, cli.level)?;
    game.run()
}
