use std::fs::File;

use anyhow::{anyhow, Result};
use log::{error, info, warn};
use simplelog::{Config, WriteLogger};

use figsnake::clock::FrameClock;
use figsnake::config::{log_level, GRID_SIZE, LOG_FILE, SCREEN_HEIGHT, SCREEN_WIDTH};
use figsnake::game::{GameContext, SnakeGame};
use figsnake::grid::Grid;
use figsnake::term::TermManager;
use figsnake::world::World;

fn main() -> Result<()> {
    // The terminal is the playfield, so logs go to a file
    WriteLogger::init(log_level(), Config::default(), File::create(LOG_FILE)?)
        .map_err(|e| anyhow!("failed to initialize logger: {}", e))?;

    let grid = Grid::new(SCREEN_WIDTH, SCREEN_HEIGHT, GRID_SIZE);
    let world = World::new(grid, rand::thread_rng())?;

    let mut terminal = TermManager::new(&grid)?;
    if !terminal.fits(&grid) {
        let (w, h) = terminal.get_terminal_size();
        warn!("terminal is {}x{}, the board will be cut off", w, h);
    }
    terminal.setup()?;
    info!("starting on a {}x{} board", grid.columns(), grid.rows());

    let ctx = GameContext { terminal, limiter: FrameClock::new() };
    let mut game = SnakeGame::new(ctx, world);
    let outcome = game.play();

    // Always hand the terminal back, even when the loop failed
    game.context_mut().terminal.restore()?;

    if let Err(e) = &outcome {
        error!("game stopped: {:#}", e);
    }
    info!("bye");
    outcome
}
