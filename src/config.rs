//! Fixed game configuration. Nothing here is read from the outside world
//! except the log level.

use log::LevelFilter;

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const GRID_SIZE: i32 = 20;

/// Ticks per second in Hard. Easy runs `EASY_SLOWDOWN` ticks slower.
pub const BASE_TICK_RATE: u32 = 20;
pub const EASY_SLOWDOWN: u32 = 10;

pub const LOG_FILE: &str = "snake.log";
pub const LOG_LEVEL_VAR: &str = "SNAKE_LOG";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BOARD_BACKGROUND_COLOR: Rgb = Rgb(0, 0, 0);
pub const BORDER_COLOR: Rgb = Rgb(93, 216, 228);
pub const APPLE_COLOR: Rgb = Rgb(255, 0, 0);
pub const FIG_COLOR: Rgb = Rgb(128, 0, 128);
pub const WALL_COLOR: Rgb = Rgb(120, 120, 120);
pub const SNAKE_COLOR: Rgb = Rgb(0, 255, 0);

/// Reads the log level from `SNAKE_LOG`, falling back to `Info` when the
/// variable is unset or unparseable.
pub fn log_level() -> LevelFilter {
    std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}
