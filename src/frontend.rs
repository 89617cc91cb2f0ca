//! What the game loop needs from the outside world.

use anyhow::Result;

use crate::config::Rgb;
use crate::grid::Cell;
use crate::input::InputEvent;

pub trait Renderer {
    /// Fills one grid cell and outlines it with `border`.
    fn draw_cell(&mut self, cell: Cell, fill: Rgb, border: Rgb) -> Result<()>;
    fn clear(&mut self, background: Rgb) -> Result<()>;
    fn present(&mut self) -> Result<()>;
}

pub trait InputSource {
    /// Drains everything queued since the last call without blocking.
    fn poll_events(&mut self) -> Result<Vec<InputEvent>>;
}

pub trait TickLimiter {
    /// Blocks until `1 / rate` seconds have passed since the previous call.
    fn tick(&mut self, rate: u32);
}
