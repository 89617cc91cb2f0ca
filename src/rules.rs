//! Per-tick movement and collision resolution.

use log::{debug, info};
use rand::Rng;

use crate::error::NoFreeCellError;
use crate::world::World;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResetCause {
    SelfCollision,
    Wall,
}

/// What happened during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub ate_apple: bool,
    pub figs_eaten: usize,
    pub reset: Option<ResetCause>,
}

impl<R: Rng> World<R> {
    /// Applies the queued turn, moves the snake one cell and resolves
    /// whatever the new head landed on.
    pub fn step(&mut self) -> Result<TickReport, NoFreeCellError> {
        self.snake.update_direction();
        self.snake.move_step(&self.grid);
        self.resolve()
    }

    /// Order matters: an apple on this tick rules out a self-collision,
    /// and figs are still checked after a reset.
    pub fn resolve(&mut self) -> Result<TickReport, NoFreeCellError> {
        let mut report = TickReport::default();

        if self.snake.head() == self.apple.position() {
            self.apple.feed(&mut self.snake);
            let occupied = self.occupied();
            self.apple.respawn(&self.grid, &occupied, &mut self.rng)?;
            report.ate_apple = true;
            debug!("apple eaten, length {}", self.snake.length());
        } else if self.snake.bites_itself() {
            self.reset_snake(ResetCause::SelfCollision);
            report.reset = Some(ResetCause::SelfCollision);
        }

        for i in 0..self.figs.len() {
            if self.snake.head() != self.figs[i].position() {
                continue;
            }
            self.figs[i].feed(&mut self.snake);
            let occupied = self.occupied();
            self.figs[i].respawn(&self.grid, &occupied, &mut self.rng)?;
            report.figs_eaten += 1;
            debug!("fig eaten, length {}", self.snake.length());
        }

        let hit_wall = match &self.wall {
            Some(wall) => wall.contains(self.snake.head()),
            None => false,
        };
        if hit_wall {
            self.reset_snake(ResetCause::Wall);
            report.reset = Some(ResetCause::Wall);
        }

        Ok(report)
    }

    fn reset_snake(&mut self, cause: ResetCause) {
        info!("snake reset at length {} ({:?})", self.snake.length(), cause);
        self.snake.reset();
    }
}
