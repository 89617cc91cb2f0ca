use std::collections::HashSet;

use rand::Rng;

use crate::config::{APPLE_COLOR, FIG_COLOR, Rgb};
use crate::error::NoFreeCellError;
use crate::grid::{Cell, Grid};
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FoodKind {
    /// Apple
    Grow,
    /// Fig
    Shrink,
}

impl FoodKind {
    pub fn name(self) -> &'static str {
        match self {
            FoodKind::Grow => "apple",
            FoodKind::Shrink => "fig",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            FoodKind::Grow => APPLE_COLOR,
            FoodKind::Shrink => FIG_COLOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Food {
    kind: FoodKind,
    position: Cell,
}

impl Food {
    pub fn spawn<R: Rng + ?Sized>(
        kind: FoodKind,
        grid: &Grid,
        occupied: &HashSet<Cell>,
        rng: &mut R,
    ) -> Result<Self, NoFreeCellError> {
        let position = grid.random_free_cell(occupied, rng, kind.name())?;
        Ok(Food { kind, position })
    }

    pub fn kind(&self) -> FoodKind {
        self.kind
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub(crate) fn position_slice(&self) -> &[Cell] {
        std::slice::from_ref(&self.position)
    }

    pub fn respawn<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        occupied: &HashSet<Cell>,
        rng: &mut R,
    ) -> Result<(), NoFreeCellError> {
        self.position = grid.random_free_cell(occupied, rng, self.kind.name())?;
        Ok(())
    }

    /// Effect of eating this food.
    pub fn feed(&self, snake: &mut Snake) {
        match self.kind {
            FoodKind::Grow => snake.grow(),
            FoodKind::Shrink => snake.shrink(),
        }
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, position: Cell) {
        self.position = position;
    }
}
