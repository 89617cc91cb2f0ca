use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::NoFreeCellError;
use crate::grid::{Cell, Direction, Direction::*, Grid};

pub const WALL_LENGTH: usize = 9;

/// Straight stone obstacle, only present in Hard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoneWall {
    axis: Direction,
    cells: Vec<Cell>,
}

impl StoneWall {
    /// Picks a random axis, then a random anchor whose whole segment is free.
    /// Falls back to the other axis before giving up.
    pub fn spawn<R: Rng + ?Sized>(
        grid: &Grid,
        occupied: &HashSet<Cell>,
        rng: &mut R,
    ) -> Result<Self, NoFreeCellError> {
        let axes = if rng.gen_bool(0.5) { [Down, Right] } else { [Right, Down] };

        for axis in axes.iter().copied() {
            let anchors: Vec<Cell> = grid
                .cells()
                .filter(|anchor| Self::fits(grid, *anchor, axis, occupied))
                .collect();

            if let Some(anchor) = anchors.choose(rng) {
                return Ok(StoneWall { axis, cells: Self::trace(grid, *anchor, axis) });
            }
        }

        Err(NoFreeCellError { item: "stone wall", occupied: occupied.len(), total: grid.cell_count() })
    }

    pub fn axis(&self) -> Direction {
        self.axis
    }

    pub fn anchor(&self) -> Cell {
        self.cells[0]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    fn trace(grid: &Grid, anchor: Cell, axis: Direction) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(WALL_LENGTH);
        let mut pos = anchor;
        cells.push(pos);
        while cells.len() < WALL_LENGTH {
            pos = grid.wrap(pos, axis);
            cells.push(pos);
        }
        cells
    }

    // A segment that would lap a small board and overlap itself never fits.
    fn fits(grid: &Grid, anchor: Cell, axis: Direction, occupied: &HashSet<Cell>) -> bool {
        let cells = Self::trace(grid, anchor, axis);
        let distinct: HashSet<&Cell> = cells.iter().collect();
        distinct.len() == WALL_LENGTH && cells.iter().all(|c| !occupied.contains(c))
    }
}
