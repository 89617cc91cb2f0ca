use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::NoFreeCellError;
use Direction::*;

/// Top-left pixel of a grid cell. Both coordinates are multiples of the
/// cell size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Unit step in grid cells.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// A toroidal playfield measured in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Grid { width, height, cell_size }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.columns() * self.rows()) as usize
    }

    /// Spawn cell for the snake: the cell-aligned center of the board.
    pub fn center(&self) -> Cell {
        Cell::new(
            self.columns() / 2 * self.cell_size,
            self.rows() / 2 * self.cell_size,
        )
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x)
            && (0..self.height).contains(&cell.y)
            && cell.x % self.cell_size == 0
            && cell.y % self.cell_size == 0
    }

    /// One step from `cell` towards `dir`, re-entering from the opposite
    /// edge when the step leaves the board.
    pub fn wrap(&self, cell: Cell, dir: Direction) -> Cell {
        let (dx, dy) = dir.delta();
        Cell::new(
            (cell.x + dx * self.cell_size).rem_euclid(self.width),
            (cell.y + dy * self.cell_size).rem_euclid(self.height),
        )
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (cols, rows, size) = (self.columns(), self.rows(), self.cell_size);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Cell::new(col * size, row * size)))
    }

    /// Uniformly random cell outside `occupied`.
    pub fn random_free_cell<R: Rng + ?Sized>(
        &self,
        occupied: &HashSet<Cell>,
        rng: &mut R,
        item: &'static str,
    ) -> Result<Cell, NoFreeCellError> {
        let choices: Vec<Cell> = self.cells().filter(|pos| !occupied.contains(pos)).collect();

        choices.choose(rng).copied().ok_or(NoFreeCellError {
            item,
            occupied: occupied.len(),
            total: self.cell_count(),
        })
    }
}
