use crate::grid::{Cell, Direction, Direction::*, Grid};

/// Head-adjacent segments skipped by the self-collision test. The head is
/// index 0, so the first body cell that can be bitten is index 4.
pub const SELF_COLLISION_EXEMPT: usize = 4;

pub struct Snake {
    // Head first, tail last.
    positions: Vec<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    length: usize,
    // Cells given up this tick, oldest first.
    vacated: Vec<Cell>,
    spawn: Cell,
}

impl Snake {
    pub fn new(spawn: Cell) -> Self {
        Snake {
            positions: vec![spawn],
            direction: Right,
            pending_direction: None,
            length: 1,
            vacated: vec![],
            spawn,
        }
    }

    pub fn head(&self) -> Cell {
        self.positions[0]
    }

    pub fn positions(&self) -> &[Cell] {
        &self.positions
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Most recently vacated tail cell of the current tick.
    pub fn last_dropped(&self) -> Option<Cell> {
        self.vacated.last().copied()
    }

    pub fn vacated(&self) -> &[Cell] {
        &self.vacated
    }

    /// Queues a turn for the next tick. Reversing onto the body is refused
    /// and leaves any earlier request in place.
    pub fn request_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction == self.direction.opposite() {
            return false;
        }
        self.pending_direction = Some(new_direction);
        true
    }

    pub fn update_direction(&mut self) {
        if let Some(dir) = self.pending_direction.take() {
            self.direction = dir;
        }
    }

    pub fn move_step(&mut self, grid: &Grid) {
        let new_head = grid.wrap(self.head(), self.direction);
        debug_assert!(grid.contains(new_head));
        self.positions.insert(0, new_head);

        self.vacated.clear();
        self.drop_surplus();
    }

    /// Apple: one cell longer. The tail given up by this tick's move is
    /// taken back so the body already matches the new length.
    pub fn grow(&mut self) {
        self.length += 1;
        if let Some(tail) = self.vacated.pop() {
            self.positions.push(tail);
        }
    }

    /// Fig: one cell shorter, never below one.
    pub fn shrink(&mut self) {
        if self.length > 1 {
            self.length -= 1;
        }
        self.drop_surplus();
    }

    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.positions
            .iter()
            .skip(SELF_COLLISION_EXEMPT)
            .any(|pos| *pos == head)
    }

    pub fn reset(&mut self) {
        self.positions = vec![self.spawn];
        self.length = 1;
        self.direction = Right;
        self.pending_direction = None;
        self.vacated.clear();
    }

    fn drop_surplus(&mut self) {
        while self.positions.len() > self.length {
            if let Some(tail) = self.positions.pop() {
                self.vacated.push(tail);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn from_positions(positions: Vec<Cell>, direction: Direction, spawn: Cell) -> Self {
        let length = positions.len();
        Snake { positions, direction, pending_direction: None, length, vacated: vec![], spawn }
    }
}
